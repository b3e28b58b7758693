use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct SearchEnvelope {
    #[serde(default)]
    pub(crate) articles: Option<Vec<ArticleNode>>,
}

#[derive(Deserialize)]
pub(crate) struct ArticleNode {
    pub(crate) title: Option<String>,
    pub(crate) url: Option<String>,
    #[serde(rename = "publishedAt")]
    pub(crate) published_at: Option<String>,
    pub(crate) source: Option<SourceNode>,
}

#[derive(Deserialize)]
pub(crate) struct SourceNode {
    pub(crate) name: Option<String>,
}

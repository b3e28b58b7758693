/// Represents a single news article matching a search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// The headline of the article.
    pub title: String,
    /// A direct link to the article.
    pub link: Option<String>,
    /// The publishing outlet (e.g., "Reuters", "Mint").
    pub source: Option<String>,
    /// The Unix timestamp (in seconds) of when the article was published.
    pub published_at: Option<i64>,
}

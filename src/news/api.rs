use crate::{
    core::{WatchClient, WatchError, net},
    news::{model::Article, wire},
};

pub(super) async fn fetch_articles(
    client: &WatchClient,
    query: &str,
    country: Option<&str>,
    lang: Option<&str>,
    max_results: u32,
) -> Result<Vec<Article>, WatchError> {
    let mut url = client.base_news().join("search")?;
    {
        let mut qp = url.query_pairs_mut();
        qp.append_pair("q", query);
        if let Some(country) = country {
            qp.append_pair("country", country);
        }
        if let Some(lang) = lang {
            qp.append_pair("lang", lang);
        }
        qp.append_pair("max", &max_results.to_string());
        if let Some(key) = client.news_api_key() {
            qp.append_pair("token", key);
        }
    }

    let resp = client.http().get(url).send().await?;
    let resp = net::ok(resp)?;
    let body = resp.text().await?;
    let envelope: wire::SearchEnvelope = serde_json::from_str(&body)?;

    let articles = envelope.articles.unwrap_or_default();

    let results = articles
        .into_iter()
        .filter_map(|raw| {
            let title = raw.title?;

            // GNews timestamps are RFC 3339.
            let published_at = raw
                .published_at
                .as_deref()
                .and_then(|s| chrono::DateTime::parse_from_rfc3339(s).ok())
                .map(|dt| dt.timestamp());

            Some(Article {
                title,
                link: raw.url,
                source: raw.source.and_then(|s| s.name),
                published_at,
            })
        })
        .collect();

    Ok(results)
}

use gloo::net::http::Request;
use thiserror::Error;
use tresito_core::Leaderboard;

/// Where the single leaderboard document lives unless overridden via the
/// location-hash args.
const DEFAULT_DOC_URL: &str = "/api/leaderboard/scores";

#[derive(Error, Debug)]
pub(crate) enum StoreError {
    #[error("request failed: {0}")]
    Transport(#[from] gloo::net::Error),
    #[error("could not encode document: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("unexpected status {0}")]
    Status(u16),
}

/// Client for the hosted score document.
///
/// The whole leaderboard is one document behind a fixed URL; the store
/// exposes exactly two operations, a read and a whole-document overwrite.
/// There is no partial update and no concurrency control: last writer wins.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ScoreStore {
    url: String,
}

impl ScoreStore {
    pub(crate) fn new(url: Option<String>) -> Self {
        Self {
            url: url.unwrap_or_else(|| DEFAULT_DOC_URL.to_string()),
        }
    }

    /// Fetches the stored document; `None` when none has been written yet.
    pub(crate) async fn read(&self) -> Result<Option<Leaderboard>, StoreError> {
        let response = Request::get(&self.url).send().await?;
        match response.status() {
            200 => Ok(Some(response.json().await?)),
            404 => Ok(None),
            status => Err(StoreError::Status(status)),
        }
    }

    /// Overwrites the whole stored document.
    pub(crate) async fn write_full(&self, doc: &Leaderboard) -> Result<(), StoreError> {
        let response = Request::put(&self.url)
            .header("content-type", "application/json")
            .body(serde_json::to_string(doc)?)?
            .send()
            .await?;

        if response.ok() {
            Ok(())
        } else {
            Err(StoreError::Status(response.status()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_url_points_at_the_fixed_document() {
        assert_eq!(ScoreStore::new(None).url, DEFAULT_DOC_URL);
    }

    #[test]
    fn hash_args_override_the_endpoint() {
        let store = ScoreStore::new(Some("https://example.test/doc".to_string()));

        assert_eq!(store.url, "https://example.test/doc");
    }
}

//! Authenticated fetching of binary job artifacts.

use bytes::Bytes;

use crate::config::Config;
use crate::error::{Error, Result};

/// Fetches per-job binary artifacts from the service.
///
/// One HTTP request per call, single attempt; retry policy belongs to
/// the caller. The underlying `reqwest::Client` pools connections and is
/// safe to share across threads.
#[derive(Debug, Clone)]
pub(crate) struct ArtifactClient {
    http: reqwest::Client,
    config: Config,
}

impl ArtifactClient {
    /// Create a client from resolved configuration, reusing a caller-
    /// supplied HTTP client when given.
    pub(crate) fn new(config: Config, http: Option<reqwest::Client>) -> Self {
        Self {
            http: http.unwrap_or_default(),
            config,
        }
    }

    /// Fetch the binary payload of a named image.
    pub(crate) async fn image(&self, job_id: &str, image_name: &str) -> Result<Bytes> {
        self.fetch(&format!(
            "api/v1/parsing/job/{}/result/image/{}",
            job_id, image_name
        ))
        .await
    }

    /// Fetch the whole-document PDF rendition.
    pub(crate) async fn pdf(&self, job_id: &str) -> Result<Bytes> {
        self.fetch(&format!("api/v1/parsing/job/{}/result/pdf", job_id))
            .await
    }

    /// Fetch the whole-document spreadsheet rendition.
    pub(crate) async fn xlsx(&self, job_id: &str) -> Result<Bytes> {
        self.fetch(&format!("api/v1/parsing/job/{}/result/xlsx", job_id))
            .await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn fetch(&self, path: &str) -> Result<Bytes> {
        let url = self.url(path);
        log::debug!("ArtifactClient: GET {}", url);

        let mut request = self.http.get(&url);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::RemoteFetch {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        log::debug!("ArtifactClient: {} bytes from {}", bytes.len(), url);
        Ok(bytes)
    }
}

use crate::config::ClientConfig;
use crate::error::{PurgeCacheError, PurgeCacheResult};
use crate::types::OpenPurgeRequestList;
use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;
use tracing::{debug, warn};

const SERVICE_PATH: [&str; 4] = ["api", "purge-cache", "v1", "purge-cache"];

/// Read access to the purge-cache service.
///
/// Workers call this before claiming tasks to learn which of their caches
/// must be discarded. Code under test takes a `dyn PurgeCache` so a test
/// double can stand in for [`HttpPurgeCache`].
#[async_trait]
pub trait PurgeCache: Send + Sync {
    /// Open purge requests for `worker_pool_id` created after `since`.
    /// An empty `since` asks for every open request.
    async fn purge_requests(
        &self,
        worker_pool_id: &str,
        since: &str,
    ) -> PurgeCacheResult<OpenPurgeRequestList>;
}

#[derive(Debug)]
pub struct HttpPurgeCache {
    root_url: Url,
    timeout: Duration,
    client: reqwest::Client,
}

impl HttpPurgeCache {
    pub fn new(config: &ClientConfig) -> PurgeCacheResult<Self> {
        let root = config.root_url()?;
        let root_url = Url::parse(root)
            .map_err(|e| PurgeCacheError::Config(format!("invalid root_url {root}: {e}")))?;
        if root_url.cannot_be_a_base() {
            return Err(PurgeCacheError::Config(format!(
                "root_url {root} cannot carry a path"
            )));
        }
        let timeout = config.timeout()?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            root_url,
            timeout,
            client,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn purge_requests_url(&self, worker_pool_id: &str, since: &str) -> PurgeCacheResult<Url> {
        let mut url = self.root_url.clone();
        url.path_segments_mut()
            .map_err(|_| PurgeCacheError::Config("root_url cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(SERVICE_PATH)
            // worker pool ids contain '/', which must stay inside one segment
            .push(worker_pool_id);
        if !since.is_empty() {
            url.query_pairs_mut().append_pair("since", since);
        }
        Ok(url)
    }
}

#[async_trait]
impl PurgeCache for HttpPurgeCache {
    async fn purge_requests(
        &self,
        worker_pool_id: &str,
        since: &str,
    ) -> PurgeCacheResult<OpenPurgeRequestList> {
        let url = self.purge_requests_url(worker_pool_id, since)?;
        debug!(%url, worker_pool_id, since, "listing open purge requests");

        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            warn!(status = status.as_u16(), worker_pool_id, "purge-cache request failed");
            return Err(PurgeCacheError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let list: OpenPurgeRequestList = serde_json::from_str(&body)?;
        debug!(
            count = list.len(),
            cache_hit = list.cache_hit,
            "received open purge requests"
        );
        Ok(list)
    }
}

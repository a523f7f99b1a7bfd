use async_trait::async_trait;
use tcpurgecache::{OpenPurgeRequestList, PurgeCache, PurgeCacheResult};
use tracing::trace;

/// Purge-cache client that never has anything to purge.
///
/// Every call succeeds with an empty list, whatever the arguments. Tests
/// that need failures or pending requests should implement [`PurgeCache`]
/// themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockPurgeCache;

impl MockPurgeCache {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PurgeCache for MockPurgeCache {
    async fn purge_requests(
        &self,
        worker_pool_id: &str,
        since: &str,
    ) -> PurgeCacheResult<OpenPurgeRequestList> {
        trace!(worker_pool_id, since, "mock purge-cache: no open requests");
        Ok(OpenPurgeRequestList::default())
    }
}

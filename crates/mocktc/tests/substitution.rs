use std::sync::Arc;

use mocktc::MockPurgeCache;
use tcpurgecache::{PurgeCache, PurgeCacheResult};

/// Stand-in for worker code that decides which caches to drop.
async fn caches_to_purge(
    client: &dyn PurgeCache,
    worker_pool_id: &str,
    since: &str,
) -> PurgeCacheResult<Vec<String>> {
    let list = client.purge_requests(worker_pool_id, since).await?;
    Ok(list.requests.into_iter().map(|r| r.cache_name).collect())
}

#[tokio::test]
async fn mock_substitutes_for_the_real_client() {
    tcpurgecache::logging::init_logging_with("trace");
    let client: Arc<dyn PurgeCache> = Arc::new(MockPurgeCache::new());
    let caches = caches_to_purge(client.as_ref(), "proj-ci/linux", "2024-01-01T00:00:00Z")
        .await
        .unwrap();
    assert!(caches.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn shared_across_tasks() {
    let client: Arc<dyn PurgeCache> = Arc::new(MockPurgeCache::new());
    let handles: Vec<_> = (0..16)
        .map(|i| {
            let client = Arc::clone(&client);
            tokio::spawn(async move {
                let pool = format!("pool-{i}");
                client.purge_requests(&pool, "").await
            })
        })
        .collect();

    for handle in handles {
        let list = handle.await.unwrap().unwrap();
        assert!(list.is_empty());
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A request to drop every cache named `cache_name` on workers in
/// `worker_pool_id` that was created before `before`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenPurgeRequest {
    pub worker_pool_id: String,
    pub cache_name: String,
    pub before: DateTime<Utc>,
}

/// Open purge requests for a worker pool, as returned by the purge-cache service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenPurgeRequestList {
    /// Whether the service answered from its own cache.
    #[serde(default)]
    pub cache_hit: bool,
    #[serde(default)]
    pub requests: Vec<OpenPurgeRequest>,
}

impl OpenPurgeRequestList {
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn decodes_service_response() {
        let body = r#"{
            "cacheHit": true,
            "requests": [
                {
                    "workerPoolId": "proj-ci/linux",
                    "cacheName": "gradle-cache",
                    "before": "2024-01-01T12:30:00.000Z"
                }
            ]
        }"#;
        let list: OpenPurgeRequestList = serde_json::from_str(body).unwrap();
        assert!(list.cache_hit);
        assert_eq!(list.len(), 1);
        let req = &list.requests[0];
        assert_eq!(req.worker_pool_id, "proj-ci/linux");
        assert_eq!(req.cache_name, "gradle-cache");
        assert_eq!(req.before, Utc.with_ymd_and_hms(2024, 1, 1, 12, 30, 0).unwrap());
    }

    #[test]
    fn missing_fields_mean_empty() {
        let list: OpenPurgeRequestList = serde_json::from_str("{}").unwrap();
        assert!(list.is_empty());
        assert!(!list.cache_hit);
        assert_eq!(list, OpenPurgeRequestList::default());
    }
}

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use client::{HttpPurgeCache, PurgeCache};
pub use config::ClientConfig;
pub use error::{PurgeCacheError, PurgeCacheResult};
pub use types::{OpenPurgeRequest, OpenPurgeRequestList};

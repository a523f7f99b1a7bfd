pub mod purgecache;

pub use purgecache::MockPurgeCache;

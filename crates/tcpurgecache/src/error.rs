use thiserror::Error;

pub type PurgeCacheResult<T> = Result<T, PurgeCacheError>;

#[derive(Debug, Error)]
pub enum PurgeCacheError {
    #[error("config error: {0}")]
    Config(String),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("purge-cache service returned {status}: {body}")]
    Status { status: u16, body: String },
}

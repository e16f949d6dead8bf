use thiserror::Error;
use viewport_window::ConfigError;

pub type Result<T> = std::result::Result<T, DirectoryError>;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("malformed payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid list configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("received page {page} but no page request is in flight")]
    NotLoading { page: u32 },
}

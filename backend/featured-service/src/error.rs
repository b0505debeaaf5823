use thiserror::Error;

pub type Result<T> = std::result::Result<T, FeaturedError>;

#[derive(Debug, Error)]
pub enum FeaturedError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Metadata error: {0}")]
    Metadata(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for FeaturedError {
    fn from(err: serde_json::Error) -> Self {
        FeaturedError::Serialization(err.to_string())
    }
}

impl From<envy::Error> for FeaturedError {
    fn from(err: envy::Error) -> Self {
        FeaturedError::Configuration(err.to_string())
    }
}

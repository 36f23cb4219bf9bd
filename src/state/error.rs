use thiserror::Error;

use crate::core::errors::ApiError;

#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("failed to load configuration: {0}")]
    Config(#[source] ApiError),
    #[error("failed to load corpus: {0}")]
    Corpus(#[source] ApiError),
    #[error("failed to build provider client: {0}")]
    Provider(#[source] ApiError),
}

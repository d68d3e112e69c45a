use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("No providers configured")]
    EmptyProviderSet,

    /// Any single provider's transport, decoding or data-shape failure
    #[error("{0}")]
    ProviderFailure(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid provider type: {0}")]
    InvalidProviderType(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

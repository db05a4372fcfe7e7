use thiserror::Error;

/// Everything that can go wrong while building a chain or a scenario.
/// Once built, a chain never fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChainError {
    #[error("circle radius must be positive and finite, got {0}")]
    NonPositiveRadius(f64),

    #[error("circle border must be non-negative and finite, got {0}")]
    NegativeBorder(f64),

    #[error("a chain needs at least one circle")]
    EmptyChain,

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type ChainResult<T> = Result<T, ChainError>;

//! Error types for the matching core
//!
//! Error taxonomy using thiserror

use thiserror::Error;

/// Errors surfaced by order submission and lookup
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderError {
    #[error("quantity should be at least 1")]
    BadOrderQty,

    #[error("price should be at least 1")]
    BadOrderPrice,

    #[error("side queue is at capacity")]
    TooLargeSizeOfQueue,

    #[error("data not found")]
    DataNotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(OrderError::BadOrderQty.to_string(), "quantity should be at least 1");
        assert_eq!(OrderError::DataNotFound.to_string(), "data not found");
    }
}

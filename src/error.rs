//! Error types for u-numdist.

use thiserror::Error;

/// Crate-wide error type.
///
/// Every error here is a caller error: the crate performs no I/O and has
/// nothing to retry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Distribution or sampler parameters violate their constraints.
    #[error("invalid distribution parameters: {0}")]
    InvalidParameters(String),

    /// A special function was evaluated outside its domain.
    #[error("argument outside function domain: {0}")]
    Domain(String),

    /// The requested statistic has no closed form for this distribution.
    #[error("unsupported operation: {0}")]
    Unsupported(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = Error::InvalidParameters("a=-1".into());
        assert_eq!(e.to_string(), "invalid distribution parameters: a=-1");

        let e = Error::Domain("ln_gamma(0)".into());
        assert_eq!(e.to_string(), "argument outside function domain: ln_gamma(0)");
    }
}

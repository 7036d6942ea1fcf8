//! Error type shared by the calculator core.

use thiserror::Error;

/// Reasons a calculation can be rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("The IP is not valid: '{0}'")]
    InvalidAddress(String),

    #[error("The octet {octet} does not comply with the specified format: {binary}")]
    InvalidMaskPattern { octet: usize, binary: String },

    #[error("Invalid prefix: {0} (expected 0-32)")]
    InvalidPrefix(i64),

    #[error("Invalid subnet count: {0} (must be at least 1)")]
    InvalidSubnetCount(i64),

    #[error("Invalid octet: '{0}'")]
    InvalidOctet(String),
}

use crate::attr::RngAlgorithm;
use crate::dtype::DType;

/// Errors reported by the checked entry points of the MHLO runtime.
///
/// The element-wise and structural operators never return these; they treat
/// malformed operands as a caller obligation.
#[derive(Debug, thiserror::Error)]
pub enum MhloError {
    #[error("Unknown RNG algorithm selector: {0}")]
    UnknownRngAlgorithm(i32),

    #[error("Unknown comparison direction '{0}'")]
    UnknownComparisonDirection(String),

    #[error("{algorithm} requires {expected} state words, got {got}")]
    InvalidRngState {
        algorithm: RngAlgorithm,
        expected: &'static str,
        got: usize,
    },

    #[error("Cannot bitcast {from} to {to}: bit widths differ")]
    BitWidthMismatch { from: DType, to: DType },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

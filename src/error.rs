use std::fmt;

/// Which caller-supplied vector failed a length check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorKind {
    /// Feature vector fed to the input layer.
    Input,
    /// One-hot label compared against the output layer.
    ExpectedOutput,
}

impl fmt::Display for VectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorKind::Input => write!(f, "input vector"),
            VectorKind::ExpectedOutput => write!(f, "expected output vector"),
        }
    }
}

/// Errors raised by the builder, the engine and configuration file handling.
///
/// None of these leave the engine in a partially updated state: the
/// offending call is rejected before anything is written.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("invalid {parameter}: {reason}")]
    Configuration {
        parameter: &'static str,
        reason: &'static str,
    },

    #[error("{vector} has {actual} values, expected {expected}")]
    DimensionMismatch {
        vector: VectorKind,
        expected: usize,
        actual: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NetworkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_value() {
        let err = NetworkError::DimensionMismatch {
            vector: VectorKind::ExpectedOutput,
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "expected output vector has 3 values, expected 4");

        let err = NetworkError::Configuration {
            parameter: "momentum",
            reason: "must be lower than 1",
        };
        assert_eq!(err.to_string(), "invalid momentum: must be lower than 1");
    }
}

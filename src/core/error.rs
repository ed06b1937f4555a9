use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum BenchError {
    #[error("Cannot parse config: {0}")]
    Config(String),
    #[error("Cannot open {backend} backend: {reason}")]
    Open { backend: String, reason: String },
    #[error("Write failed for key '{key}': {reason}")]
    Write { key: String, reason: String },
    #[error("Read failed for key '{key}': {reason}")]
    Read { key: String, reason: String },
    #[error("Key '{key}' is missing")]
    MissingKey { key: String },
    #[error("Value mismatch for key '{key}': expected '{expected}', got '{actual}'")]
    Mismatch {
        key: String,
        expected: String,
        actual: String,
    },
    #[error("Cannot close {backend} backend: {reason}")]
    Close { backend: String, reason: String },
}

impl BenchError {
    pub fn open(backend: &str, reason: impl ToString) -> Self {
        BenchError::Open {
            backend: backend.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn write(key: &str, reason: impl ToString) -> Self {
        BenchError::Write {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn read(key: &str, reason: impl ToString) -> Self {
        BenchError::Read {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn close(backend: &str, reason: impl ToString) -> Self {
        BenchError::Close {
            backend: backend.to_string(),
            reason: reason.to_string(),
        }
    }

    /// True for failures raised by read-after-write verification rather than by the backend.
    pub fn is_verification(&self) -> bool {
        matches!(
            self,
            BenchError::MissingKey { .. } | BenchError::Mismatch { .. }
        )
    }
}

impl From<config::ConfigError> for BenchError {
    fn from(err: config::ConfigError) -> Self {
        BenchError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_message_names_both_values() {
        let err = BenchError::Mismatch {
            key: "hello1".to_string(),
            expected: "world1".to_string(),
            actual: "garbage".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Value mismatch for key 'hello1': expected 'world1', got 'garbage'"
        );
        assert!(err.is_verification());
    }

    #[test]
    fn test_backend_errors_are_not_verification() {
        let err = BenchError::write("hello0", "connection reset");
        assert_eq!(
            err.to_string(),
            "Write failed for key 'hello0': connection reset"
        );
        assert!(!err.is_verification());
    }
}

use crate::core::BenchError;

/// Check a value read back from a backend against the dataset.
pub fn verify(key: &str, expected: &str, actual: Option<&str>) -> Result<(), BenchError> {
    match actual {
        None => Err(BenchError::MissingKey {
            key: key.to_string(),
        }),
        Some(actual) if actual != expected => Err(BenchError::Mismatch {
            key: key.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }),
        Some(_) => Ok(()),
    }
}

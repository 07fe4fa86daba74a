use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowError {
    /// The gas property source is missing, unreadable or malformed.
    #[error("Gas data load failed: {0}")]
    DataLoad(String),

    /// A zero divisor or a non-finite intermediate value.
    /// NaN and infinities never leave the pipeline as numbers.
    #[error("Computation failed: {0}")]
    Computation(String),

    /// Non-finite numeric input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, FlowError>;

/// Reject NaN and ±Infinity, reporting them as the given error kind
/// (e.g. `FlowError::InvalidInput` for inputs, `FlowError::Computation`
/// for intermediates).
pub(crate) fn ensure_finite(
    name: &str,
    value: f64,
    kind: fn(String) -> FlowError,
) -> Result<f64> {
    if !value.is_finite() {
        return Err(kind(format!("{name} must be a finite number, got {value}")));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_values_pass_through() {
        assert_eq!(ensure_finite("x", 1.5, FlowError::Computation), Ok(1.5));
    }

    #[test]
    fn non_finite_values_take_the_given_kind() {
        let err = ensure_finite("x", f64::NAN, FlowError::InvalidInput).unwrap_err();
        assert!(matches!(err, FlowError::InvalidInput(_)));
        let err = ensure_finite("x", f64::NEG_INFINITY, FlowError::Computation).unwrap_err();
        assert!(matches!(err, FlowError::Computation(ref msg) if msg.contains("x must be")));
    }
}

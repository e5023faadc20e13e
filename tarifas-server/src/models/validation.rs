//! Validation error types

use std::fmt;

/// Validation error for request input, surfaced to callers as 400 responses.
///
/// Display output is the client-facing message, so the wording stays in
/// the API's language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required body field absent or null
    Missing { field: &'static str },

    /// Numeric value does not fit the destination column
    OutOfRange { field: &'static str },

    /// Parameter failed to parse
    Invalid { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "Faltan campos obligatorios: {}", field),
            Self::OutOfRange { field } => write!(f, "Valor fuera de rango: {}", field),
            Self::Invalid { field } => write!(f, "{} inválido", field),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::Missing { field: "peso" };
        assert_eq!(err.to_string(), "Faltan campos obligatorios: peso");

        let err = ValidationError::Invalid { field: "id" };
        assert_eq!(err.to_string(), "id inválido");
    }
}

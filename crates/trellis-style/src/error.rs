//! Error types for the styling system.

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the styling system.
///
/// Rendering and patch dispatch never fail; these errors come from strict
/// property resolution, keyword parsing and registry construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A property held a value of a different type than the caller expected.
    #[error("Property '{property}' has type {found}, expected {expected}")]
    TypeMismatch {
        property: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A keyword did not name any member of the target enum.
    #[error("Unknown {kind} keyword '{value}'")]
    UnknownKeyword { kind: &'static str, value: String },

    /// A colour string could not be parsed.
    #[error("Invalid color '{value}'")]
    InvalidColor { value: String },

    /// Two registry entries claimed the same property name.
    #[error("Property '{property}' is already registered for partial updates")]
    DuplicateRegistration { property: String },
}

impl Error {
    /// Create a type mismatch error.
    pub fn type_mismatch(
        property: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            property: property.into(),
            expected,
            found,
        }
    }

    /// Create an unknown keyword error.
    pub fn unknown_keyword(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownKeyword {
            kind,
            value: value.into(),
        }
    }

    /// Create an invalid colour error.
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
        }
    }

    /// Create a duplicate registration error.
    pub fn duplicate_registration(property: impl Into<String>) -> Self {
        Self::DuplicateRegistration {
            property: property.into(),
        }
    }
}

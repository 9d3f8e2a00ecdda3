//! Request validation error taxonomy.
//!
//! Display strings are the user-facing `detail` values returned to
//! clients; existing frontend error handling matches on them, so they
//! must not drift.

use thiserror::Error;

/// A classified request rejection, produced before any upstream call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing or invalid authentication token")]
    MissingToken,

    #[error("Invalid page identifier")]
    InvalidPageId,

    #[error("Content too short to summarize")]
    SummaryContentTooShort,

    #[error("Content must be at least 100 characters for personalization")]
    PersonalizationContentTooShort,

    #[error("Content must not exceed 50,000 characters for personalization")]
    PersonalizationContentTooLong,

    #[error("Invalid {field}. Must be one of: Novice, Beginner, Intermediate, Expert")]
    InvalidProficiency { field: &'static str },
}

impl ValidationError {
    /// Whether this rejection is an authentication failure (401) rather
    /// than a malformed-input failure (400).
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, ValidationError::MissingToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_detail() {
        assert_eq!(
            ValidationError::MissingToken.to_string(),
            "Missing or invalid authentication token"
        );
        assert!(ValidationError::MissingToken.is_unauthenticated());
    }

    #[test]
    fn test_content_bound_details() {
        assert_eq!(
            ValidationError::SummaryContentTooShort.to_string(),
            "Content too short to summarize"
        );
        assert_eq!(
            ValidationError::PersonalizationContentTooShort.to_string(),
            "Content must be at least 100 characters for personalization"
        );
        assert_eq!(
            ValidationError::PersonalizationContentTooLong.to_string(),
            "Content must not exceed 50,000 characters for personalization"
        );
    }

    #[test]
    fn test_proficiency_detail_names_field() {
        let err = ValidationError::InvalidProficiency {
            field: "programmingLevel",
        };
        assert_eq!(
            err.to_string(),
            "Invalid programmingLevel. Must be one of: Novice, Beginner, Intermediate, Expert"
        );
        assert!(!err.is_unauthenticated());
    }
}

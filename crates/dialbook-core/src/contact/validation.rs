//! Contact validation.

use super::model::ContactDraft;

/// Validation error for contact data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Contact name is empty or whitespace-only.
    BlankName,
}

impl ValidationError {
    /// Get human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::BlankName => "Contact name is required",
        }
    }

    /// Get the field name this error relates to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::BlankName => "name",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Result of validating a contact draft.
pub type ValidationResult = Result<(), ValidationError>;

/// Validate contact data before it reaches the store.
///
/// The name must contain at least one non-whitespace character. The phone
/// number is free-form and never rejected.
///
/// # Errors
///
/// Returns a `ValidationError` describing the first invalid field.
pub fn validate_draft(draft: &ContactDraft) -> ValidationResult {
    if draft.name.trim().is_empty() {
        return Err(ValidationError::BlankName);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_draft() {
        let draft = ContactDraft::new("Alice", "555-0100");
        assert!(validate_draft(&draft).is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let draft = ContactDraft::new("", "555-0100");
        assert_eq!(validate_draft(&draft), Err(ValidationError::BlankName));
    }

    #[test]
    fn test_whitespace_name_rejected() {
        let draft = ContactDraft::new("   ", "555-0100");
        assert_eq!(validate_draft(&draft), Err(ValidationError::BlankName));
    }

    #[test]
    fn test_empty_phone_allowed() {
        let draft = ContactDraft::new("Alice", "");
        assert!(validate_draft(&draft).is_ok());
    }
}

//! # Field Validation
//!
//! Every hero, power, and hero power write passes through the checks in this module
//! before it reaches the database.  A failed check rejects the whole write.
//!
//! ```rust
//! use superheroes::{ValidationError, validate_description};
//!
//! assert!(validate_description("gives the wielder super-human strengths").is_ok());
//! assert_eq!(
//!     validate_description("too short"),
//!     Err(ValidationError::DescriptionTooShort)
//! );
//! ```

/// Minimum number of characters in a power description.
pub const MIN_DESCRIPTION_LENGTH: usize = 20;
/// Maximum number of characters in a power description.
pub const MAX_DESCRIPTION_LENGTH: usize = 500;
/// Maximum number of characters in a hero name, super name, or power name.
pub const MAX_NAME_LENGTH: usize = 100;

/// Errors produced when a field fails validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field was empty or blank.
    EmptyField {
        /// The name of the offending field
        field: &'static str,
    },
    /// A text field exceeded its maximum length.
    FieldTooLong {
        /// The name of the offending field
        field: &'static str,
        /// The maximum number of characters allowed
        max: usize,
    },
    /// The power description was empty.
    EmptyDescription,
    /// The power description was shorter than [`MIN_DESCRIPTION_LENGTH`].
    DescriptionTooShort,
    /// The power description was longer than [`MAX_DESCRIPTION_LENGTH`].
    DescriptionTooLong,
    /// The strength was not one of the allowed values.
    InvalidStrength {
        /// The value that was provided
        value: String,
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyField { field } => write!(f, "{} cannot be empty", field),
            ValidationError::FieldTooLong { field, max } => {
                write!(f, "{} must be at most {} characters long", field, max)
            }
            ValidationError::EmptyDescription => write!(f, "Description cannot be empty"),
            ValidationError::DescriptionTooShort => write!(
                f,
                "Description must be at least {} characters long",
                MIN_DESCRIPTION_LENGTH
            ),
            ValidationError::DescriptionTooLong => write!(
                f,
                "Description must be at most {} characters long",
                MAX_DESCRIPTION_LENGTH
            ),
            ValidationError::InvalidStrength { .. } => {
                write!(f, "Strength must be one of: Strong, Weak, Average")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Checks a power description: non-empty and between 20 and 500 characters.
pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    let length = description.chars().count();
    if length < MIN_DESCRIPTION_LENGTH {
        return Err(ValidationError::DescriptionTooShort);
    }
    if length > MAX_DESCRIPTION_LENGTH {
        return Err(ValidationError::DescriptionTooLong);
    }
    Ok(())
}

/// Checks a name-like field: not blank and at most 100 characters.
pub fn validate_name(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    if value.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::FieldTooLong {
            field,
            max: MAX_NAME_LENGTH,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_accepts_exactly_twenty_characters() {
        assert_eq!(validate_description("abcdefghijklmnopqrst"), Ok(()));
    }

    #[test]
    fn description_rejects_nineteen_characters() {
        assert_eq!(
            validate_description("abcdefghijklmnopqrs"),
            Err(ValidationError::DescriptionTooShort)
        );
    }

    #[test]
    fn description_rejects_empty() {
        assert_eq!(
            validate_description(""),
            Err(ValidationError::EmptyDescription)
        );
    }

    #[test]
    fn description_counts_characters_not_bytes() {
        // 10 two-byte characters: 20 bytes but only 10 characters.
        let description = "éééééééééé";
        assert_eq!(description.len(), 20);
        assert_eq!(
            validate_description(description),
            Err(ValidationError::DescriptionTooShort)
        );
    }

    #[test]
    fn description_rejects_overlong() {
        let description = "x".repeat(MAX_DESCRIPTION_LENGTH + 1);
        assert_eq!(
            validate_description(&description),
            Err(ValidationError::DescriptionTooLong)
        );
    }

    #[test]
    fn name_rejects_blank() {
        assert_eq!(
            validate_name("name", "   "),
            Err(ValidationError::EmptyField { field: "name" })
        );
    }

    #[test]
    fn name_rejects_overlong() {
        let name = "n".repeat(MAX_NAME_LENGTH + 1);
        assert_eq!(
            validate_name("super_name", &name),
            Err(ValidationError::FieldTooLong {
                field: "super_name",
                max: MAX_NAME_LENGTH
            })
        );
    }

    #[test]
    fn name_accepts_ordinary_value() {
        assert_eq!(validate_name("name", "Kamala Khan"), Ok(()));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ValidationError::EmptyDescription.to_string(),
            "Description cannot be empty"
        );
        assert_eq!(
            ValidationError::DescriptionTooShort.to_string(),
            "Description must be at least 20 characters long"
        );
        assert_eq!(
            ValidationError::InvalidStrength {
                value: "Mighty".to_string()
            }
            .to_string(),
            "Strength must be one of: Strong, Weak, Average"
        );
        assert_eq!(
            ValidationError::EmptyField { field: "name" }.to_string(),
            "name cannot be empty"
        );
    }
}

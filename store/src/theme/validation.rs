use super::metadata::parse_created_at;
use super::naming::TEMP_PREFIX;
use crate::validation::Validator;
use thiserror::Error;

const MAX_BASE_NAME_LEN: usize = 100;

/// Validation errors for input used to build a new theme directory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeValidationError {
    #[error("Invalid theme base name '{name}': {reason}")]
    InvalidBaseName { name: String, reason: String },
    #[error("Invalid createdAt '{value}': not a finite number")]
    InvalidTimestamp { value: String },
}

impl ThemeValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ThemeValidationError::InvalidBaseName { name, reason } => {
                format!(
                    "Invalid theme name: '{name}'\n\n\
                    Reason: {reason}\n\n\
                    Please use a name without path separators."
                )
            }
            ThemeValidationError::InvalidTimestamp { value } => {
                format!(
                    "Invalid creation time: '{value}'\n\n\
                    The creation time must be a number, for example 1560606239456254."
                )
            }
        }
    }
}

/// Validator for the base name part of a theme directory
pub struct BaseNameValidator;

impl Validator<str> for BaseNameValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        let invalid = |reason: &str| ThemeValidationError::InvalidBaseName {
            name: input.to_string(),
            reason: reason.to_string(),
        };

        if input.trim().is_empty() {
            return Err(invalid("Name cannot be empty"));
        }

        if input.chars().count() > MAX_BASE_NAME_LEN {
            return Err(invalid("Name too long (max 100 characters)"));
        }

        if input.contains('/') || input.contains('\\') {
            return Err(invalid("Name cannot contain path separators"));
        }

        if input.contains("..") {
            return Err(invalid("Name cannot contain '..'"));
        }

        // A committed directory carrying the marker would never be listed.
        if input.contains(TEMP_PREFIX) {
            return Err(invalid("Name cannot contain 'tmp_'"));
        }

        if input.chars().any(char::is_control) {
            return Err(invalid("Name cannot contain control characters"));
        }

        Ok(())
    }
}

/// Validator for `createdAt` values
pub struct CreatedAtValidator;

impl Validator<str> for CreatedAtValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        match parse_created_at(input) {
            Some(_) => Ok(()),
            None => Err(ThemeValidationError::InvalidTimestamp {
                value: input.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_name_validator() {
        let validator = BaseNameValidator;

        // Valid names
        assert!(validator.validate("face").is_ok());
        assert!(validator.validate("Night Face 2").is_ok());
        assert!(validator.validate("表盘").is_ok());

        // Invalid names
        assert!(validator.validate("").is_err());
        assert!(validator.validate("   ").is_err());
        assert!(validator.validate("a/b").is_err());
        assert!(validator.validate("a\\b").is_err());
        assert!(validator.validate("..").is_err());
        assert!(validator.validate("my_tmp_face").is_err());
        assert!(validator.validate("line\nbreak").is_err());
        assert!(validator.validate(&"a".repeat(101)).is_err());
        assert!(validator.validate(&"a".repeat(100)).is_ok());
    }

    #[test]
    fn test_created_at_validator() {
        let validator = CreatedAtValidator;

        assert!(validator.validate("1560606239456254").is_ok());
        assert!(validator.validate("10.5").is_ok());
        assert!(validator.validate("").is_err());
        assert!(validator.validate("later").is_err());
        assert!(validator.validate("NaN").is_err());
    }
}

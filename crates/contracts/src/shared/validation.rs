//! Validation rules for form fields

use serde::{Deserialize, Serialize};

/// Validation rules for a single string field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    /// Message reported instead of the generated one
    pub message: Option<&'static str>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min_length: None,
            max_length: None,
            message: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    pub const fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub const fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub const fn with_message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }

    /// Validate a string value against the rules.
    ///
    /// Lengths are counted in characters, not bytes.
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let len = value.chars().count();

        if self.required && value.trim().is_empty() {
            return Err(self.error_or(format!("{} is required", field_label)));
        }

        if let Some(min) = self.min_length {
            if len < min {
                return Err(self.error_or(format!(
                    "{} must be at least {} characters",
                    field_label, min
                )));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return Err(self.error_or(format!(
                    "{} must be at most {} characters",
                    field_label, max
                )));
            }
        }

        Ok(())
    }

    fn error_or(&self, generated: String) -> String {
        self.message.map(str::to_string).unwrap_or(generated)
    }
}

/// Ошибка конкретного поля формы
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Набор ошибок валидации формы (в порядке полей)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, thiserror::Error)]
#[error("validation failed: {}", summarize(.errors))]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Check a value against rules and record the failure under `field`
    pub fn check(&mut self, field: &str, label: &str, value: &str, rules: ValidationRules) {
        if let Err(message) = rules.validate_string(value, label) {
            self.push(field, message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Первое сообщение для поля
    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Convert into `Err` if anything was recorded
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_length_counts_chars() {
        let rules = ValidationRules::required().min_length(3);
        assert!(rules.validate_string("abc", "Name").is_ok());
        assert!(rules.validate_string("ab", "Name").is_err());
        // две кириллические буквы: 4 байта, но 2 символа
        assert!(rules.validate_string("юю", "Name").is_err());
        assert!(rules.validate_string("юят", "Name").is_ok());
    }

    #[test]
    fn test_required_rejects_whitespace() {
        let rules = ValidationRules::required();
        assert_eq!(
            rules.validate_string("   ", "Name"),
            Err("Name is required".to_string())
        );
    }

    #[test]
    fn test_custom_message_overrides_generated() {
        let rules = ValidationRules::none().min_length(10).with_message("bad key");
        assert_eq!(rules.validate_string("short", "Key"), Err("bad key".to_string()));
    }

    #[test]
    fn test_max_length() {
        let rules = ValidationRules::none().max_length(2);
        assert_eq!(
            rules.validate_string("abc", "Code"),
            Err("Code must be at most 2 characters".to_string())
        );
    }

    #[test]
    fn test_errors_collection() {
        let mut errors = ValidationErrors::new();
        errors.check("name", "Name", "", ValidationRules::required());
        errors.check("code", "Code", "ok", ValidationRules::required());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.for_field("name"), Some("Name is required"));
        assert_eq!(errors.for_field("code"), None);
        assert_eq!(errors.to_string(), "validation failed: name: Name is required");
        assert!(errors.into_result().is_err());
        assert!(ValidationErrors::new().into_result().is_ok());
    }
}

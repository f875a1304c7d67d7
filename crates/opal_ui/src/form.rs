//! Form-rule validation
//!
//! A linear scan over field rules: every failing rule records its message
//! under its field name, later rules overwriting earlier ones for the same
//! field. Pure computation - never fails.

use indexmap::IndexMap;

/// A single field rule
pub struct ValidationRule<T> {
    field: String,
    validate: Box<dyn Fn(&T) -> bool + Send + Sync>,
    message: String,
}

impl<T> ValidationRule<T> {
    pub fn new<F>(field: impl Into<String>, validate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            field: field.into(),
            validate: Box::new(validate),
            message: message.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result of a validation pass
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: bool,
    /// Failing field -> message, in rule order
    pub errors: IndexMap<String, String>,
}

/// Check a record against a list of rules
pub fn validate_form<T>(data: &T, rules: &[ValidationRule<T>]) -> ValidationReport {
    let mut errors = IndexMap::new();
    for rule in rules {
        if !(rule.validate)(data) {
            errors.insert(rule.field.clone(), rule.message.clone());
        }
    }
    ValidationReport {
        valid: errors.is_empty(),
        errors,
    }
}

// src/domain/validation.rs
//! Field-level validation shared by every string column.
//!
//! The maximum length of a `VARCHAR`-style column is a single process-wide
//! value. It is carried in [`FieldLimits`] and handed to validation
//! explicitly instead of living in a type-level constant.

use std::fmt;

pub const DEFAULT_MAX_VAR_CHAR: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLimits {
    max_var_char: usize,
}

impl FieldLimits {
    pub const fn new(max_var_char: usize) -> Self {
        Self { max_var_char }
    }

    pub const fn max_var_char(self) -> usize {
        self.max_var_char
    }
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_VAR_CHAR)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Blank,
    TooLong { maximum: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub violation: Violation,
}

impl FieldError {
    pub const fn new(field: &'static str, violation: Violation) -> Self {
        Self { field, violation }
    }

    /// Human readable message prefixed with the capitalised field name,
    /// e.g. `Title can't be blank`.
    pub fn full_message(&self) -> String {
        let label = humanize(self.field);
        match self.violation {
            Violation::Blank => format!("{label} can't be blank"),
            Violation::TooLong { maximum } => {
                format!("{label} is too long (maximum is {maximum} characters)")
            }
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_message())
    }
}

fn humanize(field: &str) -> String {
    let mut chars = field.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect::<String>().replace('_', " ")
    })
}

/// Every violation found while validating one record, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn single(field: &'static str, violation: Violation) -> Self {
        Self(vec![FieldError::new(field, violation)])
    }

    pub fn push(&mut self, field: &'static str, violation: Violation) {
        self.0.push(FieldError::new(field, violation));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.iter().any(|err| err.field == field)
    }

    pub fn full_messages(&self) -> Vec<String> {
        self.0.iter().map(FieldError::full_message).collect()
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_messages().join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Presence plus maximum-length check for a single string column.
///
/// Whitespace-only values count as blank. Length is measured in characters,
/// not bytes.
pub fn validate_var_char(
    field: &'static str,
    value: Option<&str>,
    limits: FieldLimits,
    errors: &mut ValidationErrors,
) {
    let Some(value) = value else {
        errors.push(field, Violation::Blank);
        return;
    };

    if value.trim().is_empty() {
        errors.push(field, Violation::Blank);
    }

    let maximum = limits.max_var_char();
    if value.chars().count() > maximum {
        errors.push(field, Violation::TooLong { maximum });
    }
}

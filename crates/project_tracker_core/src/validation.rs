//! Project input validation.
//!
//! # Responsibility
//! - Check raw form fields before they reach `ProjectStore::add_project`.
//! - Report the first failing field with a readable reason.
//!
//! # Invariants
//! - Validation runs strictly before the store is called; the store itself
//!   never validates.
//! - Length and range bounds are inclusive.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Declarative rule set for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Validatable {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

/// Field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Missing {
        field: &'static str,
    },
    TooShort {
        field: &'static str,
        min: usize,
        actual: usize,
    },
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    NotANumber {
        field: &'static str,
        input: String,
    },
    BelowMinimum {
        field: &'static str,
        min: i64,
        actual: i64,
    },
    AboveMaximum {
        field: &'static str,
        max: i64,
        actual: i64,
    },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field }
            | Self::TooShort { field, .. }
            | Self::TooLong { field, .. }
            | Self::NotANumber { field, .. }
            | Self::BelowMinimum { field, .. }
            | Self::AboveMaximum { field, .. } => *field,
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{field} is required"),
            Self::TooShort { field, min, actual } => write!(
                f,
                "{field} must be at least {min} characters, got {actual}"
            ),
            Self::TooLong { field, max, actual } => {
                write!(f, "{field} must be at most {max} characters, got {actual}")
            }
            Self::NotANumber { field, input } => {
                write!(f, "{field} must be a whole number, got `{input}`")
            }
            Self::BelowMinimum { field, min, actual } => {
                write!(f, "{field} must be at least {min}, got {actual}")
            }
            Self::AboveMaximum { field, max, actual } => {
                write!(f, "{field} must be at most {max}, got {actual}")
            }
        }
    }
}

impl Error for ValidationError {}

impl Validatable {
    /// Checks a text field. Surrounding whitespace is ignored.
    pub fn validate_text(&self, field: &'static str, value: &str) -> Result<(), ValidationError> {
        let length = value.trim().chars().count();
        if self.required && length == 0 {
            return Err(ValidationError::Missing { field });
        }
        if let Some(min) = self.min_length {
            if length < min {
                return Err(ValidationError::TooShort {
                    field,
                    min,
                    actual: length,
                });
            }
        }
        if let Some(max) = self.max_length {
            if length > max {
                return Err(ValidationError::TooLong {
                    field,
                    max,
                    actual: length,
                });
            }
        }
        Ok(())
    }

    /// Checks a numeric field already parsed by the caller.
    pub fn validate_number(&self, field: &'static str, value: i64) -> Result<(), ValidationError> {
        if let Some(min) = self.min {
            if value < min {
                return Err(ValidationError::BelowMinimum {
                    field,
                    min,
                    actual: value,
                });
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return Err(ValidationError::AboveMaximum {
                    field,
                    max,
                    actual: value,
                });
            }
        }
        Ok(())
    }
}

/// Rules applied to the project input form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputRules {
    pub title: Validatable,
    pub description: Validatable,
    pub people: Validatable,
}

impl Default for InputRules {
    fn default() -> Self {
        Self {
            title: Validatable {
                required: true,
                ..Validatable::default()
            },
            description: Validatable {
                required: true,
                min_length: Some(5),
                ..Validatable::default()
            },
            people: Validatable {
                required: true,
                min: Some(1),
                max: Some(5),
                ..Validatable::default()
            },
        }
    }
}

/// Raw, unvalidated form fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    pub people: String,
}

/// Form fields that passed validation, ready for `add_project`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidProject {
    pub title: String,
    pub description: String,
    pub people: u32,
}

impl ProjectInput {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people: people.into(),
        }
    }

    /// Validates all fields in form order: title, description, people.
    pub fn validate(&self, rules: &InputRules) -> Result<ValidProject, ValidationError> {
        rules.title.validate_text("title", &self.title)?;
        rules
            .description
            .validate_text("description", &self.description)?;
        rules.people.validate_text("people", &self.people)?;

        let raw_people = self.people.trim();
        let people = raw_people
            .parse::<i64>()
            .map_err(|_| ValidationError::NotANumber {
                field: "people",
                input: raw_people.to_string(),
            })?;
        rules.people.validate_number("people", people)?;
        let people = u32::try_from(people).map_err(|_| {
            if people < 0 {
                ValidationError::BelowMinimum {
                    field: "people",
                    min: 0,
                    actual: people,
                }
            } else {
                ValidationError::AboveMaximum {
                    field: "people",
                    max: i64::from(u32::MAX),
                    actual: people,
                }
            }
        })?;

        Ok(ValidProject {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            people,
        })
    }
}

//! Error types for farecast.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::TripField;

/// Why a single trip field failed validation.
///
/// These are user-facing: the message is shown next to the offending input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    /// Field was left empty.
    #[error("{field} is required")]
    Missing {
        /// The empty field.
        field: TripField,
    },

    /// Field text is not a number.
    #[error("{field} must be a number")]
    NotANumber {
        /// The offending field.
        field: TripField,
        /// The text that failed to parse.
        input: String,
    },

    /// Field parsed to NaN or infinity.
    #[error("{field} must be a finite number")]
    NotFinite {
        /// The offending field.
        field: TripField,
        /// The text that parsed to a non-finite value.
        input: String,
    },

    /// Field is zero or negative.
    #[error("{field} must be a positive number")]
    NotPositive {
        /// The offending field.
        field: TripField,
        /// The parsed value.
        value: f64,
    },
}

impl FieldError {
    /// Returns the field this error belongs to.
    #[must_use]
    pub const fn field(&self) -> TripField {
        match self {
            Self::Missing { field }
            | Self::NotANumber { field, .. }
            | Self::NotFinite { field, .. }
            | Self::NotPositive { field, .. } => *field,
        }
    }
}

/// All validation failures for one trip form, at most one per field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationErrors {
    errors: BTreeMap<TripField, FieldError>,
}

impl ValidationErrors {
    /// Creates an empty error set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Records an error under its field, replacing any earlier one.
    pub fn insert(&mut self, error: FieldError) {
        self.errors.insert(error.field(), error);
    }

    /// Returns the error for a field, if any.
    #[must_use]
    pub fn get(&self, field: TripField) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Returns the human-readable message for a field, if it failed.
    #[must_use]
    pub fn message(&self, field: TripField) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    /// Returns true if the field failed validation.
    #[must_use]
    pub fn contains(&self, field: TripField) -> bool {
        self.errors.contains_key(&field)
    }

    /// Returns the failing fields and their errors in field order.
    pub fn iter(&self) -> impl Iterator<Item = (TripField, &FieldError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }

    /// Returns the number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns `Ok(value)` if no field failed, otherwise the errors.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one field failed.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for error in self.errors.values() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// The estimation engine was called with inputs validation should have
/// rejected. This is a bug in the caller, not a user error.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ContractViolation {
    /// Distance was zero, negative or non-finite.
    #[error("distance must be positive and finite, got {0}")]
    InvalidDistance(f64),

    /// Duration was zero, negative or non-finite.
    #[error("duration must be positive and finite, got {0}")]
    InvalidDuration(f64),

    /// Surge multiplier was zero, negative or non-finite.
    #[error("surge multiplier must be positive and finite, got {0}")]
    InvalidSurge(f64),

    /// A pricing rate was negative or non-finite.
    #[error("pricing rate `{rate}` must be non-negative and finite, got {value}")]
    InvalidRate {
        /// Name of the rate.
        rate: &'static str,
        /// The offending value.
        value: f64,
    },

    /// The computed fare overflowed to a non-finite value.
    #[error("fare is not a finite number, got {0}")]
    NonFiniteFare(f64),
}

/// Error returned when parsing an unknown provider or unit name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceParseError {
    kind: &'static str,
    input: String,
    expected: &'static str,
}

impl ChoiceParseError {
    pub(crate) fn new(kind: &'static str, input: &str, expected: &'static str) -> Self {
        Self {
            kind,
            input: input.to_string(),
            expected,
        }
    }

    /// Returns the text that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl std::fmt::Display for ChoiceParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid {} '{}', expected one of: {}",
            self.kind, self.input, self.expected
        )
    }
}

impl std::error::Error for ChoiceParseError {}

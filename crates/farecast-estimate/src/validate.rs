//! Trip form validation.

use farecast_types::{FieldError, TripField, TripForm, TripInput, ValidationErrors};

/// Parses one field's text as a finite, strictly positive number.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns the reason the text is not acceptable for `field`.
pub fn parse_positive(field: TripField, raw: &str) -> Result<f64, FieldError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(FieldError::Missing { field });
    }

    let value: f64 = text.parse().map_err(|_| FieldError::NotANumber {
        field,
        input: raw.to_string(),
    })?;

    if !value.is_finite() {
        return Err(FieldError::NotFinite {
            field,
            input: raw.to_string(),
        });
    }
    if value <= 0.0 {
        return Err(FieldError::NotPositive { field, value });
    }

    Ok(value)
}

/// Validates a trip form.
///
/// Distance and duration are checked independently and every failure is
/// reported, so the caller can flag both inputs at once. Units, surge and
/// provider come from fixed choices and are carried through unchanged.
///
/// # Errors
///
/// Returns one [`FieldError`] per failing field.
pub fn validate(form: &TripForm) -> Result<TripInput, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let distance = collect(&mut errors, parse_positive(TripField::Distance, &form.distance));
    let duration = collect(&mut errors, parse_positive(TripField::Duration, &form.duration));

    match (distance, duration) {
        (Some(distance), Some(duration)) => Ok(TripInput::new(
            distance,
            form.distance_unit,
            duration,
            form.duration_unit,
            form.surge_multiplier,
            form.provider,
        )),
        _ => Err(errors),
    }
}

fn collect(errors: &mut ValidationErrors, result: Result<f64, FieldError>) -> Option<f64> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            errors.insert(error);
            None
        }
    }
}

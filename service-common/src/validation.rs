use std::borrow::Cow;

use validator::{Validate, ValidationError};

use crate::error::FieldErrors;

/// Rejects empty and whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::Borrowed("must not be blank"));
        return Err(err);
    }
    Ok(())
}

/// Runs every rule on `payload` and collects all failing fields at once.
pub fn check<T: Validate>(payload: &T) -> Result<(), FieldErrors> {
    payload.validate().map_err(FieldErrors::from)
}

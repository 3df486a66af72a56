//! Field rules shared between registration and order submission.
//!
//! These are the single source of truth for the formats both flows must
//! agree on; the request DTOs reference them from their `validator`
//! derives and the order validator calls them directly.

use validator::{ValidationError, ValidationErrors};

use ghiaccio_core::error::AppError;

/// Validates an Italian mobile number: a `3` followed by exactly nine
/// digits.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let mut chars = phone.chars();
    let valid = phone.len() == 10
        && chars.next() == Some('3')
        && chars.all(|c| c.is_ascii_digit());

    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("phone").with_message("Il numero di telefono non è valido".into()))
    }
}

/// Whether a required text field is missing or blank after trimming.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map(str::trim).unwrap_or("").is_empty()
}

/// Flattens `validator` output into a field-keyed `AppError`.
///
/// Each field maps to its first message, mirroring how the form displays
/// one inline error per input.
pub fn into_app_error(errors: ValidationErrors) -> AppError {
    let fields: serde_json::Map<String, serde_json::Value> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let message = errs
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| "Campo non valido".to_string());
            (field.to_string(), serde_json::Value::String(message))
        })
        .collect();

    AppError::validation_with_fields("Dati non validi", serde_json::Value::Object(fields))
}

//! Field-level validation for order submissions.
//!
//! All rules for an order live here, in one place, and run on both the
//! submit and the update path. Errors come back keyed by the wire field
//! name so the form can show them inline.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use ghiaccio_core::error::AppError;
use ghiaccio_core::result::AppResult;
use ghiaccio_entity::order::{IceType, OrderContact};

use crate::validation::{is_blank, validate_phone};

/// A raw order submission, before any validation.
///
/// Everything is optional here; the validator decides what is required
/// and reports all problems at once.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderSubmission {
    /// Quantity in kilograms.
    pub quantity: Option<f64>,
    /// Ice type wire label.
    pub ice_type: Option<String>,
    /// Delivery address.
    pub address: Option<String>,
    /// Delivery day, `YYYY-MM-DD`.
    pub delivery_date: Option<String>,
    /// Delivery time, `HH:MM`.
    pub delivery_hour: Option<String>,
    /// Contact first name (required when unauthenticated).
    pub name: Option<String>,
    /// Contact last name (required when unauthenticated).
    pub surname: Option<String>,
    /// Contact phone (required when unauthenticated).
    pub phone: Option<String>,
}

/// A submission that passed every field rule.
#[derive(Debug, Clone)]
pub struct ValidatedOrder {
    /// Quantity in kilograms.
    pub quantity_kg: f64,
    /// Kind of ice.
    pub ice_type: IceType,
    /// Delivery address.
    pub delivery_address: String,
    /// Delivery day.
    pub delivery_date: NaiveDate,
    /// Delivery time.
    pub delivery_hour: NaiveTime,
    /// Guest contact (present only for unauthenticated submissions).
    pub contact: Option<OrderContact>,
}

/// Validates order submissions against the business field rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderValidator;

impl OrderValidator {
    /// Creates a new order validator.
    pub fn new() -> Self {
        Self
    }

    /// Runs every rule against `submission`.
    ///
    /// `authenticated` controls whether the contact fields are required.
    /// `now` anchors the future-delivery rules so they are testable.
    pub fn validate(
        &self,
        submission: &OrderSubmission,
        authenticated: bool,
        now: DateTime<Utc>,
    ) -> AppResult<ValidatedOrder> {
        let mut fields = serde_json::Map::new();
        let mut fail = |field: &str, message: &str| {
            fields
                .entry(field.to_string())
                .or_insert_with(|| serde_json::Value::String(message.to_string()));
        };

        let quantity_kg = match submission.quantity {
            None => {
                fail("quantita", "La quantità è obbligatoria");
                0.0
            }
            Some(q) if !q.is_finite() || q <= 0.0 => {
                fail("quantita", "La quantità deve essere maggiore di zero");
                0.0
            }
            Some(q) => q,
        };

        let ice_type = match submission.ice_type.as_deref().map(str::trim) {
            None | Some("") => {
                fail("tipologia", "La tipologia di ghiaccio è obbligatoria");
                None
            }
            Some(raw) => match raw.parse::<IceType>() {
                Ok(t) => Some(t),
                Err(_) => {
                    fail("tipologia", "Tipologia di ghiaccio non valida");
                    None
                }
            },
        };

        if is_blank(submission.address.as_deref()) {
            fail("indirizzo", "L'indirizzo di consegna è obbligatorio");
        }

        let delivery_date = match submission.delivery_date.as_deref().map(str::trim) {
            None | Some("") => {
                fail("data", "La data di consegna è obbligatoria");
                None
            }
            Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(d) => Some(d),
                Err(_) => {
                    fail("data", "Data di consegna non valida");
                    None
                }
            },
        };

        let delivery_hour = match submission.delivery_hour.as_deref().map(str::trim) {
            None | Some("") => {
                fail("orario", "L'orario di consegna è obbligatorio");
                None
            }
            Some(raw) => match parse_hour(raw) {
                Some(h) => Some(h),
                None => {
                    fail("orario", "Orario di consegna non valido");
                    None
                }
            },
        };

        if let (Some(date), Some(hour)) = (delivery_date, delivery_hour) {
            let today = now.date_naive();
            if date < today {
                fail("data", "La data di consegna non può essere nel passato");
            } else if date == today && date.and_time(hour).and_utc() <= now {
                fail(
                    "orario",
                    "L'orario di consegna deve essere successivo all'ora attuale",
                );
            }
        }

        let contact = if authenticated {
            None
        } else {
            if is_blank(submission.name.as_deref()) {
                fail("nome", "Il nome è obbligatorio");
            }
            if is_blank(submission.surname.as_deref()) {
                fail("cognome", "Il cognome è obbligatorio");
            }
            match submission.phone.as_deref().map(str::trim) {
                None | Some("") => {
                    fail("telefono", "Il numero di telefono è obbligatorio");
                    None
                }
                Some(phone) => {
                    if validate_phone(phone).is_err() {
                        fail("telefono", "Il numero di telefono non è valido");
                        None
                    } else {
                        Some(phone.to_string())
                    }
                }
            }
            .map(|phone| OrderContact {
                name: submission.name.as_deref().unwrap_or("").trim().to_string(),
                surname: submission.surname.as_deref().unwrap_or("").trim().to_string(),
                phone,
            })
        };

        if !fields.is_empty() {
            return Err(AppError::validation_with_fields(
                "Dati dell'ordine non validi",
                serde_json::Value::Object(fields),
            ));
        }

        Ok(ValidatedOrder {
            quantity_kg,
            // Both unwraps are guarded by the error return above.
            ice_type: ice_type.unwrap(),
            delivery_address: submission.address.as_deref().unwrap().trim().to_string(),
            delivery_date: delivery_date.unwrap(),
            delivery_hour: delivery_hour.unwrap(),
            contact,
        })
    }
}

/// Parses `HH:MM`, accepting a seconds component when present.
fn parse_hour(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 12, 14, 30, 0).unwrap()
    }

    fn valid_submission() -> OrderSubmission {
        OrderSubmission {
            quantity: Some(5.0),
            ice_type: Some("consumazione".to_string()),
            address: Some("Via Roma 1, Torino".to_string()),
            delivery_date: Some("2025-09-20".to_string()),
            delivery_hour: Some("10:00".to_string()),
            name: Some("Mauro".to_string()),
            surname: Some("Bianchi".to_string()),
            phone: Some("3401234567".to_string()),
        }
    }

    fn field_message(err: &AppError, field: &str) -> Option<String> {
        err.details
            .as_ref()?
            .get(field)?
            .as_str()
            .map(String::from)
    }

    #[test]
    fn test_valid_guest_submission() {
        let validated = OrderValidator::new()
            .validate(&valid_submission(), false, now())
            .unwrap();

        assert_eq!(validated.quantity_kg, 5.0);
        assert_eq!(validated.ice_type, IceType::Consumption);
        assert_eq!(
            validated.contact.as_ref().unwrap().phone,
            "3401234567"
        );
    }

    #[test]
    fn test_authenticated_submission_skips_contact() {
        let submission = OrderSubmission {
            name: None,
            surname: None,
            phone: None,
            ..valid_submission()
        };
        let validated = OrderValidator::new()
            .validate(&submission, true, now())
            .unwrap();
        assert!(validated.contact.is_none());
    }

    #[test]
    fn test_zero_and_negative_quantity_fail() {
        for quantity in [0.0, -3.0] {
            let submission = OrderSubmission {
                quantity: Some(quantity),
                ..valid_submission()
            };
            let err = OrderValidator::new()
                .validate(&submission, true, now())
                .unwrap_err();
            assert_eq!(
                field_message(&err, "quantita").unwrap(),
                "La quantità deve essere maggiore di zero"
            );
        }
    }

    #[test]
    fn test_unknown_ice_type_fails() {
        let submission = OrderSubmission {
            ice_type: Some("tritato".to_string()),
            ..valid_submission()
        };
        let err = OrderValidator::new()
            .validate(&submission, true, now())
            .unwrap_err();
        assert!(field_message(&err, "tipologia").is_some());
    }

    #[test]
    fn test_guest_phone_uses_registration_pattern() {
        let submission = OrderSubmission {
            phone: Some("1234567890".to_string()),
            ..valid_submission()
        };
        let err = OrderValidator::new()
            .validate(&submission, false, now())
            .unwrap_err();
        assert_eq!(
            field_message(&err, "telefono").unwrap(),
            "Il numero di telefono non è valido"
        );
    }

    #[test]
    fn test_same_day_delivery_must_be_after_now() {
        let submission = OrderSubmission {
            delivery_date: Some("2025-09-12".to_string()),
            delivery_hour: Some("14:30".to_string()),
            ..valid_submission()
        };
        let err = OrderValidator::new()
            .validate(&submission, true, now())
            .unwrap_err();
        assert!(field_message(&err, "orario").is_some());

        let later = OrderSubmission {
            delivery_date: Some("2025-09-12".to_string()),
            delivery_hour: Some("14:31".to_string()),
            ..valid_submission()
        };
        assert!(OrderValidator::new().validate(&later, true, now()).is_ok());
    }

    #[test]
    fn test_past_date_fails() {
        let submission = OrderSubmission {
            delivery_date: Some("2025-09-11".to_string()),
            ..valid_submission()
        };
        let err = OrderValidator::new()
            .validate(&submission, true, now())
            .unwrap_err();
        assert_eq!(
            field_message(&err, "data").unwrap(),
            "La data di consegna non può essere nel passato"
        );
    }

    #[test]
    fn test_all_missing_fields_reported_at_once() {
        let err = OrderValidator::new()
            .validate(&OrderSubmission::default(), false, now())
            .unwrap_err();
        let details = err.details.as_ref().unwrap().as_object().unwrap();
        for field in [
            "quantita", "tipologia", "indirizzo", "data", "orario", "nome", "cognome", "telefono",
        ] {
            assert!(details.contains_key(field), "missing field: {field}");
        }
    }
}

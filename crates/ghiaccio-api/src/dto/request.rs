//! Request DTOs with their validation schemas.
//!
//! The `validator` derives are the declarative rule set for each entity;
//! the handlers run them before anything touches a service. Field names
//! follow the wire contract of the original web client.

use serde::{Deserialize, Serialize};
use validator::Validate;

use ghiaccio_core::types::SortDirection;
use ghiaccio_entity::order::{IceType, OrderListQuery, OrderSortKey, OrderStatus};
use ghiaccio_service::order::OrderSubmission;
use ghiaccio_service::validation::validate_phone;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// First name.
    #[validate(length(min = 1, message = "Il nome è obbligatorio"))]
    pub name: String,
    /// Last name.
    #[validate(length(min = 1, message = "Il cognome è obbligatorio"))]
    pub surname: String,
    /// Mobile number.
    #[validate(custom(function = validate_phone))]
    pub phone_number: String,
    /// Email address.
    #[validate(email(message = "Email non valida"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password obbligatoria"))]
    pub password: String,
    /// Password confirmation; must equal `password`.
    #[validate(must_match(other = password, message = "Le password non corrispondono"))]
    pub confirm_password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Email address.
    #[validate(email(message = "Devi inserire una email valida"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Devi inserire una password"))]
    pub password: String,
    /// Keep the session alive beyond the browser session.
    #[serde(default)]
    pub remember_me: bool,
}

/// Order submission body. Field names are the Italian wire contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitOrderRequest {
    /// Quantity in kilograms.
    pub quantita: Option<f64>,
    /// Ice type ("consumazione" or "raffreddare").
    pub tipologia: Option<String>,
    /// Delivery address.
    pub indirizzo: Option<String>,
    /// Delivery day, `YYYY-MM-DD`.
    pub data: Option<String>,
    /// Delivery time, `HH:MM`.
    pub orario: Option<String>,
    /// Contact first name (guest submissions).
    pub nome: Option<String>,
    /// Contact last name (guest submissions).
    pub cognome: Option<String>,
    /// Contact phone (guest submissions).
    pub telefono: Option<String>,
}

impl From<SubmitOrderRequest> for OrderSubmission {
    fn from(req: SubmitOrderRequest) -> Self {
        OrderSubmission {
            quantity: req.quantita,
            ice_type: req.tipologia,
            address: req.indirizzo,
            delivery_date: req.data,
            delivery_hour: req.orario,
            name: req.nome,
            surname: req.cognome,
            phone: req.telefono,
        }
    }
}

/// Sort and filter query parameters for order listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderListParams {
    /// Sort key (`requested_at`, `quantity`, `ice_type`, `address`,
    /// `status`, `time_to_delivery`).
    pub sort: Option<OrderSortKey>,
    /// Sort direction (`asc`/`desc`).
    pub direction: Option<SortDirection>,
    /// Only orders with this status.
    pub status: Option<OrderStatus>,
    /// Only orders of this ice type.
    pub ice_type: Option<IceType>,
    /// Show cancelled orders in unfiltered listings.
    pub include_cancelled: Option<bool>,
}

impl From<OrderListParams> for OrderListQuery {
    fn from(params: OrderListParams) -> Self {
        OrderListQuery {
            sort: params.sort.unwrap_or_default(),
            direction: params.direction,
            status: params.status,
            ice_type: params.ice_type,
            include_cancelled: params.include_cancelled.unwrap_or(false),
        }
    }
}

/// Admin order listing: sort/filter plus pagination.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminOrderListParams {
    /// Page number (1-based).
    pub page: Option<u64>,
    /// Items per page.
    pub page_size: Option<u64>,
    /// Sort key.
    pub sort: Option<OrderSortKey>,
    /// Sort direction.
    pub direction: Option<SortDirection>,
    /// Status filter.
    pub status: Option<OrderStatus>,
    /// Ice type filter.
    pub ice_type: Option<IceType>,
    /// Show cancelled orders.
    pub include_cancelled: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_schema_rejects_bad_fields() {
        let req = RegisterRequest {
            name: String::new(),
            surname: "Rossi".to_string(),
            phone_number: "12345".to_string(),
            email: "not-an-email".to_string(),
            password: "secret".to_string(),
            confirm_password: "different".to_string(),
        };

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("phone_number"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("confirm_password"));
    }

    #[test]
    fn test_register_schema_accepts_valid_input() {
        let req = RegisterRequest {
            name: "Franky".to_string(),
            surname: "Rossi".to_string(),
            phone_number: "3401234567".to_string(),
            email: "franky@example.com".to_string(),
            password: "password1".to_string(),
            confirm_password: "password1".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_submit_request_maps_to_submission() {
        let req = SubmitOrderRequest {
            quantita: Some(5.0),
            tipologia: Some("raffreddare".to_string()),
            indirizzo: Some("Via Po 12".to_string()),
            data: Some("2025-09-20".to_string()),
            orario: Some("10:00".to_string()),
            nome: None,
            cognome: None,
            telefono: None,
        };
        let submission: OrderSubmission = req.into();
        assert_eq!(submission.quantity, Some(5.0));
        assert_eq!(submission.ice_type.as_deref(), Some("raffreddare"));
    }
}

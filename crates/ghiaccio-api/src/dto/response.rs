//! Response DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ghiaccio_entity::order::{IceType, Order, OrderStatus};
use ghiaccio_entity::user::User;

/// User shape returned by login, register, and `/api/user`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// First name.
    pub name: String,
    /// Last name.
    pub surname: String,
    /// Mobile number.
    pub phone_number: String,
    /// Email address.
    pub email: String,
    /// Role.
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            name: user.name,
            surname: user.surname,
            phone_number: user.phone_number,
            email: user.email,
            role: user.role.to_string(),
        }
    }
}

/// Body of `GET /api/user`; never an error for anonymous callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserResponse {
    /// Whether a valid session accompanied the request.
    pub is_auth: bool,
    /// The authenticated user, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
}

/// Order shape returned by every order endpoint.
///
/// The request timestamp is split into the date/hour pair the client
/// displays, with the date in the Italian day-first format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    /// Order ID.
    pub id: Uuid,
    /// Owning user, when the order belongs to an account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    /// Guest contact name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    /// Guest contact surname.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_surname: Option<String>,
    /// Guest contact phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    /// Quantity in kilograms.
    pub quantity: f64,
    /// Kind of ice.
    pub ice_type: IceType,
    /// Delivery address.
    pub delivery_address: String,
    /// Delivery day, `YYYY-MM-DD`.
    pub delivery_date: String,
    /// Delivery time, `HH:MM`.
    pub delivery_hour: String,
    /// Submission date, `DD/MM/YYYY`.
    pub request_date: String,
    /// Submission time, `HH:MM`.
    pub request_hour: String,
    /// Lifecycle status.
    pub status: OrderStatus,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            user_id: order.user_id,
            contact_name: order.contact_name,
            contact_surname: order.contact_surname,
            contact_phone: order.contact_phone,
            quantity: order.quantity_kg,
            ice_type: order.ice_type,
            delivery_address: order.delivery_address,
            delivery_date: order.delivery_date.format("%Y-%m-%d").to_string(),
            delivery_hour: order.delivery_hour.format("%H:%M").to_string(),
            request_date: order.requested_at.format("%d/%m/%Y").to_string(),
            request_hour: order.requested_at.format("%H:%M").to_string(),
            status: order.status,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Database connectivity.
    pub database: String,
}

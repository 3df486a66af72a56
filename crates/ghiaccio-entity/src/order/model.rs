//! Order entity model.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::ice_type::IceType;
use super::status::OrderStatus;

/// An ice delivery order.
///
/// An order belongs either to a registered user (`user_id`) or, for guest
/// submissions, carries the contact fields directly. The database enforces
/// that at least one of the two is present.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    /// Unique order identifier.
    pub id: Uuid,
    /// Owning user, if the order was placed by (or matched to) a
    /// registered account.
    pub user_id: Option<Uuid>,
    /// Guest contact first name.
    pub contact_name: Option<String>,
    /// Guest contact last name.
    pub contact_surname: Option<String>,
    /// Guest contact phone number.
    pub contact_phone: Option<String>,
    /// Ordered quantity in kilograms (strictly positive).
    pub quantity_kg: f64,
    /// Kind of ice ordered.
    pub ice_type: IceType,
    /// Delivery address.
    pub delivery_address: String,
    /// Scheduled delivery day.
    pub delivery_date: NaiveDate,
    /// Scheduled delivery time.
    pub delivery_hour: NaiveTime,
    /// When the order was submitted (server-stamped, never updated).
    pub requested_at: DateTime<Utc>,
    /// Lifecycle status.
    pub status: OrderStatus,
}

impl Order {
    /// The scheduled delivery instant (date + hour, UTC).
    pub fn delivery_timestamp(&self) -> DateTime<Utc> {
        self.delivery_date.and_time(self.delivery_hour).and_utc()
    }

    /// Whole hours remaining until delivery at `now`. Negative once the
    /// delivery time has passed.
    pub fn hours_until_delivery(&self, now: DateTime<Utc>) -> i64 {
        (self.delivery_timestamp() - now).num_hours()
    }
}

/// Guest contact details for an unauthenticated submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderContact {
    /// First name.
    pub name: String,
    /// Last name.
    pub surname: String,
    /// Phone number (same format as registration).
    pub phone: String,
}

/// Data required to create a new order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrder {
    /// Owning user, when known.
    pub user_id: Option<Uuid>,
    /// Guest contact, when no user matched.
    pub contact: Option<OrderContact>,
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
}

/// Fields a customer may change while an order is still pending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderUpdate {
    /// New quantity in kilograms.
    pub quantity_kg: f64,
    /// New kind of ice.
    pub ice_type: IceType,
    /// New delivery address.
    pub delivery_address: String,
    /// New delivery day.
    pub delivery_date: NaiveDate,
    /// New delivery time.
    pub delivery_hour: NaiveTime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_order(date: NaiveDate, hour: NaiveTime) -> Order {
        Order {
            id: Uuid::new_v4(),
            user_id: Some(Uuid::new_v4()),
            contact_name: None,
            contact_surname: None,
            contact_phone: None,
            quantity_kg: 5.0,
            ice_type: IceType::Consumption,
            delivery_address: "Via Roma 1, Torino".to_string(),
            delivery_date: date,
            delivery_hour: hour,
            requested_at: Utc::now(),
            status: OrderStatus::Pending,
        }
    }

    #[test]
    fn test_hours_until_delivery() {
        let order = sample_order(
            NaiveDate::from_ymd_opt(2025, 9, 15).unwrap(),
            NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
        );
        let now = Utc.with_ymd_and_hms(2025, 9, 12, 6, 0, 0).unwrap();
        assert_eq!(order.hours_until_delivery(now), 80);

        let later = Utc.with_ymd_and_hms(2025, 9, 12, 16, 0, 0).unwrap();
        assert_eq!(order.hours_until_delivery(later), 70);
    }
}

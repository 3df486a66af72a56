//! Order lifecycle — submit, update, cancel, list.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use ghiaccio_core::error::AppError;
use ghiaccio_core::result::AppResult;
use ghiaccio_database::repositories::order::OrderRepository;
use ghiaccio_database::repositories::user::UserRepository;
use ghiaccio_entity::order::model::{CreateOrder, OrderUpdate};
use ghiaccio_entity::order::{Order, OrderListQuery, OrderStatus};

use crate::context::RequestContext;

use super::validator::{OrderSubmission, OrderValidator};

/// Customers may edit or cancel an order only while more than this many
/// hours remain before delivery.
const EDIT_CUTOFF_HOURS: i64 = 72;

/// Handles the order lifecycle on behalf of customers.
#[derive(Debug, Clone)]
pub struct OrderService {
    orders: Arc<OrderRepository>,
    users: Arc<UserRepository>,
    validator: OrderValidator,
}

impl OrderService {
    /// Creates a new order service.
    pub fn new(orders: Arc<OrderRepository>, users: Arc<UserRepository>) -> Self {
        Self {
            orders,
            users,
            validator: OrderValidator::new(),
        }
    }

    /// Submits a new order.
    ///
    /// Authenticated submissions are attached to the acting user. Guest
    /// submissions are attached to the registered user matching the
    /// contact phone when one exists, and stored with the contact fields
    /// otherwise. The request timestamp is stamped here from the server
    /// wall clock.
    pub async fn submit(
        &self,
        submission: OrderSubmission,
        actor: Option<&RequestContext>,
    ) -> AppResult<Order> {
        let now = Utc::now();
        let mut validated = self
            .validator
            .validate(&submission, actor.is_some(), now)?;

        let user_id = match actor {
            Some(ctx) => Some(ctx.user_id),
            None => {
                let contact = validated.contact.as_ref().unwrap();
                let matched = self.users.find_by_phone(&contact.phone).await?;
                if let Some(user) = &matched {
                    // Known phone number: the order belongs to the account.
                    validated.contact = None;
                    Some(user.id)
                } else {
                    None
                }
            }
        };

        let order = self
            .orders
            .create(
                &CreateOrder {
                    user_id,
                    contact: validated.contact,
                    quantity_kg: validated.quantity_kg,
                    ice_type: validated.ice_type,
                    delivery_address: validated.delivery_address,
                    delivery_date: validated.delivery_date,
                    delivery_hour: validated.delivery_hour,
                },
                now,
            )
            .await?;

        info!(order_id = %order.id, quantity_kg = order.quantity_kg, "Order submitted");
        Ok(order)
    }

    /// Updates a pending order's delivery details.
    pub async fn update(
        &self,
        order_id: Uuid,
        submission: OrderSubmission,
        ctx: &RequestContext,
    ) -> AppResult<Order> {
        let now = Utc::now();
        let order = self.load_owned(order_id, ctx).await?;
        ensure_modifiable(&order, now)?;

        let validated = self.validator.validate(&submission, true, now)?;

        let updated = self
            .orders
            .update_fields(
                order.id,
                &OrderUpdate {
                    quantity_kg: validated.quantity_kg,
                    ice_type: validated.ice_type,
                    delivery_address: validated.delivery_address,
                    delivery_date: validated.delivery_date,
                    delivery_hour: validated.delivery_hour,
                },
            )
            .await?;

        info!(order_id = %updated.id, user_id = %ctx.user_id, "Order updated");
        Ok(updated)
    }

    /// Cancels a pending order.
    pub async fn cancel(&self, order_id: Uuid, ctx: &RequestContext) -> AppResult<Order> {
        let now = Utc::now();
        let order = self.load_owned(order_id, ctx).await?;
        ensure_modifiable(&order, now)?;

        if !order.status.can_transition_to(OrderStatus::Cancelled) {
            return Err(AppError::conflict(
                "L'ordine non può più essere cancellato",
            ));
        }

        let cancelled = self.orders.set_status(order.id, OrderStatus::Cancelled).await?;

        info!(order_id = %cancelled.id, user_id = %ctx.user_id, "Order cancelled");
        Ok(cancelled)
    }

    /// Lists the acting user's own orders.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        query: &OrderListQuery,
    ) -> AppResult<Vec<Order>> {
        self.orders.find_by_user(ctx.user_id, query).await
    }

    /// Loads an order and checks the actor may act on it.
    async fn load_owned(&self, order_id: Uuid, ctx: &RequestContext) -> AppResult<Order> {
        let order = self
            .orders
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Order {order_id} not found")))?;

        if !ctx.is_admin() && order.user_id != Some(ctx.user_id) {
            return Err(AppError::authorization("User not authorized"));
        }

        Ok(order)
    }
}

/// The 72-hour rule: an order may change only while it is pending and
/// more than [`EDIT_CUTOFF_HOURS`] remain before delivery.
fn ensure_modifiable(order: &Order, now: DateTime<Utc>) -> AppResult<()> {
    if !order.status.is_pending() {
        return Err(AppError::validation(
            "Solo gli ordini in attesa possono essere modificati",
        ));
    }

    if order.hours_until_delivery(now) <= EDIT_CUTOFF_HOURS {
        return Err(AppError::validation(format!(
            "L'ordine può essere modificato solo fino a {EDIT_CUTOFF_HOURS} ore prima della consegna"
        )));
    }

    Ok(())
}

//! Order repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use ghiaccio_core::error::{AppError, ErrorKind};
use ghiaccio_core::result::AppResult;
use ghiaccio_core::types::pagination::{PageRequest, PageResponse};
use ghiaccio_entity::order::model::{CreateOrder, OrderUpdate};
use ghiaccio_entity::order::{Order, OrderListQuery, OrderStatus};

/// WHERE fragment shared by the list queries: optional status and ice-type
/// filters, plus the hide-cancelled default. All parameters are always
/// bound; NULL disables the corresponding filter.
const LIST_FILTER: &str = "($1::order_status IS NULL OR status = $1) \
     AND ($2::ice_type IS NULL OR ice_type = $2) \
     AND ($3 OR status <> 'cancellato')";

/// Repository for order CRUD and query operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    /// Create a new order repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new order with the given request timestamp. The status
    /// always starts at "in attesa".
    pub async fn create(&self, data: &CreateOrder, requested_at: DateTime<Utc>) -> AppResult<Order> {
        let contact = data.contact.as_ref();
        sqlx::query_as::<_, Order>(
            "INSERT INTO orders \
             (id, user_id, contact_name, contact_surname, contact_phone, \
              quantity_kg, ice_type, delivery_address, delivery_date, delivery_hour, \
              requested_at, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, 'in attesa') \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(data.user_id)
        .bind(contact.map(|c| c.name.as_str()))
        .bind(contact.map(|c| c.surname.as_str()))
        .bind(contact.map(|c| c.phone.as_str()))
        .bind(data.quantity_kg)
        .bind(data.ice_type)
        .bind(&data.delivery_address)
        .bind(data.delivery_date)
        .bind(data.delivery_hour)
        .bind(requested_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create order", e))
    }

    /// Find an order by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Order>> {
        sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find order by id", e)
            })
    }

    /// List a user's orders with the given sort and filters.
    pub async fn find_by_user(
        &self,
        user_id: Uuid,
        query: &OrderListQuery,
    ) -> AppResult<Vec<Order>> {
        let sql = format!(
            "SELECT * FROM orders WHERE {LIST_FILTER} AND user_id = $4 \
             ORDER BY {} {}",
            query.sort.as_sql(),
            query.direction().as_sql(),
        );

        sqlx::query_as::<_, Order>(&sql)
            .bind(query.status)
            .bind(query.ice_type)
            .bind(query.shows_cancelled())
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list orders", e))
    }

    /// List all orders (admin view) with sort, filters, and pagination.
    pub async fn find_all(
        &self,
        page: &PageRequest,
        query: &OrderListQuery,
    ) -> AppResult<PageResponse<Order>> {
        let count_sql = format!("SELECT COUNT(*) FROM orders WHERE {LIST_FILTER}");
        let total: i64 = sqlx::query_scalar(&count_sql)
            .bind(query.status)
            .bind(query.ice_type)
            .bind(query.shows_cancelled())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count orders", e))?;

        let sql = format!(
            "SELECT * FROM orders WHERE {LIST_FILTER} \
             ORDER BY {} {} LIMIT $4 OFFSET $5",
            query.sort.as_sql(),
            query.direction().as_sql(),
        );

        let orders = sqlx::query_as::<_, Order>(&sql)
            .bind(query.status)
            .bind(query.ice_type)
            .bind(query.shows_cancelled())
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list orders", e))?;

        Ok(PageResponse::new(
            orders,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Update the customer-editable fields of an order. The request
    /// timestamp and status are left untouched.
    pub async fn update_fields(&self, id: Uuid, data: &OrderUpdate) -> AppResult<Order> {
        sqlx::query_as::<_, Order>(
            "UPDATE orders SET quantity_kg = $2, ice_type = $3, delivery_address = $4, \
                               delivery_date = $5, delivery_hour = $6 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(data.quantity_kg)
        .bind(data.ice_type)
        .bind(&data.delivery_address)
        .bind(data.delivery_date)
        .bind(data.delivery_hour)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update order", e))?
        .ok_or_else(|| AppError::not_found(format!("Order {id} not found")))
    }

    /// Set an order's status.
    pub async fn set_status(&self, id: Uuid, status: OrderStatus) -> AppResult<Order> {
        sqlx::query_as::<_, Order>(
            "UPDATE orders SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update status", e))?
        .ok_or_else(|| AppError::not_found(format!("Order {id} not found")))
    }

    /// Count orders grouped by status.
    pub async fn count_by_status(&self) -> AppResult<Vec<(OrderStatus, i64)>> {
        sqlx::query_as::<_, (OrderStatus, i64)>(
            "SELECT status, COUNT(*) FROM orders GROUP BY status",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count orders by status", e)
        })
    }
}

//! Order handlers — submit, update, cancel, list.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use ghiaccio_core::error::AppError;
use ghiaccio_core::types::ApiResponse;
use ghiaccio_entity::order::OrderListQuery;

use crate::dto::request::{OrderListParams, SubmitOrderRequest};
use crate::dto::response::OrderResponse;
use crate::extractors::{AuthUser, MaybeAuthUser};
use crate::state::AppState;

/// POST /api/submit-order
///
/// Open to guests: an unauthenticated submission must carry the contact
/// fields, which the validator enforces.
pub async fn submit_order(
    State(state): State<AppState>,
    auth: MaybeAuthUser,
    Json(req): Json<SubmitOrderRequest>,
) -> Result<Json<ApiResponse<OrderResponse>>, AppError> {
    let order = state
        .order_service
        .submit(req.into(), auth.0.as_ref())
        .await?;

    Ok(Json(ApiResponse::ok(order.into())))
}

/// PUT /api/update-order/{id}
pub async fn update_order(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<SubmitOrderRequest>,
) -> Result<Json<ApiResponse<OrderResponse>>, AppError> {
    let order = state.order_service.update(id, req.into(), &auth).await?;
    Ok(Json(ApiResponse::ok(order.into())))
}

/// PUT /api/delete-order/{id}
///
/// Cancellation keeps the row and flips the status to "cancellato".
pub async fn delete_order(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<OrderResponse>>, AppError> {
    let order = state.order_service.cancel(id, &auth).await?;
    Ok(Json(ApiResponse::ok(order.into())))
}

/// GET /api/orders
///
/// The caller's own orders, with optional sort and filter parameters.
pub async fn list_orders(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<OrderListParams>,
) -> Result<Json<ApiResponse<Vec<OrderResponse>>>, AppError> {
    let query: OrderListQuery = params.into();
    let orders = state.order_service.list(&auth, &query).await?;

    Ok(Json(ApiResponse::ok(
        orders.into_iter().map(OrderResponse::from).collect(),
    )))
}

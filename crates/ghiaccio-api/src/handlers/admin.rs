//! Admin-only handlers — order and inventory rollups.

use axum::Json;
use axum::extract::{Query, State};

use ghiaccio_core::error::AppError;
use ghiaccio_core::types::pagination::{PageRequest, PageResponse};
use ghiaccio_core::types::ApiResponse;
use ghiaccio_entity::order::OrderListQuery;
use ghiaccio_service::admin::{FreezerInventory, Summary};

use crate::dto::request::AdminOrderListParams;
use crate::dto::response::OrderResponse;
use crate::extractors::AdminUser;
use crate::state::AppState;

/// GET /api/orders/all
pub async fn list_all_orders(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(params): Query<AdminOrderListParams>,
) -> Result<Json<ApiResponse<PageResponse<OrderResponse>>>, AppError> {
    let page = PageRequest::new(params.page.unwrap_or(1), params.page_size.unwrap_or(25));
    let query = OrderListQuery {
        sort: params.sort.unwrap_or_default(),
        direction: params.direction,
        status: params.status,
        ice_type: params.ice_type,
        include_cancelled: params.include_cancelled.unwrap_or(false),
    };

    let orders = state.admin_service.list_orders(&page, &query).await?;
    Ok(Json(ApiResponse::ok(orders.map(OrderResponse::from))))
}

/// GET /api/freezers
pub async fn list_freezers(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<ApiResponse<Vec<FreezerInventory>>>, AppError> {
    let freezers = state.admin_service.list_freezers().await?;
    Ok(Json(ApiResponse::ok(freezers)))
}

/// GET /api/admin/summary
pub async fn summary(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<ApiResponse<Summary>>, AppError> {
    let summary = state.admin_service.summary().await?;
    Ok(Json(ApiResponse::ok(summary)))
}

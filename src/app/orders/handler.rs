//! 订单处理器

use axum::{extract::State, response::Json};

use super::model::Order;
use crate::app::AppState;

/// GET /api/admin/orders
///
/// 管理端订单列表，返回裸 JSON 数组
pub async fn list_orders(State(state): State<AppState>) -> Json<Vec<Order>> {
    Json(state.orders.list_orders())
}

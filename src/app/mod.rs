//! 应用模块

pub mod catalog;
pub mod orders;

use axum::{extract::State, http::Uri, response::Json, routing::get, Router};

use crate::core::error::CoreError;
use catalog::service::CatalogService;
use orders::service::OrderService;

/// 应用共享状态
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
    pub orders: OrderService,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            catalog: CatalogService::new(),
            orders: OrderService::new(),
        }
    }

    /// 带内置示例数据的应用状态
    pub fn with_sample_data() -> Self {
        Self {
            catalog: CatalogService::with_sample_data(),
            orders: OrderService::with_sample_data(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// 构建 API 路由（不含中间件层，由入口统一挂载）
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/api/products", get(catalog::handler::list_products))
        .route("/api/categories", get(catalog::handler::list_categories))
        .route("/api/admin/orders", get(orders::handler::list_orders))
        .route("/health", get(health_check))
        .fallback(not_found)
        .with_state(state)
}

/// 健康检查
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": "0.1.0",
        "store": {
            "products": state.catalog.product_count(),
            "categories": state.catalog.category_count(),
            "orders": state.orders.order_count(),
        }
    }))
}

async fn not_found(uri: Uri) -> CoreError {
    CoreError::NotFound(format!("资源不存在: {}", uri.path()))
}

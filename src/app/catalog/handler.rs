//! 商品目录处理器

use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;

use super::model::{Category, Product};
use crate::app::AppState;

/// 商品列表查询参数
#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    #[serde(default)]
    pub id: Option<String>,
}

/// GET /api/products
///
/// 契约要求返回裸 JSON 数组；带 ?id= 时也返回数组（零或一个元素）
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Json<Vec<Product>> {
    Json(state.catalog.list_products(query.id.as_deref()))
}

/// GET /api/categories
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(state.catalog.list_categories())
}

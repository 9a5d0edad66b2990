//! 商品详情视图
//!
//! 状态机：loading → error | not_found | found。
//! 获取失败与未找到是两种不同的终态，提示语也不同。

use tracing::{debug, error};

use super::api::{FetchError, StorefrontApi};
use crate::app::catalog::model::Product;

/// 详情视图状态
#[derive(Debug)]
pub enum DetailState {
    Loading,
    Error(String),
    NotFound,
    Found(Product),
}

/// 商品详情视图，商品 id 来自导航上下文
pub struct ProductDetailView {
    product_id: String,
    state: DetailState,
    generation: u64,
}

impl ProductDetailView {
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            state: DetailState::Loading,
            generation: 0,
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.state = DetailState::Loading;
        self.generation
    }

    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// 应用加载结果。请求虽然带了 id 参数，这里仍在返回的
    /// 集合里线性查找（不假定单条接口可靠）
    pub fn apply(&mut self, generation: u64, outcome: Result<Vec<Product>, FetchError>) {
        if generation != self.generation {
            debug!("丢弃过期的详情加载结果 (代次 {})", generation);
            return;
        }

        match outcome {
            Ok(products) => {
                match products.iter().find(|p| p.id == self.product_id) {
                    Some(product) => self.state = DetailState::Found(product.clone()),
                    None => self.state = DetailState::NotFound,
                }
            }
            Err(err) => {
                error!("商品详情加载失败: {}", err);
                self.state = DetailState::Error("Failed to fetch product".to_string());
            }
        }
    }

    pub async fn load(&mut self, api: &dyn StorefrontApi) {
        let generation = self.begin_load();
        let outcome = api.list_products(Some(&self.product_id)).await;
        self.apply(generation, outcome);
    }

    /// 渲染为纯文本。加购按钮只是占位，购物车操作由外部协作方接线
    pub fn render(&self) -> String {
        match &self.state {
            DetailState::Loading => "Loading...".to_string(),
            DetailState::Error(message) => message.clone(),
            DetailState::NotFound => "Product not found.".to_string(),
            DetailState::Found(product) => format!(
                "{}\n${:.2}\n{}\n[Add to Cart]\n",
                product.name, product.price, product.description
            ),
        }
    }
}

//! 商品目录视图
//!
//! 状态机：loading → error | ready。进入 loading 时并发拉取
//! 商品与分类，任一失败即整体失败，不展示部分数据。

use tracing::{debug, error};

use super::api::{FetchError, StorefrontApi};
use super::cart::CartHandle;
use super::filter::{filter_products, FilterCriteria};
use crate::app::catalog::model::{Category, Product};

/// 目录视图状态
#[derive(Debug)]
pub enum CatalogState {
    Loading,
    Error(String),
    Ready {
        products: Vec<Product>,
        categories: Vec<Category>,
    },
}

/// 目录视图
pub struct CatalogView {
    state: CatalogState,
    /// 当前过滤条件，随用户输入直接修改
    pub criteria: FilterCriteria,
    cart: CartHandle,
    generation: u64,
}

impl CatalogView {
    pub fn new(cart: CartHandle) -> Self {
        Self {
            state: CatalogState::Loading,
            criteria: FilterCriteria::default(),
            cart,
            generation: 0,
        }
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn cart(&self) -> &CartHandle {
        &self.cart
    }

    /// 开始一次加载，返回本次加载的代次
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.state = CatalogState::Loading;
        self.generation
    }

    /// 视图销毁时调用：尚未返回的结果到达后会被丢弃
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// 应用加载结果；代次过期的结果直接丢弃
    pub fn apply(
        &mut self,
        generation: u64,
        outcome: Result<(Vec<Product>, Vec<Category>), FetchError>,
    ) {
        if generation != self.generation {
            debug!("丢弃过期的目录加载结果 (代次 {})", generation);
            return;
        }

        match outcome {
            Ok((products, categories)) => {
                self.state = CatalogState::Ready {
                    products,
                    categories,
                };
            }
            Err(err) => {
                error!("目录数据加载失败: {}", err);
                self.state = CatalogState::Error("Failed to fetch data".to_string());
            }
        }
    }

    /// 加载商品与分类
    pub async fn load(&mut self, api: &dyn StorefrontApi) {
        let generation = self.begin_load();
        let outcome = tokio::try_join!(api.list_products(None), api.list_categories());
        self.apply(generation, outcome);
    }

    /// 当前过滤后的商品视图，每次调用重新求值
    pub fn filtered(&self) -> Vec<&Product> {
        match &self.state {
            CatalogState::Ready { products, .. } => filter_products(products, &self.criteria),
            _ => Vec::new(),
        }
    }

    /// 渲染为纯文本
    pub fn render(&self) -> String {
        match &self.state {
            CatalogState::Loading => "Loading products...".to_string(),
            CatalogState::Error(message) => message.clone(),
            CatalogState::Ready { categories, .. } => {
                let mut out = String::new();
                out.push_str(&format!("E-Shop  [Cart ({})]\n", self.cart.count()));

                out.push_str("Categories: All");
                for category in categories {
                    out.push_str(&format!(" | {}", category.name));
                }
                out.push('\n');

                let filtered = self.filtered();
                if filtered.is_empty() {
                    out.push_str("No products found.\n");
                } else {
                    for product in filtered {
                        out.push_str(&format!("- {}  ${:.2}\n", product.name, product.price));
                    }
                }
                out
            }
        }
    }
}

//! 商店前端视图
//!
//! 无界面依赖的视图状态机，渲染输出为纯文本。
//! 每个视图独立加载数据，彼此之间只通过购物车共享状态。

pub mod api;
pub mod cart;
pub mod catalog;
pub mod filter;
pub mod orders;
pub mod product_detail;

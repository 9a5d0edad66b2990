//! # E-Shop 在线商店
//!
//! 一个小型在线商店，包括：
//! - 基于 Axum 的商品/分类/订单集合接口
//! - 客户端视图状态机：商品目录、商品详情、订单管理
//! - 纯函数过滤引擎与会话级购物车共享状态

pub mod app;
pub mod client;
pub mod core;
pub mod infrastructure;

pub use client::cart::CartHandle;
pub use client::filter::{filter_products, FilterCriteria};

//! 数据访问接口
//!
//! 视图通过这个接口拉取集合数据。生产实现基于 reqwest，
//! 测试可以替换为内存实现。

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::app::catalog::model::{Category, Product};
use crate::app::orders::model::Order;

/// 数据获取错误
///
/// 传输失败、非成功状态码与解析失败统一归为一类：
/// 视图层向用户只展示通用提示，具体原因只进诊断日志
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("请求失败: {0}")]
    Transport(String),
    #[error("服务端返回状态码 {0}")]
    Status(u16),
    #[error("响应解析失败: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

/// 商店数据访问接口
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// 商品集合；可附带 id 过滤参数，返回仍是数组
    async fn list_products(&self, id: Option<&str>) -> Result<Vec<Product>, FetchError>;

    /// 分类集合
    async fn list_categories(&self) -> Result<Vec<Category>, FetchError>;

    /// 订单集合（管理端）
    async fn list_orders(&self) -> Result<Vec<Order>, FetchError>;
}

/// 基于 reqwest 的 HTTP 实现
///
/// GET + JSON，无自定义请求头，无重试，无超时：
/// 网络不响应时调用方停留在加载状态
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl StorefrontApi for HttpApi {
    async fn list_products(&self, id: Option<&str>) -> Result<Vec<Product>, FetchError> {
        match id {
            Some(id) => self.get_json(&format!("/api/products?id={}", id)).await,
            None => self.get_json("/api/products").await,
        }
    }

    async fn list_categories(&self) -> Result<Vec<Category>, FetchError> {
        self.get_json("/api/categories").await
    }

    async fn list_orders(&self) -> Result<Vec<Order>, FetchError> {
        self.get_json("/api/admin/orders").await
    }
}

//! 购物车共享状态
//!
//! 会话级单例：句柄克隆后指向同一份状态，各视图无需逐层
//! 传递即可读取数量和触发开关。不做持久化，不做并发控制。

use std::sync::{Arc, Mutex};

use crate::app::catalog::model::Product;

/// 购物车条目
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product_id: String,
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Default)]
struct CartInner {
    items: Vec<CartItem>,
    open: bool,
}

/// 购物车句柄
#[derive(Clone, Default)]
pub struct CartHandle {
    inner: Arc<Mutex<CartInner>>,
}

impl CartHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, product: &Product) {
        let mut inner = self.inner.lock().unwrap();
        inner.items.push(CartItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
        });
    }

    /// 移除第一个匹配的条目；不存在时静默返回
    pub fn remove(&self, product_id: &str) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(pos) = inner
            .items
            .iter()
            .position(|item| item.product_id == product_id)
        {
            inner.items.remove(pos);
        }
    }

    pub fn count(&self) -> usize {
        self.inner.lock().unwrap().items.len()
    }

    pub fn items(&self) -> Vec<CartItem> {
        self.inner.lock().unwrap().items.clone()
    }

    pub fn open(&self) {
        self.inner.lock().unwrap().open = true;
    }

    pub fn close(&self) {
        self.inner.lock().unwrap().open = false;
    }

    pub fn is_open(&self) -> bool {
        self.inner.lock().unwrap().open
    }
}

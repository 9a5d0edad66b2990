//! 订单业务服务

use std::sync::{Arc, RwLock};

use chrono::{Duration, Utc};
use uuid::Uuid;

use super::model::{Order, OrderUser};

/// 订单的内存存储服务，管理端只读
#[derive(Clone)]
pub struct OrderService {
    orders: Arc<RwLock<Vec<Order>>>,
}

impl OrderService {
    pub fn new() -> Self {
        Self {
            orders: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// 带示例订单的服务
    pub fn with_sample_data() -> Self {
        let service = Self::new();
        service.seed();
        service
    }

    /// 获取全部订单
    pub fn list_orders(&self) -> Vec<Order> {
        self.orders.read().unwrap().clone()
    }

    pub fn order_count(&self) -> usize {
        self.orders.read().unwrap().len()
    }

    fn seed(&self) {
        let now = Utc::now();
        let sample_orders = vec![
            Order {
                id: Uuid::new_v4().to_string(),
                user: Some(OrderUser {
                    email: "alice@example.com".to_string(),
                }),
                total: 59.99,
                status: "paid".to_string(),
                created_at: now - Duration::days(2),
            },
            Order {
                id: Uuid::new_v4().to_string(),
                user: Some(OrderUser {
                    email: "bob@example.com".to_string(),
                }),
                total: 102.49,
                status: "pending".to_string(),
                created_at: now - Duration::days(1),
            },
            // 游客订单，没有关联用户
            Order {
                id: Uuid::new_v4().to_string(),
                user: None,
                total: 12.50,
                status: "paid".to_string(),
                created_at: now - Duration::hours(3),
            },
        ];

        *self.orders.write().unwrap() = sample_orders;
    }
}

impl Default for OrderService {
    fn default() -> Self {
        Self::new()
    }
}

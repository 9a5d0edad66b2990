//! 订单管理视图
//!
//! 状态机：loading → error | ready。空集合是合法的 ready 态，
//! 渲染为明确的"没有订单"提示而不是空表格。

use chrono::Local;
use tracing::{debug, error};

use super::api::{FetchError, StorefrontApi};
use crate::app::orders::model::Order;

/// 状态徽标：只区分 paid 与其他，不再细分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadge {
    Paid,
    Other,
}

/// 订单展示行，字段已按展示要求格式化
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRow {
    pub id: String,
    pub user: String,
    pub total: String,
    pub status: String,
    pub badge: StatusBadge,
    pub created: String,
}

/// 订单视图状态
#[derive(Debug)]
pub enum OrdersState {
    Loading,
    Error(String),
    Ready(Vec<Order>),
}

/// 订单管理视图
pub struct AdminOrdersView {
    state: OrdersState,
    generation: u64,
}

impl AdminOrdersView {
    pub fn new() -> Self {
        Self {
            state: OrdersState::Loading,
            generation: 0,
        }
    }

    pub fn state(&self) -> &OrdersState {
        &self.state
    }

    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.state = OrdersState::Loading;
        self.generation
    }

    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    pub fn apply(&mut self, generation: u64, outcome: Result<Vec<Order>, FetchError>) {
        if generation != self.generation {
            debug!("丢弃过期的订单加载结果 (代次 {})", generation);
            return;
        }

        match outcome {
            Ok(orders) => self.state = OrdersState::Ready(orders),
            Err(err) => {
                error!("订单数据加载失败: {}", err);
                self.state =
                    OrdersState::Error("An error occurred while fetching orders.".to_string());
            }
        }
    }

    pub async fn load(&mut self, api: &dyn StorefrontApi) {
        let generation = self.begin_load();
        let outcome = api.list_orders().await;
        self.apply(generation, outcome);
    }

    /// 派生展示行：金额固定两位小数，时间按本地时区格式化，
    /// 没有关联用户时显示 Guest
    pub fn rows(&self) -> Vec<OrderRow> {
        match &self.state {
            OrdersState::Ready(orders) => orders
                .iter()
                .map(|order| OrderRow {
                    id: order.id.clone(),
                    user: order
                        .user
                        .as_ref()
                        .map(|u| u.email.clone())
                        .unwrap_or_else(|| "Guest".to_string()),
                    total: format!("${:.2}", order.total),
                    status: order.status.clone(),
                    badge: if order.is_paid() {
                        StatusBadge::Paid
                    } else {
                        StatusBadge::Other
                    },
                    created: order
                        .created_at
                        .with_timezone(&Local)
                        .format("%Y-%m-%d %H:%M:%S")
                        .to_string(),
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// 渲染为纯文本
    pub fn render(&self) -> String {
        match &self.state {
            OrdersState::Loading => "Loading...".to_string(),
            OrdersState::Error(message) => message.clone(),
            OrdersState::Ready(orders) => {
                let mut out = String::from("Order History\n");
                if orders.is_empty() {
                    out.push_str("No orders found.\n");
                    return out;
                }

                for row in self.rows() {
                    out.push_str(&format!(
                        "{} | {} | {} | {} | {}\n",
                        row.id, row.user, row.total, row.status, row.created
                    ));
                }
                out
            }
        }
    }
}

impl Default for AdminOrdersView {
    fn default() -> Self {
        Self::new()
    }
}

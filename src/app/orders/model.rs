//! 订单数据模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 下单用户，只对管理端暴露邮箱
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderUser {
    pub email: String,
}

/// 订单。状态是开放的字符串集合，展示层只区分 paid 与其他
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user: Option<OrderUser>,
    pub total: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn is_paid(&self) -> bool {
        self.status == "paid"
    }
}

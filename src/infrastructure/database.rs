//! 数据库基础设施
//!
//! 商品/分类/订单数据由外部协作方维护；这里只负责连接池
//! 和启动时写入一条管理员账号记录，不在请求路径上。

use sqlx::{
    postgres::{PgPool, PgPoolOptions},
    Error,
};
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

/// 内置管理员账号（默认密码 admin123 的 bcrypt 散列，登录由外部协作方处理）
const ADMIN_EMAIL: &str = "admin@example.com";
const ADMIN_PASSWORD_HASH: &str = "$2a$10$wqXKLEXC1N1J7iC9yC0VeeZ0oT0q1uJ9oXbZP7gE1t5mY8rR2d0pS";

pub struct DatabaseManager {
    pool: PgPool,
}

impl DatabaseManager {
    pub async fn new(database_url: &str) -> Result<Self, Error> {
        let pool = PgPoolOptions::new()
            .max_connections(20)
            .min_connections(5)
            .acquire_timeout(Duration::from_secs(8))
            .idle_timeout(Duration::from_secs(8))
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub fn get_pool(&self) -> &PgPool {
        &self.pool
    }

    /// 幂等写入管理员账号，已存在时不做任何修改
    pub async fn bootstrap_admin(&self) -> Result<(), Error> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, name, password_hash, is_admin)
            VALUES ($1, $2, 'Admin', $3, TRUE)
            ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(ADMIN_EMAIL)
        .bind(ADMIN_PASSWORD_HASH)
        .execute(&self.pool)
        .await?;

        info!("✅ 管理员账号已就绪: {}", ADMIN_EMAIL);
        Ok(())
    }
}

//! E-Shop 服务入口

use std::time::Duration;

use axum::middleware;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

use eshop::app::{api_router, AppState};
use eshop::core::middleware::request_logging_middleware;
use eshop::infrastructure::{config::Config, logger::Logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_or_default("eshop.toml");
    Logger::init(&config.logging.level);

    info!("启动 E-Shop 服务器...");

    // 配置了数据库时写入管理员账号，不影响请求路径
    #[cfg(feature = "database")]
    if let Some(url) = &config.database.url {
        let database = eshop::infrastructure::database::DatabaseManager::new(url).await?;
        database.bootstrap_admin().await?;
    }

    let state = AppState::with_sample_data();

    let app = api_router(state)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(TraceLayer::new_for_http());

    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 E-Shop 服务器运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET /api/products      - 商品列表 (可选 ?id= 过滤)");
    info!("   GET /api/categories    - 分类列表");
    info!("   GET /api/admin/orders  - 订单列表（管理端）");
    info!("   GET /health            - 健康检查");

    axum::serve(listener, app).await?;
    Ok(())
}

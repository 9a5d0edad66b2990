//! 商店前端演示
//!
//! 连接运行中的 E-Shop 服务器，按顺序走一遍目录浏览、
//! 价格过滤、商品详情、购物车与订单管理视图。

use std::env;

use eshop::client::api::HttpApi;
use eshop::client::cart::CartHandle;
use eshop::client::catalog::{CatalogState, CatalogView};
use eshop::client::orders::AdminOrdersView;
use eshop::client::product_detail::ProductDetailView;
use eshop::infrastructure::logger::Logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    Logger::init("info");

    let base_url = env::args()
        .nth(1)
        .unwrap_or_else(|| "http://127.0.0.1:3000".to_string());
    let api = HttpApi::new(base_url.as_str());
    let cart = CartHandle::new();

    println!("== 商品目录 ==");
    let mut catalog = CatalogView::new(cart.clone());
    catalog.load(&api).await;
    println!("{}", catalog.render());

    println!("== 过滤: 最低价 30 ==");
    catalog.criteria.min_price = "30".to_string();
    println!("{}", catalog.render());

    // 取过滤结果里的第一个商品进详情页
    let first_id = match catalog.state() {
        CatalogState::Ready { .. } => catalog.filtered().first().map(|p| p.id.clone()),
        _ => None,
    };

    if let Some(id) = first_id {
        println!("== 商品详情 ==");
        let mut detail = ProductDetailView::new(id);
        detail.load(&api).await;
        println!("{}", detail.render());

        if let eshop::client::product_detail::DetailState::Found(product) = detail.state() {
            cart.add(product);
            cart.open();
            println!("已加入购物车，当前数量: {}\n", cart.count());
        }
    }

    println!("== 订单管理 ==");
    let mut orders = AdminOrdersView::new();
    orders.load(&api).await;
    println!("{}", orders.render());

    Ok(())
}

//! 商品目录业务服务

use std::sync::{Arc, RwLock};

use uuid::Uuid;

use super::model::{Category, Product};

/// 商品与分类的内存存储服务
///
/// 集合对客户端只读，服务端启动时一次性填充
#[derive(Clone)]
pub struct CatalogService {
    products: Arc<RwLock<Vec<Product>>>,
    categories: Arc<RwLock<Vec<Category>>>,
}

impl CatalogService {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(Vec::new())),
            categories: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// 带示例数据的目录服务
    pub fn with_sample_data() -> Self {
        let service = Self::new();
        service.seed();
        service
    }

    /// 获取商品列表，可选按 id 过滤
    pub fn list_products(&self, id: Option<&str>) -> Vec<Product> {
        let products = self.products.read().unwrap();
        match id {
            Some(id) => products.iter().filter(|p| p.id == id).cloned().collect(),
            None => products.clone(),
        }
    }

    /// 获取全部分类
    pub fn list_categories(&self) -> Vec<Category> {
        self.categories.read().unwrap().clone()
    }

    pub fn product_count(&self) -> usize {
        self.products.read().unwrap().len()
    }

    pub fn category_count(&self) -> usize {
        self.categories.read().unwrap().len()
    }

    fn seed(&self) {
        let electronics = Category {
            id: Uuid::new_v4().to_string(),
            name: "Electronics".to_string(),
        };
        let books = Category {
            id: Uuid::new_v4().to_string(),
            name: "Books".to_string(),
        };
        let home = Category {
            id: Uuid::new_v4().to_string(),
            name: "Home & Kitchen".to_string(),
        };

        let sample_products = vec![
            sample_product(
                "Wireless Headphones",
                "Over-ear headphones with active noise cancelling.",
                59.99,
                "headphones",
                &electronics,
            ),
            sample_product(
                "Mechanical Keyboard",
                "87-key mechanical keyboard with hot-swappable switches.",
                89.99,
                "keyboard",
                &electronics,
            ),
            sample_product(
                "USB-C Charger",
                "65W GaN charger with two ports.",
                19.99,
                "charger",
                &electronics,
            ),
            sample_product(
                "The Rust Programming Language",
                "The official book on Rust, second edition.",
                39.99,
                "trpl",
                &books,
            ),
            sample_product(
                "Science Fiction Anthology",
                "Twelve award-winning short stories in one volume.",
                24.99,
                "anthology",
                &books,
            ),
            sample_product(
                "Ceramic Mug",
                "350ml stoneware mug, dishwasher safe.",
                12.50,
                "mug",
                &home,
            ),
            sample_product(
                "French Press",
                "1L borosilicate glass french press.",
                34.99,
                "french-press",
                &home,
            ),
            sample_product(
                "Desk Lamp",
                "Dimmable LED desk lamp with USB charging port.",
                45.00,
                "lamp",
                &home,
            ),
        ];

        *self.products.write().unwrap() = sample_products;
        *self.categories.write().unwrap() = vec![electronics, books, home];
    }
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new()
    }
}

fn sample_product(
    name: &str,
    description: &str,
    price: f64,
    image_slug: &str,
    category: &Category,
) -> Product {
    Product {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        image_url: format!("https://images.example.com/products/{}.jpg", image_slug),
        category_id: category.id.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_data_seeded() {
        let service = CatalogService::with_sample_data();
        assert_eq!(service.category_count(), 3);
        assert!(service.product_count() > 0);

        // 每个商品的分类都必须真实存在
        let categories = service.list_categories();
        for product in service.list_products(None) {
            assert!(categories.iter().any(|c| c.id == product.category_id));
        }
    }

    #[test]
    fn test_list_products_by_id() {
        let service = CatalogService::with_sample_data();
        let all = service.list_products(None);
        let first = &all[0];

        let matched = service.list_products(Some(&first.id));
        assert_eq!(matched, vec![first.clone()]);

        // 未知 id 返回空数组而不是错误
        assert!(service.list_products(Some("missing")).is_empty());
    }
}

//! 商品过滤引擎
//!
//! 纯函数：按分类与价格区间做合取过滤。保持输入顺序，
//! 不修改源集合，从不报错。

use crate::app::catalog::model::Product;

/// 过滤条件
///
/// 分类缺省表示全部分类；价格上下限按文本输入原样保存，
/// 空串表示未填写。条件不做持久化，每次进入页面重新创建。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub category: Option<String>,
    pub min_price: String,
    pub max_price: String,
}

impl FilterCriteria {
    /// 价格下限；输入无法解析时视为未设置
    pub fn min_bound(&self) -> Option<f64> {
        parse_price_bound(&self.min_price)
    }

    /// 价格上限；输入无法解析时视为未设置
    pub fn max_bound(&self) -> Option<f64> {
        parse_price_bound(&self.max_price)
    }
}

/// 解析价格输入。空白、非数字或非有限值一律当作未设置，
/// 绝不升级为错误
fn parse_price_bound(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => None,
    }
}

/// 过滤商品集合
///
/// 三个谓词（分类、下限、上限）同时满足才保留。
/// 结果是输入的稳定子序列，相同输入总是得到相同输出。
pub fn filter_products<'a>(products: &'a [Product], criteria: &FilterCriteria) -> Vec<&'a Product> {
    let min = criteria.min_bound();
    let max = criteria.max_bound();

    products
        .iter()
        .filter(|product| {
            let in_category = criteria
                .category
                .as_deref()
                .map_or(true, |c| product.category_id == c);
            let above_min = min.map_or(true, |m| product.price >= m);
            let below_max = max.map_or(true, |m| product.price <= m);
            in_category && above_min && below_max
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: f64, category_id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            description: String::new(),
            price,
            image_url: String::new(),
            category_id: category_id.to_string(),
        }
    }

    fn sample() -> Vec<Product> {
        vec![product("1", 10.0, "a"), product("2", 20.0, "b")]
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let products = sample();
        let result = filter_products(&products, &FilterCriteria::default());
        let expected: Vec<&Product> = products.iter().collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_category_filter() {
        let products = sample();
        let criteria = FilterCriteria {
            category: Some("a".to_string()),
            ..Default::default()
        };
        let result = filter_products(&products, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "1");
    }

    #[test]
    fn test_min_price_filter() {
        let products = sample();
        let criteria = FilterCriteria {
            min_price: "15".to_string(),
            ..Default::default()
        };
        let result = filter_products(&products, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "2");
    }

    #[test]
    fn test_max_price_filter() {
        let products = sample();
        let criteria = FilterCriteria {
            max_price: "15".to_string(),
            ..Default::default()
        };
        let result = filter_products(&products, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "1");
    }

    #[test]
    fn test_conjunction_of_predicates() {
        let products = vec![
            product("1", 10.0, "a"),
            product("2", 20.0, "a"),
            product("3", 20.0, "b"),
        ];
        let criteria = FilterCriteria {
            category: Some("a".to_string()),
            min_price: "15".to_string(),
            max_price: "25".to_string(),
        };
        let result = filter_products(&products, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "2");
    }

    #[test]
    fn test_unparsable_bound_means_absent() {
        let products = sample();
        let criteria = FilterCriteria {
            min_price: "abc".to_string(),
            max_price: "12,5".to_string(),
            ..Default::default()
        };
        // 非数字输入等价于未设置，而不是错误
        let result = filter_products(&products, &criteria);
        assert_eq!(result.len(), products.len());
    }

    #[test]
    fn test_non_finite_bound_means_absent() {
        let products = sample();
        let criteria = FilterCriteria {
            min_price: "NaN".to_string(),
            max_price: "inf".to_string(),
            ..Default::default()
        };
        let result = filter_products(&products, &criteria);
        assert_eq!(result.len(), products.len());
    }

    #[test]
    fn test_whitespace_bound_means_absent() {
        let products = sample();
        let criteria = FilterCriteria {
            min_price: "   ".to_string(),
            ..Default::default()
        };
        let result = filter_products(&products, &criteria);
        assert_eq!(result.len(), products.len());
    }

    #[test]
    fn test_preserves_relative_order() {
        let products = vec![
            product("3", 30.0, "a"),
            product("1", 10.0, "a"),
            product("2", 20.0, "a"),
        ];
        let criteria = FilterCriteria {
            min_price: "15".to_string(),
            ..Default::default()
        };
        let result = filter_products(&products, &criteria);
        let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
        // 子序列保序，不排序
        assert_eq!(ids, vec!["3", "2"]);
    }

    #[test]
    fn test_source_collection_untouched() {
        let products = sample();
        let before = products.clone();
        let criteria = FilterCriteria {
            category: Some("a".to_string()),
            min_price: "5".to_string(),
            max_price: "15".to_string(),
        };
        let _ = filter_products(&products, &criteria);
        assert_eq!(products, before);
    }

    #[test]
    fn test_excluded_elements_fail_a_predicate() {
        let products = sample();
        let criteria = FilterCriteria {
            min_price: "15".to_string(),
            ..Default::default()
        };
        let kept: Vec<&str> = filter_products(&products, &criteria)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        for product in &products {
            if !kept.contains(&product.id.as_str()) {
                assert!(product.price < 15.0);
            }
        }
    }

    #[test]
    fn test_boundary_prices_inclusive() {
        let products = sample();
        let criteria = FilterCriteria {
            min_price: "10".to_string(),
            max_price: "20".to_string(),
            ..Default::default()
        };
        // 上下限都是闭区间
        let result = filter_products(&products, &criteria);
        assert_eq!(result.len(), 2);
    }
}

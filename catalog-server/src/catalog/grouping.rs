//! Grouping Aggregator
//!
//! Folds category ⟕ product join rows into one record per category.

use crate::db::repository::product::ProductGroupRow;
use shared::models::CategoryProducts;
use std::collections::HashMap;

/// Group joined rows by `category_id`
///
/// Every category in the input gets a record, with an empty product list
/// when its only row carries no product. `product_count` counts all joined
/// products regardless of their `is_active`. Records keep first-seen order.
pub fn group_by_category(rows: Vec<ProductGroupRow>) -> Vec<CategoryProducts> {
    let mut groups: Vec<CategoryProducts> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let product = row.product();
        let slot = match index.get(&row.category_id) {
            Some(&slot) => slot,
            None => {
                index.insert(row.category_id.clone(), groups.len());
                groups.push(CategoryProducts {
                    category_id: row.category_id,
                    category_name: row.category_name,
                    product_count: 0,
                    products: Vec::new(),
                });
                groups.len() - 1
            }
        };
        if let Some(product) = product {
            let group = &mut groups[slot];
            group.product_count += 1;
            group.products.push(product);
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(category_id: &str, product: Option<(&str, bool)>) -> ProductGroupRow {
        ProductGroupRow {
            category_id: category_id.to_string(),
            category_name: category_id.to_uppercase(),
            product_id: product.map(|(id, _)| id.to_string()),
            product_name: product.map(|(id, _)| id.to_uppercase()),
            product_is_active: product.map(|(_, active)| active),
            product_quantity: product.map(|_| 1),
            product_created_at: product.map(|_| 0),
            product_updated_at: product.map(|_| 0),
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(group_by_category(vec![]).is_empty());
    }

    #[test]
    fn test_category_without_products() {
        let groups = group_by_category(vec![row("empty", None)]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].category_name, "EMPTY");
        assert_eq!(groups[0].product_count, 0);
        assert!(groups[0].products.is_empty());
    }

    #[test]
    fn test_counts_inactive_products() {
        let groups = group_by_category(vec![
            row("phones", Some(("x1", true))),
            row("phones", Some(("x2", false))),
        ]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].product_count, 2);
        let ids: Vec<&str> = groups[0].products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["x1", "x2"]);
        assert!(!groups[0].products[1].is_active);
        assert!(groups[0].products.iter().all(|p| p.category_id == "phones"));
    }

    #[test]
    fn test_first_seen_order_and_interleaving() {
        let groups = group_by_category(vec![
            row("b", Some(("p1", true))),
            row("a", None),
            row("b", Some(("p2", true))),
        ]);
        let ids: Vec<&str> = groups.iter().map(|g| g.category_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(groups[0].product_count, 2);
        assert_eq!(groups[1].product_count, 0);
    }
}

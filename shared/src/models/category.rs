//! Category Model

use super::serde_helpers::double_option;
use serde::{Deserialize, Serialize};

/// Category entity
///
/// `parent_id = None` marks a root category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Category {
    pub id: String,
    pub name: String,
    pub parent_id: Option<String>,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Category row annotated with its count of active products
///
/// Produced by the level-bounded tree query, consumed by the tree builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct CategoryTreeRow {
    #[cfg_attr(feature = "db", sqlx(flatten))]
    #[serde(flatten)]
    pub category: Category,
    pub product_count: i64,
}

/// Node of the active category forest
///
/// Owns its children; `product_count` counts the active products assigned
/// directly to this category, not the subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryNode {
    #[serde(flatten)]
    pub category: Category,
    pub product_count: i64,
    #[serde(default)]
    pub children: Vec<CategoryNode>,
}

impl CategoryNode {
    /// Number of nodes in this subtree, including self
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(CategoryNode::size).sum::<usize>()
    }

    /// Number of levels in this subtree, including self
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(CategoryNode::depth)
            .max()
            .unwrap_or(0)
    }
}

/// Create category payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<String>,
}

/// Update category payload
///
/// `parent_id`: absent keeps the current parent, `null` detaches the
/// category to a root, a value re-parents it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_id: Option<Option<String>>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, parent_id: Option<&str>) -> Category {
        Category {
            id: id.to_string(),
            name: id.to_uppercase(),
            parent_id: parent_id.map(str::to_string),
            is_active: true,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn test_node_serializes_flat() {
        let node = CategoryNode {
            category: category("electronics", None),
            product_count: 2,
            children: vec![],
        };
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["id"], "electronics");
        assert_eq!(value["parent_id"], serde_json::Value::Null);
        assert_eq!(value["product_count"], 2);
        assert_eq!(value["children"], serde_json::json!([]));
    }

    #[test]
    fn test_node_size_and_depth() {
        let node = CategoryNode {
            category: category("a", None),
            product_count: 0,
            children: vec![
                CategoryNode {
                    category: category("b", Some("a")),
                    product_count: 0,
                    children: vec![CategoryNode {
                        category: category("c", Some("b")),
                        product_count: 0,
                        children: vec![],
                    }],
                },
                CategoryNode {
                    category: category("d", Some("a")),
                    product_count: 0,
                    children: vec![],
                },
            ],
        };
        assert_eq!(node.size(), 4);
        assert_eq!(node.depth(), 3);
        assert_eq!(node.category.parent_id, None);
    }

    #[test]
    fn test_update_parent_tri_state() {
        let keep: CategoryUpdate = serde_json::from_str(r#"{"name":"Phones"}"#).unwrap();
        assert_eq!(keep.parent_id, None);

        let detach: CategoryUpdate = serde_json::from_str(r#"{"parent_id":null}"#).unwrap();
        assert_eq!(detach.parent_id, Some(None));

        let move_to: CategoryUpdate = serde_json::from_str(r#"{"parent_id":"p1"}"#).unwrap();
        assert_eq!(move_to.parent_id, Some(Some("p1".to_string())));
    }

    #[test]
    fn test_create_parent_optional() {
        let data: CategoryCreate = serde_json::from_str(r#"{"name":"Electronics"}"#).unwrap();
        assert_eq!(data.name, "Electronics");
        assert!(data.parent_id.is_none());
    }
}

//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category_id: String,
    pub is_active: bool,
    pub quantity: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create product payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub category_id: String,
    /// Defaults to 0
    pub quantity: Option<i32>,
}

/// Update product payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub category_id: Option<String>,
    pub is_active: Option<bool>,
    pub quantity: Option<i32>,
}

/// Per-category summary of the grouped product view
///
/// `product_count` counts every joined product, active or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryProducts {
    pub category_id: String,
    pub category_name: String,
    pub product_count: i64,
    pub products: Vec<Product>,
}

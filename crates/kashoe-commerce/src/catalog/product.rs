//! Shop products.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shop category a product is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    ChessBoard,
    ChessClock,
    Merchandise,
    LessonPackage,
}

impl ProductCategory {
    /// Every category, in shop tab order.
    pub const ALL: [ProductCategory; 4] = [
        ProductCategory::ChessBoard,
        ProductCategory::ChessClock,
        ProductCategory::Merchandise,
        ProductCategory::LessonPackage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::ChessBoard => "chess_board",
            ProductCategory::ChessClock => "chess_clock",
            ProductCategory::Merchandise => "merchandise",
            ProductCategory::LessonPackage => "lesson_package",
        }
    }

    /// Plural label used on product badges.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProductCategory::ChessBoard => "Chess Boards",
            ProductCategory::ChessClock => "Chess Clocks",
            ProductCategory::Merchandise => "Merchandise",
            ProductCategory::LessonPackage => "Lesson Packages",
        }
    }

    /// Short label used on the shop tabs.
    pub fn tab_label(&self) -> &'static str {
        match self {
            ProductCategory::LessonPackage => "Lessons",
            other => other.display_name(),
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductCategory {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| CommerceError::UnknownVariant {
                kind: "product category",
                value: s.to_string(),
            })
    }
}

/// A product as served by `GET /products`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: ProductCategory,
    pub price: Money,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub stock: i64,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Product {
    /// Whether there is anything left to sell.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Format the price for display.
    pub fn price_display(&self) -> String {
        self.price.display()
    }

    /// Stock badge text.
    pub fn stock_label(&self) -> String {
        if self.in_stock() {
            format!("In Stock ({})", self.stock)
        } else {
            "Out of Stock".to_string()
        }
    }
}

/// Payload for `POST /products`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub category: ProductCategory,
    pub price: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub stock: i64,
}

/// Keep only the products in `category`, or everything when `None`.
pub fn filter_by_category(
    products: &[Product],
    category: Option<ProductCategory>,
) -> Vec<Product> {
    products
        .iter()
        .filter(|p| category.map_or(true, |c| p.category == c))
        .cloned()
        .collect()
}

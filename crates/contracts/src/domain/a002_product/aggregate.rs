use serde::{Deserialize, Serialize};

use crate::domain::a001_category::{CategoryId, CategorySummary};
use crate::domain::common::Pagination;

/// Числовой идентификатор товара
pub type ProductId = i64;

// ============================================================================
// Read models
// ============================================================================

/// Строка списка товаров категории
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductListItem {
    pub id: ProductId,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub primary_image_url: Option<String>,
    #[serde(default)]
    pub doc_url: Option<String>,
}

/// Карточка товара (`GET /products/{slug}`), включая HTML-поля
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub item: ProductListItem,
    #[serde(default)]
    pub content_html: Option<String>,
    #[serde(default)]
    pub specs_html: Option<String>,
    pub category_id: CategoryId,
}

/// Ответ `GET /categories/{slug}/products`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryProductsResponse {
    pub category: CategorySummary,
    pub products: Vec<ProductListItem>,
    pub pagination: Pagination,
}

// ============================================================================
// Write models
// ============================================================================

/// Тело `POST /admin/products` и `PATCH /admin/products/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specs_html: Option<String>,
}

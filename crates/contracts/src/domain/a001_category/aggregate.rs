use serde::{Deserialize, Serialize};

/// Числовой идентификатор категории на стороне REST-сервиса
pub type CategoryId = i64;

// ============================================================================
// Read models
// ============================================================================

/// Узел дерева категорий (`GET /categories/tree`).
///
/// Дети принадлежат только своему родителю; порядок в `children` и есть
/// порядок отображения.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryNode {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Количество товаров во всём поддереве
    #[serde(default)]
    pub desc_product_count: i64,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub children: Vec<CategoryNode>,
}

/// Элемент плоского списка категорий для выпадающих списков (`GET /categories/`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOption {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
}

/// Краткие сведения о категории в ответе со списком товаров
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
}

// ============================================================================
// Write models
// ============================================================================

/// Тело `POST /admin/categories` и `PUT /admin/categories/{id}`.
///
/// Отсутствующие поля в JSON не попадают.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<CategoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_node_defaults() {
        let json = r#"[{"id":1,"name":"Станки","slug":"stanki","children":[
            {"id":2,"name":"Лазерные","slug":"lazernye","description":null,
             "desc_product_count":4,"sort_order":1,"children":[]}
        ]}]"#;
        let nodes: Vec<CategoryNode> = serde_json::from_str(json).unwrap();

        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].desc_product_count, 0);
        assert_eq!(nodes[0].description, None);
        assert_eq!(nodes[0].children[0].slug, "lazernye");
        assert_eq!(nodes[0].children[0].desc_product_count, 4);
    }

    #[test]
    fn test_payload_omits_absent_fields() {
        let payload = CategoryPayload {
            name: Some("Станки".into()),
            is_active: Some(true),
            sort_order: Some(0),
            ..Default::default()
        };
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"name": "Станки", "is_active": true, "sort_order": 0})
        );
    }
}

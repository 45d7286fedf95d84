//! Edit buffer of the category dialog

use contracts::domain::a001_category::{CategoryId, CategoryPayload};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::a001_category::ui::tree::CategoryRecord;
use crate::shared::prefill::{lenient_int, parse_patch, PrefillError};
use crate::shared::slug::slugify;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryFormError {
    #[error("Имя и slug обязательны.")]
    MissingRequired,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryForm {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub sort_order: i32,
    pub is_active: bool,
    pub featured_only: bool,
    /// Slug задан вручную и больше не следует за названием
    pub slug_locked: bool,
}

impl Default for CategoryForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            slug: String::new(),
            description: String::new(),
            sort_order: 0,
            is_active: true,
            featured_only: false,
            slug_locked: false,
        }
    }
}

/// Partial form update parsed from pasted JSON
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CategoryFormPatch {
    #[serde(default, alias = "title")]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub sort_order: Option<i32>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub featured_only: Option<bool>,
}

impl CategoryForm {
    /// Prefill from an existing node. The tree payload carries neither flag,
    /// so they start from the create defaults.
    pub fn from_record(record: &CategoryRecord) -> Self {
        Self {
            name: record.name.clone(),
            slug: record.slug.clone(),
            description: record.description.clone().unwrap_or_default(),
            sort_order: record.sort_order,
            slug_locked: true,
            ..Self::default()
        }
    }

    pub fn set_name(&mut self, name: String) {
        if !self.slug_locked {
            self.slug = slugify(&name);
        }
        self.name = name;
    }

    /// Manual slug edit. Clearing the field lets the slug follow the name again.
    pub fn set_slug(&mut self, slug: String) {
        self.slug_locked = !slug.is_empty();
        self.slug = slug;
    }

    pub fn regenerate_slug(&mut self) {
        self.slug = slugify(&self.name);
        self.slug_locked = false;
    }

    /// Number input; anything unparsable counts as 0
    pub fn set_sort_order_text(&mut self, text: &str) {
        self.sort_order = text.trim().parse().unwrap_or(0);
    }

    pub fn validate(&self) -> Result<(), CategoryFormError> {
        if self.name.trim().is_empty() || self.slug.trim().is_empty() {
            return Err(CategoryFormError::MissingRequired);
        }
        Ok(())
    }

    pub fn to_payload(&self, parent_id: Option<CategoryId>) -> CategoryPayload {
        CategoryPayload {
            name: non_empty(self.name.trim()),
            slug: non_empty(self.slug.trim()),
            parent_id,
            is_active: Some(self.is_active),
            featured_only: Some(self.featured_only),
            sort_order: Some(self.sort_order),
            description: non_empty(&self.description),
        }
    }

    pub fn apply_patch(&mut self, patch: CategoryFormPatch) {
        if let Some(slug) = patch.slug {
            self.set_slug(slug);
        }
        if let Some(name) = patch.name {
            self.set_name(name);
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(sort_order) = patch.sort_order {
            self.sort_order = sort_order;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        if let Some(featured_only) = patch.featured_only {
            self.featured_only = featured_only;
        }
    }

    /// Parse pasted JSON and apply it; on error the form is left untouched
    pub fn prefill_from_json(&mut self, text: &str) -> Result<(), PrefillError> {
        let patch: CategoryFormPatch = parse_patch(text)?;
        self.apply_patch(patch);
        Ok(())
    }
}

pub(crate) fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_defaults() {
        let form = CategoryForm::default();
        assert_eq!(form.name, "");
        assert_eq!(form.slug, "");
        assert_eq!(form.description, "");
        assert_eq!(form.sort_order, 0);
        assert!(form.is_active);
        assert!(!form.featured_only);
    }

    #[test]
    fn test_slug_follows_name_until_edited() {
        let mut form = CategoryForm::default();
        form.set_name("Лазерные станки".into());
        assert_eq!(form.slug, "lazernye-stanki");

        form.set_slug("lasers".into());
        form.set_name("Лазерные станки CO2".into());
        assert_eq!(form.slug, "lasers");

        form.regenerate_slug();
        assert_eq!(form.slug, "lazernye-stanki-co2");
        form.set_name("Фрезеры".into());
        assert_eq!(form.slug, "frezery");
    }

    #[test]
    fn test_edit_keeps_existing_slug() {
        let record = CategoryRecord {
            id: 4,
            name: "Станки".into(),
            slug: "machines".into(),
            description: Some("<p>HTML</p>".into()),
            desc_product_count: 3,
            sort_order: 5,
        };
        let mut form = CategoryForm::from_record(&record);
        assert_eq!(form.description, "<p>HTML</p>");
        assert_eq!(form.sort_order, 5);
        assert!(form.is_active && !form.featured_only);

        form.set_name("Станки ЧПУ".into());
        assert_eq!(form.slug, "machines");
    }

    #[test]
    fn test_validation() {
        let mut form = CategoryForm::default();
        form.set_slug("abc".into());
        assert_eq!(form.validate(), Err(CategoryFormError::MissingRequired));

        form.name = "   ".into();
        assert_eq!(form.validate(), Err(CategoryFormError::MissingRequired));

        form.name = "Abc".into();
        assert_eq!(form.validate(), Ok(()));

        form.slug.clear();
        assert_eq!(form.validate(), Err(CategoryFormError::MissingRequired));
    }

    #[test]
    fn test_payload_omits_empty_strings() {
        let mut form = CategoryForm::default();
        form.set_name("Станки".into());
        form.set_sort_order_text("abc");

        let payload = form.to_payload(None);
        assert_eq!(payload.name.as_deref(), Some("Станки"));
        assert_eq!(payload.slug.as_deref(), Some("stanki"));
        assert_eq!(payload.description, None);
        assert_eq!(payload.parent_id, None);
        assert_eq!(payload.sort_order, Some(0));
        assert_eq!(payload.is_active, Some(true));
        assert_eq!(payload.featured_only, Some(false));

        assert_eq!(form.to_payload(Some(9)).parent_id, Some(9));
    }

    #[test]
    fn test_payload_trims_name_and_slug() {
        let mut form = CategoryForm::default();
        form.set_name("  Станки ".into());
        form.set_slug(" stanki-chpu ".into());
        form.description = " как есть ".into();

        assert_eq!(form.validate(), Ok(()));
        let payload = form.to_payload(None);
        assert_eq!(payload.name.as_deref(), Some("Станки"));
        assert_eq!(payload.slug.as_deref(), Some("stanki-chpu"));
        assert_eq!(payload.description.as_deref(), Some(" как есть "));
    }

    #[test]
    fn test_prefill_from_json() {
        let mut form = CategoryForm::default();
        form.prefill_from_json(r#"{"title":"Граверы","sort_order":"3","featured_only":true}"#)
            .unwrap();

        assert_eq!(form.name, "Граверы");
        assert_eq!(form.slug, "gravery");
        assert_eq!(form.sort_order, 3);
        assert!(form.featured_only);
        assert!(form.is_active);
    }

    #[test]
    fn test_prefill_slug_wins_over_name() {
        let mut form = CategoryForm::default();
        form.prefill_from_json(r#"{"name":"Граверы","slug":"engravers"}"#)
            .unwrap();
        assert_eq!(form.slug, "engravers");
        assert!(form.slug_locked);
    }

    #[test]
    fn test_prefill_error_leaves_form_unchanged() {
        let mut form = CategoryForm::default();
        form.set_name("Станки".into());
        let before = form.clone();

        assert!(form.prefill_from_json("{not json").is_err());
        assert!(form.prefill_from_json(r#""text""#).is_err());
        assert!(form.prefill_from_json(r#"{"sort_order":"x"}"#).is_err());
        assert_eq!(form, before);
    }
}

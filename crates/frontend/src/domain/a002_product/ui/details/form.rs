//! Edit buffer of the product dialog

use contracts::domain::a001_category::CategoryId;
use contracts::domain::a002_product::{ProductDetail, ProductPayload};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::a001_category::ui::details::non_empty;
use crate::shared::prefill::{lenient_int, parse_patch, PrefillError};
use crate::shared::slug::slugify;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductFormError {
    #[error("Название, slug и категория обязательны.")]
    MissingRequired,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub slug: String,
    pub content_html: String,
    pub specs_html: String,
    pub category_id: Option<CategoryId>,
    pub slug_locked: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductFormPatch {
    #[serde(default, alias = "title")]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default, alias = "content")]
    pub content_html: Option<String>,
    #[serde(default, alias = "specs")]
    pub specs_html: Option<String>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub category_id: Option<CategoryId>,
}

impl ProductForm {
    pub fn for_category(category_id: Option<CategoryId>) -> Self {
        Self {
            category_id,
            ..Self::default()
        }
    }

    pub fn from_detail(detail: &ProductDetail) -> Self {
        Self {
            name: detail.item.name.clone(),
            slug: detail.item.slug.clone(),
            content_html: detail.content_html.clone().unwrap_or_default(),
            specs_html: detail.specs_html.clone().unwrap_or_default(),
            category_id: Some(detail.category_id),
            slug_locked: true,
        }
    }

    pub fn set_name(&mut self, name: String) {
        if !self.slug_locked {
            self.slug = slugify(&name);
        }
        self.name = name;
    }

    pub fn set_slug(&mut self, slug: String) {
        self.slug_locked = !slug.is_empty();
        self.slug = slug;
    }

    pub fn regenerate_slug(&mut self) {
        self.slug = slugify(&self.name);
        self.slug_locked = false;
    }

    /// Value of the category `<select>`; empty or non-numeric clears it
    pub fn set_category_text(&mut self, text: &str) {
        self.category_id = text.trim().parse().ok().filter(|id: &CategoryId| *id != 0);
    }

    pub fn validate(&self) -> Result<(), ProductFormError> {
        if self.name.trim().is_empty() || self.slug.trim().is_empty() || self.category_id.is_none()
        {
            return Err(ProductFormError::MissingRequired);
        }
        Ok(())
    }

    /// The admin form has no price field; the service expects 0 for new and
    /// edited products alike.
    pub fn to_payload(&self) -> ProductPayload {
        ProductPayload {
            name: non_empty(self.name.trim()),
            slug: non_empty(self.slug.trim()),
            price: Some(0.0),
            category_id: self.category_id,
            content_html: non_empty(&self.content_html),
            specs_html: non_empty(&self.specs_html),
        }
    }

    pub fn apply_patch(&mut self, patch: ProductFormPatch) {
        if let Some(slug) = patch.slug {
            self.set_slug(slug);
        }
        if let Some(name) = patch.name {
            self.set_name(name);
        }
        if let Some(content_html) = patch.content_html {
            self.content_html = content_html;
        }
        if let Some(specs_html) = patch.specs_html {
            self.specs_html = specs_html;
        }
        if let Some(category_id) = patch.category_id {
            self.category_id = Some(category_id);
        }
    }

    pub fn prefill_from_json(&mut self, text: &str) -> Result<(), PrefillError> {
        let patch: ProductFormPatch = parse_patch(text)?;
        self.apply_patch(patch);
        Ok(())
    }
}

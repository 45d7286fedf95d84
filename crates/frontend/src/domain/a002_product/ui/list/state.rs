//! Products pane controller
//!
//! Listing requests are tagged through [`RequestSeq`]: switching categories
//! while a request is in flight makes the older response stale, and a stale
//! response is dropped instead of overwriting the newer selection.

use contracts::domain::a001_category::{CategoryOption, CategorySummary};
use contracts::domain::a002_product::{
    CategoryProductsResponse, ProductDetail, ProductId, ProductListItem, ProductPayload,
};
use contracts::domain::common::Pagination;

use crate::domain::a002_product::ui::details::{ProductForm, ProductFormError};
use crate::shared::api_utils::ApiError;
use crate::shared::catalog_api::CatalogApi;
use crate::shared::state::{RequestSeq, RequestTag, StateCell};

const CATEGORIES_LOAD_FAILED: &str = "Не удалось загрузить список категорий.";
const PRODUCTS_LOAD_FAILED: &str = "Не удалось загрузить товары для выбранной категории.";
const PRODUCT_OPEN_FAILED: &str = "Не удалось загрузить данные товара.";
const PRODUCT_SAVE_FAILED: &str = "Не удалось сохранить товар.";

/// Tag of a listing request: sequence number plus the category slug
pub type ProductsRequest = RequestTag<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductEditMode {
    Create,
    Edit { id: ProductId },
}

/// Open product dialog
#[derive(Debug, Clone, PartialEq)]
pub struct ProductEditor {
    pub mode: ProductEditMode,
    pub form: ProductForm,
    pub saving: bool,
    pub error: Option<String>,
}

impl ProductEditor {
    pub fn title(&self) -> &'static str {
        match self.mode {
            ProductEditMode::Create => "Новый товар",
            ProductEditMode::Edit { .. } => "Редактирование товара",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProductWrite {
    Create(ProductPayload),
    Update {
        id: ProductId,
        payload: ProductPayload,
    },
}

#[derive(Debug, Clone, Default)]
pub struct ProductListState {
    // Выбор категории
    pub categories: Vec<CategoryOption>,
    pub categories_loading: bool,
    pub categories_error: Option<String>,
    pub selected_slug: String,

    // Список товаров выбранной категории
    pub category: Option<CategorySummary>,
    pub products: Vec<ProductListItem>,
    pub pagination: Option<Pagination>,
    pub loading: bool,
    pub error: Option<String>,
    requests: RequestSeq,

    // Диалог
    pub opening: Option<String>,
    pub editor: Option<ProductEditor>,
}

impl ProductListState {
    pub fn selected_category(&self) -> Option<&CategoryOption> {
        if self.selected_slug.is_empty() {
            return None;
        }
        self.categories
            .iter()
            .find(|option| option.slug == self.selected_slug)
    }

    pub fn begin_categories_load(&mut self) -> bool {
        if self.categories_loading {
            return false;
        }
        self.categories_loading = true;
        self.categories_error = None;
        true
    }

    pub fn finish_categories_load(&mut self, result: Result<Vec<CategoryOption>, ApiError>) {
        self.categories_loading = false;
        match result {
            Ok(categories) => self.categories = categories,
            Err(e) => self.categories_error = Some(e.user_message(CATEGORIES_LOAD_FAILED)),
        }
    }

    /// Switch the selection. Returns the request to send, if any: an empty
    /// slug clears the list, re-selecting the current slug is a no-op.
    pub fn select_category(&mut self, slug: String) -> Option<ProductsRequest> {
        if slug == self.selected_slug {
            return None;
        }
        self.selected_slug = slug;
        if self.selected_slug.is_empty() {
            self.requests.invalidate();
            self.category = None;
            self.products.clear();
            self.pagination = None;
            self.loading = false;
            self.error = None;
            return None;
        }
        Some(self.issue_request())
    }

    /// Re-request the current selection; `None` when nothing is selected or a
    /// load is already running
    pub fn refresh(&mut self) -> Option<ProductsRequest> {
        if self.selected_slug.is_empty() || self.loading {
            return None;
        }
        Some(self.issue_request())
    }

    /// Re-request the current selection even while a load is running; the
    /// in-flight response goes stale. Used after writes.
    pub fn reload(&mut self) -> Option<ProductsRequest> {
        if self.selected_slug.is_empty() {
            return None;
        }
        Some(self.issue_request())
    }

    pub fn can_refresh(&self) -> bool {
        !self.selected_slug.is_empty() && !self.loading
    }

    fn issue_request(&mut self) -> ProductsRequest {
        self.loading = true;
        self.error = None;
        self.requests.issue(self.selected_slug.clone())
    }

    /// Apply a listing response. Returns `false` for a stale response, which
    /// leaves the state untouched.
    pub fn finish_products_load(
        &mut self,
        tag: &ProductsRequest,
        result: Result<CategoryProductsResponse, ApiError>,
    ) -> bool {
        if !self.requests.is_current(tag) {
            log::warn!(
                "Dropping stale product list for '{}' (request #{})",
                tag.key,
                tag.seq
            );
            return false;
        }
        self.loading = false;
        match result {
            Ok(response) => {
                self.category = Some(response.category);
                self.products = response.products;
                self.pagination = Some(response.pagination);
            }
            Err(e) => self.error = Some(e.user_message(PRODUCTS_LOAD_FAILED)),
        }
        true
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
        self.categories_error = None;
    }

    /// Creating needs at least one category to attach the product to
    pub fn can_create(&self) -> bool {
        !self.categories.is_empty()
    }

    pub fn begin_create(&mut self) {
        if !self.can_create() {
            return;
        }
        let category_id = self.selected_category().map(|option| option.id);
        self.editor = Some(ProductEditor {
            mode: ProductEditMode::Create,
            form: ProductForm::for_category(category_id),
            saving: false,
            error: None,
        });
    }

    /// Mark the detail fetch for `slug` as started; `false` while another
    /// product is being opened
    pub fn begin_open(&mut self, slug: &str) -> bool {
        if self.opening.is_some() {
            return false;
        }
        self.opening = Some(slug.to_string());
        self.error = None;
        true
    }

    pub fn finish_open(&mut self, result: Result<ProductDetail, ApiError>) {
        self.opening = None;
        match result {
            Ok(detail) => {
                self.editor = Some(ProductEditor {
                    mode: ProductEditMode::Edit { id: detail.item.id },
                    form: ProductForm::from_detail(&detail),
                    saving: false,
                    error: None,
                });
            }
            Err(e) => self.error = Some(e.user_message(PRODUCT_OPEN_FAILED)),
        }
    }

    pub fn cancel_edit(&mut self) {
        if self.editor.as_ref().is_some_and(|editor| editor.saving) {
            return;
        }
        self.editor = None;
    }

    /// Edit the open buffer; `None` when no dialog is open
    pub fn update_form<R>(&mut self, f: impl FnOnce(&mut ProductForm) -> R) -> Option<R> {
        self.editor.as_mut().map(|editor| f(&mut editor.form))
    }

    pub fn prepare_save(&mut self) -> Result<Option<ProductWrite>, ProductFormError> {
        let Some(editor) = self.editor.as_mut() else {
            return Ok(None);
        };
        if editor.saving {
            return Ok(None);
        }
        if let Err(e) = editor.form.validate() {
            editor.error = Some(e.to_string());
            return Err(e);
        }

        editor.saving = true;
        editor.error = None;
        let payload = editor.form.to_payload();
        Ok(Some(match editor.mode {
            ProductEditMode::Create => ProductWrite::Create(payload),
            ProductEditMode::Edit { id } => ProductWrite::Update { id, payload },
        }))
    }

    pub fn finish_save(&mut self, result: Result<(), ApiError>) -> bool {
        match result {
            Ok(()) => {
                self.editor = None;
                true
            }
            Err(e) => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.saving = false;
                    editor.error = Some(e.user_message(PRODUCT_SAVE_FAILED));
                }
                false
            }
        }
    }
}

pub async fn load_category_options<A, S>(api: &A, state: &S)
where
    A: CatalogApi + ?Sized,
    S: StateCell<ProductListState>,
{
    if state.update_state(|s| s.begin_categories_load()) != Some(true) {
        return;
    }
    let result = api.fetch_categories().await;
    match &result {
        Ok(options) => log::info!("Category options loaded: {}", options.len()),
        Err(e) => log::error!("Failed to load category options: {e}"),
    }
    state.update_state(|s| s.finish_categories_load(result));
}

/// Send a tagged listing request and apply the response unless it went stale
pub async fn load_products<A, S>(api: &A, state: &S, tag: ProductsRequest)
where
    A: CatalogApi + ?Sized,
    S: StateCell<ProductListState>,
{
    let result = api.fetch_category_products(&tag.key).await;
    match &result {
        Ok(response) => log::info!(
            "Products of '{}' loaded: {} of {}",
            tag.key,
            response.products.len(),
            response.pagination.total
        ),
        Err(e) => log::error!("Failed to load products of '{}': {e}", tag.key),
    }
    state.update_state(|s| s.finish_products_load(&tag, result));
}

pub async fn select_category<A, S>(api: &A, state: &S, slug: String)
where
    A: CatalogApi + ?Sized,
    S: StateCell<ProductListState>,
{
    if let Some(Some(tag)) = state.update_state(|s| s.select_category(slug)) {
        load_products(api, state, tag).await;
    }
}

pub async fn refresh_products<A, S>(api: &A, state: &S)
where
    A: CatalogApi + ?Sized,
    S: StateCell<ProductListState>,
{
    if let Some(Some(tag)) = state.update_state(|s| s.refresh()) {
        load_products(api, state, tag).await;
    }
}

/// Fetch the full card and open the edit dialog
pub async fn open_product_editor<A, S>(api: &A, state: &S, slug: String)
where
    A: CatalogApi + ?Sized,
    S: StateCell<ProductListState>,
{
    if state.update_state(|s| s.begin_open(&slug)) != Some(true) {
        return;
    }
    let result = api.fetch_product(&slug).await;
    if let Err(e) = &result {
        log::error!("Failed to load product '{slug}': {e}");
    }
    state.update_state(|s| s.finish_open(result));
}

/// Validate and submit the open dialog. On success the current list is
/// reloaded; `Ok(true)` tells the caller that product counts changed.
pub async fn save_product<A, S>(api: &A, state: &S) -> Result<bool, ProductFormError>
where
    A: CatalogApi + ?Sized,
    S: StateCell<ProductListState>,
{
    let write = match state.update_state(|s| s.prepare_save()) {
        Some(Ok(Some(write))) => write,
        Some(Err(e)) => return Err(e),
        Some(Ok(None)) | None => return Ok(false),
    };

    let result = match &write {
        ProductWrite::Create(payload) => api.create_product(payload).await,
        ProductWrite::Update { id, payload } => api.update_product(*id, payload).await,
    };
    match (&write, &result) {
        (ProductWrite::Create(payload), Ok(())) => {
            log::info!("Product created: {:?}", payload.slug)
        }
        (ProductWrite::Update { id, .. }, Ok(())) => log::info!("Product {id} updated"),
        (_, Err(e)) => log::error!("Failed to save product: {e}"),
    }

    let saved = state
        .update_state(|s| s.finish_save(result))
        .unwrap_or(false);
    if saved {
        if let Some(Some(tag)) = state.update_state(|s| s.reload()) {
            load_products(api, state, tag).await;
        }
    }
    Ok(saved)
}

//! Category tree controller
//!
//! Plain state plus the async workflows that drive it through [`CatalogApi`].
//! In the browser the state lives in a `RwSignal`, in tests in a `RefCell`.

use contracts::domain::a001_category::{CategoryId, CategoryNode, CategoryPayload};

use super::model::{CategoryForest, ExpansionState, TreeRow};
use crate::domain::a001_category::ui::details::{CategoryForm, CategoryFormError};
use crate::shared::api_utils::ApiError;
use crate::shared::catalog_api::CatalogApi;
use crate::shared::state::{RequestSeq, RequestTag, StateCell};

const TREE_LOAD_FAILED: &str = "Не удалось загрузить дерево категорий.";
const CATEGORY_SAVE_FAILED: &str = "Не удалось сохранить категорию.";

pub type TreeRequest = RequestTag<()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryEditMode {
    Create,
    Edit { id: CategoryId },
}

/// Open category dialog
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryEditor {
    pub mode: CategoryEditMode,
    /// Родитель новой категории либо текущий родитель редактируемой
    /// (только для информации, перенос через редактирование не поддерживается)
    pub parent_id: Option<CategoryId>,
    pub form: CategoryForm,
    pub saving: bool,
    pub error: Option<String>,
}

impl CategoryEditor {
    pub fn title(&self) -> &'static str {
        match (self.mode, self.parent_id) {
            (CategoryEditMode::Create, None) => "Новая корневая категория",
            (CategoryEditMode::Create, Some(_)) => "Новая подкатегория",
            (CategoryEditMode::Edit { .. }, _) => "Редактирование категории",
        }
    }
}

/// Remote write prepared by [`CategoryTreeState::prepare_save`]
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryWrite {
    Create(CategoryPayload),
    Update {
        id: CategoryId,
        payload: CategoryPayload,
    },
}

#[derive(Debug, Clone, Default)]
pub struct CategoryTreeState {
    pub forest: CategoryForest,
    pub expansion: ExpansionState,
    pub loading: bool,
    /// Сообщение об ошибке загрузки (баннер над деревом)
    pub error: Option<String>,
    pub is_loaded: bool,
    pub editor: Option<CategoryEditor>,
    requests: RequestSeq,
}

impl CategoryTreeState {
    /// Start a load; `None` when one is already in flight
    pub fn begin_load(&mut self) -> Option<TreeRequest> {
        if self.loading {
            return None;
        }
        Some(self.begin_reload())
    }

    /// Start a load that supersedes any in flight. Used after writes, when an
    /// older response would carry a pre-write snapshot.
    pub fn begin_reload(&mut self) -> TreeRequest {
        self.loading = true;
        self.error = None;
        self.requests.issue(())
    }

    /// Apply a load result. The forest is swapped in one assignment; on error
    /// the previous forest stays. Returns `false` for a superseded response.
    pub fn finish_load(
        &mut self,
        tag: &TreeRequest,
        result: Result<Vec<CategoryNode>, ApiError>,
    ) -> bool {
        if !self.requests.is_current(tag) {
            log::warn!("Discarding superseded category tree response #{}", tag.seq);
            return false;
        }
        self.loading = false;
        match result {
            Ok(nodes) => {
                self.forest = CategoryForest::from_nodes(nodes);
                self.is_loaded = true;
            }
            Err(e) => self.error = Some(e.user_message(TREE_LOAD_FAILED)),
        }
        true
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn toggle(&mut self, id: CategoryId) -> bool {
        self.expansion.toggle(id)
    }

    pub fn visible_rows(&self) -> Vec<TreeRow> {
        self.forest.visible_rows(&self.expansion)
    }

    /// Slug to hand to the product pane when a row is clicked
    pub fn selection_slug(&self, id: CategoryId) -> Option<String> {
        self.forest.get(id).map(|record| record.slug.clone())
    }

    pub fn begin_create(&mut self, parent_id: Option<CategoryId>) {
        self.editor = Some(CategoryEditor {
            mode: CategoryEditMode::Create,
            parent_id,
            form: CategoryForm::default(),
            saving: false,
            error: None,
        });
    }

    /// Open the dialog for an existing node; `false` if the id is unknown
    pub fn begin_edit(&mut self, id: CategoryId) -> bool {
        let Some(record) = self.forest.get(id) else {
            return false;
        };
        self.editor = Some(CategoryEditor {
            mode: CategoryEditMode::Edit { id },
            parent_id: self.forest.parent(id),
            form: CategoryForm::from_record(record),
            saving: false,
            error: None,
        });
        true
    }

    /// Close the dialog. Ignored while a save is pending.
    pub fn cancel_edit(&mut self) {
        if self.editor.as_ref().is_some_and(|editor| editor.saving) {
            return;
        }
        self.editor = None;
    }

    /// Edit the open buffer; `None` when no dialog is open
    pub fn update_form<R>(&mut self, f: impl FnOnce(&mut CategoryForm) -> R) -> Option<R> {
        self.editor.as_mut().map(|editor| f(&mut editor.form))
    }

    /// Validate the buffer and mark the save as started.
    ///
    /// `Ok(None)`: no dialog is open or a save is already pending.
    /// `Err`: validation failed, the message is shown in the dialog.
    pub fn prepare_save(&mut self) -> Result<Option<CategoryWrite>, CategoryFormError> {
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
        let payload = editor.form.to_payload(editor.parent_id);
        Ok(Some(match editor.mode {
            CategoryEditMode::Create => CategoryWrite::Create(payload),
            CategoryEditMode::Edit { id } => CategoryWrite::Update { id, payload },
        }))
    }

    /// Apply the outcome of a write; `true` means the dialog closed and the
    /// tree must be reloaded.
    pub fn finish_save(&mut self, result: Result<(), ApiError>) -> bool {
        match result {
            Ok(()) => {
                self.editor = None;
                true
            }
            Err(e) => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.saving = false;
                    editor.error = Some(e.user_message(CATEGORY_SAVE_FAILED));
                }
                false
            }
        }
    }
}

/// Fetch the whole tree and replace the forest
pub async fn load_tree<A, S>(api: &A, state: &S)
where
    A: CatalogApi + ?Sized,
    S: StateCell<CategoryTreeState>,
{
    let Some(Some(tag)) = state.update_state(|s| s.begin_load()) else {
        return;
    };
    fetch_tree(api, state, tag).await;
}

/// Fetch the tree even when a load is in flight; the older response is dropped
pub async fn reload_tree<A, S>(api: &A, state: &S)
where
    A: CatalogApi + ?Sized,
    S: StateCell<CategoryTreeState>,
{
    let Some(tag) = state.update_state(|s| s.begin_reload()) else {
        return;
    };
    fetch_tree(api, state, tag).await;
}

async fn fetch_tree<A, S>(api: &A, state: &S, tag: TreeRequest)
where
    A: CatalogApi + ?Sized,
    S: StateCell<CategoryTreeState>,
{
    let result = api.fetch_tree().await;
    match &result {
        Ok(nodes) => log::info!("Category tree loaded: {} root nodes", nodes.len()),
        Err(e) => log::error!("Failed to load category tree: {e}"),
    }
    state.update_state(|s| s.finish_load(&tag, result));
}

/// Validate and submit the open dialog, then reload the tree on success.
///
/// Returns `Ok(true)` when the category was written.
pub async fn save_category<A, S>(api: &A, state: &S) -> Result<bool, CategoryFormError>
where
    A: CatalogApi + ?Sized,
    S: StateCell<CategoryTreeState>,
{
    let write = match state.update_state(|s| s.prepare_save()) {
        Some(Ok(Some(write))) => write,
        Some(Err(e)) => return Err(e),
        Some(Ok(None)) | None => return Ok(false),
    };

    let result = match &write {
        CategoryWrite::Create(payload) => api.create_category(payload).await,
        CategoryWrite::Update { id, payload } => api.update_category(*id, payload).await,
    };
    match (&write, &result) {
        (CategoryWrite::Create(payload), Ok(())) => {
            log::info!("Category created: {:?}", payload.slug)
        }
        (CategoryWrite::Update { id, .. }, Ok(())) => log::info!("Category {id} updated"),
        (_, Err(e)) => log::error!("Failed to save category: {e}"),
    }

    let saved = state
        .update_state(|s| s.finish_save(result))
        .unwrap_or(false);
    if saved {
        reload_tree(api, state).await;
    }
    Ok(saved)
}

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::model::{CategoryRecord, TreeRow};
use super::state::{load_tree, save_category, CategoryTreeState};
use crate::domain::a001_category::ui::details::CategoryDialog;
use crate::shared::components::page_header::PaneHeader;
use crate::shared::icons::icon;
use crate::system::auth::context::{session_api, use_auth};
use contracts::domain::a001_category::CategoryId;

/// Left pane of the catalog page: the category tree with its edit dialog.
///
/// `state` is owned by the page so it can reload the tree when product
/// counts change; `on_select` receives the slug of a clicked category.
#[component]
pub fn CategoryTreePanel(
    state: RwSignal<CategoryTreeState>,
    on_select: Callback<String>,
) -> impl IntoView {
    let auth = use_auth();
    let selected_id = RwSignal::new(None::<CategoryId>);

    let load = move || {
        spawn_local(async move {
            load_tree(&session_api(auth), &state).await;
        });
    };

    let save = Callback::new(move |_: ()| {
        spawn_local(async move {
            if let Err(e) = save_category(&session_api(auth), &state).await {
                log::debug!("Category form rejected: {e}");
            }
        });
    });

    let select = move |id: CategoryId| {
        if let Some(slug) = state.with_untracked(|s| s.selection_slug(id)) {
            selected_id.set(Some(id));
            on_select.run(slug);
        }
    };

    if state.with_untracked(|s| !s.is_loaded) {
        load();
    }

    let rows = move || {
        state.with(|s| {
            s.visible_rows()
                .into_iter()
                .filter_map(|row| s.forest.get(row.id).cloned().map(|record| (row, record)))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="category-tree">
            <PaneHeader title="Категории">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| state.update(|s| s.begin_create(None))
                >
                    {icon("plus")}
                    "Корневая категория"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || state.with(|s| s.loading))
                    on_click=move |_| load()
                >
                    {icon("refresh")}
                </Button>
            </PaneHeader>

            <Show when=move || state.with(|s| s.error.is_some())>
                <div class="category-tree__error">
                    <MessageBar intent=MessageBarIntent::Error>
                        <MessageBarBody>
                            {move || state.with(|s| s.error.clone().unwrap_or_default())}
                        </MessageBarBody>
                        <MessageBarActions>
                            <Button
                                appearance=ButtonAppearance::Transparent
                                on_click=move |_| state.update(CategoryTreeState::dismiss_error)
                            >
                                {icon("x")}
                            </Button>
                        </MessageBarActions>
                    </MessageBar>
                </div>
            </Show>

            <Show when=move || state.with(|s| s.loading)>
                <div class="category-tree__loading">
                    <Spinner size=SpinnerSize::Small />
                </div>
            </Show>

            <Show when=move || state.with(|s| s.forest.is_empty() && !s.loading && s.error.is_none())>
                <div class="category-tree__empty">"Категорий пока нет."</div>
            </Show>

            <div class="category-tree__rows">
                {move || {
                    rows()
                        .into_iter()
                        .map(|(row, record)| tree_row(row, record, state, selected_id, select))
                        .collect_view()
                }}
            </div>

            <CategoryDialog state=state on_save=save />
        </div>
    }
}

fn tree_row(
    row: TreeRow,
    record: CategoryRecord,
    state: RwSignal<CategoryTreeState>,
    selected_id: RwSignal<Option<CategoryId>>,
    select: impl Fn(CategoryId) + Copy + 'static,
) -> impl IntoView {
    let id = row.id;

    let toggle = if row.has_children {
        view! {
            <button class="tree-toggle" on:click=move |_| { state.update(|s| { s.toggle(id); }); }>
                {if row.is_expanded { icon("chevron-down") } else { icon("chevron-right") }}
            </button>
        }
        .into_any()
    } else {
        view! { <span class="tree-toggle tree-toggle--leaf"></span> }.into_any()
    };

    let folder = if row.has_children && row.is_expanded {
        icon("folder-open")
    } else {
        icon("folder-closed")
    };

    view! {
        <div
            class="category-tree__row"
            class:category-tree__row--selected=move || selected_id.get() == Some(id)
            style=format!("padding-left: {}px;", row.depth * 16)
        >
            {toggle}
            <span class="category-tree__icon">{folder}</span>
            <span class="category-tree__label" title=record.slug.clone() on:click=move |_| select(id)>
                {record.name.clone()}
            </span>
            <span class="category-tree__count" title="Товаров в поддереве">
                {record.desc_product_count}
            </span>
            <span class="category-tree__actions">
                <button
                    class="button button--icon"
                    title="Добавить подкатегорию"
                    on:click=move |_| state.update(|s| s.begin_create(Some(id)))
                >
                    {icon("plus")}
                </button>
                <button
                    class="button button--icon"
                    title="Редактировать"
                    on:click=move |_| { state.update(|s| { s.begin_edit(id); }); }
                >
                    {icon("edit")}
                </button>
            </span>
        </div>
    }
}

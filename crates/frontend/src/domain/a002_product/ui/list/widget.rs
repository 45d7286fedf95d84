use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::state::{
    load_category_options, open_product_editor, refresh_products, save_product, select_category,
    ProductListState,
};
use crate::domain::a002_product::ui::details::ProductDialog;
use crate::shared::components::page_header::PaneHeader;
use crate::shared::icons::icon;
use crate::system::auth::context::{session_api, use_auth};
use contracts::domain::a002_product::ProductListItem;

fn format_price(price: f64) -> String {
    if price == 0.0 {
        "—".to_string()
    } else {
        format!("{price:.2} ₽")
    }
}

/// Right pane of the catalog page.
///
/// `on_products_changed` fires after a successful save so the page can
/// refresh the subtree counts in the category tree.
#[component]
pub fn ProductsPanel(
    state: RwSignal<ProductListState>,
    on_products_changed: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();

    spawn_local(async move {
        load_category_options(&session_api(auth), &state).await;
    });

    let select = move |slug: String| {
        spawn_local(async move {
            select_category(&session_api(auth), &state, slug).await;
        });
    };

    let refresh = move |_: leptos::ev::MouseEvent| {
        spawn_local(async move {
            refresh_products(&session_api(auth), &state).await;
        });
    };

    let open = move |slug: String| {
        spawn_local(async move {
            open_product_editor(&session_api(auth), &state, slug).await;
        });
    };

    let save = Callback::new(move |_: ()| {
        spawn_local(async move {
            match save_product(&session_api(auth), &state).await {
                Ok(true) => on_products_changed.run(()),
                Ok(false) => {}
                Err(e) => log::debug!("Product form rejected: {e}"),
            }
        });
    });

    let subtitle = Signal::derive(move || {
        state.with(|s| {
            s.pagination.map(|p| {
                format!("Страница {} из {}, всего товаров: {}", p.page, p.pages.max(1), p.total)
            })
        })
    });

    let errors = move || {
        state.with(|s| {
            s.categories_error
                .iter()
                .chain(s.error.iter())
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let product_row = move |product: ProductListItem| {
        let slug = product.slug.clone();
        let is_opening = {
            let slug = slug.clone();
            move || state.with(|s| s.opening.as_deref() == Some(slug.as_str()))
        };
        let is_opening_attr = is_opening.clone();
        view! {
            <tr>
                <td>{product.name.clone()}</td>
                <td class="cell-muted">{product.slug.clone()}</td>
                <td class="text-right">{format_price(product.price)}</td>
                <td class="text-right">
                    <button
                        class="button button--icon"
                        title="Редактировать"
                        disabled=is_opening_attr
                        on:click=move |_| open(slug.clone())
                    >
                        {move || if is_opening() {
                            view! { <Spinner size=SpinnerSize::Tiny /> }.into_any()
                        } else {
                            icon("edit")
                        }}
                    </button>
                </td>
            </tr>
        }
    };

    view! {
        <div class="products-pane">
            <PaneHeader title="Товары" subtitle=subtitle>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || state.with(|s| !s.can_create()))
                    on_click=move |_| state.update(ProductListState::begin_create)
                >
                    {icon("plus")}
                    "Новый товар"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || state.with(|s| !s.can_refresh()))
                    on_click=refresh
                >
                    {icon("refresh")}
                    "Обновить"
                </Button>
            </PaneHeader>

            <div class="form-group">
                <label for="products-category">"Категория"</label>
                <select
                    id="products-category"
                    prop:value=move || state.with(|s| s.selected_slug.clone())
                    disabled=move || state.with(|s| s.categories_loading)
                    on:change=move |ev| select(event_target_value(&ev))
                >
                    <option value="">"Выберите категорию"</option>
                    {move || {
                        let current = state.with(|s| s.selected_slug.clone());
                        state.with(|s| {
                            s.categories
                                .iter()
                                .map(|option| {
                                    let selected = option.slug == current;
                                    view! {
                                        <option value=option.slug.clone() selected=selected>
                                            {option.name.clone()}
                                        </option>
                                    }
                                })
                                .collect_view()
                        })
                    }}
                </select>
            </div>

            {move || {
                errors()
                    .into_iter()
                    .map(|message| view! {
                        <MessageBar intent=MessageBarIntent::Error>
                            <MessageBarBody>{message}</MessageBarBody>
                            <MessageBarActions>
                                <Button
                                    appearance=ButtonAppearance::Transparent
                                    on_click=move |_| state.update(ProductListState::dismiss_error)
                                >
                                    {icon("x")}
                                </Button>
                            </MessageBarActions>
                        </MessageBar>
                    })
                    .collect_view()
            }}

            <Show
                when=move || !state.with(|s| s.selected_slug.is_empty())
                fallback=|| view! {
                    <div class="products-pane__empty">"Выберите категорию слева или в списке выше."</div>
                }
            >
                <Show
                    when=move || !state.with(|s| s.loading)
                    fallback=|| view! { <div class="products-pane__loading"><Spinner /></div> }
                >
                    <Show
                        when=move || state.with(|s| !s.products.is_empty())
                        fallback=|| view! { <div class="products-pane__empty">"В этой категории пока нет товаров."</div> }
                    >
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Название"</th>
                                    <th>"Slug"</th>
                                    <th class="text-right">"Цена"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || state.with(|s| s.products.clone())
                                    key=|product| (product.id, product.name.clone(), product.slug.clone())
                                    children=product_row
                                />
                            </tbody>
                        </table>
                    </Show>
                </Show>
            </Show>

            <ProductDialog state=state on_save=save />
        </div>
    }
}

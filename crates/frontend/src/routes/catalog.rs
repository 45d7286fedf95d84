use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_category::ui::tree::{reload_tree, CategoryTreePanel, CategoryTreeState};
use crate::domain::a002_product::ui::list::{select_category, ProductListState, ProductsPanel};
use crate::system::auth::context::{session_api, use_auth};

/// Two-pane catalog: the category tree drives the products pane, product
/// saves reload the tree so the subtree counts stay current.
#[component]
pub fn CatalogPage() -> impl IntoView {
    let auth = use_auth();
    let tree = RwSignal::new(CategoryTreeState::default());
    let products = RwSignal::new(ProductListState::default());

    let on_category_select = Callback::new(move |slug: String| {
        spawn_local(async move {
            select_category(&session_api(auth), &products, slug).await;
        });
    });

    let on_products_changed = Callback::new(move |_: ()| {
        spawn_local(async move {
            reload_tree(&session_api(auth), &tree).await;
        });
    });

    view! {
        <div class="catalog-page">
            <section class="catalog-page__tree">
                <CategoryTreePanel state=tree on_select=on_category_select />
            </section>
            <section class="catalog-page__products">
                <ProductsPanel state=products on_products_changed=on_products_changed />
            </section>
        </div>
    }
}

use crate::layout::Shell;
use crate::routes::catalog::CatalogPage;
use crate::system::auth::guard::RequireAuth;
use leptos::prelude::*;

/// Auth gate: the login page for an anonymous session, the catalog otherwise
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <RequireAuth>
            <Shell>
                <CatalogPage />
            </Shell>
        </RequireAuth>
    }
}

use leptos::prelude::*;

use super::context::use_auth;
use super::Session;
use crate::system::pages::login::LoginPage;

/// Renders `children` for an authenticated session, the login page otherwise
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.with(Session::is_authenticated)
            fallback=|| view! { <LoginPage /> }
        >
            {children()}
        </Show>
    }
}

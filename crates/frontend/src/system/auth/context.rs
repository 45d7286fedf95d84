use contracts::system::auth::LoginResponse;
use leptos::prelude::*;

use super::{storage, Session};
use crate::shared::catalog_api::HttpCatalogApi;

/// Auth context provider component
///
/// Restores the persisted token on mount and exposes the session as a
/// `RwSignal<Session>`.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let session = match storage::get_access_token() {
        Some(token) => {
            log::info!("Restored persisted session");
            Session::restored(token)
        }
        None => Session::anonymous(),
    };
    provide_context(RwSignal::new(session));

    children()
}

/// Hook to access the session signal
pub fn use_auth() -> RwSignal<Session> {
    use_context::<RwSignal<Session>>().expect("AuthProvider not found in component tree")
}

/// Catalog client carrying the current bearer token
pub fn session_api(auth: RwSignal<Session>) -> HttpCatalogApi {
    HttpCatalogApi::for_token(auth.with_untracked(|s| s.access_token().map(str::to_owned)))
}

/// Helper: apply a successful login and persist the token
pub fn do_login(auth: RwSignal<Session>, response: LoginResponse) {
    storage::save_access_token(&response.access_token);
    auth.update(|session| session.login(response));
}

/// Helper: drop the session and the persisted token
pub fn do_logout(auth: RwSignal<Session>) {
    storage::clear_tokens();
    auth.update(Session::logout);
    log::info!("Logged out");
}

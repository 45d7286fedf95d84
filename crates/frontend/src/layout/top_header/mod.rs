//! TopHeader component - application top navigation bar.

use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let auth = use_auth();

    let logout = move |_| do_logout(auth);

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                {icon("products")}
                <span class="top-header__title">"Laserio Admin"</span>
                <span class="top-header__section">"Каталог"</span>
            </div>

            <div class="top-header__actions">
                <button class="top-header__icon-btn" on:click=logout title="Выйти">
                    {icon("logout")}
                    <span>"Выйти"</span>
                </button>
            </div>
        </div>
    }
}

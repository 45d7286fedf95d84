use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::system::auth::api::HttpAuthApi;
use crate::system::auth::context::{do_login, use_auth};
use crate::system::auth::login_form::{submit_login, LoginForm};

#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(LoginForm::default());
    let auth = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            if let Some(response) = submit_login(&HttpAuthApi, &form).await {
                // переключение на каталог происходит через RequireAuth
                do_login(auth, response);
            }
        });
    };

    let is_submitting = move || form.with(|f| f.submitting);

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Вход в Laserio Admin"</h1>
                <p class="login-hint">"Введите e-mail и пароль администратора."</p>

                <Show when=move || form.with(|f| f.error.is_some())>
                    <MessageBar intent=MessageBarIntent::Error>
                        {move || form.with(|f| f.error.clone().unwrap_or_default())}
                    </MessageBar>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"E-mail"</label>
                        <input
                            type="email"
                            id="email"
                            autocomplete="username"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            required
                            disabled=is_submitting
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Пароль"</label>
                        <input
                            type="password"
                            id="password"
                            autocomplete="current-password"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                            required
                            disabled=is_submitting
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled=is_submitting>
                        {move || if is_submitting() {
                            view! { <Spinner size=SpinnerSize::Tiny /> }.into_any()
                        } else {
                            "Войти".into_any()
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}

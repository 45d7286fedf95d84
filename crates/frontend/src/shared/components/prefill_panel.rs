use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::clipboard::read_clipboard_text;
use crate::shared::icons::icon;

/// Paste-JSON block of the edit dialogs.
///
/// `on_apply` receives the raw text and answers with the parse error, if any;
/// the dialog's form is left untouched on error.
#[component]
pub fn PrefillPanel(on_apply: Callback<String, Option<String>>) -> impl IntoView {
    let text = RwSignal::new(String::new());
    let message = RwSignal::new(None::<String>);

    let apply = move |raw: String| match on_apply.run(raw) {
        Some(error) => message.set(Some(error)),
        None => {
            message.set(None);
            text.set(String::new());
        }
    };

    let from_clipboard = move |_: leptos::ev::MouseEvent| {
        spawn_local(async move {
            match read_clipboard_text().await {
                Ok(raw) => {
                    text.set(raw.clone());
                    apply(raw);
                }
                Err(e) => message.set(Some(e)),
            }
        });
    };

    view! {
        <details class="prefill-panel">
            <summary>"Заполнить из JSON"</summary>
            <div class="prefill-panel__body">
                <textarea
                    class="prefill-panel__input"
                    rows="4"
                    placeholder="{\"name\": \"...\", \"slug\": \"...\"}"
                    prop:value=move || text.get()
                    on:input=move |ev| text.set(event_target_value(&ev))
                />
                <div class="prefill-panel__actions">
                    <Button appearance=ButtonAppearance::Secondary on_click=from_clipboard>
                        {icon("clipboard")}
                        "Из буфера обмена"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || text.with(|t| t.trim().is_empty()))
                        on_click=move |_| apply(text.get_untracked())
                    >
                        "Применить"
                    </Button>
                </div>
                <Show when=move || message.with(Option::is_some)>
                    <div class="prefill-panel__error">
                        {move || message.get().unwrap_or_default()}
                    </div>
                </Show>
            </div>
        </details>
    }
}

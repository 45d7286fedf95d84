use leptos::prelude::*;
use thaw::*;

use super::form::ProductForm;
use crate::domain::a002_product::ui::list::ProductListState;
use crate::shared::components::prefill_panel::PrefillPanel;
use crate::shared::modal::Modal;

fn field(
    state: RwSignal<ProductListState>,
    read: fn(&ProductForm) -> String,
) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    move || state.with(|s| s.editor.as_ref().map(|e| read(&e.form)).unwrap_or_default())
}

/// Create/edit dialog of the products pane
#[component]
pub fn ProductDialog(state: RwSignal<ProductListState>, on_save: Callback<()>) -> impl IntoView {
    let title = Signal::derive(move || {
        state.with(|s| s.editor.as_ref().map(|e| e.title().to_string()).unwrap_or_default())
    });
    let saving = move || state.with(|s| s.editor.as_ref().is_some_and(|e| e.saving));
    let on_close = Callback::new(move |_: ()| state.update(ProductListState::cancel_edit));

    let update = move |f: Box<dyn FnOnce(&mut ProductForm)>| {
        state.update(|s| {
            s.update_form(f);
        });
    };

    let prefill = Callback::new(move |text: String| {
        state
            .try_update(|s| s.update_form(|form| form.prefill_from_json(&text)))
            .flatten()
            .and_then(Result::err)
            .map(|e| e.to_string())
    });

    let category_value = move || {
        state.with(|s| {
            s.editor
                .as_ref()
                .and_then(|e| e.form.category_id)
                .map(|id| id.to_string())
                .unwrap_or_default()
        })
    };

    view! {
        <Show when=move || state.with(|s| s.editor.is_some())>
            <Modal title=title on_close=on_close>
                <div class="details-form">
                    <Show when=move || state.with(|s| s.editor.as_ref().is_some_and(|e| e.error.is_some()))>
                        <MessageBar intent=MessageBarIntent::Error>
                            {move || state.with(|s| s.editor.as_ref().and_then(|e| e.error.clone()).unwrap_or_default())}
                        </MessageBar>
                    </Show>

                    <div class="form-group">
                        <label for="product-name">"Название"</label>
                        <input
                            type="text"
                            id="product-name"
                            prop:value=field(state, |f| f.name.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                update(Box::new(move |f: &mut ProductForm| f.set_name(value)));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="product-slug">"Slug"</label>
                        <div class="form-group__inline">
                            <input
                                type="text"
                                id="product-slug"
                                prop:value=field(state, |f| f.slug.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    update(Box::new(move |f: &mut ProductForm| f.set_slug(value)));
                                }
                            />
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| update(Box::new(ProductForm::regenerate_slug))
                            >
                                "Сгенерировать"
                            </Button>
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="product-category">"Категория"</label>
                        <select
                            id="product-category"
                            prop:value=category_value
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                update(Box::new(move |f: &mut ProductForm| f.set_category_text(&value)));
                            }
                        >
                            <option value="">"Не выбрана"</option>
                            {move || {
                                let current = category_value();
                                state.with(|s| {
                                    s.categories
                                        .iter()
                                        .map(|option| {
                                            let value = option.id.to_string();
                                            let selected = value == current;
                                            view! {
                                                <option value=value selected=selected>{option.name.clone()}</option>
                                            }
                                        })
                                        .collect_view()
                                })
                            }}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="product-content">"Описание (HTML)"</label>
                        <textarea
                            id="product-content"
                            rows="6"
                            prop:value=field(state, |f| f.content_html.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                update(Box::new(move |f: &mut ProductForm| f.content_html = value));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="product-specs">"Характеристики (HTML)"</label>
                        <textarea
                            id="product-specs"
                            rows="6"
                            prop:value=field(state, |f| f.specs_html.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                update(Box::new(move |f: &mut ProductForm| f.specs_html = value));
                            }
                        />
                    </div>

                    <PrefillPanel on_apply=prefill />
                </div>

                <div class="details-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(saving)
                        on_click=move |_| on_save.run(())
                    >
                        {move || if saving() { "Сохранение..." } else { "Сохранить" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(saving)
                        on_click=move |_| on_close.run(())
                    >
                        "Отмена"
                    </Button>
                </div>
            </Modal>
        </Show>
    }
}

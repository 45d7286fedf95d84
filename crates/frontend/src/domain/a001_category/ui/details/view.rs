use leptos::prelude::*;
use thaw::*;

use super::form::CategoryForm;
use crate::domain::a001_category::ui::tree::CategoryTreeState;
use crate::shared::components::prefill_panel::PrefillPanel;
use crate::shared::modal::Modal;

/// Read one form field reactively; empty while no dialog is open
fn field(
    state: RwSignal<CategoryTreeState>,
    read: fn(&CategoryForm) -> String,
) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    move || state.with(|s| s.editor.as_ref().map(|e| read(&e.form)).unwrap_or_default())
}

fn flag(
    state: RwSignal<CategoryTreeState>,
    read: fn(&CategoryForm) -> bool,
) -> impl Fn() -> bool + Copy + Send + Sync + 'static {
    move || state.with(|s| s.editor.as_ref().is_some_and(|e| read(&e.form)))
}

/// Create/edit dialog of the category tree. Shown while the state has an
/// open editor.
#[component]
pub fn CategoryDialog(
    state: RwSignal<CategoryTreeState>,
    on_save: Callback<()>,
) -> impl IntoView {
    let title = Signal::derive(move || {
        state.with(|s| s.editor.as_ref().map(|e| e.title().to_string()).unwrap_or_default())
    });
    let saving = move || state.with(|s| s.editor.as_ref().is_some_and(|e| e.saving));
    let on_close = Callback::new(move |_: ()| state.update(CategoryTreeState::cancel_edit));

    let update = move |f: Box<dyn FnOnce(&mut CategoryForm)>| {
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

    view! {
        <Show when=move || state.with(|s| s.editor.is_some())>
            <Modal title=title on_close=on_close>
                <div class="details-form">
                    {move || {
                        state
                            .with(|s| s.editor.as_ref().and_then(|e| e.parent_id))
                            .map(|parent_id| view! {
                                <div class="details-form__hint">
                                    {format!("Родительская категория: #{parent_id}")}
                                </div>
                            })
                    }}

                    <Show when=move || state.with(|s| s.editor.as_ref().is_some_and(|e| e.error.is_some()))>
                        <MessageBar intent=MessageBarIntent::Error>
                            {move || state.with(|s| s.editor.as_ref().and_then(|e| e.error.clone()).unwrap_or_default())}
                        </MessageBar>
                    </Show>

                    <div class="form-group">
                        <label for="category-name">"Название"</label>
                        <input
                            type="text"
                            id="category-name"
                            prop:value=field(state, |f| f.name.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                update(Box::new(move |f: &mut CategoryForm| f.set_name(value)));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="category-slug">"Slug"</label>
                        <div class="form-group__inline">
                            <input
                                type="text"
                                id="category-slug"
                                prop:value=field(state, |f| f.slug.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    update(Box::new(move |f: &mut CategoryForm| f.set_slug(value)));
                                }
                            />
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| update(Box::new(CategoryForm::regenerate_slug))
                            >
                                "Сгенерировать"
                            </Button>
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="category-description">"Описание"</label>
                        <textarea
                            id="category-description"
                            rows="3"
                            prop:value=field(state, |f| f.description.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                update(Box::new(move |f: &mut CategoryForm| f.description = value));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="category-sort">"Порядок сортировки"</label>
                        <input
                            type="number"
                            id="category-sort"
                            prop:value=field(state, |f| f.sort_order.to_string())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                update(Box::new(move |f: &mut CategoryForm| f.set_sort_order_text(&value)));
                            }
                        />
                    </div>

                    <label class="form-check">
                        <input
                            type="checkbox"
                            prop:checked=flag(state, |f| f.is_active)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                update(Box::new(move |f: &mut CategoryForm| f.is_active = checked));
                            }
                        />
                        "Активна"
                    </label>
                    <label class="form-check">
                        <input
                            type="checkbox"
                            prop:checked=flag(state, |f| f.featured_only)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                update(Box::new(move |f: &mut CategoryForm| f.featured_only = checked));
                            }
                        />
                        "Только избранные товары"
                    </label>

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

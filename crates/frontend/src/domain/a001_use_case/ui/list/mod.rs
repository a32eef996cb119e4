pub mod state;

use self::state::ListState;
use crate::domain::a001_use_case::api;
use crate::domain::a001_use_case::ui::details::UseCaseForm;
use crate::layout::nav::menu_data;
use crate::shared::notifications::{NoticeKind, NotificationService};
use contracts::domain::a001_use_case::aggregate::{UseCase, UseCaseDto};
use contracts::domain::a001_use_case::draft::UseCaseDraft;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Admin panel: industry selector, use-case list with edit/delete, and the
/// create/edit form. Mutations take the busy slot one at a time; every
/// successful mutation triggers a full reload of the current industry.
#[component]
#[allow(non_snake_case)]
pub fn AdminPanel() -> impl IntoView {
    let notices = use_context::<NotificationService>()
        .expect("NotificationService not found in context");
    let state = RwSignal::new(ListState::default());
    let (items, set_items) = signal::<Vec<UseCase>>(Vec::new());
    let draft = RwSignal::new(UseCaseDraft::new_for_create());
    let (form_open, set_form_open) = signal(false);

    let fetch = move |epoch: u32| {
        let industry = state.get_untracked().industry().to_string();
        spawn_local(async move {
            let result = api::list_by_industry(&industry).await;
            // A stale response never lands over a newer selection
            if !state.get_untracked().accept_load(epoch) {
                return;
            }
            match result {
                Ok(list) => set_items.set(list),
                Err(e) => notices.error(e),
            }
        });
    };

    let reload = move || {
        if let Some(epoch) = state.try_update(|s| s.begin_reload()).flatten() {
            fetch(epoch);
        }
    };

    let select_industry = move |slug: String| {
        set_form_open.set(false);
        match state.try_update(|s| s.select_industry(&slug)).flatten() {
            Some(epoch) => fetch(epoch),
            None => set_items.set(Vec::new()),
        }
    };

    let submit = Callback::new(move |dto: UseCaseDto| {
        if !state.try_update(|s| s.begin_mutation()).unwrap_or(false) {
            return;
        }
        let is_update = dto.id.is_some();
        spawn_local(async move {
            let result = api::save(&dto).await;
            state.try_update(|s| s.finish_mutation());
            match result {
                Ok(()) => {
                    set_form_open.set(false);
                    notices.success(if is_update {
                        "Use case updated"
                    } else {
                        "Use case created"
                    });
                    reload();
                }
                // The form stays open with the draft intact
                Err(e) => notices.error(e),
            }
        });
    });

    let delete_record = move |id: String, title: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("Delete \"{}\"?", title))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        if !state.try_update(|s| s.begin_mutation()).unwrap_or(false) {
            return;
        }
        spawn_local(async move {
            let result = api::delete(&id).await;
            state.try_update(|s| s.finish_mutation());
            match result {
                Ok(()) => {
                    notices.success("Use case deleted");
                    reload();
                }
                Err(e) => notices.error(e),
            }
        });
    };

    let open_create = move |_| {
        draft.set(UseCaseDraft::new_for_create());
        set_form_open.set(true);
    };

    let open_edit = move |record: &UseCase| {
        draft.set(UseCaseDraft::from_record(record));
        set_form_open.set(true);
    };

    let industry_options = menu_data::find_entry("industries")
        .map(|entry| entry.all_items())
        .unwrap_or_default();

    view! {
        <div class="admin">
            <div class="admin__header">
                <h2>"Use case management"</h2>
                <div class="admin__controls">
                    <select on:change=move |ev| select_industry(event_target_value(&ev))>
                        <option value="">"Select industry..."</option>
                        {industry_options.iter().map(|label| {
                            let slug = menu_data::nav_slug(label);
                            view! { <option value=slug>{*label}</option> }
                        }).collect_view()}
                    </select>
                    <button
                        class="button button--primary"
                        disabled=move || state.get().industry().is_empty()
                        on:click=open_create
                    >
                        "Add use case"
                    </button>
                </div>
            </div>

            {move || notices.current().map(|notice| {
                let class = match notice.kind {
                    NoticeKind::Success => "notice notice--success",
                    NoticeKind::Error => "notice notice--error",
                };
                view! {
                    <div class=class on:click=move |_| notices.dismiss()>
                        {notice.message.clone()}
                    </div>
                }
            })}

            {move || form_open.get().then(|| view! {
                <UseCaseForm
                    draft=draft
                    industry=Signal::derive(move || state.get().industry().to_string())
                    busy=Signal::derive(move || state.get().is_busy())
                    on_submit=submit
                    on_cancel=Callback::new(move |_| set_form_open.set(false))
                />
            })}

            <div class="admin__list">
                {move || {
                    let current = items.get();
                    if state.get().industry().is_empty() {
                        view! { <p class="admin__hint">"Pick an industry to manage its use cases."</p> }.into_any()
                    } else if current.is_empty() {
                        view! { <p class="admin__hint">"No use cases for this industry yet."</p> }.into_any()
                    } else {
                        current.into_iter().map(|record| {
                            let id = record.to_string_id();
                            let title = record.title.clone();
                            let delete_id = id.clone();
                            let delete_title = title.clone();
                            let edit_record = record.clone();
                            view! {
                                <div class="admin-card">
                                    <div class="admin-card__info">
                                        <span class="admin-card__category">
                                            {record.category.display_name()}
                                        </span>
                                        <h4 class="admin-card__title">{title}</h4>
                                        <span class="admin-card__meta">
                                            {format!("{} \u{b7} /{}", record.date.format("%Y-%m-%d"), record.slug)}
                                        </span>
                                    </div>
                                    <div class="admin-card__actions">
                                        <button
                                            class="button button--secondary"
                                            on:click=move |_| open_edit(&edit_record)
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="button button--danger"
                                            disabled=move || state.get().is_busy()
                                            on:click=move |_| {
                                                delete_record(delete_id.clone(), delete_title.clone())
                                            }
                                        >
                                            "Delete"
                                        </button>
                                    </div>
                                </div>
                            }
                        }).collect_view().into_any()
                    }
                }}
            </div>
        </div>
    }
}

//! Create/edit form for a use case record.
//!
//! All transition rules live in [`UseCaseDraft`]; this component only wires
//! DOM events to the draft and packages the DTO on submit.

use contracts::domain::a001_use_case::aggregate::UseCaseDto;
use contracts::domain::a001_use_case::draft::{ContentKind, UseCaseDraft};
use contracts::enums::use_case_category::UseCaseCategory;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn UseCaseForm(
    draft: RwSignal<UseCaseDraft>,
    #[prop(into)] industry: Signal<String>,
    #[prop(into)] busy: Signal<bool>,
    on_submit: Callback<UseCaseDto>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (form_error, set_form_error) = signal::<Option<String>>(None);

    let submit = move |_| {
        let current = draft.get();
        if let Err(message) = current.validate() {
            set_form_error.set(Some(message.to_string()));
            return;
        }
        set_form_error.set(None);
        on_submit.run(current.to_dto(&industry.get()));
    };

    view! {
        <div class="use-case-form">
            <h3 class="use-case-form__title">
                {move || if draft.get().is_edit_mode() { "Edit use case" } else { "New use case" }}
            </h3>

            {move || form_error.get().map(|e| view! { <div class="form-error">{e}</div> })}

            <div class="form-field">
                <label>"Title"</label>
                <input
                    type="text"
                    prop:value=move || draft.get().title
                    on:input=move |ev| draft.update(|d| d.set_title(&event_target_value(&ev)))
                />
            </div>

            <div class="form-field">
                <label>"URL slug"</label>
                <input
                    type="text"
                    prop:value=move || draft.get().slug
                    on:change=move |ev| draft.update(|d| d.set_slug(&event_target_value(&ev)))
                />
                <span class="form-hint">
                    {move || if draft.get().slug_manually_edited {
                        "Manually set; title changes won't overwrite it"
                    } else {
                        "Generated from the title"
                    }}
                </span>
            </div>

            <div class="form-field">
                <label>"Category"</label>
                <select on:change=move |ev| {
                    if let Some(category) = UseCaseCategory::from_code(&event_target_value(&ev)) {
                        draft.update(|d| d.category = category);
                    }
                }>
                    {UseCaseCategory::all().into_iter().map(|category| view! {
                        <option
                            value=category.code()
                            prop:selected=move || draft.get().category == category
                        >
                            {category.display_name()}
                        </option>
                    }).collect_view()}
                </select>
            </div>

            <div class="form-field">
                <label>"Publication date"</label>
                <input
                    type="date"
                    prop:value=move || draft.get().date.format("%Y-%m-%d").to_string()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        if let Ok(date) = chrono::NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
                            draft.update(|d| d.date = date);
                        }
                    }
                />
            </div>

            <div class="form-field">
                <label>"Summary"</label>
                <textarea
                    prop:value=move || draft.get().summary
                    on:input=move |ev| draft.update(|d| d.summary = event_target_value(&ev))
                ></textarea>
            </div>

            <div class="form-field">
                <label>"Hero image URL"</label>
                <input
                    type="text"
                    prop:value=move || draft.get().image
                    on:input=move |ev| draft.update(|d| d.image = event_target_value(&ev))
                />
            </div>

            <div class="form-field">
                <label>"Content"</label>
                <div class="use-case-form__kind-toggle">
                    <label>
                        <input
                            type="radio"
                            name="content-kind"
                            prop:checked=move || draft.get().content_kind == ContentKind::RichText
                            on:change=move |_| draft.update(|d| d.set_content_kind(ContentKind::RichText))
                        />
                        "Rich text"
                    </label>
                    <label>
                        <input
                            type="radio"
                            name="content-kind"
                            prop:checked=move || draft.get().content_kind == ContentKind::Pdf
                            on:change=move |_| draft.update(|d| d.set_content_kind(ContentKind::Pdf))
                        />
                        "PDF link"
                    </label>
                </div>

                {move || match draft.get().content_kind {
                    ContentKind::RichText => view! {
                        <textarea
                            class="use-case-form__content"
                            placeholder="<p>Body HTML...</p>"
                            prop:value=move || draft.get().content_html
                            on:input=move |ev| draft.update(|d| d.content_html = event_target_value(&ev))
                        ></textarea>
                    }.into_any(),
                    ContentKind::Pdf => view! {
                        <input
                            type="text"
                            placeholder="https://.../document.pdf"
                            prop:value=move || draft.get().pdf_url
                            on:input=move |ev| draft.update(|d| d.pdf_url = event_target_value(&ev))
                        />
                    }.into_any(),
                }}
            </div>

            <div class="use-case-form__actions">
                <button
                    class="button button--primary"
                    disabled=move || busy.get()
                    on:click=submit
                >
                    {move || if draft.get().is_edit_mode() { "Save changes" } else { "Create" }}
                </button>
                <button
                    class="button button--secondary"
                    on:click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </button>
            </div>
        </div>
    }
}

//! Public contact form.
//!
//! Validation mirrors the server's rules exactly, so a request only goes out
//! when it would pass; the server remains the authority and its message is
//! shown if it still rejects.

use crate::domain::a002_contact::api;
use contracts::domain::a002_contact::submission::ContactRequest;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, PartialEq)]
enum SubmitStatus {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

#[component]
#[allow(non_snake_case)]
pub fn ContactPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (status, set_status) = signal(SubmitStatus::Idle);

    let submit = move |_| {
        if status.get_untracked() == SubmitStatus::Sending {
            return;
        }
        let request = ContactRequest {
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        if let Err(e) = request.validate() {
            set_status.set(SubmitStatus::Failed(e));
            return;
        }
        set_status.set(SubmitStatus::Sending);
        spawn_local(async move {
            match api::submit(&request).await {
                Ok(()) => {
                    set_email.set(String::new());
                    set_message.set(String::new());
                    set_status.set(SubmitStatus::Sent);
                }
                Err(e) => set_status.set(SubmitStatus::Failed(e)),
            }
        });
    };

    view! {
        <div class="page contact-page">
            <h1 class="page__title">"Get in touch"</h1>
            <p class="contact-page__lead">
                "Tell us about your data challenge and we will come back within one business day."
            </p>

            {move || match status.get() {
                SubmitStatus::Sent => Some(view! {
                    <div class="notice notice--success">
                        "Thanks! Your message has been sent."
                    </div>
                }.into_any()),
                SubmitStatus::Failed(e) => Some(view! {
                    <div class="notice notice--error">{e}</div>
                }.into_any()),
                _ => None,
            }}

            <div class="form-field">
                <label>"Email"</label>
                <input
                    type="email"
                    placeholder="you@company.com"
                    prop:value=email
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </div>

            <div class="form-field">
                <label>"Message"</label>
                <textarea
                    placeholder="How can we help? (at least 10 characters)"
                    prop:value=message
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                ></textarea>
            </div>

            <button
                class="button button--primary"
                disabled=move || status.get() == SubmitStatus::Sending
                on:click=submit
            >
                {move || if status.get() == SubmitStatus::Sending { "Sending..." } else { "Send message" }}
            </button>
        </div>
    }
}

//! Public pages: industry listing and the single use-case view.

use crate::domain::a001_use_case::api;
use crate::layout::nav::menu_data;
use contracts::domain::a001_use_case::aggregate::UseCase;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use wasm_bindgen_futures::spawn_local;

fn card_view(record: &UseCase) -> impl IntoView {
    let category = record.category.display_name();
    let date = record.date.format("%B %e, %Y").to_string();
    let title = record.title.clone();
    let summary = record.summary.clone();
    let image = record.image.clone();

    // PDF records link out, rich-text records link to the detail page,
    // records with neither are "coming soon"
    let link = if let Some(pdf_url) = record.pdf_url.clone() {
        view! {
            <a href=pdf_url target="_blank" rel="external" class="use-case-card__link">
                "View PDF \u{2192}"
            </a>
        }
        .into_any()
    } else if record.content_html.is_some() {
        let href = format!("/case-studies/{}", record.slug);
        view! {
            <a href=href class="use-case-card__link">"Read more \u{2192}"</a>
        }
        .into_any()
    } else {
        view! { <span class="use-case-card__soon">"Content coming soon"</span> }.into_any()
    };

    view! {
        <article class="use-case-card">
            {image.map(|src| view! {
                <img class="use-case-card__image" src=src alt="" />
            })}
            <div class="use-case-card__body">
                <div class="use-case-card__meta">
                    <span class="use-case-card__category">{category}</span>
                    <span class="use-case-card__date">{date}</span>
                </div>
                <h3 class="use-case-card__title">{title}</h3>
                {summary.map(|s| view! { <p class="use-case-card__summary">{s}</p> })}
                {link}
            </div>
        </article>
    }
}

/// /industries/:slug — newest-first cards for one industry.
#[component]
#[allow(non_snake_case)]
pub fn IndustryPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.get().get("slug").unwrap_or_default();

    let (records, set_records) = signal::<Option<Result<Vec<UseCase>, String>>>(None);
    let (epoch, set_epoch) = signal(0u32);

    Effect::new(move |_| {
        let current_slug = slug();
        let my_epoch = epoch.get_untracked().wrapping_add(1);
        set_epoch.set(my_epoch);
        set_records.set(None);
        spawn_local(async move {
            let result = api::list_by_industry(&current_slug).await;
            // Drop responses that arrive after another navigation
            if epoch.get_untracked() == my_epoch {
                set_records.set(Some(result));
            }
        });
    });

    view! {
        <div class="page industry-page">
            <h1 class="page__title">{move || menu_data::industry_title(&slug())}</h1>
            {move || match records.get() {
                None => view! { <p class="page__status">"Loading..."</p> }.into_any(),
                Some(Err(e)) => view! { <p class="page__status page__status--error">{e}</p> }.into_any(),
                Some(Ok(list)) if list.is_empty() => view! {
                    <p class="page__status">"No published use cases for this industry yet."</p>
                }.into_any(),
                Some(Ok(list)) => view! {
                    <div class="use-case-grid">
                        {list.iter().map(card_view).collect_view()}
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

/// /case-studies/:slug — a single record resolved by its URL slug.
#[component]
#[allow(non_snake_case)]
pub fn UseCasePage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.get().get("slug").unwrap_or_default();

    let (record, set_record) = signal::<Option<Result<Option<UseCase>, String>>>(None);
    let (epoch, set_epoch) = signal(0u32);

    Effect::new(move |_| {
        let current_slug = slug();
        let my_epoch = epoch.get_untracked().wrapping_add(1);
        set_epoch.set(my_epoch);
        set_record.set(None);
        spawn_local(async move {
            let result = api::get_by_slug(&current_slug).await;
            if epoch.get_untracked() == my_epoch {
                set_record.set(Some(result));
            }
        });
    });

    view! {
        <div class="page use-case-page">
            {move || match record.get() {
                None => view! { <p class="page__status">"Loading..."</p> }.into_any(),
                Some(Err(e)) => view! { <p class="page__status page__status--error">{e}</p> }.into_any(),
                Some(Ok(None)) => view! {
                    <div>
                        <h1 class="page__title">"Not found"</h1>
                        <p class="page__status">"This use case does not exist or was removed."</p>
                    </div>
                }.into_any(),
                Some(Ok(Some(record))) => {
                    let date = record.date.format("%B %e, %Y").to_string();
                    let body = if let Some(html) = record.content_html.clone() {
                        view! { <div class="use-case-page__content" inner_html=html></div> }.into_any()
                    } else if let Some(pdf_url) = record.pdf_url.clone() {
                        view! {
                            <a href=pdf_url target="_blank" rel="external" class="button button--primary">
                                "Open PDF"
                            </a>
                        }.into_any()
                    } else {
                        view! { <p class="page__status">"Content coming soon."</p> }.into_any()
                    };
                    view! {
                        <article>
                            <div class="use-case-page__meta">
                                <span>{record.category.display_name()}</span>
                                <span>{date}</span>
                            </div>
                            <h1 class="page__title">{record.title.clone()}</h1>
                            {record.image.clone().map(|src| view! {
                                <img class="use-case-page__image" src=src alt="" />
                            })}
                            {body}
                        </article>
                    }.into_any()
                }
            }}
        </div>
    }
}

//! Full-screen navigation overlay.
//!
//! Two-column layout above the breakpoint: entry list on the left, a
//! disclosure panel (submenu columns or the about text) on the right, driven
//! by hover with a close grace period. Below the breakpoint the same entries
//! become a click accordion with inline expansion.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::menu_data::{self, MenuEntry};
use super::state::{panel_kind, NavState, PanelKind, CLOSE_GRACE_MS};

#[component]
pub fn NavOverlay(nav: RwSignal<NavState>) -> impl IntoView {
    let schedule_close = move || {
        let token = nav.try_update(|n| n.pointer_leave()).flatten();
        if let Some(token) = token {
            spawn_local(async move {
                TimeoutFuture::new(CLOSE_GRACE_MS).await;
                nav.try_update(|n| n.grace_elapsed(token));
            });
        }
    };

    let cancel_close = move || {
        nav.update(|n| {
            if let Some(id) = n.open_entry() {
                n.pointer_enter(id);
            }
        });
    };

    view! {
        <div
            class="nav-overlay"
            class=("nav-overlay--open", move || nav.get().is_overlay_open())
        >
            <div
                class="nav-overlay__backdrop"
                on:click=move |_| nav.update(|n| n.close_overlay())
            ></div>

            <aside class="nav-overlay__body" on:mouseleave=move |_| schedule_close()>
                <div class="nav-overlay__menu-column">
                    <div class="nav-overlay__header">
                        <button
                            class="nav-overlay__close"
                            aria-label="Close Menu"
                            on:click=move |_| nav.update(|n| n.close_overlay())
                        >
                            "\u{2715}"
                        </button>
                        <a
                            href="/"
                            class="nav-overlay__brand"
                            on:click=move |_| nav.update(|n| n.leaf_activated())
                        >
                            <img src="/logo.png" alt="Datamills logo" class="nav-overlay__logo" />
                            <span>"Datamills"</span>
                        </a>
                    </div>

                    <ul class="nav-overlay__entries">
                        {menu_data::get_menu_entries().iter().map(|entry| {
                            entry_view(nav, entry)
                        }).collect_view()}
                    </ul>

                    <div class="nav-overlay__footer">
                        <a
                            href="/contact"
                            class="nav-overlay__footer-link"
                            on:click=move |_| nav.update(|n| n.leaf_activated())
                        >
                            "Contact Us"
                        </a>
                    </div>
                </div>

                <div class="nav-overlay__panel" on:mouseenter=move |_| cancel_close()>
                    {move || panel_view(nav)}
                </div>
            </aside>
        </div>
    }
}

fn entry_view(nav: RwSignal<NavState>, entry: &'static MenuEntry) -> impl IntoView {
    let id = entry.id;
    let expandable = entry.is_expandable();
    let inline_items = entry.all_items();

    view! {
        <li class="nav-overlay__entry">
            <button
                class="nav-overlay__entry-button"
                class=("nav-overlay__entry-button--active", move || {
                    nav.get().open_entry() == Some(id)
                })
                on:click=move |_| nav.update(|n| n.click(id))
                on:mouseenter=move |_| nav.update(|n| n.pointer_enter(id))
            >
                <span class="nav-overlay__entry-label">{entry.name}</span>
                {expandable.then(|| view! {
                    <span
                        class="nav-overlay__chevron"
                        class=("nav-overlay__chevron--open", move || {
                            nav.get().expanded_entry() == Some(id)
                        })
                    >
                        "\u{203a}"
                    </span>
                })}
            </button>

            // Inline accordion content, touch mode only
            {(!inline_items.is_empty()).then(|| view! {
                <div
                    class="nav-overlay__inline"
                    class=("nav-overlay__inline--expanded", move || {
                        nav.get().expanded_entry() == Some(id)
                    })
                >
                    <ul>
                        {inline_items.iter().map(|item| {
                            let href = menu_data::item_href(id, item);
                            view! {
                                <li>
                                    <a
                                        href=href
                                        class="nav-overlay__inline-link"
                                        on:click=move |_| nav.update(|n| n.leaf_activated())
                                    >
                                        {*item}
                                    </a>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </div>
            })}
            {entry.about.as_ref().map(|about| view! {
                <div
                    class="nav-overlay__inline"
                    class=("nav-overlay__inline--expanded", move || {
                        nav.get().expanded_entry() == Some(id)
                    })
                >
                    <p class="nav-overlay__inline-text">{about.paragraphs[0]}</p>
                </div>
            })}
        </li>
    }
}

fn panel_view(nav: RwSignal<NavState>) -> AnyView {
    let open = nav.get().open_entry().and_then(menu_data::find_entry);
    let Some(entry) = open else {
        return view! { <div class="nav-overlay__panel-empty"></div> }.into_any();
    };
    // About content wins over a submenu, see panel_kind
    match (panel_kind(entry), &entry.about, &entry.submenu) {
        (Some(PanelKind::About), Some(about), _) => {
            view! {
                <div class="nav-overlay__about">
                    <h2 class="nav-overlay__panel-title">{about.title}</h2>
                    {about.paragraphs.iter().map(|paragraph| view! {
                        <p class="nav-overlay__about-paragraph">{*paragraph}</p>
                    }).collect_view()}
                </div>
            }
            .into_any()
        }
        (Some(PanelKind::Submenu), _, Some(submenu)) => {
            let id = entry.id;
            view! {
                <div class="nav-overlay__submenu">
                    <h2 class="nav-overlay__panel-title">{submenu.title}</h2>
                    <div class="nav-overlay__columns">
                        {submenu.groups.iter().map(|group| view! {
                            <ul class="nav-overlay__column">
                                {group.items.iter().map(|item| {
                                    let href = menu_data::item_href(id, item);
                                    view! {
                                        <li>
                                            <a
                                                href=href
                                                class="nav-overlay__leaf-link"
                                                on:click=move |_| {
                                                    nav.update(|n| n.leaf_activated())
                                                }
                                            >
                                                {*item}
                                            </a>
                                        </li>
                                    }
                                }).collect_view()}
                            </ul>
                        }).collect_view()}
                    </div>
                </div>
            }
            .into_any()
        }
        _ => view! { <div class="nav-overlay__panel-empty"></div> }.into_any(),
    }
}

//! Top navigation bar: hamburger toggle, brand link, quick links.
//!
//! Owns the shared [`NavState`] signal, the viewport-mode resize listener
//! and the body scroll lock tied to the overlay lifetime.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::sidebar::NavOverlay;
use super::state::{mode_for_width, NavState, ViewportMode};
use crate::shared::scroll_lock;

fn current_mode() -> ViewportMode {
    let width = web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    mode_for_width(width)
}

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = RwSignal::new(NavState::new(current_mode()));

    // Viewport crossings retract the overlay; see NavState::mode_changed
    if let Some(window) = web_sys::window() {
        let on_resize = Closure::<dyn FnMut()>::new(move || {
            nav.try_update(|n| n.mode_changed(current_mode()));
        });
        let _ = window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        on_resize.forget();
    }

    // Scroll lock follows the overlay's open lifetime exactly
    Effect::new(move |_| {
        if nav.get().is_overlay_open() {
            scroll_lock::acquire();
        } else {
            scroll_lock::release();
        }
    });
    on_cleanup(scroll_lock::release);

    view! {
        <nav class="navbar" aria-label="Main Navigation">
            <div class="navbar__inner">
                <div class="navbar__left">
                    <button
                        class="navbar__hamburger"
                        class=("navbar__hamburger--open", move || nav.get().is_overlay_open())
                        aria-label="Toggle Menu"
                        aria-expanded=move || nav.get().is_overlay_open().to_string()
                        on:click=move |_| {
                            nav.update(|n| n.toggle_overlay());
                        }
                    >
                        <span class="navbar__hamburger-bar"></span>
                        <span class="navbar__hamburger-bar"></span>
                        <span class="navbar__hamburger-bar"></span>
                    </button>
                    <a href="/" class="navbar__brand">
                        <img src="/logo.png" alt="Datamills logo" class="navbar__logo" />
                        <span class="navbar__brand-name">"Datamills"</span>
                    </a>
                </div>
                <div class="navbar__right">
                    <a href="/contact" class="navbar__link">"Contact"</a>
                    <a href="/contact" class="navbar__cta">"Get Started"</a>
                </div>
            </div>
        </nav>

        <NavOverlay nav=nav />
    }
}

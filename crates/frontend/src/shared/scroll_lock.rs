//! Body scroll lock for full-screen overlays.
//!
//! Acquire and release always come in pairs tied to the overlay's open
//! lifetime; the component layer calls `release` on every exit path,
//! including unmount.

pub fn acquire() {
    set_body_overflow("hidden");
}

pub fn release() {
    set_body_overflow("");
}

fn set_body_overflow(value: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let style = body.style();
    if value.is_empty() {
        let _ = style.remove_property("overflow");
    } else {
        let _ = style.set_property("overflow", value);
    }
}

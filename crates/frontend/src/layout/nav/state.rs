//! Navigation disclosure state machine.
//!
//! Framework-free reducer behind the full-screen menu overlay. The component
//! layer feeds it DOM events and owns the actual timers and the resize
//! listener; everything order-sensitive lives here where it can be tested.

use super::menu_data::{find_entry, first_expandable_entry, MenuEntry};

/// How the close-delay behaves. Below the breakpoint hover is inert and the
/// menu works as a click accordion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportMode {
    Pointer,
    Touch,
}

pub const TOUCH_BREAKPOINT_PX: f64 = 1024.0;

/// Delay between the pointer leaving an entry and the panel closing, so a
/// diagonal move into the panel does not flicker it shut.
pub const CLOSE_GRACE_MS: u32 = 100;

/// Handed out by [`NavState::pointer_leave`]; stale tokens are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraceToken(u32);

/// Which panel an open entry shows. About content wins when present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelKind {
    About,
    Submenu,
}

pub fn panel_kind(entry: &MenuEntry) -> Option<PanelKind> {
    if entry.about.is_some() {
        Some(PanelKind::About)
    } else if entry.submenu.is_some() {
        Some(PanelKind::Submenu)
    } else {
        None
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavState {
    mode: ViewportMode,
    overlay_open: bool,
    /// Entry whose panel is showing (pointer mode)
    open: Option<&'static str>,
    /// Entry expanded inline (touch accordion)
    expanded: Option<&'static str>,
    grace_seq: u32,
    pending_close: Option<u32>,
}

impl NavState {
    pub fn new(mode: ViewportMode) -> Self {
        Self {
            mode,
            overlay_open: false,
            open: None,
            expanded: None,
            grace_seq: 0,
            pending_close: None,
        }
    }

    pub fn mode(&self) -> ViewportMode {
        self.mode
    }

    pub fn is_overlay_open(&self) -> bool {
        self.overlay_open
    }

    pub fn open_entry(&self) -> Option<&'static str> {
        self.open
    }

    pub fn expanded_entry(&self) -> Option<&'static str> {
        self.expanded
    }

    /// Hamburger toggle. Opening in pointer mode preselects the first entry
    /// that has a panel, matching what the panel column shows by default.
    pub fn toggle_overlay(&mut self) {
        if self.overlay_open {
            self.close_overlay();
            return;
        }
        self.overlay_open = true;
        if self.mode == ViewportMode::Pointer {
            self.open = first_expandable_entry().map(|e| e.id);
        }
    }

    /// Backdrop click, close button, or route change away from the overlay.
    pub fn close_overlay(&mut self) {
        self.overlay_open = false;
        self.open = None;
        self.expanded = None;
        self.pending_close = None;
    }

    pub fn pointer_enter(&mut self, id: &str) {
        if self.mode != ViewportMode::Pointer || !self.overlay_open {
            return;
        }
        // Entering any expandable entry cancels a pending close and switches
        // the panel directly, never passing through a closed state
        if let Some(entry) = find_entry(id) {
            if entry.is_expandable() {
                self.pending_close = None;
                self.open = Some(entry.id);
            }
        }
    }

    /// Arms the close grace period. The caller schedules a timer and feeds
    /// the token back through [`grace_elapsed`](Self::grace_elapsed).
    pub fn pointer_leave(&mut self) -> Option<GraceToken> {
        if self.mode != ViewportMode::Pointer || self.open.is_none() {
            return None;
        }
        self.grace_seq = self.grace_seq.wrapping_add(1);
        self.pending_close = Some(self.grace_seq);
        Some(GraceToken(self.grace_seq))
    }

    pub fn grace_elapsed(&mut self, token: GraceToken) {
        if self.pending_close == Some(token.0) {
            self.pending_close = None;
            self.open = None;
        }
    }

    /// Entry click. Toggles the panel in pointer mode and the inline
    /// accordion in touch mode; clicks on plain links are inert here.
    pub fn click(&mut self, id: &str) {
        if !self.overlay_open {
            return;
        }
        let Some(entry) = find_entry(id) else {
            return;
        };
        if !entry.is_expandable() {
            return;
        }
        match self.mode {
            ViewportMode::Pointer => {
                self.pending_close = None;
                self.open = if self.open == Some(entry.id) {
                    None
                } else {
                    Some(entry.id)
                };
            }
            ViewportMode::Touch => {
                self.expanded = if self.expanded == Some(entry.id) {
                    None
                } else {
                    Some(entry.id)
                };
            }
        }
    }

    /// A leaf link was followed; the whole overlay goes away.
    pub fn leaf_activated(&mut self) {
        self.close_overlay();
    }

    /// Viewport crossed the breakpoint. Interaction grammar changes, so any
    /// open disclosure closes rather than surviving in a half-valid shape.
    pub fn mode_changed(&mut self, mode: ViewportMode) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        self.close_overlay();
    }
}

pub fn mode_for_width(width: f64) -> ViewportMode {
    if width >= TOUCH_BREAKPOINT_PX {
        ViewportMode::Pointer
    } else {
        ViewportMode::Touch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_pointer_nav() -> NavState {
        let mut nav = NavState::new(ViewportMode::Pointer);
        nav.toggle_overlay();
        nav
    }

    fn open_touch_nav() -> NavState {
        let mut nav = NavState::new(ViewportMode::Touch);
        nav.toggle_overlay();
        nav
    }

    #[test]
    fn starts_closed() {
        let nav = NavState::new(ViewportMode::Pointer);
        assert!(!nav.is_overlay_open());
        assert_eq!(nav.open_entry(), None);
        assert_eq!(nav.expanded_entry(), None);
    }

    #[test]
    fn pointer_open_preselects_the_first_panel_entry() {
        let nav = open_pointer_nav();
        assert!(nav.is_overlay_open());
        assert_eq!(nav.open_entry(), Some("industries"));
    }

    #[test]
    fn touch_open_preselects_nothing() {
        let nav = open_touch_nav();
        assert!(nav.is_overlay_open());
        assert_eq!(nav.open_entry(), None);
        assert_eq!(nav.expanded_entry(), None);
    }

    #[test]
    fn hover_switches_panels_exclusively() {
        let mut nav = open_pointer_nav();
        nav.pointer_enter("capabilities");
        assert_eq!(nav.open_entry(), Some("capabilities"));
        nav.pointer_enter("about");
        assert_eq!(nav.open_entry(), Some("about"));
    }

    #[test]
    fn hover_on_a_plain_link_changes_nothing() {
        let mut nav = open_pointer_nav();
        nav.pointer_enter("blog");
        assert_eq!(nav.open_entry(), Some("industries"));
    }

    #[test]
    fn grace_close_fires_only_when_current() {
        let mut nav = open_pointer_nav();
        let token = nav.pointer_leave().unwrap();
        nav.grace_elapsed(token);
        assert_eq!(nav.open_entry(), None);
    }

    #[test]
    fn reentry_cancels_the_armed_close() {
        let mut nav = open_pointer_nav();
        let token = nav.pointer_leave().unwrap();
        nav.pointer_enter("industries");
        nav.grace_elapsed(token);
        assert_eq!(nav.open_entry(), Some("industries"));
    }

    #[test]
    fn stale_token_cannot_close_a_newer_panel() {
        let mut nav = open_pointer_nav();
        let stale = nav.pointer_leave().unwrap();
        nav.pointer_enter("capabilities");
        let fresh = nav.pointer_leave().unwrap();
        nav.grace_elapsed(stale);
        assert_eq!(nav.open_entry(), Some("capabilities"));
        nav.grace_elapsed(fresh);
        assert_eq!(nav.open_entry(), None);
    }

    #[test]
    fn touch_click_toggles_an_accordion() {
        let mut nav = open_touch_nav();
        nav.click("industries");
        assert_eq!(nav.expanded_entry(), Some("industries"));

        // Only one section expanded at a time
        nav.click("careers");
        assert_eq!(nav.expanded_entry(), Some("careers"));

        // Second click on the same section collapses it
        nav.click("careers");
        assert_eq!(nav.expanded_entry(), None);
    }

    #[test]
    fn hover_is_inert_in_touch_mode() {
        let mut nav = open_touch_nav();
        nav.pointer_enter("industries");
        assert_eq!(nav.open_entry(), None);
        assert!(nav.pointer_leave().is_none());
    }

    #[test]
    fn leaf_activation_closes_everything() {
        let mut nav = open_touch_nav();
        nav.click("industries");
        nav.leaf_activated();
        assert!(!nav.is_overlay_open());
        assert_eq!(nav.expanded_entry(), None);
    }

    #[test]
    fn mode_change_force_closes() {
        let mut nav = open_pointer_nav();
        nav.pointer_enter("capabilities");
        nav.mode_changed(ViewportMode::Touch);
        assert!(!nav.is_overlay_open());
        assert_eq!(nav.open_entry(), None);

        // Same-mode notification is a no-op
        let mut nav = open_pointer_nav();
        nav.mode_changed(ViewportMode::Pointer);
        assert!(nav.is_overlay_open());
    }

    #[test]
    fn about_panel_wins_over_submenu() {
        let about = find_entry("about").unwrap();
        assert_eq!(panel_kind(about), Some(PanelKind::About));
        let industries = find_entry("industries").unwrap();
        assert_eq!(panel_kind(industries), Some(PanelKind::Submenu));
        let blog = find_entry("blog").unwrap();
        assert_eq!(panel_kind(blog), None);
    }

    #[test]
    fn breakpoint_maps_to_modes() {
        assert_eq!(mode_for_width(1024.0), ViewportMode::Pointer);
        assert_eq!(mode_for_width(1023.0), ViewportMode::Touch);
    }
}

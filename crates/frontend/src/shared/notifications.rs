//! Transient status notices for the admin panel.
//!
//! One slot, replace-not-queue: showing a new notice displaces the current
//! one and restarts the clock. The board itself is a plain value so the
//! replacement rules are testable; [`NotificationService`] wraps it in a
//! signal and owns the auto-clear timer.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub const NOTICE_TTL_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Each `show` bumps the epoch; an expiry only lands when its epoch is still
/// current, so a timer from a displaced notice can never clear its successor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoticeBoard {
    current: Option<Notice>,
    epoch: u32,
}

impl NoticeBoard {
    pub fn show(&mut self, kind: NoticeKind, message: String) -> u32 {
        self.epoch = self.epoch.wrapping_add(1);
        self.current = Some(Notice { kind, message });
        self.epoch
    }

    pub fn expire(&mut self, epoch: u32) {
        if epoch == self.epoch {
            self.current = None;
        }
    }

    pub fn dismiss(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.current = None;
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    board: RwSignal<NoticeBoard>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            board: RwSignal::new(NoticeBoard::default()),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(NoticeKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(NoticeKind::Error, message.into());
    }

    fn show(&self, kind: NoticeKind, message: String) {
        let Some(epoch) = self.board.try_update(|b| b.show(kind, message)) else {
            return;
        };
        let board = self.board;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TTL_MS).await;
            // try_update: the admin page may be gone by the time we fire
            board.try_update(|b| b.expire(epoch));
        });
    }

    pub fn current(&self) -> Option<Notice> {
        self.board.get().current().cloned()
    }

    pub fn dismiss(&self) {
        self.board.try_update(|b| b.dismiss());
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_replaces_instead_of_queueing() {
        let mut board = NoticeBoard::default();
        board.show(NoticeKind::Success, "saved".into());
        board.show(NoticeKind::Error, "failed".into());

        let current = board.current().unwrap();
        assert_eq!(current.kind, NoticeKind::Error);
        assert_eq!(current.message, "failed");
    }

    #[test]
    fn stale_expiry_does_not_clear_a_newer_notice() {
        let mut board = NoticeBoard::default();
        let first = board.show(NoticeKind::Success, "saved".into());
        let second = board.show(NoticeKind::Success, "deleted".into());

        board.expire(first);
        assert!(board.current().is_some());

        board.expire(second);
        assert!(board.current().is_none());
    }

    #[test]
    fn dismiss_invalidates_the_pending_expiry() {
        let mut board = NoticeBoard::default();
        let epoch = board.show(NoticeKind::Error, "failed".into());
        board.dismiss();
        assert!(board.current().is_none());

        board.show(NoticeKind::Success, "saved".into());
        board.expire(epoch);
        assert!(board.current().is_some());
    }
}

//! Page Context
//!
//! Transient notifications shared by the components of one page.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "message success",
            NoticeKind::Error => "message error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// At most one notice is visible; a new one replaces the old.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeSlot {
    pub current: Option<Notice>,
    next_id: u64,
}

impl NoticeSlot {
    pub fn show(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.current = Some(Notice { id: self.next_id, kind, text: text.into() });
        self.next_id
    }

    /// Dismiss only if `id` is still the visible notice
    pub fn dismiss(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

/// Notification controller for one page
#[derive(Clone, Copy)]
pub struct Notifier {
    slot: RwSignal<NoticeSlot>,
    lifetime_ms: u32,
}

impl Notifier {
    pub fn new(lifetime_ms: u32) -> Self {
        Self { slot: RwSignal::new(NoticeSlot::default()), lifetime_ms }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(NoticeKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(NoticeKind::Error, text.into());
    }

    fn show(&self, kind: NoticeKind, text: String) {
        let Some(id) = self.slot.try_update(|slot| slot.show(kind, text)) else {
            return;
        };
        let (slot, lifetime_ms) = (self.slot, self.lifetime_ms);
        spawn_local(async move {
            TimeoutFuture::new(lifetime_ms).await;
            slot.try_update(|s| s.dismiss(id));
        });
    }

    pub fn clear(&self) {
        self.slot.update(|s| s.clear());
    }

    pub fn current(&self) -> Option<Notice> {
        self.slot.with(|s| s.current.clone())
    }
}

pub fn use_notifier() -> Notifier {
    expect_context::<Notifier>()
}

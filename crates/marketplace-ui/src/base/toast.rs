//! Toast queue shared through a yewdux store.
//!
//! # Design
//! - The queue is the only owner of visible toasts; callers push captions and forget them.
//! - Timestamps are passed in so the queue stays DOM-free.
//! - Oldest toasts are dropped once [`MAX_VISIBLE`] is exceeded.

use crate::models::{Toast, ToastKind};
use yewdux::store::Store;

/// Milliseconds a toast stays on screen before it dismisses itself.
pub const AUTO_DISMISS_MS: u32 = 5_000;
/// Upper bound on simultaneously visible toasts.
pub const MAX_VISIBLE: usize = 4;
/// Classes applied to error toasts.
pub const ERROR_TOAST_CLASS: &str = "bg-foreground text-white";
/// Classes shared by every toast surface.
pub const TOAST_BASE_CLASS: &str = "toast font-mono rounded px-4 py-2 shadow flex items-center gap-4";

/// Screen corner a toast stack is anchored to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ToastPosition {
    /// Upper-left corner.
    #[default]
    TopLeft,
}

impl ToastPosition {
    /// Layout classes anchoring the stack container.
    #[must_use]
    pub const fn container_class(self) -> &'static str {
        match self {
            Self::TopLeft => "fixed top-4 left-4 z-50 flex flex-col gap-2",
        }
    }

    /// Stable identifier exposed as a data attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
        }
    }
}

/// Visible toasts plus the id counter.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    last_id: u64,
}

impl ToastQueue {
    /// Queue an error toast raised at `now_ms` and return its id.
    pub fn push_error(&mut self, caption: impl Into<String>, now_ms: f64) -> u64 {
        self.push(ToastKind::Error, caption.into(), now_ms)
    }

    fn push(&mut self, kind: ToastKind, message: String, raised_at_ms: f64) -> u64 {
        self.last_id += 1;
        let id = self.last_id;
        self.toasts.push(Toast {
            id,
            message,
            kind,
            raised_at_ms,
        });
        if self.toasts.len() > MAX_VISIBLE {
            let drain = self.toasts.len() - MAX_VISIBLE;
            self.toasts.drain(0..drain);
        }
        id
    }

    /// Remove the toast with `id`; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    /// Visible toasts, oldest first.
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Milliseconds left before a toast raised at `raised_at_ms` should dismiss.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn remaining_ms(raised_at_ms: f64, now_ms: f64) -> u32 {
    let elapsed = (now_ms - raised_at_ms).max(0.0);
    let left = f64::from(AUTO_DISMISS_MS) - elapsed;
    if left <= 0.0 { 0 } else { left.ceil() as u32 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_error_shows_one_error_toast() {
        let mut queue = ToastQueue::default();
        let id = queue.push_error("Network error", 0.0);
        assert_eq!(queue.toasts().len(), 1);
        let toast = &queue.toasts()[0];
        assert_eq!(toast.id, id);
        assert_eq!(toast.message, "Network error");
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(ToastPosition::default(), ToastPosition::TopLeft);
    }

    #[test]
    fn ids_increase_and_oldest_toasts_drop() {
        let mut queue = ToastQueue::default();
        let ids: Vec<u64> = (0..6)
            .map(|n| queue.push_error(format!("failure {n}"), 10.0))
            .collect();
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(queue.toasts().len(), MAX_VISIBLE);
        assert_eq!(queue.toasts()[0].message, "failure 2");
        assert_eq!(queue.toasts()[3].message, "failure 5");
    }

    #[test]
    fn dismiss_removes_only_the_matching_toast() {
        let mut queue = ToastQueue::default();
        let first = queue.push_error("a", 0.0);
        let second = queue.push_error("b", 0.0);
        queue.dismiss(first);
        queue.dismiss(999);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, second);
    }

    #[test]
    fn remaining_time_counts_down_and_clamps() {
        assert_eq!(remaining_ms(1_000.0, 1_000.0), AUTO_DISMISS_MS);
        assert_eq!(remaining_ms(1_000.0, 3_500.0), 2_500);
        assert_eq!(remaining_ms(1_000.0, 9_000.0), 0);
        assert_eq!(remaining_ms(5_000.0, 1_000.0), AUTO_DISMISS_MS);
    }

    #[test]
    fn top_left_position_is_fixed() {
        let position = ToastPosition::TopLeft;
        assert_eq!(position.as_str(), "top-left");
        assert!(position.container_class().contains("top-4 left-4"));
    }
}

//! Browser-side services: REST client and notifications.

pub mod api;
pub mod toasts;

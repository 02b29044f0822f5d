//! Core, DOM-free primitives and helpers for the Web UI.
pub mod http;
pub mod routes;
pub mod styles;
pub mod toast;

/// Id of the element the app mounts into.
pub const MOUNT_POINT_ID: &str = "root";

//! Login feature surface: credential draft state and the login page view.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;

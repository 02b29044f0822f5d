#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Marketplace Web UI.
//! This crate holds the Yew front-end entrypoint for the login screen plus its DOM-free
//! state, styling tokens, and transport configuration.

pub mod base;
pub mod features;
pub mod models;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod services;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::base::routes::Route;
    use crate::features::login::state::{CredentialsDraft, LoginAction};
    use std::rc::Rc;
    use yew::functional::Reducible;
    use yew_router::Routable;

    #[test]
    fn login_scenario_types_then_submits_without_effect() {
        let mut draft = Rc::new(CredentialsDraft::default());
        let mut typed = String::new();
        for ch in "alice".chars() {
            typed.push(ch);
            draft = draft.reduce(LoginAction::SetLogin(typed.clone()));
        }
        let mut typed = String::new();
        for ch in "secret".chars() {
            typed.push(ch);
            draft = draft.reduce(LoginAction::SetPassword(typed.clone()));
        }
        assert_eq!(draft.login, "alice");
        assert_eq!(draft.password, "secret");

        let submitted = Rc::clone(&draft).reduce(LoginAction::Submit);
        assert!(Rc::ptr_eq(&draft, &submitted));
    }

    #[test]
    fn only_the_login_path_is_routed() {
        assert_eq!(Route::recognize("/login"), Some(Route::Login));
        assert_eq!(Route::recognize("/"), None);
    }
}

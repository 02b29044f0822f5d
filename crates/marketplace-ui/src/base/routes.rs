//! Routing definitions for the marketplace UI.
//!
//! Only the login screen is routed. There is no catch-all, so any other path renders nothing.
use yew_router::prelude::*;

/// Client-side routes served by the app.
#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    /// Login screen.
    #[at("/login")]
    Login,
}

//! App root: router, toast host, shared client context, and the wasm entrypoint.

use crate::base::MOUNT_POINT_ID;
use crate::base::http::ClientConfig;
use crate::base::routes::Route;
use crate::components::page::UiPage;
use crate::components::toast::ToastHost;
use crate::features::login::view::LoginPage;
use crate::services::api::ApiCtx;
use crate::theme;
use gloo::console;
use gloo::utils::{document, window};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(MarketplaceApp)]
pub(crate) fn marketplace_app() -> Html {
    let api_ctx = use_memo(|_| ApiCtx::new(ClientConfig::default()), ());

    use_effect_with_deps(
        |_| {
            apply_palette();
            || ()
        },
        (),
    );

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
            <ToastHost />
        </ContextProvider<ApiCtx>>
    }
}

#[allow(clippy::needless_pass_by_value)]
fn switch(route: Route) -> Html {
    match route {
        Route::Login => html! {
            <UiPage>
                <LoginPage />
            </UiPage>
        },
    }
}

fn apply_palette() {
    if let Some(body) = window().document().and_then(|doc| doc.body()) {
        if let Err(err) = body.set_attribute("style", &theme::inline_style()) {
            console::error!("applying palette failed", err);
        }
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = document().get_element_by_id(MOUNT_POINT_ID) {
        yew::Renderer::<MarketplaceApp>::with_root(root).render();
    } else {
        console::debug!("no #root element; mounting on <body>");
        yew::Renderer::<MarketplaceApp>::new().render();
    }
}

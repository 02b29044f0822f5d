//! Login page view.

use crate::base::styles;
use crate::components::theming::{BigText, Button, Center, Input, ProtectedInput, Text};
use crate::features::login::state::{CredentialsDraft, LoginAction};
use yew::prelude::*;

/// Centered login card with login and password fields.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let draft = use_reducer(CredentialsDraft::default);

    let on_login = {
        let draft = draft.dispatcher();
        Callback::from(move |value: String| draft.dispatch(LoginAction::SetLogin(value)))
    };
    let on_password = {
        let draft = draft.dispatcher();
        Callback::from(move |value: String| draft.dispatch(LoginAction::SetPassword(value)))
    };
    let on_submit = {
        let draft = draft.dispatcher();
        Callback::from(move |()| draft.dispatch(LoginAction::Submit))
    };

    html! {
        <Center>
            <div class={styles::LOGIN_CARD}>
                <div class={styles::LOGIN_TITLE_ROW}>
                    <BigText text="Crypto scam" />
                </div>
                <div class={styles::LOGIN_FIELD_ROW}>
                    <Input placeholder="Enter login" value={draft.login.clone()} onchange={on_login} />
                </div>
                <div class={styles::LOGIN_FIELD_ROW}>
                    <ProtectedInput placeholder="Enter password" value={draft.password.clone()} onchange={on_password} />
                </div>
                <div class={styles::LOGIN_ACTIONS}>
                    <Button onclick={on_submit}>
                        <Text text="Login" />
                    </Button>
                </div>
            </div>
        </Center>
    }
}

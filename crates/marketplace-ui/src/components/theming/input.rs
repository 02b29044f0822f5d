//! Controlled text inputs.
//!
//! Neither component buffers a value: the DOM shows `value` from props and every edit is
//! forwarded to `onchange` for the owner to store.

use crate::base::styles::{self, InputKind};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct InputProps {
    pub(crate) placeholder: AttrValue,
    pub(crate) value: AttrValue,
    pub(crate) onchange: Callback<String>,
}

#[function_component(Input)]
pub(crate) fn input(props: &InputProps) -> Html {
    render_control(props, InputKind::Plain)
}

#[function_component(ProtectedInput)]
pub(crate) fn protected_input(props: &InputProps) -> Html {
    render_control(props, InputKind::Protected)
}

fn render_control(props: &InputProps, kind: InputKind) -> Html {
    let oninput = {
        let onchange = props.onchange.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                onchange.emit(input.value());
            }
        })
    };

    html! {
        <input
            type={kind.html_type()}
            class={styles::INPUT}
            placeholder={props.placeholder.clone()}
            value={props.value.clone()}
            oninput={oninput}
        />
    }
}

use crate::base::styles;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ButtonProps {
    #[prop_or_default]
    pub(crate) children: Children,
    /// Click handler; clicks are inert when absent.
    #[prop_or_default]
    pub(crate) onclick: Option<Callback<()>>,
}

#[function_component(Button)]
pub(crate) fn button(props: &ButtonProps) -> Html {
    let onclick = props.onclick.clone().map(|handler| {
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            handler.emit(());
        })
    });

    html! {
        <button type="button" class={styles::BUTTON} onclick={onclick}>
            { for props.children.iter() }
        </button>
    }
}

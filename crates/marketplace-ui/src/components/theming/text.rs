use crate::base::styles;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct TextProps {
    pub(crate) text: AttrValue,
}

#[function_component(Text)]
pub(crate) fn text(props: &TextProps) -> Html {
    html! { <span class={styles::TEXT}>{props.text.clone()}</span> }
}

#[function_component(BigText)]
pub(crate) fn big_text(props: &TextProps) -> Html {
    html! { <span class={styles::BIG_TEXT}>{props.text.clone()}</span> }
}

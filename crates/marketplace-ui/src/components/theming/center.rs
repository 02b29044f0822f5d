use crate::base::styles;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct CenterProps {
    #[prop_or_default]
    pub(crate) children: Children,
}

#[function_component(Center)]
pub(crate) fn center(props: &CenterProps) -> Html {
    html! {
        <div class={styles::CENTER_OUTER}>
            <div class={styles::CENTER_INNER}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

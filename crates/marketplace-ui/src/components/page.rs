use crate::base::styles;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct UiPageProps {
    #[prop_or_default]
    pub(crate) children: Children,
}

/// Full-viewport shell every routed page renders inside.
#[function_component(UiPage)]
pub(crate) fn ui_page(props: &UiPageProps) -> Html {
    html! {
        <div class={styles::PAGE}>
            { for props.children.iter() }
        </div>
    }
}

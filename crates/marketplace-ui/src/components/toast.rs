use crate::base::toast::{
    ERROR_TOAST_CLASS, TOAST_BASE_CLASS, ToastPosition, ToastQueue, remaining_ms,
};
use crate::models::{Toast, ToastKind};
use gloo::timers::callback::Timeout;
use js_sys::Date;
use yew::prelude::*;
use yewdux::prelude::use_store;

#[derive(Properties, PartialEq)]
pub(crate) struct ToastHostProps {
    #[prop_or_default]
    pub(crate) position: ToastPosition,
}

/// Renders the global toast queue and dismisses each toast once its time is up.
#[function_component(ToastHost)]
pub(crate) fn toast_host(props: &ToastHostProps) -> Html {
    let (queue, dispatch) = use_store::<ToastQueue>();
    let on_dismiss = Callback::from(move |id: u64| dispatch.reduce_mut(|queue| queue.dismiss(id)));
    {
        let toasts = queue.toasts().to_vec();
        let on_dismiss = on_dismiss.clone();
        use_effect_with_deps(
            move |list: &Vec<Toast>| {
                let now = Date::now();
                let handles: Vec<Timeout> = list
                    .iter()
                    .map(|toast| {
                        let on_dismiss = on_dismiss.clone();
                        let id = toast.id;
                        Timeout::new(remaining_ms(toast.raised_at_ms, now), move || {
                            on_dismiss.emit(id);
                        })
                    })
                    .collect();
                move || drop(handles)
            },
            toasts,
        );
    }

    html! {
        <div
            class={classes!("toast-host", props.position.container_class())}
            data-position={props.position.as_str()}
            aria-live="polite"
            aria-atomic="true"
        >
            {for queue.toasts().iter().map(|toast| render_toast(toast, on_dismiss.clone()))}
        </div>
    }
}

fn render_toast(toast: &Toast, on_dismiss: Callback<u64>) -> Html {
    let tone = match toast.kind {
        ToastKind::Error => ERROR_TOAST_CLASS,
    };
    let id = toast.id;
    let on_close = Callback::from(move |_| on_dismiss.emit(id));

    html! {
        <div key={id} class={classes!(TOAST_BASE_CLASS, tone)} role={toast.kind.aria_role()}>
            <span>{toast.message.clone()}</span>
            <button type="button" class="opacity-70 hover:opacity-100" aria-label="Dismiss" onclick={on_close}>{"✕"}</button>
        </div>
    }
}

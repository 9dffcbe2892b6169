use yew::prelude::*;
use shared::notifier::{Toast, ToastKind};
use crate::styles;

/// A toast on screen, keyed so it can be dismissed on its own timer.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveToast {
    pub id: u32,
    pub toast: Toast,
}

pub fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => styles::TOAST_SUCCESS,
        ToastKind::Warning => styles::TOAST_WARNING,
        ToastKind::Info => styles::TOAST_INFO,
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastStackProps {
    pub toasts: Vec<ActiveToast>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(ToastStack)]
pub fn toast_stack(props: &ToastStackProps) -> Html {
    html! {
        <div class={styles::TOAST_CONTAINER}>
            { for props.toasts.iter().map(|active| {
                let id = active.id;
                let on_dismiss = props.on_dismiss.clone();
                html! {
                    <div
                        key={id}
                        role="status"
                        class={classes!(styles::TOAST_BASE, toast_class(active.toast.kind), "cursor-pointer")}
                        onclick={Callback::from(move |_| on_dismiss.emit(id))}
                    >
                        {active.toast.message.clone()}
                    </div>
                }
            }) }
        </div>
    }
}

use dioxus::prelude::*;
use types::state::{Toast as ToastMessage, ToastKind};

use crate::{Icon, IconName, cx};

#[component]
pub fn Skeleton(#[props(default)] class: String) -> Element {
    rsx! {
        div { class: cx(["skeleton", class.as_str()]), aria_hidden: "true" }
    }
}

/// Bottom-right notification. Click to dismiss.
#[component]
pub fn Toast(toast: Option<ToastMessage>, on_dismiss: EventHandler<()>) -> Element {
    let Some(toast) = toast else {
        return rsx! {};
    };
    let kind = match toast.kind {
        ToastKind::Success => "toast-success",
        ToastKind::Error => "toast-error",
    };

    rsx! {
        div {
            class: cx(["toast", kind]),
            role: "status",
            aria_live: "polite",
            onclick: move |_| on_dismiss.call(()),
            if toast.kind == ToastKind::Success {
                Icon { name: IconName::CheckCircle }
            }
            span { "{toast.message}" }
        }
    }
}

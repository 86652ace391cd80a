use dioxus::prelude::*;

use crate::cx;

#[component]
pub fn Input(
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] class: String,
    oninput: Option<EventHandler<String>>,
) -> Element {
    rsx! {
        input {
            class: cx(["input", class.as_str()]),
            r#type: input_type,
            placeholder,
            value,
            aria_label,
            oninput: move |e| {
                if let Some(handler) = oninput {
                    handler.call(e.value());
                }
            },
        }
    }
}

/// Native `select`; pass `option` elements as children.
#[component]
pub fn Select(
    #[props(default)] value: String,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] class: String,
    onchange: Option<EventHandler<String>>,
    children: Element,
) -> Element {
    rsx! {
        select {
            class: cx(["select", class.as_str()]),
            value,
            aria_label,
            onchange: move |e| {
                if let Some(handler) = onchange {
                    handler.call(e.value());
                }
            },
            {children}
        }
    }
}

#[component]
pub fn Toggle(checked: bool, label: String, onchange: EventHandler<bool>) -> Element {
    rsx! {
        label { class: "toggle",
            input {
                r#type: "checkbox",
                role: "switch",
                checked,
                aria_checked: if checked { "true" } else { "false" },
                onchange: move |_| onchange.call(!checked),
            }
            span { class: "toggle-track", span { class: "toggle-thumb" } }
            span { class: "toggle-label", "{label}" }
        }
    }
}

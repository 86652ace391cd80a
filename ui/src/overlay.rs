use dioxus::prelude::*;

use crate::{
    cx,
    loader::{run_scoped, scoped_script},
    use_element_id,
};

const ESCAPE_LISTENER: &str = r#"
window.__dpKeys = window.__dpKeys || {};
const onKey = (e) => {
    if (e.key === "Escape") dioxus.send(e.key);
};
window.__dpKeys[id] = onKey;
window.addEventListener("keydown", onKey);
"#;

const REMOVE_ESCAPE_LISTENER: &str = r#"
if (window.__dpKeys && window.__dpKeys[id]) {
    window.removeEventListener("keydown", window.__dpKeys[id]);
    delete window.__dpKeys[id];
}
"#;

#[component]
pub fn Modal(open: bool, title: String, on_close: EventHandler<()>, children: Element) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div { class: "modal-overlay", onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                role: "dialog",
                aria_modal: "true",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        aria_label: "Tutup",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                {children}
            }
        }
    }
}

/// Right-hand side panel. Closes on overlay click, the close button or Escape.
#[component]
pub fn Drawer(open: bool, title: String, on_close: EventHandler<()>, children: Element) -> Element {
    let mut is_open = use_signal(|| open);
    use_effect(use_reactive!(|open| is_open.set(open)));

    let id = use_element_id("drawer");
    let listener = id.clone();
    use_drop(move || run_scoped(&id, REMOVE_ESCAPE_LISTENER));

    use_future(move || {
        let id = listener.clone();
        async move {
            let code = match scoped_script(&id, ESCAPE_LISTENER) {
                Ok(code) => code,
                Err(e) => {
                    tracing::error!(drawer = %id, error = %e, "failed to build key listener");
                    return;
                }
            };
            let mut keys = document::eval(&code);
            while keys.recv::<String>().await.is_ok() {
                if is_open() {
                    on_close.call(());
                }
            }
        }
    });

    rsx! {
        div {
            class: cx(["drawer-overlay", if open { "open" } else { "" }]),
            onclick: move |_| on_close.call(()),
        }
        aside {
            class: cx(["drawer", if open { "open" } else { "" }]),
            role: "dialog",
            aria_hidden: if open { "false" } else { "true" },
            div { class: "drawer-header",
                h2 { class: "drawer-title", "{title}" }
                button {
                    class: "modal-close",
                    aria_label: "Tutup",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
            }
            div { class: "drawer-body",
                if open {
                    {children}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_listener_is_registered_and_removed_under_one_id() {
        let add = scoped_script("drawer-3", ESCAPE_LISTENER).unwrap();
        let remove = scoped_script("drawer-3", REMOVE_ESCAPE_LISTENER).unwrap();
        assert!(add.starts_with("const id = \"drawer-3\";\n"));
        assert!(add.contains("window.__dpKeys[id] = onKey;"));
        assert!(remove.starts_with("const id = \"drawer-3\";\n"));
        assert!(remove.contains(r#"window.removeEventListener("keydown", window.__dpKeys[id]);"#));
        assert!(remove.contains("delete window.__dpKeys[id]"));
    }
}

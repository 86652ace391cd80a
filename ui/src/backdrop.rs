use dioxus::prelude::*;
use types::config::CONFIG;

use crate::loader::use_script_bundle;

/// Hero strip with the 3D scene behind a gradient veil. Until the viewer
/// script is ready (or if it never loads) only the gradient shows.
#[component]
pub fn SceneBackdrop(children: Element) -> Element {
    let viewer = use_script_bundle(&CONFIG.scene.viewer);
    let ready = matches!(*viewer.read(), Some(Ok(())));
    let scene = format!(
        r#"<spline-viewer url="{}" loading-anim-type="none"></spline-viewer>"#,
        CONFIG.scene.url
    );

    rsx! {
        div { class: "hero",
            if ready {
                div { class: "hero-scene", aria_hidden: "true", dangerous_inner_html: scene }
            }
            div { class: "hero-veil" }
            {children}
        }
    }
}

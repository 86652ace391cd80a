//! Reusable dashboard widgets.

use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::use_hook;

mod backdrop;
mod badge;
mod button;
mod card;
mod charts;
mod feedback;
mod form;
mod icons;
mod loader;
mod overlay;
mod table;

pub use backdrop::SceneBackdrop;
pub use badge::{Badge, BadgeColor};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardVariant, Tone};
pub use charts::{CandlesChart, SalesLineChart};
pub use feedback::{Skeleton, Toast};
pub use form::{Input, Select, Toggle};
pub use icons::{Icon, IconName};
pub use loader::{load_bundle, use_script_bundle};
pub use overlay::{Drawer, Modal};
pub use table::DataTable;

static NEXT_ELEMENT_ID: AtomicUsize = AtomicUsize::new(0);

/// A DOM id unique for the page, fixed for the component's lifetime.
pub(crate) fn use_element_id(prefix: &'static str) -> String {
    use_hook(|| element_id(prefix))
}

fn element_id(prefix: &str) -> String {
    format!("{prefix}-{}", NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed))
}

/// Join class names, skipping empty parts.
pub fn cx<'a>(classes: impl IntoIterator<Item = &'a str>) -> String {
    classes
        .into_iter()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cx_skips_empty_parts() {
        assert_eq!(cx(["btn", "", "btn-primary", "  "]), "btn btn-primary");
        assert_eq!(cx(Vec::<&str>::new()), "");
    }

    #[test]
    fn element_ids_are_never_reused() {
        let first = element_id("chart");
        let second = element_id("chart");
        assert!(first.starts_with("chart-"));
        assert_ne!(first, second);
    }
}

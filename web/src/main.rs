use dioxus::prelude::*;
use types::{
    NavItem, Role, SectionKey, nav_for, visible_section,
    config::CONFIG,
    state::DashboardState,
};
use ui::{
    Badge, BadgeColor, Button, ButtonVariant, Card, CardVariant, Icon, IconName, Input,
    SceneBackdrop, Select, Tone,
};

mod views;

use views::{
    Logs, Overview, PayoutModal, Payments, Payouts, Products, Sales, Settings, System,
    TransactionDrawer, Users,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(DashboardLayout)]
        #[route("/")]
        Overview {},
        #[route("/sales")]
        Sales {},
        #[route("/payments")]
        Payments {},
        #[route("/payouts")]
        Payouts {},
        #[route("/products")]
        Products {},
        #[route("/system")]
        System {},
        #[route("/users")]
        Users {},
        #[route("/logs")]
        Logs {},
        #[route("/settings")]
        Settings {},
}

impl Route {
    pub fn section(&self) -> SectionKey {
        match self {
            Route::Overview {} => SectionKey::Overview,
            Route::Sales {} => SectionKey::Sales,
            Route::Payments {} => SectionKey::Payments,
            Route::Payouts {} => SectionKey::Payouts,
            Route::Products {} => SectionKey::Products,
            Route::System {} => SectionKey::System,
            Route::Users {} => SectionKey::Users,
            Route::Logs {} => SectionKey::Logs,
            Route::Settings {} => SectionKey::Settings,
        }
    }
}

impl From<SectionKey> for Route {
    fn from(section: SectionKey) -> Self {
        match section {
            SectionKey::Overview => Route::Overview {},
            SectionKey::Sales => Route::Sales {},
            SectionKey::Payments => Route::Payments {},
            SectionKey::Payouts => Route::Payouts {},
            SectionKey::Products => Route::Products {},
            SectionKey::System => Route::System {},
            SectionKey::Users => Route::Users {},
            SectionKey::Logs => Route::Logs {},
            SectionKey::Settings => Route::Settings {},
        }
    }
}

fn main() {
    #[cfg(feature = "web")]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(DashboardState::new(CONFIG.default_role)));

    rsx! {
        document::Title { "{CONFIG.brand}" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}

/// Shared view state of the dashboard shell.
pub fn use_dashboard() -> Signal<DashboardState> {
    use_context::<Signal<DashboardState>>()
}

#[component]
fn NavLink(item: NavItem) -> Element {
    let current_route: Route = use_route();
    let to = Route::from(item.key);
    let is_active = current_route == to;

    rsx! {
        Link {
            to,
            class: if is_active { "nav-link active" } else { "nav-link" },
            "{item.label}"
        }
    }
}

#[component]
fn Header() -> Element {
    let mut dashboard = use_dashboard();
    let role = dashboard.read().role;

    rsx! {
        SceneBackdrop {
            header { class: "topbar",
                div { class: "topbar-brand",
                    button {
                        class: "sidebar-toggle",
                        aria_label: "Toggle Sidebar",
                        onclick: move |_| dashboard.write().toggle_sidebar(),
                        Icon { name: IconName::Menu }
                    }
                    span { class: "brand", "{CONFIG.brand}" }
                    Badge { color: BadgeColor::Role, "{role}" }
                }
                div { class: "topbar-actions",
                    div { class: "search",
                        Icon { name: IconName::Search, class: "icon search-icon" }
                        Input {
                            placeholder: "Cari transaksi, produk, pengguna...",
                            aria_label: "Search",
                            class: "search-input",
                        }
                    }
                    Button { variant: ButtonVariant::Secondary, aria_label: "Notifications",
                        Icon { name: IconName::Bell }
                    }
                    div { class: "account-chip",
                        div { class: "avatar", aria_hidden: "true" }
                        span { "Akun" }
                        Icon { name: IconName::ChevronDown }
                    }
                }
            }
        }
    }
}

#[component]
fn RoleSwitcher() -> Element {
    let mut dashboard = use_dashboard();
    let role = dashboard.read().role;

    rsx! {
        div { class: "toolbar",
            div { class: "toolbar-group",
                span { class: "toolbar-label", "Peran:" }
                Select {
                    value: "{role}",
                    aria_label: "Role Switcher",
                    onchange: move |value: String| match value.parse::<Role>() {
                        Ok(next) => {
                            tracing::info!(from = %role, to = %next, "role switched");
                            dashboard.write().set_role(next);
                        }
                        Err(e) => tracing::error!(error = %e, "ignored role switch"),
                    },
                    for r in Role::ALL {
                        option { key: "{r}", value: r.label(), selected: r == role, "{r}" }
                    }
                }
                Badge { class: "prototype-note", "Prototype: sections berubah sesuai role" }
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let dashboard = use_dashboard();
    let (open, role) = {
        let state = dashboard.read();
        (state.sidebar_open, state.role)
    };
    if !open {
        return rsx! {};
    }

    rsx! {
        aside { class: "sidebar", aria_label: "Sidebar",
            Card { variant: CardVariant::Bento, tone: Tone::Cream, class: "sidebar-card",
                nav { class: "sidebar-nav",
                    for item in nav_for(role) {
                        NavLink { key: "{item.key}", item: *item }
                    }
                }
            }
        }
    }
}

#[component]
fn DashboardLayout() -> Element {
    let mut dashboard = use_dashboard();
    let route: Route = use_route();
    let section = route.section();
    let role = dashboard.read().role;

    use_effect(use_reactive!(|section| {
        tracing::info!(%section, "section opened");
    }));

    let toast = dashboard.read().toast.clone();

    rsx! {
        div { class: "app",
            Header {}
            div { class: "app-body",
                RoleSwitcher {}
                div { class: "app-layout",
                    Sidebar {}
                    main { class: "main-content",
                        // A section the role cannot open renders nothing.
                        if visible_section(role, section).is_some() {
                            Outlet::<Route> {}
                        }
                    }
                }
            }
            TransactionDrawer {}
            PayoutModal {}
            ui::Toast {
                toast,
                on_dismiss: move |_| dashboard.write().dismiss_toast(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_map_to_sections() {
        for section in SectionKey::ALL {
            assert_eq!(Route::from(section).section(), section);
        }
    }

    #[test]
    fn route_paths_use_section_keys() {
        for section in SectionKey::ALL {
            let path = Route::from(section).to_string();
            match section {
                SectionKey::Overview => assert_eq!(path, "/"),
                _ => assert_eq!(path, format!("/{}", section.key())),
            }
        }
    }
}

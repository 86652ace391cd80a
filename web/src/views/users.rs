use dioxus::prelude::*;
use types::{Role, SettlementPolicy, config::CONFIG, filter::parse_choice, state::Toast};
use ui::{Button, ButtonVariant, Card, CardVariant, Select, Tone};

use crate::use_dashboard;

#[component]
pub fn Users() -> Element {
    let mut dashboard = use_dashboard();
    let mut role = use_signal(Role::default);
    let mut policy = use_signal(|| CONFIG.payout.policy());

    rsx! {
        Card { variant: CardVariant::Bento, tone: Tone::Cream,
            h3 { class: "card-title", "Role & Permissions" }
            p { class: "stat-note",
                "Kelola akses peran dan kebijakan pencairan (default {CONFIG.payout.policy()})."
            }
            div { class: "toolbar-group",
                Select {
                    aria_label: "Role",
                    onchange: move |value: String| {
                        if let Some(next) = parse_choice::<Role>(&value) {
                            role.set(next);
                        }
                    },
                    for r in Role::ALL {
                        option { key: "{r}", value: r.label(), "{r}" }
                    }
                }
                Select {
                    aria_label: "Kebijakan Pencairan",
                    onchange: move |value: String| {
                        if let Some(next) = parse_choice::<SettlementPolicy>(&value) {
                            policy.set(next);
                        }
                    },
                    option { value: "{CONFIG.payout.policy()}", "Kebijakan Pencairan: {CONFIG.payout.policy()}" }
                    option { value: "{SettlementPolicy::Instant}", "Instant" }
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| {
                        tracing::info!(role = %role(), policy = %policy(), "role policy saved");
                        dashboard
                            .write()
                            .notify(Toast::success(format!("Kebijakan {} disimpan: {}", role(), policy())));
                    },
                    "Simpan"
                }
            }
        }
    }
}

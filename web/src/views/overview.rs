use dioxus::prelude::*;
use types::{
    config::CONFIG,
    mock::{PRODUCTS, TRANSACTIONS},
    overview::{BalanceAction, Metrics, OverviewCard, available_balance, balance_action, overview_cards},
};
use ui::{Badge, BadgeColor, Button, ButtonVariant, Card, CardVariant, Icon, IconName, Tone};

use crate::{Route, use_dashboard};

#[component]
pub fn Overview() -> Element {
    let role = use_dashboard().read().role;

    rsx! {
        div { class: "bento-grid",
            for card in overview_cards(role) {
                OverviewTile { key: "{card:?}", card }
            }
        }
    }
}

#[component]
fn Stat(title: String, value: String, icon: IconName) -> Element {
    rsx! {
        div { class: "stat",
            div {
                h2 { class: "stat-title", "{title}" }
                div { class: "stat-value", "{value}" }
            }
            Icon { name: icon, class: "icon stat-icon" }
        }
    }
}

#[component]
fn OverviewTile(card: OverviewCard) -> Element {
    let mut dashboard = use_dashboard();
    let role = dashboard.read().role;
    let metrics = use_hook(|| Metrics::compute(&TRANSACTIONS, &PRODUCTS));

    match card {
        OverviewCard::TodaySales => rsx! {
            Card { variant: CardVariant::Bento, tone: Tone::Pink, class: "span-4",
                Stat { title: "Total Penjualan Hari Ini", value: "{metrics.today}", icon: IconName::LineChart }
                p { class: "stat-note", "Bulan ini: {metrics.month}" }
            }
        },
        OverviewCard::Mrr => rsx! {
            Card { variant: CardVariant::Bento, tone: Tone::Mint, class: "span-4",
                Stat { title: "MRR", value: "{metrics.mrr}", icon: IconName::Activity }
                p { class: "stat-note", "Revenue bulan ini: {metrics.month}" }
            }
        },
        OverviewCard::Balance => {
            let balance = available_balance(role, &CONFIG.payout);
            let days = CONFIG.payout.policy_days;
            let action = match balance_action(role) {
                Some(BalanceAction::RequestPayout) => rsx! {
                    div { class: "stat-actions",
                        Button { onclick: move |_| dashboard.write().open_payout_modal(), "Ajukan Pencairan" }
                        p { class: "stat-hint",
                            "Dana tersedia {days} hari setelah pengajuan untuk mitigasi chargeback."
                        }
                    }
                },
                Some(BalanceAction::ManagePayouts) => rsx! {
                    div { class: "stat-actions",
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| {
                                navigator().push(Route::Payouts {});
                            },
                            "Kelola Pencairan"
                        }
                    }
                },
                None => rsx! {},
            };

            rsx! {
                Card { variant: CardVariant::Bento, tone: Tone::Blue, class: "span-4",
                    Stat { title: "Saldo Tersedia", value: "{balance}", icon: IconName::Wallet }
                    {action}
                }
            }
        }
        OverviewCard::Incidents => rsx! {
            Card { variant: CardVariant::Bento, tone: Tone::Lime, class: "span-4",
                Stat { title: "Incident Open", value: "2", icon: IconName::Server }
                p { class: "stat-note", "Queue provisioning: 3, Webhook: Normal" }
            }
        },
        OverviewCard::AutoPayment => rsx! {
            Card { variant: CardVariant::Bento, tone: Tone::Cream, class: "span-4",
                Stat { title: "Auto Payment", value: "Operational", icon: IconName::Zap }
                div { class: "stat-badges",
                    Badge { color: BadgeColor::Paid, "Uptime 99.97%" }
                    Badge { "Latency p95: 2.3s" }
                }
            }
        },
        OverviewCard::Funnel => rsx! {
            Card { variant: CardVariant::Bento, tone: Tone::HotPink, class: "span-4 inverted",
                Stat { title: "Funnel Konversi", value: "3.2%", icon: IconName::LineChart }
                p { class: "stat-note", "Trial → Paid ratio 1:5" }
            }
        },
    }
}

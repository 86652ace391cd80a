use dioxus::prelude::*;
use types::{
    Feature, can,
    mock::{GATEWAYS, TRANSACTIONS},
};
use ui::{
    Button, ButtonVariant, CandlesChart, Card, CardVariant, DataTable, Icon, IconName, Toggle, Tone,
};

use crate::use_dashboard;

const RECENT: usize = 4;

#[component]
pub fn Payments() -> Element {
    let mut dashboard = use_dashboard();
    let (role, auto_capture) = {
        let state = dashboard.read();
        (state.role, state.auto_capture)
    };
    let recent = &TRANSACTIONS[..RECENT];

    rsx! {
        div { class: "bento-grid",
            for gateway in GATEWAYS.iter() {
                Card {
                    key: "{gateway.method}",
                    variant: CardVariant::Bento,
                    tone: Tone::Cream,
                    class: "span-3",
                    div { class: "stat",
                        div {
                            h3 { class: "card-title", "{gateway.method}" }
                            p { class: "stat-note", "{gateway.summary()}" }
                        }
                        Icon { name: IconName::CheckCircle, class: "icon stat-icon ok" }
                    }
                }
            }
        }
        Card { variant: CardVariant::Bento, tone: Tone::Blue, class: "section-gap",
            div { class: "toolbar",
                div { class: "toolbar-group",
                    Toggle {
                        checked: auto_capture,
                        label: "Auto-capture",
                        onchange: move |_| {
                            dashboard.write().toggle_auto_capture();
                            tracing::info!(enabled = !auto_capture, "auto-capture toggled");
                        },
                    }
                    span {
                        class: "hint",
                        title: "Pembayaran otomatis menandai transaksi ‘Paid’ saat gateway konfirmasi.",
                        "ⓘ Pembayaran otomatis menandai transaksi ‘Paid’ saat gateway konfirmasi."
                    }
                }
                if can(role, Feature::SystemView) {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| tracing::debug!("webhook retry requested"),
                        "Webhook Retry"
                    }
                }
            }
            div { class: "chart-panel",
                h3 { class: "card-title", "Pergerakan Harga 30 hari" }
                CandlesChart {}
            }
            div { class: "section-gap",
                h4 { class: "card-title", "Pembayaran Terakhir" }
                DataTable {
                    columns: vec!["ID Transaksi", "Metode", "Amount", "Status", "Waktu"],
                    row_count: recent.len(),
                    for tx in recent.iter() {
                        tr { key: "{tx.reference}",
                            td { "{tx.reference}" }
                            td { "{tx.method}" }
                            td { "{tx.price}" }
                            td { "{tx.status}" }
                            td { "{tx.when()}" }
                        }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use types::{
    Feature, PaymentMethod, TxStatus, can,
    chart::ChartMode,
    filter::{TransactionFilter, parse_choice},
    mock::{TRANSACTIONS, resellers},
};
use ui::{
    Badge, BadgeColor, Button, ButtonVariant, Card, CardVariant, DataTable, Icon, IconName, Input,
    SalesLineChart, Select, Tone,
};

use crate::use_dashboard;

const COLUMNS: [&str; 9] = [
    "Tanggal/Waktu",
    "Produk",
    "Reseller",
    "Pembeli",
    "Harga (Rp)",
    "Diskon",
    "Status",
    "Metode",
    "Aksi",
];

#[component]
pub fn Sales() -> Element {
    let mut dashboard = use_dashboard();
    let role = dashboard.read().role;
    let mut mode = use_signal(ChartMode::default);
    let mut filter = use_signal(TransactionFilter::default);

    let rows = filter.read().apply(&TRANSACTIONS);

    rsx! {
        div { class: "toolbar",
            div { class: "toolbar-group",
                Select {
                    aria_label: "Toggle Metric",
                    onchange: move |value: String| mode.set(parse_choice(&value).unwrap_or_default()),
                    for m in ChartMode::ALL {
                        option { key: "{m}", value: m.label(), "{m}" }
                    }
                }
                Input { input_type: "date", aria_label: "Start date" }
                Input { input_type: "date", aria_label: "End date" }
                Select {
                    aria_label: "Filter Reseller",
                    onchange: move |value: String| {
                        filter.write().reseller = resellers().into_iter().find(|r| *r == value);
                    },
                    option { value: "", "Semua Reseller" }
                    for name in resellers() {
                        option { key: "{name}", value: name, "{name}" }
                    }
                }
                Select {
                    aria_label: "Status",
                    onchange: move |value: String| filter.write().status = parse_choice::<TxStatus>(&value),
                    option { value: "", "Semua Status" }
                    for status in TxStatus::ALL {
                        option { key: "{status}", value: status.label(), "{status}" }
                    }
                }
                Select {
                    aria_label: "Metode Bayar",
                    onchange: move |value: String| filter.write().method = parse_choice::<PaymentMethod>(&value),
                    option { value: "", "Semua Metode" }
                    for method in PaymentMethod::ALL {
                        option { key: "{method}", value: method.label(), "{method}" }
                    }
                }
            }
            div { class: "toolbar-group",
                if role.is_reseller() {
                    Button { onclick: move |_| tracing::debug!("add sale requested"),
                        Icon { name: IconName::Plus }
                        "Tambah Penjualan"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| dashboard.write().open_payout_modal(),
                        Icon { name: IconName::Banknote }
                        "Ajukan Pencairan"
                    }
                } else {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| tracing::debug!(rows = TRANSACTIONS.len(), "sales export requested"),
                        Icon { name: IconName::Download }
                        "Export CSV"
                    }
                }
                if can(role, Feature::ManageProducts) {
                    Button { variant: ButtonVariant::Tertiary,
                        Icon { name: IconName::Settings }
                        "Kelola Harga"
                    }
                }
            }
        }
        Card { variant: CardVariant::Bento, tone: Tone::Cream,
            div { class: "chart-panel",
                h3 { class: "card-title", "Penjualan 30 hari · {mode}" }
                SalesLineChart { mode: mode() }
            }
            DataTable {
                columns: COLUMNS.to_vec(),
                row_count: rows.len(),
                empty: "Belum ada penjualan. Mulai dengan tambah produk atau undang reseller.",
                for tx in rows {
                    tr {
                        key: "{tx.reference}",
                        class: "row-link",
                        onclick: move |_| dashboard.write().open_transaction(tx.reference),
                        td { "{tx.when()}" }
                        td { "{tx.product}" }
                        td { "{tx.reseller_label()}" }
                        td { "{tx.buyer}" }
                        td { "{tx.price}" }
                        td { "{tx.discount_label()}" }
                        td { Badge { color: BadgeColor::from(tx.status), "{tx.status}" } }
                        td { "{tx.method}" }
                        td { span { class: "link", "Detail" } }
                    }
                }
            }
        }
    }
}

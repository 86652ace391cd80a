use dioxus::prelude::*;
use types::{Transaction, format_rp};
use ui::{Button, ButtonVariant, Drawer, Input, Modal};

use crate::use_dashboard;

/// Amount, account and note inputs shared by the payout modal and the
/// inline request form.
#[component]
pub fn PayoutFields() -> Element {
    rsx! {
        div { class: "form-stack",
            Input { input_type: "number", placeholder: "Amount (Rp)", aria_label: "Amount" }
            Input { placeholder: "Rekening/e-Wallet", aria_label: "Rekening" }
            Input { placeholder: "Catatan (opsional)", aria_label: "Catatan" }
        }
    }
}

#[component]
pub fn PayoutModal() -> Element {
    let mut dashboard = use_dashboard();
    let open = dashboard.read().payout_modal_open;

    rsx! {
        Modal {
            open,
            title: "Ajukan Pencairan",
            on_close: move |_| dashboard.write().close_payout_modal(),
            div { class: "modal-body", PayoutFields {} }
            div { class: "modal-footer",
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| dashboard.write().close_payout_modal(),
                    "Batal"
                }
                Button {
                    onclick: move |_| {
                        tracing::info!("payout request submitted");
                        dashboard.write().submit_payout_modal();
                    },
                    "Kirim"
                }
            }
        }
    }
}

#[component]
pub fn TransactionDrawer() -> Element {
    let mut dashboard = use_dashboard();
    let tx = dashboard.read().drawer_transaction();

    rsx! {
        Drawer {
            open: tx.is_some(),
            title: "Detail Transaksi",
            on_close: move |_| dashboard.write().close_drawer(),
            if let Some(tx) = tx {
                TransactionDetail { tx: *tx }
            }
        }
    }
}

#[component]
fn TransactionDetail(tx: Transaction) -> Element {
    rsx! {
        div { class: "detail-heading",
            div { class: "detail-title", "{tx.product} · {tx.reference}" }
            div { class: "detail-meta", "{tx.when()} • {tx.method}" }
        }
        div { class: "detail-section",
            h4 { "Ringkasan" }
            p { "Reseller: {tx.reseller_label()} • Pembeli: {tx.buyer}" }
            p { "Harga: {format_rp(tx.price)} • Status: {tx.status}" }
        }
        div { class: "detail-section",
            h4 { "Pembayaran" }
            p { "Auto payment: sukses ({tx.method}), captured 2.1s." }
        }
        div { class: "detail-section",
            h4 { "Log" }
            ul { class: "detail-log",
                li { "Order dibuat" }
                li { "Gateway {tx.method} dikirim" }
                li { "Webhook diterima • status {tx.status}" }
            }
        }
    }
}

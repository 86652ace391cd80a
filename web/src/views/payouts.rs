use dioxus::prelude::*;
use types::{
    Feature, PayoutStatus, Role, can,
    config::CONFIG,
    filter::{PayoutFilter, parse_choice},
    format_date, format_rp,
    mock::payouts,
};
use ui::{
    Button, ButtonSize, ButtonVariant, Card, CardVariant, DataTable, Icon, IconName, Select, Tone,
};

use super::components::PayoutFields;
use crate::use_dashboard;

#[component]
pub fn Payouts() -> Element {
    let role = use_dashboard().read().role;

    if role.is_reseller() {
        rsx! { ResellerPayouts {} }
    } else {
        rsx! { PayoutQueue { role } }
    }
}

#[component]
fn ResellerPayouts() -> Element {
    let mut dashboard = use_dashboard();
    let days = CONFIG.payout.policy_days;
    let minimum = format_rp(CONFIG.payout.minimum);
    let requests = use_hook(|| payouts(CONFIG.payout.policy()));

    rsx! {
        Card { variant: CardVariant::Bento, tone: Tone::Cream, class: "notice",
            Icon { name: IconName::Clock, class: "icon notice-icon" }
            div {
                p { class: "notice-title",
                    "Pencairan diproses setelah {days} hari dari tanggal pengajuan ({CONFIG.payout.policy()})."
                }
                p { class: "stat-note",
                    "Dana tersedia {days} hari setelah pengajuan untuk mitigasi chargeback."
                }
            }
        }
        div { class: "bento-grid",
            Card { variant: CardVariant::Bento, tone: Tone::Mint, class: "span-5",
                h3 { class: "card-title", "Ajukan Pencairan" }
                PayoutFields {}
                Button {
                    onclick: move |_| {
                        tracing::info!("payout form submitted");
                        dashboard.write().submit_payout_form();
                    },
                    "Ajukan"
                }
                p { class: "stat-hint", "Minimal {minimum}. Pastikan saldo cukup dan rekening valid." }
            }
            Card { variant: CardVariant::Bento, tone: Tone::Cream, class: "span-7",
                h3 { class: "card-title", "Daftar Pengajuan" }
                DataTable {
                    columns: vec!["ID", "Tanggal Ajukan", "Amount", "Estimasi Cair", "Status"],
                    row_count: requests.len(),
                    for payout in requests.iter() {
                        tr { key: "{payout.id}",
                            td { "{payout.id}" }
                            td { "{format_date(payout.submitted)}" }
                            td { "{payout.amount}" }
                            td { "{format_date(payout.eta())}" }
                            td { "{payout.status}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PayoutQueue(role: Role) -> Element {
    let mut dashboard = use_dashboard();
    let mut filter = use_signal(PayoutFilter::default);
    let queue = use_hook(|| payouts(CONFIG.payout.policy()));
    // Owned copies so row handlers can move them.
    let rows: Vec<_> = filter.read().apply(&queue).into_iter().copied().collect();
    let instant = can(role, Feature::InstantPayout);

    rsx! {
        Card { variant: CardVariant::Bento, tone: Tone::Cream,
            div { class: "toolbar",
                div { class: "toolbar-group",
                    Select { aria_label: "Filter Role",
                        option { value: "", "Semua" }
                        option { value: "Reseller", "Reseller" }
                        option { value: "Admin", "Admin" }
                    }
                    Select {
                        aria_label: "Filter Status",
                        onchange: move |value: String| filter.write().status = parse_choice::<PayoutStatus>(&value),
                        option { value: "", "Semua Status" }
                        for status in PayoutStatus::ALL {
                            option { key: "{status}", value: status.label(), "{status}" }
                        }
                    }
                }
            }
            DataTable {
                columns: vec!["ID", "Reseller", "Amount", "Diajukan", "Estimasi", "Status", "Bukti", "Aksi"],
                row_count: rows.len(),
                for payout in rows {
                    tr { key: "{payout.id}",
                        td { "{payout.id}" }
                        td { "{payout.reseller}" }
                        td { "{payout.amount}" }
                        td { "{format_date(payout.submitted)}" }
                        td { "{format_date(payout.eta())}" }
                        td { "{payout.status}" }
                        td {
                            if let Some(proof) = payout.proof {
                                a { class: "link", href: proof, "Lihat" }
                            } else {
                                "-"
                            }
                        }
                        td {
                            if instant {
                                div { class: "row-actions",
                                    Button {
                                        size: ButtonSize::Sm,
                                        onclick: move |_| dashboard.write().pay_instantly(payout.id),
                                        "Cairkan Sekarang"
                                    }
                                    Button {
                                        size: ButtonSize::Sm,
                                        variant: ButtonVariant::Secondary,
                                        onclick: move |_| dashboard.write().approve_payout(payout.id),
                                        "Approve"
                                    }
                                    Button {
                                        size: ButtonSize::Sm,
                                        variant: ButtonVariant::Tertiary,
                                        onclick: move |_| dashboard.write().reject_payout(payout.id),
                                        "Reject"
                                    }
                                }
                            } else {
                                "-"
                            }
                        }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use types::{
    LogCategory,
    filter::{LogFilter, parse_choice},
    mock::LOGS,
};
use ui::{Badge, Button, ButtonVariant, Card, CardVariant, DataTable, Icon, IconName, Input, Select, Tone};

use crate::use_dashboard;

#[component]
pub fn Logs() -> Element {
    let role = use_dashboard().read().role;
    let mut filter = use_signal(LogFilter::default);
    let entries = filter.read().apply(&LOGS);

    rsx! {
        div { class: "toolbar",
            div { class: "toolbar-group",
                Select {
                    aria_label: "Kategori",
                    onchange: move |value: String| filter.write().category = parse_choice::<LogCategory>(&value),
                    option { value: "", "Semua" }
                    for category in LogCategory::ALL {
                        option { key: "{category}", value: category.label(), "{category}" }
                    }
                }
                Input {
                    placeholder: "Keyword",
                    aria_label: "Keyword",
                    value: "{filter.read().keyword}",
                    oninput: move |value: String| filter.write().keyword = value,
                }
                Input { input_type: "date", aria_label: "Dari" }
                Input { input_type: "date", aria_label: "Sampai" }
            }
            div { class: "toolbar-group",
                if !role.is_reseller() {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| tracing::debug!(rows = LOGS.len(), "log export requested"),
                        Icon { name: IconName::Download }
                        "Export"
                    }
                }
            }
        }
        Card { variant: CardVariant::Bento, tone: Tone::Cream,
            ul { class: "log-feed",
                for (idx, entry) in entries.iter().enumerate() {
                    li { key: "{idx}", class: "log-item",
                        span { class: "log-time", "{entry.when()}" }
                        Badge { "{entry.category}" }
                        div { class: "log-text",
                            span { class: "log-actor", "{entry.actor}" }
                            " · "
                            span { "{entry.description}" }
                            " "
                            span { class: "link", "{entry.reference}" }
                        }
                    }
                }
            }
            div { class: "section-gap",
                DataTable {
                    columns: vec!["Waktu", "Kategori", "Aktor", "Deskripsi", "Terkait"],
                    row_count: entries.len(),
                    empty: "Tidak ada log yang cocok.",
                    for (idx, entry) in entries.iter().enumerate() {
                        tr { key: "{idx}",
                            td { "{entry.when()}" }
                            td { "{entry.category}" }
                            td { "{entry.actor}" }
                            td { "{entry.description}" }
                            td { "{entry.reference}" }
                        }
                    }
                }
            }
        }
    }
}

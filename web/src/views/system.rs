use dioxus::prelude::*;
use ui::{Card, CardVariant, Tone};

#[component]
pub fn System() -> Element {
    rsx! {
        div { class: "bento-grid",
            Card { variant: CardVariant::Bento, tone: Tone::Mint, class: "span-4",
                h3 { class: "card-title", "Uptime" }
                p { class: "stat-note", "99.97% 30 hari" }
            }
            Card { variant: CardVariant::Bento, tone: Tone::Pink, class: "span-4",
                h3 { class: "card-title", "Incidents" }
                p { class: "stat-note", "2 open • 14 resolved" }
            }
            Card { variant: CardVariant::Bento, tone: Tone::Blue, class: "span-4",
                h3 { class: "card-title", "Webhook Status" }
                p { class: "stat-note", "Normal • 0 retry queued" }
            }
        }
    }
}

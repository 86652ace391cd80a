use dioxus::prelude::*;
use ui::{Card, CardVariant, Tone};

#[component]
pub fn Settings() -> Element {
    rsx! {
        Card { variant: CardVariant::Bento, tone: Tone::Cream,
            h3 { class: "card-title", "Settings" }
            p { class: "stat-note", "Preferensi akun dan kebijakan platform." }
        }
    }
}

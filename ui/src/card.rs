use dioxus::prelude::*;

use crate::cx;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CardVariant {
    #[default]
    Default,
    /// Borderless tile for the bento grid.
    Bento,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    #[default]
    None,
    Pink,
    Mint,
    Lime,
    Blue,
    Cream,
    HotPink,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Tone::None => "",
            Tone::Pink => "tone-pink",
            Tone::Mint => "tone-mint",
            Tone::Lime => "tone-lime",
            Tone::Blue => "tone-blue",
            Tone::Cream => "tone-cream",
            Tone::HotPink => "tone-hotpink",
        }
    }
}

#[component]
pub fn Card(
    #[props(default)] variant: CardVariant,
    #[props(default)] tone: Tone,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let base = match variant {
        CardVariant::Default => "card",
        CardVariant::Bento => "card card-bento",
    };
    // Tones only apply to bento tiles.
    let tone = match variant {
        CardVariant::Default => "",
        CardVariant::Bento => tone.class(),
    };

    rsx! {
        div { class: cx([base, tone, class.as_str()]), {children} }
    }
}

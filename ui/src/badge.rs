use dioxus::prelude::*;
use types::TxStatus;

use crate::cx;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    #[default]
    Default,
    Paid,
    Pending,
    Refunded,
    Failed,
    Role,
}

impl BadgeColor {
    fn class(self) -> &'static str {
        match self {
            BadgeColor::Default => "badge-default",
            BadgeColor::Paid => "badge-paid",
            BadgeColor::Pending => "badge-pending",
            BadgeColor::Refunded => "badge-refunded",
            BadgeColor::Failed => "badge-failed",
            BadgeColor::Role => "badge-role",
        }
    }
}

impl From<TxStatus> for BadgeColor {
    fn from(status: TxStatus) -> Self {
        match status {
            TxStatus::Paid => BadgeColor::Paid,
            TxStatus::Pending => BadgeColor::Pending,
            TxStatus::Refunded => BadgeColor::Refunded,
            TxStatus::Failed => BadgeColor::Failed,
        }
    }
}

#[component]
pub fn Badge(
    #[props(default)] color: BadgeColor,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    rsx! {
        span { class: cx(["badge", color.class(), class.as_str()]), {children} }
    }
}

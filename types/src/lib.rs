mod error;
mod model;
mod money;
mod nav;
mod permission;
mod role;

pub mod chart;
pub mod config;
pub mod filter;
pub mod mock;
pub mod overview;
pub mod state;

pub use error::{Error, Result};
pub use model::{
    BillingCycle, Gateway, LogCategory, LogEntry, PaymentMethod, Payout, PayoutStatus, Product,
    SettlementPolicy, Transaction, TxStatus, format_date, format_datetime,
};
pub use money::{Rupiah, format_rp};
pub use nav::{NAV_ITEMS, NavItem, SectionKey, nav_for, visible_section};
pub use permission::{Feature, can, can_key};
pub use role::Role;

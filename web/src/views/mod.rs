mod components;
pub use components::{PayoutModal, TransactionDrawer};

mod overview;
pub use overview::Overview;

mod sales;
pub use sales::Sales;

mod payments;
pub use payments::Payments;

mod payouts;
pub use payouts::Payouts;

mod products;
pub use products::Products;

mod system;
pub use system::System;

mod users;
pub use users::Users;

mod logs;
pub use logs::Logs;

mod settings;
pub use settings::Settings;

//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod alert;
pub mod bank_card;
pub mod branch_card;
pub mod layout;
pub mod loading;
pub mod sidebar;
pub mod stat_card;

pub use alert::ErrorPanel;
pub use bank_card::BankCard;
pub use branch_card::BranchCard;
pub use layout::{Header, Layout};
pub use loading::Loading;
pub use sidebar::Sidebar;
pub use stat_card::StatCard;

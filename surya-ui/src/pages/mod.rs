//! Pages
//!
//! Top-level page components for each route.

pub mod bookings;
pub mod branch_detail;
pub mod branches;
pub mod dashboard;
pub mod payments;
pub mod settings;

pub use bookings::Bookings;
pub use branch_detail::BranchDetail;
pub use branches::Branches;
pub use dashboard::Dashboard;
pub use payments::Payments;
pub use settings::Settings;

//! Client Routes
//!
//! The navigation surface of the dashboard and the sidebar menu built on it.

use crate::models::BranchId;

/// A client-side route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Dashboard,
    Branches,
    BranchDetail(BranchId),
    Bookings,
    Payments,
    Settings,
}

impl AppRoute {
    pub fn path(&self) -> String {
        match self {
            AppRoute::Dashboard => "/".to_string(),
            AppRoute::Branches => "/branches".to_string(),
            AppRoute::BranchDetail(id) => format!("/branches/{}", id),
            AppRoute::Bookings => "/bookings".to_string(),
            AppRoute::Payments => "/payments".to_string(),
            AppRoute::Settings => "/settings".to_string(),
        }
    }

    /// Parse a pathname; unknown paths yield `None`
    pub fn parse(pathname: &str) -> Option<Self> {
        let trimmed = pathname.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(AppRoute::Dashboard),
            ["branches"] => Some(AppRoute::Branches),
            ["branches", id] => Some(AppRoute::BranchDetail(BranchId::new(*id))),
            ["bookings"] => Some(AppRoute::Bookings),
            ["payments"] => Some(AppRoute::Payments),
            ["settings"] => Some(AppRoute::Settings),
            _ => None,
        }
    }

    /// The sidebar section this route belongs to
    pub fn section(&self) -> AppRoute {
        match self {
            AppRoute::BranchDetail(_) => AppRoute::Branches,
            other => other.clone(),
        }
    }
}

/// One sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub icon: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

impl NavItem {
    /// Whether the current pathname falls under this entry
    pub fn is_active(&self, pathname: &str) -> bool {
        match AppRoute::parse(pathname) {
            Some(route) => route.section().path() == self.href,
            None => false,
        }
    }
}

/// Sidebar menu, top to bottom
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { icon: "📊", label: "Dashboard", href: "/" },
    NavItem { icon: "📍", label: "Branches", href: "/branches" },
    NavItem { icon: "📅", label: "Bookings", href: "/bookings" },
    NavItem { icon: "💳", label: "Payments", href: "/payments" },
    NavItem { icon: "⚙️", label: "Settings", href: "/settings" },
];

//! Data Model
//!
//! Plain records mirroring API responses. The client never mutates them.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Branch identifier, always held as a string
///
/// The API sends ids either as JSON numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct BranchId(String);

impl BranchId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BranchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BranchId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for BranchId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for BranchId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => BranchId(s),
            RawId::Number(n) => BranchId(n.to_string()),
        })
    }
}

/// A physical business location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub id: BranchId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub hours: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Branch {
    /// Minimal branch, mostly for tests and placeholders
    pub fn new(id: impl Into<BranchId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            code: None,
            city: None,
            address: None,
            phone: None,
            email: None,
            hours: None,
            created_at: None,
        }
    }

    /// Name for headings, falling back to the id
    pub fn display_name(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("Branch {}", self.id),
        }
    }
}

/// A payment institution reference record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub swift_code: Option<String>,
}

/// Response from `GET /health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

/// A count the client cannot compute yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available(usize),
    /// No upstream endpoint exists for this figure
    NotYetAvailable,
}

impl Availability {
    /// Numeric value, zero when unavailable
    pub fn value_or_zero(self) -> usize {
        match self {
            Availability::Available(n) => n,
            Availability::NotYetAvailable => 0,
        }
    }

    pub fn is_available(self) -> bool {
        matches!(self, Availability::Available(_))
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Availability::Available(n) => write!(f, "{}", n),
            Availability::NotYetAvailable => f.write_str("—"),
        }
    }
}

/// Aggregate counts shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub branches: usize,
    pub bookings: Availability,
    pub banks: usize,
}

impl DashboardStats {
    /// Derive counts from fetched collections
    pub fn from_collections(branches: &[Branch], banks: &[Bank]) -> Self {
        Self {
            branches: branches.len(),
            bookings: Availability::NotYetAvailable,
            banks: banks.len(),
        }
    }
}

/// Branches and banks fetched together for the dashboard
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSnapshot {
    pub branches: Vec<Branch>,
    pub banks: Vec<Bank>,
}

impl DashboardSnapshot {
    pub fn stats(&self) -> DashboardStats {
        DashboardStats::from_collections(&self.branches, &self.banks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_id_accepts_number_or_string() {
        let numeric: Branch = serde_json::from_str(r#"{"id": 42, "name": "Downtown"}"#).unwrap();
        let text: Branch = serde_json::from_str(r#"{"id": "42"}"#).unwrap();
        assert_eq!(numeric.id, BranchId::new("42"));
        assert_eq!(numeric.id, text.id);
        assert_eq!(text.name, None);
    }

    #[test]
    fn test_branch_nullable_fields() {
        let branch: Branch = serde_json::from_str(
            r#"{"id":"7","name":"Uptown","city":null,"phone":"+62 21 555","created_at":"2024-03-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(branch.city, None);
        assert_eq!(branch.phone.as_deref(), Some("+62 21 555"));
    }

    #[test]
    fn test_display_name_fallback() {
        let mut branch = Branch::new("9", "  ");
        assert_eq!(branch.display_name(), "Branch 9");
        branch.name = Some("Harbor".to_string());
        assert_eq!(branch.display_name(), "Harbor");
    }

    #[test]
    fn test_stats_bookings_not_yet_available() {
        let branches = vec![Branch::new("1", "A"), Branch::new("2", "B")];
        let banks = vec![Bank { code: "BCA".into(), name: "Bank Central Asia".into(), swift_code: None }];
        let stats = DashboardStats::from_collections(&branches, &banks);

        assert_eq!(stats.branches, 2);
        assert_eq!(stats.banks, 1);
        assert_eq!(stats.bookings, Availability::NotYetAvailable);
        assert_eq!(stats.bookings.value_or_zero(), 0);
        assert_eq!(stats.bookings.to_string(), "—");
    }
}

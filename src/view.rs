//! Display Helpers
//!
//! Decisions shared by every page about what to render: which of the
//! loading / error / empty / data views applies, and how missing fields read.

use crate::fetch::RequestState;

pub const NOT_PROVIDED: &str = "Not provided";
pub const NOT_AVAILABLE: &str = "N/A";
pub const CITY_NOT_SET: &str = "City Not Set";

pub const EMPTY_BRANCHES: &str = "No branches found";
pub const EMPTY_BRANCHES_HINT: &str = "Click \"Add Branch\" to create your first branch";
pub const EMPTY_BANKS: &str = "No payment banks available";
pub const BOOKINGS_PLACEHOLDER: &str = "📅 Booking feature coming soon...";

/// The mutually exclusive views of a list page
#[derive(Debug, PartialEq)]
pub enum ListView<'a, T> {
    Loading,
    Failed(&'a str),
    Empty,
    Ready(&'a [T]),
}

impl<'a, T> ListView<'a, T> {
    /// Choose the view for a collection's request state
    ///
    /// Loading wins over a stale error, which wins over stale data.
    pub fn of(state: &'a RequestState<Vec<T>>) -> Self {
        if state.loading {
            ListView::Loading
        } else if let Some(message) = state.error.as_deref() {
            ListView::Failed(message)
        } else if state.data.is_empty() {
            ListView::Empty
        } else {
            ListView::Ready(&state.data)
        }
    }
}

/// The views of an entity detail page
#[derive(Debug, PartialEq)]
pub enum DetailView<'a, T> {
    Loading,
    /// Failure or absent entity, with the message to show
    Unavailable(String),
    Ready(&'a T),
}

impl<'a, T> DetailView<'a, T> {
    pub fn of(state: &'a RequestState<Option<T>>, resource: &str) -> Self {
        if state.loading {
            return DetailView::Loading;
        }
        match (&state.error, &state.data) {
            (Some(message), _) => DetailView::Unavailable(message.clone()),
            (None, Some(entity)) => DetailView::Ready(entity),
            (None, None) => DetailView::Unavailable(format!("{} not found", resource)),
        }
    }
}

/// A present, non-blank field or the fallback text
pub fn or_fallback<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => fallback,
    }
}

/// A present, non-blank field
pub fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Short date for a creation timestamp
///
/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates; anything else is
/// shown as received.
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = present(raw) else {
        return NOT_AVAILABLE.to_string();
    };

    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.format("%b %d, %Y").to_string();
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return dt.format("%b %d, %Y").to_string();
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%b %d, %Y").to_string();
    }
    raw.to_string()
}

/// Section heading with a count, e.g. "All Branches (3)"
pub fn counted(label: &str, count: usize) -> String {
    format!("{} ({})", label, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Branch;

    #[test]
    fn test_list_view_states() {
        let mut state = RequestState::<Vec<u32>>::loading();
        assert_eq!(ListView::of(&state), ListView::Loading);

        state.succeed(vec![]);
        assert_eq!(ListView::of(&state), ListView::Empty);

        state.succeed(vec![1, 2]);
        assert_eq!(ListView::of(&state), ListView::Ready(&[1, 2][..]));

        state.fail("Network Error: refused");
        assert_eq!(ListView::of(&state), ListView::Failed("Network Error: refused"));
    }

    #[test]
    fn test_detail_view_states() {
        let mut state = RequestState::<Option<Branch>>::loading();
        assert_eq!(DetailView::of(&state, "Branch"), DetailView::Loading);

        state.succeed(None);
        assert_eq!(
            DetailView::of(&state, "Branch"),
            DetailView::Unavailable("Branch not found".to_string())
        );

        let branch = Branch::new("42", "Downtown");
        state.succeed(Some(branch.clone()));
        assert_eq!(DetailView::of(&state, "Branch"), DetailView::Ready(&branch));

        state.fail("Branch not found");
        assert!(matches!(DetailView::of(&state, "Branch"), DetailView::Unavailable(_)));
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(or_fallback(None, NOT_PROVIDED), "Not provided");
        assert_eq!(or_fallback(Some("  "), CITY_NOT_SET), "City Not Set");
        assert_eq!(or_fallback(Some("Jakarta"), CITY_NOT_SET), "Jakarta");
        assert_eq!(present(Some("")), None);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some("2024-03-01T10:00:00Z")), "Mar 01, 2024");
        assert_eq!(format_date(Some("2024-03-01 10:00:00.123")), "Mar 01, 2024");
        assert_eq!(format_date(Some("2024-03-01")), "Mar 01, 2024");
        assert_eq!(format_date(Some("yesterday")), "yesterday");
        assert_eq!(format_date(None), "N/A");
    }

    #[test]
    fn test_counted() {
        assert_eq!(counted("All Branches", 0), "All Branches (0)");
    }
}

//! The uniform response envelope returned by every action.
//!
//! Callers branch on `success` instead of catching errors; read paths
//! never raise, they degrade into a `success: false` envelope.

use serde::{Deserialize, Serialize};

/// Pagination metadata attached to paged envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub total: i64,
    pub pages: i64,
    pub current_page: i64,
    pub page_size: i64,
}

impl PageInfo {
    /// Compute metadata for a result set. `pages` is the ceiling of
    /// `total / page_size`.
    #[must_use]
    pub fn new(total: i64, current_page: i64, page_size: i64) -> Self {
        let pages = if page_size > 0 {
            (total + page_size - 1) / page_size
        } else {
            0
        };
        Self {
            total,
            pages,
            current_page,
            page_size,
        }
    }
}

/// Tagged action result: `{ success, data?, error?, pagination? }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageInfo>,
}

impl<T> Envelope<T> {
    #[must_use]
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            pagination: None,
        }
    }

    #[must_use]
    pub fn ok_paged(data: T, pagination: PageInfo) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            pagination: Some(pagination),
        }
    }

    /// Failure that still carries fallback data, so UI callers can render
    /// an empty state without branching on the payload.
    #[must_use]
    pub fn degraded(data: T) -> Self {
        Self {
            success: false,
            data: Some(data),
            error: None,
            pagination: None,
        }
    }

    #[must_use]
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            pagination: None,
        }
    }
}

/// Outcome of a favorite toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleOutcome {
    pub saved: bool,
    pub message: String,
}

/// Result of the admin gate check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminGate {
    pub authorized: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_is_ceiling_of_total_over_size() {
        assert_eq!(PageInfo::new(0, 1, 20).pages, 0);
        assert_eq!(PageInfo::new(20, 1, 20).pages, 1);
        assert_eq!(PageInfo::new(21, 1, 20).pages, 2);
        assert_eq!(PageInfo::new(41, 2, 20).pages, 3);
    }

    #[test]
    fn ok_envelope_has_no_error_field_in_json() {
        let envelope = Envelope::ok(vec![1, 2, 3]);
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["success"], serde_json::json!(true));
        assert!(json.get("error").is_none());
        assert!(json.get("pagination").is_none());
    }

    #[test]
    fn err_envelope_carries_message_only() {
        let envelope: Envelope<()> = Envelope::err("Unauthorized");
        assert!(!envelope.success);
        assert_eq!(envelope.error.as_deref(), Some("Unauthorized"));
        assert!(envelope.data.is_none());
    }

    #[test]
    fn degraded_envelope_keeps_fallback_data() {
        let envelope = Envelope::degraded(Vec::<String>::new());
        assert!(!envelope.success);
        assert!(envelope.data.is_some());
        assert!(envelope.error.is_none());
    }

    #[test]
    fn paged_envelope_serializes_pagination() {
        let envelope = Envelope::ok_paged(vec!["a"], PageInfo::new(1, 1, 20));
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["pagination"]["total"], serde_json::json!(1));
        assert_eq!(json["pagination"]["current_page"], serde_json::json!(1));
    }
}

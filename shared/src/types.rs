//! Wire types for the collection centre directory API
//!
//! These types are used for:
//! - REST API responses (`/api/v1/centres`, `/api/v1/centre/:slug`)
//! - The block configuration embedded in persisted block attributes

use serde::{Deserialize, Serialize};

/// Minimal listing record for a collection centre, used by the
/// selection UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CentreSummary {
    /// Centre display name
    pub name: String,

    /// URL-safe identifier, restricted to letters, digits, hyphen
    pub slug: String,
}

/// Opening hours for a single day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    /// Day name ("Monday" .. "Sunday")
    pub day: String,

    /// Free-text hours, e.g. "8:00 AM - 5:00 PM" or "Closed"
    pub hours: String,
}

/// Full collection centre record used for display
///
/// The `hours` sequence always holds seven entries in fixed
/// Monday..Sunday order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CentreDetail {
    /// Centre display name
    pub name: String,

    /// Street address line
    pub address: String,

    /// City
    pub city: String,

    /// Free-form phone number; may contain formatting characters or be
    /// empty
    pub phone: String,

    /// Weekly opening hours, Monday..Sunday
    pub hours: Vec<DayHours>,

    /// External map link
    pub map_link: String,
}

/// Structured error body returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error code, e.g. `centre_not_found`
    pub code: String,

    /// Human-readable message
    pub message: String,

    /// HTTP status the error was served with
    pub status: u16,
}

impl ErrorBody {
    /// The structured 404 body for a slug with no detail record
    pub fn centre_not_found(slug: &str) -> Self {
        Self {
            code: "centre_not_found".to_string(),
            message: format!("Centre not found: {}", slug),
            status: 404,
        }
    }
}

/// Whether a slug is routable: non-empty and restricted to letters,
/// digits, hyphen. Anything else is a routing miss, not a validation
/// error.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty() && slug.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_pattern_accepts_letters_digits_hyphen() {
        assert!(is_valid_slug("auckland-central"));
        assert!(is_valid_slug("centre2"));
        assert!(is_valid_slug("A-1"));
    }

    #[test]
    fn slug_pattern_rejects_everything_else() {
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("auckland central"));
        assert!(!is_valid_slug("auckland_central"));
        assert!(!is_valid_slug("../etc/passwd"));
        assert!(!is_valid_slug("caf\u{e9}"));
    }

    #[test]
    fn error_body_shape() {
        let body = ErrorBody::centre_not_found("nowhere");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["code"], "centre_not_found");
        assert_eq!(json["status"], 404);
        assert!(json["message"].as_str().unwrap().contains("nowhere"));
    }
}

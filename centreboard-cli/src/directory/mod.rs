//! Collection centre directory
//!
//! A read-only repository over the fixed set of collection centres.
//! The backing data is bundled at build time; there are no mutation
//! operations, and summary coverage is intentionally wider than detail
//! coverage (most centres have a listing entry but no detail record
//! yet).
//!
//! The directory is always injected through [`crate::AppState`] rather
//! than reached as a global, so tests can substitute fixtures.

use std::collections::HashMap;

use centreboard_shared::{CentreDetail, CentreSummary, DayHours};

/// Errors returned by directory lookups
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// No detail record exists for the slug. This is the expected case
    /// for most summary slugs, not a data bug.
    #[error("Centre not found: {slug}")]
    NotFound { slug: String },
}

/// Read-only repository of collection centre records
#[derive(Debug, Clone)]
pub struct CentreDirectory {
    summaries: Vec<CentreSummary>,
    details: HashMap<String, CentreDetail>,
}

impl CentreDirectory {
    /// Build a directory from an ordered summary list and a slug-keyed
    /// detail map
    pub fn new(summaries: Vec<CentreSummary>, details: HashMap<String, CentreDetail>) -> Self {
        Self { summaries, details }
    }

    /// The bundled reference data: three listed centres, one of which
    /// has a full detail record
    pub fn builtin() -> Self {
        let summaries = vec![
            summary("Auckland Central", "auckland-central"),
            summary("Wellington Hub", "wellington-hub"),
            summary("Christchurch Centre", "christchurch-centre"),
        ];

        let mut details = HashMap::new();
        details.insert(
            "auckland-central".to_string(),
            CentreDetail {
                name: "Auckland Central Collection Centre".to_string(),
                address: "123 Queen Street".to_string(),
                city: "Auckland".to_string(),
                phone: "09-123-4567".to_string(),
                hours: vec![
                    day("Monday", "8:00 AM - 5:00 PM"),
                    day("Tuesday", "8:00 AM - 5:00 PM"),
                    day("Wednesday", "8:00 AM - 5:00 PM"),
                    day("Thursday", "8:00 AM - 5:00 PM"),
                    day("Friday", "8:00 AM - 5:00 PM"),
                    day("Saturday", "Closed"),
                    day("Sunday", "Closed"),
                ],
                map_link: "https://maps.google.com".to_string(),
            },
        );

        Self::new(summaries, details)
    }

    /// All centre summaries, in insertion order
    pub fn summaries(&self) -> &[CentreSummary] {
        &self.summaries
    }

    /// Number of listed centres
    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    /// Whether the directory lists no centres at all
    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    /// Look up the detail record for a slug
    ///
    /// Fails with [`DirectoryError::NotFound`] when no detail record
    /// exists, including for slugs that do appear in the summary list.
    pub fn detail(&self, slug: &str) -> Result<&CentreDetail, DirectoryError> {
        self.details.get(slug).ok_or_else(|| DirectoryError::NotFound {
            slug: slug.to_string(),
        })
    }
}

impl Default for CentreDirectory {
    fn default() -> Self {
        Self::builtin()
    }
}

fn summary(name: &str, slug: &str) -> CentreSummary {
    CentreSummary {
        name: name.to_string(),
        slug: slug.to_string(),
    }
}

fn day(day: &str, hours: &str) -> DayHours {
    DayHours {
        day: day.to_string(),
        hours: hours.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summaries_keep_insertion_order_every_call() {
        let directory = CentreDirectory::builtin();
        let slugs: Vec<&str> = directory.summaries().iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(
            slugs,
            ["auckland-central", "wellington-hub", "christchurch-centre"]
        );
        // Reads are idempotent and side-effect free
        let again: Vec<&str> = directory.summaries().iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs, again);
    }

    #[test]
    fn auckland_detail_has_full_week_with_closed_weekend() {
        let directory = CentreDirectory::builtin();
        let detail = directory.detail("auckland-central").unwrap();

        assert_eq!(detail.hours.len(), 7);
        let days: Vec<&str> = detail.hours.iter().map(|d| d.day.as_str()).collect();
        assert_eq!(
            days,
            ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
        );
        assert_eq!(detail.hours[5].hours, "Closed");
        assert_eq!(detail.hours[6].hours, "Closed");
    }

    #[test]
    fn unknown_slug_is_not_found_every_time() {
        let directory = CentreDirectory::builtin();
        for _ in 0..2 {
            let err = directory.detail("nonexistent-slug").unwrap_err();
            assert!(matches!(err, DirectoryError::NotFound { ref slug } if slug == "nonexistent-slug"));
        }
    }

    #[test]
    fn summary_existence_does_not_imply_detail_existence() {
        let directory = CentreDirectory::builtin();
        assert!(directory
            .summaries()
            .iter()
            .any(|s| s.slug == "wellington-hub"));

        let err = directory.detail("wellington-hub").unwrap_err();
        assert!(matches!(err, DirectoryError::NotFound { .. }));
    }

    #[test]
    fn fixture_directories_can_be_injected() {
        let directory = CentreDirectory::new(
            vec![summary("Test Centre", "test-centre")],
            HashMap::new(),
        );
        assert_eq!(directory.len(), 1);
        assert!(directory.detail("test-centre").is_err());
    }
}

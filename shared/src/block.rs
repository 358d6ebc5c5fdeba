//! Block configuration and editor state machine
//!
//! The collection centre block has two lifecycle phases:
//!
//! - **Authoring**: the editor fetches the centre list, lets the user
//!   pick a slug, fetches the detail record and embeds it into the
//!   block configuration.
//! - **Display**: a static render path that reads only the embedded
//!   configuration and performs no network access.
//!
//! The state machine here is deliberately free of any UI or network
//! code so it can be driven by the WASM editor component and tested
//! natively.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{CentreDetail, CentreSummary};

/// Identifier for one embedded block instance
///
/// The host content store persists one [`BlockConfiguration`] per
/// instance, keyed by this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockInstanceId(Uuid);

impl BlockInstanceId {
    /// Generate a fresh instance id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an instance id from its string form
    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }
}

impl Default for BlockInstanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BlockInstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Persisted attributes of one embedded block instance
///
/// Created empty when a block is first embedded, mutated only by the
/// authoring phase, and handed back verbatim to every future render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockConfiguration {
    /// Currently selected centre slug; empty when nothing is selected
    #[serde(default)]
    pub selected_slug: String,

    /// Detail record embedded at selection time. The display phase
    /// renders from this and never re-fetches.
    #[serde(default)]
    pub embedded_detail: Option<CentreDetail>,
}

impl BlockConfiguration {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }
}

/// State of the centre list fetch
#[derive(Debug, Clone, PartialEq)]
pub enum ListPhase {
    /// No fetch issued yet
    Idle,
    /// List fetch in flight
    Loading,
    /// List fetched successfully
    Ready(Vec<CentreSummary>),
    /// List fetch failed; the message is surfaced to the user
    Failed(String),
}

/// State of the detail fetch for the current selection
#[derive(Debug, Clone, PartialEq)]
pub enum DetailPhase {
    /// No selection, or nothing in flight
    Idle,
    /// Detail fetch in flight for the tagged slug
    Loading { slug: String },
    /// Detail fetched and embedded
    Ready,
    /// Detail fetch failed; previously embedded detail is untouched
    Failed(String),
}

/// Authoring-phase state machine for one block instance
///
/// The list and detail sub-machines run independently; detail loading
/// is gated on a non-empty selection. Detail completions are tagged
/// with the slug they were issued for, and completions whose tag no
/// longer matches the current selection are discarded, so an earlier
/// in-flight fetch can never overwrite a later one.
#[derive(Debug, Clone)]
pub struct BlockEditor {
    /// The configuration being edited; persisted by the host store
    pub config: BlockConfiguration,
    /// Centre list sub-machine
    pub list: ListPhase,
    /// Detail sub-machine
    pub detail: DetailPhase,
    /// Whether clearing the selection also drops the embedded detail.
    /// The source behaviour keeps stale detail around; this makes the
    /// alternative an explicit choice.
    clear_detail_on_deselect: bool,
}

impl BlockEditor {
    /// Create an editor over an existing configuration, keeping stale
    /// detail on deselect (the historical behaviour)
    pub fn new(config: BlockConfiguration) -> Self {
        Self {
            config,
            list: ListPhase::Idle,
            detail: DetailPhase::Idle,
            clear_detail_on_deselect: false,
        }
    }

    /// Same as [`BlockEditor::new`] but drops the embedded detail when
    /// the selection is cleared
    pub fn clearing_on_deselect(config: BlockConfiguration) -> Self {
        Self {
            clear_detail_on_deselect: true,
            ..Self::new(config)
        }
    }

    /// Mark the list fetch as in flight
    pub fn begin_list_load(&mut self) {
        self.list = ListPhase::Loading;
    }

    /// Record a successful list fetch
    pub fn list_loaded(&mut self, summaries: Vec<CentreSummary>) {
        self.list = ListPhase::Ready(summaries);
    }

    /// Record a failed list fetch. Authoring stays usable: the choice
    /// list falls back to just the placeholder until the user retries.
    pub fn list_failed(&mut self, message: impl Into<String>) {
        self.list = ListPhase::Failed(message.into());
    }

    /// The fetched summaries, or an empty slice while loading/failed
    pub fn summaries(&self) -> &[CentreSummary] {
        match &self.list {
            ListPhase::Ready(summaries) => summaries,
            _ => &[],
        }
    }

    /// Change the selection. Returns the slug to fetch a detail record
    /// for, or `None` when the placeholder (empty) choice was picked.
    ///
    /// Deselecting clears `selected_slug` but keeps the embedded
    /// detail unless the editor was built with
    /// [`BlockEditor::clearing_on_deselect`].
    pub fn select(&mut self, slug: &str) -> Option<String> {
        self.config.selected_slug = slug.to_string();
        if slug.is_empty() {
            if self.clear_detail_on_deselect {
                self.config.embedded_detail = None;
            }
            self.detail = DetailPhase::Idle;
            None
        } else {
            self.detail = DetailPhase::Loading {
                slug: slug.to_string(),
            };
            Some(slug.to_string())
        }
    }

    /// Record a successful detail fetch. Stale completions — those
    /// tagged with a slug that is no longer selected — are discarded.
    /// Returns whether the configuration was updated.
    pub fn detail_loaded(&mut self, requested_slug: &str, detail: CentreDetail) -> bool {
        if requested_slug != self.config.selected_slug {
            return false;
        }
        self.config.embedded_detail = Some(detail);
        self.detail = DetailPhase::Ready;
        true
    }

    /// Record a failed detail fetch (including not-found). Stale
    /// failures are discarded; a current failure surfaces its message
    /// but leaves any previously embedded detail untouched.
    pub fn detail_failed(&mut self, requested_slug: &str, message: impl Into<String>) -> bool {
        if requested_slug != self.config.selected_slug {
            return false;
        }
        self.detail = DetailPhase::Failed(message.into());
        true
    }
}

/// Best-effort `tel:` href for a free-form phone value
///
/// Returns `None` for empty or whitespace-only phones so the display
/// path can skip the tap-to-call affordance entirely. Non-digit
/// formatting characters are stripped; unexpected characters are never
/// an error.
pub fn dial_href(phone: &str) -> Option<String> {
    if phone.trim().is_empty() {
        return None;
    }
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        // No digits at all: link the raw value rather than fail
        Some(format!("tel:{}", phone.trim()))
    } else {
        Some(format!("tel:{}", digits))
    }
}

//! Square sync models
//!
//! `GET /api/sync_to_square` either completes with an optional per-product
//! report or fails with an error message. A failure may carry
//! `needs_setup: true`, meaning Square credentials are missing or invalid
//! and the user should be pointed at the settings page.

use serde::{Deserialize, Serialize};

/// Per-run sync report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncReport {
    #[serde(default)]
    pub synced: u32,
    #[serde(default)]
    pub failed: u32,
    /// Non-fatal warnings (e.g. a product unlinked locally but left on Square)
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// Outcome of a sync action as seen by the UI
#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome {
    Completed(SyncReport),
    /// Square integration is not configured; send the user to settings.
    NeedsSetup(String),
    Failed(String),
}

impl SyncOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, SyncOutcome::Completed(_))
    }
}

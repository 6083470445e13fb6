//! Backend response envelopes

use serde::{Deserialize, Serialize};

/// Error body returned on failures (`{ "error": "...", "needs_setup": true }`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub needs_setup: Option<bool>,
}

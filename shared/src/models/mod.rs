//! Data models
//!
//! Shared between the admin client and the catalog backend (via API).
//! All payloads are plain serde types; templates are read-only from the
//! client's perspective.

pub mod attribute;
pub mod identifier;
pub mod response;
pub mod sync;
pub mod template;

// Re-exports
pub use attribute::*;
pub use identifier::*;
pub use response::*;
pub use sync::*;
pub use template::*;

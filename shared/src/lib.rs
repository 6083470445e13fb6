//! Shared types for the VMC admin client
//!
//! Data models exchanged with the catalog backend API, plus the
//! parallel-array form encoding used by the product and template forms.

pub mod form;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use form::{decode_attribute_arrays, encode_attribute_arrays};
pub use models::{
    Attribute, BatchNumberResponse, ErrorBody, SyncOutcome, SyncReport, Template,
    TemplateAttributes,
};

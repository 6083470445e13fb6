//! VMC Client - HTTP client and form state for the catalog admin backend
//!
//! Provides the typed API client plus the stateful pieces of the product
//! create/edit surface: identifier generation with lock toggles, the
//! ordered attribute-row list, and the delete-confirmation flow.

pub mod config;
pub mod error;
pub mod form;
pub mod http;
pub mod identifier;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::ApiClient;
pub use identifier::{generate_barcode, generate_sku, upc_check_digit, IdentifierField, IdentifierKind};

pub use form::attributes::{AttributeRows, LoadToken, RowId};
pub use form::delete::{DeleteFlow, DeleteState, DeleteTarget};
pub use form::product::ProductForm;

// Re-export shared types for convenience
pub use shared::models::{
    Attribute, BatchNumberResponse, ErrorBody, SyncOutcome, SyncReport, Template,
    TemplateAttributes,
};

//! Form state for the product create/edit surface

pub mod attributes;
pub mod delete;
pub mod product;

pub use attributes::{AttributeRows, LoadToken, RowId};
pub use delete::{DeleteFlow, DeleteState, DeleteTarget};
pub use product::ProductForm;

//! Product form aggregate
//!
//! Owns the three identifier fields, the attribute rows, and the template
//! selection for one product create/edit page. Backend failures never take
//! the form down: they are logged and kept as inline messages next to the
//! control that triggered them.

use crate::form::attributes::AttributeRows;
use crate::identifier::{generate_barcode, generate_sku, IdentifierField, IdentifierKind};
use crate::ApiClient;

#[derive(Debug)]
pub struct ProductForm {
    batch: IdentifierField,
    sku: IdentifierField,
    barcode: IdentifierField,
    attributes: AttributeRows,
    selected_template: Option<i64>,
    batch_auto_requested: bool,
    batch_error: Option<String>,
    template_error: Option<String>,
}

impl ProductForm {
    /// Blank form for the create page
    pub fn new() -> Self {
        Self {
            batch: IdentifierField::new(IdentifierKind::Batch),
            sku: IdentifierField::new(IdentifierKind::Sku),
            barcode: IdentifierField::new(IdentifierKind::Barcode),
            attributes: AttributeRows::new(),
            selected_template: None,
            batch_auto_requested: false,
            batch_error: None,
            template_error: None,
        }
    }

    /// Form pre-filled from an existing product (edit page)
    pub fn for_product(batch: &str, sku: &str, barcode: &str) -> Self {
        Self {
            batch: IdentifierField::with_value(IdentifierKind::Batch, batch),
            sku: IdentifierField::with_value(IdentifierKind::Sku, sku),
            barcode: IdentifierField::with_value(IdentifierKind::Barcode, barcode),
            ..Self::new()
        }
    }

    pub fn batch(&self) -> &IdentifierField {
        &self.batch
    }

    pub fn sku(&self) -> &IdentifierField {
        &self.sku
    }

    pub fn barcode(&self) -> &IdentifierField {
        &self.barcode
    }

    pub fn attributes(&self) -> &AttributeRows {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut AttributeRows {
        &mut self.attributes
    }

    pub fn selected_template(&self) -> Option<i64> {
        self.selected_template
    }

    pub fn batch_error(&self) -> Option<&str> {
        self.batch_error.as_deref()
    }

    pub fn template_error(&self) -> Option<&str> {
        self.template_error.as_deref()
    }

    fn field_mut(&mut self, kind: IdentifierKind) -> &mut IdentifierField {
        match kind {
            IdentifierKind::Batch => &mut self.batch,
            IdentifierKind::Sku => &mut self.sku,
            IdentifierKind::Barcode => &mut self.barcode,
        }
    }

    /// Toggle a field's edit checkbox
    pub fn set_locked(&mut self, kind: IdentifierKind, locked: bool) {
        self.field_mut(kind).set_locked(locked);
    }

    /// User edit of an unlocked field
    pub fn set_user_value(&mut self, kind: IdentifierKind, value: &str) -> bool {
        self.field_mut(kind).set_user_value(value)
    }

    /// Page-load initialization: request a batch number once if the field
    /// is blank. Repeat calls never issue a second automatic request.
    pub async fn init(&mut self, client: &ApiClient) {
        if self.batch_auto_requested || !self.batch.is_empty() || !self.batch.is_locked() {
            return;
        }
        self.batch_auto_requested = true;
        self.request_batch(client).await;
    }

    /// Explicit "generate" click for the batch field
    pub async fn regenerate_batch(&mut self, client: &ApiClient) {
        if !self.batch.can_regenerate() {
            return;
        }
        self.request_batch(client).await;
    }

    async fn request_batch(&mut self, client: &ApiClient) {
        match client.generate_batch().await {
            Ok(batch_number) => {
                self.batch.apply_generated(batch_number);
                self.batch_error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "batch number generation failed");
                self.batch_error = Some(err.inline_message());
            }
        }
    }

    /// Explicit "generate" click for the SKU field; local, no round-trip
    pub fn regenerate_sku(&mut self) -> bool {
        if !self.sku.can_regenerate() {
            return false;
        }
        self.sku.apply_generated(generate_sku())
    }

    /// Explicit "generate" click for the barcode field; local, no round-trip
    pub fn regenerate_barcode(&mut self) -> bool {
        if !self.barcode.can_regenerate() {
            return false;
        }
        self.barcode.apply_generated(generate_barcode())
    }

    /// Change the template dropdown
    ///
    /// `None` clears the rows. A selection whose fetch resolves after a
    /// newer selection (or a clear) has no effect on the rows.
    pub async fn select_template(&mut self, client: &ApiClient, template_id: Option<i64>) {
        self.selected_template = template_id;
        let Some(id) = template_id else {
            self.attributes.clear();
            self.template_error = None;
            return;
        };

        let token = self.attributes.begin_template_load();
        match client.fetch_template(id).await {
            Ok(template) => {
                self.attributes.apply_template(token, template.attributes);
                self.template_error = None;
            }
            Err(err) => {
                // Prior rows stay as they were
                tracing::warn!(template_id = id, error = %err, "failed to load template");
                self.template_error = Some(err.inline_message());
            }
        }
    }

    /// Full submission payload: identifier values plus the attribute arrays
    pub fn submission(&self) -> Vec<(String, String)> {
        let mut fields = vec![
            ("batch_number".to_string(), self.batch.value().to_string()),
            ("sku".to_string(), self.sku.value().to_string()),
            ("barcode".to_string(), self.barcode.value().to_string()),
        ];
        fields.extend(self.attributes.submission_fields());
        fields
    }
}

impl Default for ProductForm {
    fn default() -> Self {
        Self::new()
    }
}

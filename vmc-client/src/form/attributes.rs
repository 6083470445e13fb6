//! Attribute row list
//!
//! Ordered name/value rows backing the attributes section of the product
//! and template forms. Every row gets a stable [`RowId`] at creation and
//! all mutation goes through it, so nothing ever re-scans existing rows to
//! re-attach behavior. Template application is guarded by a load epoch:
//! a fetch that resolves after the selection changed is discarded.

use shared::form::encode_attribute_arrays;
use shared::models::{Attribute, TemplateAttributes};

/// Stable handle to one attribute row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId(u64);

/// Token tying an in-flight template fetch to the selection that started it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken {
    epoch: u64,
}

#[derive(Debug, Clone)]
struct Row {
    id: RowId,
    attribute: Attribute,
}

/// Ordered, duplicate-friendly attribute row list
#[derive(Debug, Default)]
pub struct AttributeRows {
    rows: Vec<Row>,
    next_id: u64,
    epoch: u64,
    focused: Option<RowId>,
}

impl AttributeRows {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc_id(&mut self) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append an empty row and focus its name field.
    pub fn add_row(&mut self) -> RowId {
        self.add_row_with("", "")
    }

    /// Append a prefilled row and focus its name field.
    pub fn add_row_with(&mut self, name: impl Into<String>, value: impl Into<String>) -> RowId {
        let id = self.alloc_id();
        self.rows.push(Row {
            id,
            attribute: Attribute::new(name, value),
        });
        self.focused = Some(id);
        id
    }

    /// Remove exactly the referenced row. Unknown ids are a no-op.
    pub fn remove_row(&mut self, id: RowId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        if self.focused == Some(id) {
            self.focused = None;
        }
        self.rows.len() != before
    }

    /// Name edits lowercase on every keystroke.
    pub fn set_name(&mut self, id: RowId, name: &str) -> bool {
        match self.rows.iter_mut().find(|row| row.id == id) {
            Some(row) => {
                row.attribute.name = name.to_lowercase();
                true
            }
            None => false,
        }
    }

    pub fn set_value(&mut self, id: RowId, value: &str) -> bool {
        match self.rows.iter_mut().find(|row| row.id == id) {
            Some(row) => {
                row.attribute.value = value.to_string();
                true
            }
            None => false,
        }
    }

    /// Start a template load for the current selection.
    ///
    /// Invalidates the effect of any earlier in-flight load.
    pub fn begin_template_load(&mut self) -> LoadToken {
        self.epoch += 1;
        LoadToken { epoch: self.epoch }
    }

    /// Replace all rows with the template's attributes, in template order.
    ///
    /// Applies only if `token` still belongs to the latest load; a stale
    /// token leaves the rows untouched.
    pub fn apply_template(&mut self, token: LoadToken, attributes: TemplateAttributes) -> bool {
        if token.epoch != self.epoch {
            tracing::debug!(
                stale = token.epoch,
                current = self.epoch,
                "discarding superseded template response"
            );
            return false;
        }
        self.rows.clear();
        self.focused = None;
        for (name, value) in attributes {
            let id = self.alloc_id();
            self.rows.push(Row {
                id,
                attribute: Attribute::new(name, value),
            });
        }
        true
    }

    /// Template deselected: drop all rows and invalidate in-flight loads.
    pub fn clear(&mut self) {
        self.epoch += 1;
        self.rows.clear();
        self.focused = None;
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn focused(&self) -> Option<RowId> {
        self.focused
    }

    pub fn row_ids(&self) -> Vec<RowId> {
        self.rows.iter().map(|row| row.id).collect()
    }

    pub fn attribute(&self, id: RowId) -> Option<&Attribute> {
        self.rows.iter().find(|row| row.id == id).map(|row| &row.attribute)
    }

    pub fn attributes(&self) -> Vec<Attribute> {
        self.rows.iter().map(|row| row.attribute.clone()).collect()
    }

    /// Encode rows as `attr_name[]` / `attr_value[]` form pairs.
    pub fn submission_fields(&self) -> Vec<(String, String)> {
        encode_attribute_arrays(&self.attributes())
    }
}

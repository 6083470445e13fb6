//! Parallel-array form encoding
//!
//! The product and template forms post `attr_name[]` and `attr_value[]` as
//! parallel ordered sequences; the backend zips them index-wise. Rows with
//! an empty name are dropped and a missing value becomes `""`.

use crate::models::Attribute;

pub const ATTR_NAME_FIELD: &str = "attr_name[]";
pub const ATTR_VALUE_FIELD: &str = "attr_value[]";

/// Encode attribute rows into `(field, value)` form pairs, in row order.
pub fn encode_attribute_arrays(attributes: &[Attribute]) -> Vec<(String, String)> {
    let mut fields = Vec::with_capacity(attributes.len() * 2);
    for attr in attributes {
        fields.push((ATTR_NAME_FIELD.to_string(), attr.name.clone()));
        fields.push((ATTR_VALUE_FIELD.to_string(), attr.value.clone()));
    }
    fields
}

/// Zip parallel name/value arrays back into attributes, index-wise.
///
/// Mirrors the backend's interpretation: names without a value pair with
/// `""`, empty names are skipped, duplicates pass through untouched.
pub fn decode_attribute_arrays(names: &[String], values: &[String]) -> Vec<Attribute> {
    names
        .iter()
        .enumerate()
        .filter(|(_, name)| !name.is_empty())
        .map(|(i, name)| {
            let value = values.get(i).cloned().unwrap_or_default();
            Attribute::new(name.clone(), value)
        })
        .collect()
}

//! Template Model

use super::attribute::TemplateAttributes;
use serde::{Deserialize, Serialize};

/// Attribute template entity
///
/// A named, reusable set of default attribute pairs for product creation.
/// Read-only from the client's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub id: i64,
    pub name: Option<String>,
    #[serde(default)]
    pub attributes: TemplateAttributes,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_with_object_attributes() {
        let json = r#"{"id":7,"name":"Flower","attributes":{"strain":"","weight":"3.5g"}}"#;
        let template: Template = serde_json::from_str(json).unwrap();
        assert_eq!(template.id, 7);
        assert_eq!(template.name.as_deref(), Some("Flower"));
        assert_eq!(template.attributes.len(), 2);
    }

    #[test]
    fn test_template_with_encoded_attributes() {
        let json = r#"{"id":7,"name":null,"attributes":"{\"strain\":\"indica\"}"}"#;
        let template: Template = serde_json::from_str(json).unwrap();
        assert_eq!(
            template.attributes.entries(),
            &[("strain".to_string(), "indica".to_string())]
        );
    }

    #[test]
    fn test_template_without_attributes() {
        let json = r#"{"id":1,"name":"Empty"}"#;
        let template: Template = serde_json::from_str(json).unwrap();
        assert!(template.attributes.is_empty());
    }
}

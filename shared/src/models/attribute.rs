//! Attribute Model

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single product attribute pair
///
/// Names are case-normalized to lowercase. Duplicate names are permitted;
/// attribute sets are ordered sequences, not maps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_lowercase(),
            value: value.into(),
        }
    }
}

/// Ordered default attributes of a template
///
/// The backend serves this either as a JSON object or as a JSON string that
/// itself encodes such an object (templates are stored as encoded text).
/// Entry order follows the document; null values become `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateAttributes(Vec<(String, String)>);

impl TemplateAttributes {
    pub fn entries(&self) -> &[(String, String)] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl From<Vec<(String, String)>> for TemplateAttributes {
    fn from(entries: Vec<(String, String)>) -> Self {
        Self(entries)
    }
}

impl IntoIterator for TemplateAttributes {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Serialize for TemplateAttributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

fn coerce_value(value: serde_json::Value) -> Result<String, String> {
    match value {
        serde_json::Value::Null => Ok(String::new()),
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Bool(b) => Ok(b.to_string()),
        other => Err(format!("unsupported attribute value: {}", other)),
    }
}

impl<'de> Deserialize<'de> for TemplateAttributes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AttrVisitor;

        impl<'de> Visitor<'de> for AttrVisitor {
            type Value = TemplateAttributes;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an attribute map or a JSON-encoded attribute map")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::new();
                while let Some((name, value)) = map.next_entry::<String, serde_json::Value>()? {
                    let value = coerce_value(value).map_err(de::Error::custom)?;
                    entries.push((name, value));
                }
                Ok(TemplateAttributes(entries))
            }

            fn visit_str<E: de::Error>(self, s: &str) -> Result<Self::Value, E> {
                serde_json::from_str(s).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(AttrVisitor)
    }
}

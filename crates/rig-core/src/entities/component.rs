use std::borrow::Cow;
use std::fmt;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Fields every catalog component carries, flattened into the typed records.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ComponentInfo {
    pub id: String,
    pub name: String,
    pub brand: String,
    /// Non-negative price in the catalog's currency unit.
    pub price: f64,
    /// Image reference (URL or asset path).
    #[serde(default)]
    pub image: String,
    /// Display-only spec sheet. Compatibility rules never read it.
    #[serde(default)]
    pub specs: Specs,
}

/// A single spec-sheet value.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(untagged)]
pub enum SpecValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for SpecValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// One labelled row of a spec sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecEntry {
    pub label: String,
    pub value: SpecValue,
}

/// Ordered label/value pairs.
///
/// On the wire this is a JSON object; entries keep document order rather
/// than being sorted by label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Specs(Vec<SpecEntry>);

impl Specs {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append an entry, keeping insertion order.
    #[must_use]
    pub fn with(mut self, label: impl Into<String>, value: SpecValue) -> Self {
        self.0.push(SpecEntry {
            label: label.into(),
            value,
        });
        self
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<&SpecValue> {
        self.0
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| &entry.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpecEntry> {
        self.0.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Specs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in &self.0 {
            map.serialize_entry(&entry.label, &entry.value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Specs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SpecsVisitor)
    }
}

/// An object of label/value pairs, or an empty array.
impl JsonSchema for Specs {
    fn schema_name() -> Cow<'static, str> {
        "Specs".into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        let value = generator.subschema_for::<SpecValue>();
        json_schema!({
            "anyOf": [
                { "type": "object", "additionalProperties": value },
                { "type": "array", "maxItems": 0 }
            ]
        })
    }
}

struct SpecsVisitor;

impl<'de> Visitor<'de> for SpecsVisitor {
    type Value = Specs;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of spec labels to string or number values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Specs, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((label, value)) = access.next_entry::<String, SpecValue>()? {
            entries.push(SpecEntry { label, value });
        }
        Ok(Specs(entries))
    }

    // An empty array is what some exporters emit for "no specs".
    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Specs, A::Error> {
        if access.next_element::<serde::de::IgnoredAny>()?.is_some() {
            return Err(serde::de::Error::custom(
                "specs must be an object of label/value pairs",
            ));
        }
        Ok(Specs::new())
    }
}

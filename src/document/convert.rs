//! Serde support for the document model.
//!
//! Documents serialise through any `serde` serialiser; conversions to and
//! from [`serde_json::Value`] (behind the default `serde_json` feature) let
//! callers feed parsed configuration straight into the merge strategies and
//! write the result back out.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use super::{Document, Mapping, Scalar};

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Mapping(mapping) => mapping.serialize(serializer),
            Self::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Scalar(scalar) => scalar.serialize(serializer),
        }
    }
}

impl Serialize for Mapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Int(value) => serializer.serialize_i64(*value),
            Self::Float(value) => serializer.serialize_f64(*value),
            Self::String(value) => serializer.serialize_str(value),
        }
    }
}

#[cfg(feature = "serde_json")]
impl From<serde_json::Value> for Document {
    /// Converts parsed JSON into a document.
    ///
    /// Objects become plain (non-order-preserving) mappings; callers that
    /// need the order-preserving tag set it explicitly after conversion.
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Scalar(Scalar::Null),
            serde_json::Value::Bool(b) => Self::Scalar(Scalar::Bool(b)),
            serde_json::Value::Number(n) => Self::Scalar(
                n.as_i64().map(Scalar::Int).unwrap_or_else(|| {
                    n.as_f64().map_or(Scalar::Null, Scalar::Float)
                }),
            ),
            serde_json::Value::String(s) => Self::Scalar(Scalar::String(s)),
            serde_json::Value::Array(items) => {
                Self::Sequence(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => Self::Mapping(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

#[cfg(feature = "serde_json")]
impl From<Document> for serde_json::Value {
    /// Converts a document back into JSON.
    ///
    /// Non-finite floats have no JSON representation and become null.
    fn from(document: Document) -> Self {
        match document {
            Document::Mapping(mapping) => Self::from(mapping),
            Document::Sequence(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            Document::Scalar(Scalar::Null) => Self::Null,
            Document::Scalar(Scalar::Bool(b)) => Self::Bool(b),
            Document::Scalar(Scalar::Int(i)) => Self::from(i),
            Document::Scalar(Scalar::Float(f)) => {
                serde_json::Number::from_f64(f).map_or(Self::Null, Self::Number)
            }
            Document::Scalar(Scalar::String(s)) => Self::String(s),
        }
    }
}

#[cfg(feature = "serde_json")]
impl From<Mapping> for serde_json::Value {
    fn from(mapping: Mapping) -> Self {
        Self::Object(
            mapping
                .into_iter()
                .map(|(key, value)| (key, Self::from(value)))
                .collect(),
        )
    }
}

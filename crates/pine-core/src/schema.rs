//! Sample-driven type inference for data models
//!
//! A model is described by one example JSON object. Each value is classified
//! into a coarse [`InferredType`]; nested objects are not recursed into and
//! arrays are typed by their first element only.

use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Coarse type tag derived from one sample value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InferredType {
    Boolean,
    Integer,
    Float,
    String,
    /// `null` in the sample, type unknown
    Null,
    /// Element type of the first item, `None` for an empty array
    List(Option<Box<InferredType>>),
    /// Nested object, kept untyped
    Map,
}

impl InferredType {
    /// Shorthand for a list with a known element type
    pub fn list_of(element: InferredType) -> Self {
        InferredType::List(Some(Box::new(element)))
    }
}

impl fmt::Display for InferredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferredType::Boolean => f.write_str("boolean"),
            InferredType::Integer => f.write_str("integer"),
            InferredType::Float => f.write_str("float"),
            InferredType::String => f.write_str("string"),
            InferredType::Null => f.write_str("null"),
            InferredType::List(Some(element)) => write!(f, "list<{}>", element),
            InferredType::List(None) => f.write_str("list<untyped>"),
            InferredType::Map => f.write_str("map"),
        }
    }
}

/// One field of a model: the JSON key verbatim and its inferred type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    pub name: String,
    pub ty: InferredType,
}

impl FieldSchema {
    pub fn new(name: impl Into<String>, ty: InferredType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("model sample must be a JSON object, found {found}")]
    InvalidSchemaInput { found: &'static str },
}

/// Classify a single sample value
pub fn infer_type(value: &Value) -> InferredType {
    match value {
        Value::Null => InferredType::Null,
        Value::Bool(_) => InferredType::Boolean,
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                InferredType::Integer
            } else {
                match n.as_f64() {
                    Some(f) if is_integral(f) => InferredType::Integer,
                    _ => InferredType::Float,
                }
            }
        }
        Value::String(_) => InferredType::String,
        // Only the first element is sampled; [1, "a"] is a list of integers.
        Value::Array(items) => InferredType::List(items.first().map(|v| Box::new(infer_type(v)))),
        Value::Object(_) => InferredType::Map,
    }
}

/// Pair every key of a sample object with its inferred type.
///
/// Fields come back in the object's iteration order, which is the order of
/// the keys in the source text.
pub fn extract_fields(sample: &Value) -> Result<Vec<FieldSchema>, SchemaError> {
    let object = sample.as_object().ok_or(SchemaError::InvalidSchemaInput {
        found: kind_name(sample),
    })?;

    Ok(object
        .iter()
        .map(|(key, value)| FieldSchema::new(key.clone(), infer_type(value)))
        .collect())
}

/// Whole number representable as an i64
fn is_integral(f: f64) -> bool {
    f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

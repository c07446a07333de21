// Copyright 2025 Chisomo Makombo Sakala
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Article records and per-attribute column extraction.
use crate::error::InputError;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::Path;

/// One article as delivered by the ingestion step: field name to JSON value.
pub type Record = serde_json::Map<String, Value>;

/// Placeholder for a missing text field.
pub const UNKNOWN: &str = "Unknown";

/// How a field's values are read out of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
  /// Digit-only values become integers, anything else becomes `0`.
  Integer,
  /// Values are kept as text, absent values become [`UNKNOWN`].
  Text,
}

/// A benchmarked attribute: a chart label bound to a record field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSpec {
  pub label: String,
  pub field: String,
  #[serde(default = "default_kind")]
  pub kind: FieldKind,
}

fn default_kind() -> FieldKind {
  FieldKind::Text
}

impl AttributeSpec {
  pub fn new(label: impl Into<String>, field: impl Into<String>, kind: FieldKind) -> Self {
    Self {
      label: label.into(),
      field: field.into(),
      kind,
    }
  }

  /// The seven bibliographic attributes benchmarked by default.
  pub fn defaults() -> Vec<AttributeSpec> {
    vec![
      AttributeSpec::new("Año", "year", FieldKind::Integer),
      AttributeSpec::new("Author", "author", FieldKind::Text),
      AttributeSpec::new("DOI", "doi", FieldKind::Text),
      AttributeSpec::new("Journal", "journal", FieldKind::Text),
      AttributeSpec::new("Mes", "month", FieldKind::Text),
      AttributeSpec::new("Tipo", "type", FieldKind::Text),
      AttributeSpec::new("Título", "title", FieldKind::Text),
    ]
  }
}

/// A single extracted value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
  Integer(i64),
  Text(String),
}

impl fmt::Display for RawValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      RawValue::Integer(value) => write!(f, "{value}"),
      RawValue::Text(value) => f.write_str(value),
    }
  }
}

/// One raw value per record, in record order.
pub type AttributeColumn = Vec<RawValue>;

/// Reads the record sequence from a JSON document whose top-level value is an array of objects.
pub fn load_records(path: &Path) -> Result<Vec<Record>, InputError> {
  if !path.exists() {
    return Err(InputError::Absent {
      path: path.to_path_buf(),
    });
  }

  let content = fs::read_to_string(path).map_err(|source| InputError::Read {
    path: path.to_path_buf(),
    source,
  })?;
  let document: Value = serde_json::from_str(&content).map_err(|source| InputError::Parse {
    path: path.to_path_buf(),
    source,
  })?;

  let Value::Array(items) = document else {
    return Err(InputError::NotAnArray {
      path: path.to_path_buf(),
    });
  };

  items
    .into_iter()
    .enumerate()
    .map(|(index, item)| match item {
      Value::Object(record) => Ok(record),
      _ => Err(InputError::NotAnObject {
        path: path.to_path_buf(),
        index,
      }),
    })
    .collect()
}

/// Pulls `spec.field` out of every record.
pub fn extract_column(records: &[Record], spec: &AttributeSpec) -> AttributeColumn {
  records
    .iter()
    .map(|record| {
      let value = record.get(&spec.field);
      match spec.kind {
        FieldKind::Integer => RawValue::Integer(integer_value(value)),
        FieldKind::Text => RawValue::Text(text_value(value)),
      }
    })
    .collect()
}

fn integer_value(value: Option<&Value>) -> i64 {
  let text = match value {
    Some(Value::String(text)) => text.clone(),
    Some(Value::Number(number)) => number.to_string(),
    _ => return 0,
  };
  if text.is_empty() || !text.bytes().all(|byte| byte.is_ascii_digit()) {
    return 0;
  }
  text.parse().unwrap_or(0)
}

fn text_value(value: Option<&Value>) -> String {
  match value {
    None | Some(Value::Null) => UNKNOWN.to_string(),
    Some(Value::String(text)) => text.clone(),
    Some(other) => other.to_string(),
  }
}

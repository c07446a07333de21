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
//! Converts a raw attribute column into numbers the sorting algorithms accept.
//!
//! The policy is all-or-nothing: if any element fails to parse as a number,
//! every element is mapped to the sum of its character codes, so a column
//! never mixes parsed values with code sums.
use crate::record::RawValue;
use std::fmt;

/// Where the numbers in a [`NormalizedColumn`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvenanceTag {
  /// The raw values themselves, parsed as floats.
  Original,
  /// Character-code sums of each value's text.
  SumaASCII,
  /// The column was empty.
  NoData,
}

impl ProvenanceTag {
  pub fn label(&self) -> &'static str {
    match self {
      ProvenanceTag::Original => "Original",
      ProvenanceTag::SumaASCII => "SumaASCII",
      ProvenanceTag::NoData => "Sin datos",
    }
  }
}

impl fmt::Display for ProvenanceTag {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedColumn {
  pub values: Vec<f64>,
  pub provenance: ProvenanceTag,
}

impl NormalizedColumn {
  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }
}

/// Normalizes `column`. Pure; an empty column yields an empty result tagged [`ProvenanceTag::NoData`].
pub fn normalize(column: &[RawValue]) -> NormalizedColumn {
  if column.is_empty() {
    return NormalizedColumn {
      values: Vec::new(),
      provenance: ProvenanceTag::NoData,
    };
  }

  let texts: Vec<String> = column.iter().map(ToString::to_string).collect();
  let parsed: Option<Vec<f64>> = texts.iter().map(|text| parse_number(text)).collect();

  match parsed {
    Some(values) => NormalizedColumn {
      values,
      provenance: ProvenanceTag::Original,
    },
    None => NormalizedColumn {
      values: texts.iter().map(|text| char_code_sum(text)).collect(),
      provenance: ProvenanceTag::SumaASCII,
    },
  }
}

/// Parses `text` as a float. Single underscores between digits are digit
/// separators (`"1_000"`), as in Python numeric literals.
fn parse_number(text: &str) -> Option<f64> {
  let text = text.trim();
  if !text.contains('_') {
    return text.parse().ok();
  }

  let chars: Vec<char> = text.chars().collect();
  let mut digits = String::with_capacity(text.len());
  for (i, &c) in chars.iter().enumerate() {
    if c != '_' {
      digits.push(c);
      continue;
    }
    let between_digits = i > 0
      && chars[i - 1].is_ascii_digit()
      && chars.get(i + 1).is_some_and(char::is_ascii_digit);
    if !between_digits {
      return None;
    }
  }
  digits.parse().ok()
}

/// Sum of the Unicode scalar values of `text`.
pub fn char_code_sum(text: &str) -> f64 {
  text.chars().map(|c| u64::from(u32::from(c))).sum::<u64>() as f64
}

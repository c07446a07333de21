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
//! The fifteen sorting algorithms compared by the benchmark, and the fixed
//! registry that orders them.
//!
//! Every algorithm takes ownership of its input and hands back a sorted
//! sequence. Callers that need the original afterwards must pass a clone.
//! Algorithms with a restricted domain (see [`Domain`]) report violations as a
//! [`DomainError`] instead of producing a wrong answer.
use thiserror::Error;

mod bitonic;
mod comparison;
mod distribution;
mod exchange;
mod tree;

pub use bitonic::bitonic_sort;
pub use comparison::binary_insertion_sort;
pub use comparison::comb_sort;
pub use comparison::gnome_sort;
pub use comparison::heap_sort;
pub use comparison::quick_sort;
pub use comparison::selection_sort;
pub use comparison::tim_sort;
pub use distribution::MAX_PIGEONHOLE_SLOTS;
pub use distribution::MAX_RADIX_VALUE;
pub use distribution::bucket_sort;
pub use distribution::pigeonhole_sort;
pub use distribution::radix_sort;
pub use exchange::bidirectional_bubble_sort;
pub use exchange::bubble_sort;
pub use exchange::busrbu_sort;
pub use tree::tree_sort;

/// Result type shared by every sorting function.
pub type SortResult = Result<Vec<f64>, DomainError>;

/// Signature of a registered sorting function.
pub type SortFn = fn(Vec<f64>) -> SortResult;

/// A precondition violated by the input of a domain-restricted algorithm.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
  #[error("negative value {value} is outside the domain (non-negative integers only)")]
  NegativeValue { value: f64 },

  #[error("value {value} is not an integer")]
  NonIntegral { value: f64 },

  #[error("value {value} is not finite")]
  NonFinite { value: f64 },

  #[error("value range spans {span} slots, limit is {limit}")]
  RangeTooWide { span: f64, limit: f64 },
}

/// Input restriction of an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
  /// Any sequence of numbers.
  Unrestricted,
  /// Finite values (Bucket Sort).
  Finite,
  /// Finite integers whose range fits in [`MAX_PIGEONHOLE_SLOTS`].
  IntegralRange,
  /// Non-negative integers up to [`MAX_RADIX_VALUE`].
  NonNegativeIntegers,
}

/// One entry of the algorithm registry.
#[derive(Debug, Clone, Copy)]
pub struct Algorithm {
  pub name: &'static str,
  pub sort: SortFn,
  pub domain: Domain,
}

impl Algorithm {
  const fn new(name: &'static str, sort: SortFn, domain: Domain) -> Self {
    Self { name, sort, domain }
  }

  /// Runs the algorithm on an owned sequence.
  pub fn run(&self, values: Vec<f64>) -> SortResult {
    (self.sort)(values)
  }
}

static REGISTRY: [Algorithm; 15] = [
  Algorithm::new("TimSort", tim_sort, Domain::Unrestricted),
  Algorithm::new("Comb Sort", comb_sort, Domain::Unrestricted),
  Algorithm::new("Selection Sort", selection_sort, Domain::Unrestricted),
  Algorithm::new("Tree Sort", tree_sort, Domain::Unrestricted),
  Algorithm::new("Pigeonhole Sort", pigeonhole_sort, Domain::IntegralRange),
  Algorithm::new("Bucket Sort", bucket_sort, Domain::Finite),
  Algorithm::new("Quick Sort", quick_sort, Domain::Unrestricted),
  Algorithm::new("Heap Sort", heap_sort, Domain::Unrestricted),
  Algorithm::new("Bitonic Sort", bitonic_sort, Domain::Unrestricted),
  Algorithm::new("Gnome Sort", gnome_sort, Domain::Unrestricted),
  Algorithm::new("Binary Insertion Sort", binary_insertion_sort, Domain::Unrestricted),
  Algorithm::new("Radix Sort", radix_sort, Domain::NonNegativeIntegers),
  Algorithm::new("Bubble Sort", bubble_sort, Domain::Unrestricted),
  Algorithm::new("Bidirectional Bubble Sort", bidirectional_bubble_sort, Domain::Unrestricted),
  Algorithm::new("Busrbu Sort", busrbu_sort, Domain::Unrestricted),
];

/// All algorithms, in the fixed order used for timing tables and charts.
pub fn registry() -> &'static [Algorithm] {
  &REGISTRY
}

/// Looks an algorithm up by its display name.
pub fn find(name: &str) -> Option<&'static Algorithm> {
  REGISTRY.iter().find(|algorithm| algorithm.name == name)
}

/// Returns true if `values` is non-decreasing.
pub fn is_sorted(values: &[f64]) -> bool {
  values.windows(2).all(|pair| pair[0] <= pair[1])
}

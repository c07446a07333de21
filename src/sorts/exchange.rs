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
//! Adjacent-exchange sorts from the bubble sort family.
use super::SortResult;

/// Classic bubble sort; pass `i` stops before the `i` largest settled values.
pub fn bubble_sort(mut values: Vec<f64>) -> SortResult {
  let len = values.len();
  for i in 0..len {
    for j in 0..(len - i - 1) {
      if values[j] > values[j + 1] {
        values.swap(j, j + 1);
      }
    }
  }
  Ok(values)
}

/// Cocktail shaker sort: a forward pass then a backward pass, each one
/// narrowing the unsorted window, until neither pass swaps.
pub fn bidirectional_bubble_sort(mut values: Vec<f64>) -> SortResult {
  if values.len() < 2 {
    return Ok(values);
  }

  let mut left = 0;
  let mut right = values.len() - 1;
  let mut swapped = true;

  while swapped && left < right {
    swapped = false;
    for i in left..right {
      if values[i] > values[i + 1] {
        values.swap(i, i + 1);
        swapped = true;
      }
    }
    right -= 1;

    for i in ((left + 1)..=right).rev() {
      if values[i] < values[i - 1] {
        values.swap(i, i - 1);
        swapped = true;
      }
    }
    left += 1;
  }
  Ok(values)
}

/// "Busrbu" sort: bubble passes that only compare the pairs starting at even
/// offsets, `(0, 1)`, `(2, 3)`, and so on.
///
/// Values never cross a pair boundary, so this does not sort in general:
/// `[1.0, 3.0, 2.0, 4.0]` comes back unchanged.
pub fn busrbu_sort(mut values: Vec<f64>) -> SortResult {
  let len = values.len();
  for i in 0..len {
    for j in (0..(len - i - 1)).step_by(2) {
      if values[j] > values[j + 1] {
        values.swap(j, j + 1);
      }
    }
  }
  Ok(values)
}

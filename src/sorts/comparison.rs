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
//! Comparison sorts that work in place on the owned vector.
use super::SortResult;
use std::cmp::Ordering;

const COMB_SHRINK: f64 = 1.3;

/// Delegates to the standard library's stable merge sort.
pub fn tim_sort(mut values: Vec<f64>) -> SortResult {
  values.sort_by(f64::total_cmp);
  Ok(values)
}

/// Comb sort: bubble passes over a gap that shrinks by 1.3 each round.
///
/// Finishes once a pass at gap 1 performs no swap.
pub fn comb_sort(mut values: Vec<f64>) -> SortResult {
  let len = values.len();
  let mut gap = len;
  let mut sorted = false;

  while !sorted {
    gap = (gap as f64 / COMB_SHRINK) as usize;
    if gap <= 1 {
      gap = 1;
      sorted = true;
    }

    let mut i = 0;
    while i + gap < len {
      if values[i] > values[i + gap] {
        values.swap(i, i + gap);
        sorted = false;
      }
      i += 1;
    }
  }

  Ok(values)
}

/// Selection sort: swaps the minimum of the unsorted suffix into place.
pub fn selection_sort(mut values: Vec<f64>) -> SortResult {
  let len = values.len();
  for i in 0..len {
    let mut min_idx = i;
    for j in (i + 1)..len {
      if values[j] < values[min_idx] {
        min_idx = j;
      }
    }
    values.swap(i, min_idx);
  }
  Ok(values)
}

/// Quick sort with a three-way partition around the middle element.
///
/// Pending ranges live on an explicit stack, so adversarial input costs
/// O(n^2) time but never deep recursion.
pub fn quick_sort(mut values: Vec<f64>) -> SortResult {
  let mut pending = vec![(0, values.len())];

  while let Some((start, end)) = pending.pop() {
    if end - start <= 1 {
      continue;
    }

    let pivot = values[start + (end - start) / 2];
    let (mut lt, mut i, mut gt) = (start, start, end);

    // [start, lt) < pivot, [lt, i) == pivot, [gt, end) > pivot
    while i < gt {
      match values[i].partial_cmp(&pivot) {
        Some(Ordering::Less) => {
          values.swap(lt, i);
          lt += 1;
          i += 1;
        }
        Some(Ordering::Greater) => {
          gt -= 1;
          values.swap(i, gt);
        }
        _ => i += 1,
      }
    }

    pending.push((start, lt));
    pending.push((gt, end));
  }

  Ok(values)
}

/// Heap sort over a max-heap, with an iterative sift-down.
pub fn heap_sort(mut values: Vec<f64>) -> SortResult {
  let len = values.len();

  for root in (0..len / 2).rev() {
    sift_down(&mut values, root, len);
  }

  for end in (1..len).rev() {
    values.swap(0, end);
    sift_down(&mut values, 0, end);
  }

  Ok(values)
}

fn sift_down(heap: &mut [f64], mut root: usize, len: usize) {
  loop {
    let mut largest = root;
    let left = 2 * root + 1;
    let right = 2 * root + 2;

    if left < len && heap[left] > heap[largest] {
      largest = left;
    }
    if right < len && heap[right] > heap[largest] {
      largest = right;
    }
    if largest == root {
      return;
    }

    heap.swap(root, largest);
    root = largest;
  }
}

/// Gnome sort: a single cursor that steps back after every swap.
///
/// Only a strict inversion sends the cursor back, so unordered pairs (NaN)
/// are stepped over.
pub fn gnome_sort(mut values: Vec<f64>) -> SortResult {
  let mut index = 0;
  while index < values.len() {
    if index == 0 || values[index].partial_cmp(&values[index - 1]) != Some(Ordering::Less) {
      index += 1;
    } else {
      values.swap(index, index - 1);
      index -= 1;
    }
  }
  Ok(values)
}

/// Insertion sort that finds each insertion point by binary search.
pub fn binary_insertion_sort(mut values: Vec<f64>) -> SortResult {
  for i in 1..values.len() {
    let key = values[i];
    let (mut left, mut right) = (0, i);

    // Leftmost slot in [0, i) whose value is not less than the key.
    while left < right {
      let mid = left + (right - left) / 2;
      if values[mid] < key {
        left = mid + 1;
      } else {
        right = mid;
      }
    }

    values[left..=i].rotate_right(1);
  }
  Ok(values)
}

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
//! Distribution sorts. These are the domain-restricted members of the
//! registry: each checks its preconditions before touching the data.
use super::DomainError;
use super::SortResult;

/// Upper bound on `max - min + 1` for [`pigeonhole_sort`].
pub const MAX_PIGEONHOLE_SLOTS: usize = 1 << 24;

/// Largest value [`radix_sort`] accepts (2^53, the last exactly representable integer).
pub const MAX_RADIX_VALUE: f64 = 9_007_199_254_740_992.0;

const RADIX_BASE: u64 = 10;

fn finite_bounds(values: &[f64]) -> Result<Option<(f64, f64)>, DomainError> {
  let mut bounds: Option<(f64, f64)> = None;
  for &value in values {
    if !value.is_finite() {
      return Err(DomainError::NonFinite { value });
    }
    bounds = Some(match bounds {
      None => (value, value),
      Some((min, max)) => (min.min(value), max.max(value)),
    });
  }
  Ok(bounds)
}

fn ensure_integral(values: &[f64]) -> Result<(), DomainError> {
  match values.iter().find(|value| value.fract() != 0.0) {
    Some(&value) => Err(DomainError::NonIntegral { value }),
    None => Ok(()),
  }
}

/// Pigeonhole sort: one counting slot per integer in `[min, max]`.
///
/// Rejects non-integral values and ranges wider than [`MAX_PIGEONHOLE_SLOTS`].
pub fn pigeonhole_sort(values: Vec<f64>) -> SortResult {
  let Some((min, max)) = finite_bounds(&values)? else {
    return Ok(values);
  };
  ensure_integral(&values)?;

  let span = max - min + 1.0;
  if span > MAX_PIGEONHOLE_SLOTS as f64 {
    return Err(DomainError::RangeTooWide {
      span,
      limit: MAX_PIGEONHOLE_SLOTS as f64,
    });
  }

  let mut holes = vec![0usize; span as usize];
  for &value in &values {
    holes[(value - min) as usize] += 1;
  }

  let mut sorted = Vec::with_capacity(values.len());
  for (offset, &count) in holes.iter().enumerate() {
    sorted.extend(std::iter::repeat_n(min + offset as f64, count));
  }
  Ok(sorted)
}

/// Bucket sort with `n` buckets chosen by linear scaling over `[min, max]`.
///
/// The scale divides by `max - min + 1`, which stays positive when every
/// value is equal.
pub fn bucket_sort(values: Vec<f64>) -> SortResult {
  let Some((min, max)) = finite_bounds(&values)? else {
    return Ok(values);
  };

  let count = values.len();
  let width = max - min + 1.0;
  let mut buckets: Vec<Vec<f64>> = vec![Vec::new(); count];

  for value in values {
    let idx = (count as f64 * (value - min) / width) as usize;
    buckets[idx.min(count - 1)].push(value);
  }

  let mut sorted = Vec::with_capacity(count);
  for mut bucket in buckets {
    bucket.sort_by(f64::total_cmp);
    sorted.append(&mut bucket);
  }
  Ok(sorted)
}

/// LSD radix sort in base 10, one stable counting pass per digit of the maximum.
///
/// Only non-negative integers up to [`MAX_RADIX_VALUE`] are accepted.
pub fn radix_sort(values: Vec<f64>) -> SortResult {
  let Some((_, max)) = finite_bounds(&values)? else {
    return Ok(values);
  };
  if let Some(&value) = values.iter().find(|value| **value < 0.0) {
    return Err(DomainError::NegativeValue { value });
  }
  ensure_integral(&values)?;
  if max > MAX_RADIX_VALUE {
    return Err(DomainError::RangeTooWide {
      span: max + 1.0,
      limit: MAX_RADIX_VALUE,
    });
  }

  let mut digits: Vec<u64> = values.iter().map(|&value| value as u64).collect();
  let max = max as u64;
  let mut exp = 1;
  while max / exp > 0 {
    counting_pass(&mut digits, exp);
    exp *= RADIX_BASE;
  }

  Ok(digits.into_iter().map(|value| value as f64).collect())
}

fn counting_pass(values: &mut [u64], exp: u64) {
  let digit = |value: u64| ((value / exp) % RADIX_BASE) as usize;

  let mut count = [0usize; RADIX_BASE as usize];
  for &value in values.iter() {
    count[digit(value)] += 1;
  }
  for i in 1..count.len() {
    count[i] += count[i - 1];
  }

  let mut output = vec![0u64; values.len()];
  for &value in values.iter().rev() {
    let slot = &mut count[digit(value)];
    *slot -= 1;
    output[*slot] = value;
  }
  values.copy_from_slice(&output);
}

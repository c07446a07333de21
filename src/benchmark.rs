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
use crate::config::Config;
use crate::error::BenchError;
use crate::normalize::NormalizedColumn;
use crate::normalize::ProvenanceTag;
use crate::normalize::normalize;
use crate::record::AttributeSpec;
use crate::record::Record;
use crate::record::extract_column;
use crate::record::load_records;
use crate::report::write_chart;
use crate::sorts::Algorithm;
use crate::sorts::is_sorted;
use crate::sorts::registry;
use serde::Deserialize;
use serde::Serialize;
use std::panic;
use std::path::PathBuf;
use std::time::Instant;

/// Timing of one algorithm on one attribute.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TimingResult {
  pub algorithm: String,
  pub attribute: String,
  /// Wall-clock milliseconds; `0.0` when the algorithm failed.
  pub elapsed_ms: f64,
  pub success: bool,
  /// Whether the returned sequence was non-decreasing. Always false on failure.
  pub sorted: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

impl TimingResult {
  fn failed(algorithm: &Algorithm, attribute: &str, error: String) -> Self {
    TimingResult {
      algorithm: algorithm.name.to_string(),
      attribute: attribute.to_string(),
      elapsed_ms: 0.0,
      success: false,
      sorted: false,
      error: Some(error),
    }
  }
}

/// Everything one benchmark pass produced for one attribute.
#[derive(Debug, Clone)]
pub struct AttributeReport {
  pub attribute: String,
  pub provenance: ProvenanceTag,
  pub len: usize,
  pub results: Vec<TimingResult>,
  /// Path of the written chart, `None` if rendering failed.
  pub chart: Option<PathBuf>,
}

/// Runs every algorithm in `algorithms` on a private clone of `column`, in order.
///
/// Domain errors and panics are recorded as failed results and never stop the batch.
pub fn run_algorithms(
  attribute: &str,
  column: &NormalizedColumn,
  algorithms: &[Algorithm],
) -> Vec<TimingResult> {
  algorithms
    .iter()
    .map(|algorithm| time_algorithm(attribute, column, algorithm))
    .collect()
}

fn time_algorithm(attribute: &str, column: &NormalizedColumn, algorithm: &Algorithm) -> TimingResult {
  let input = column.values.clone();

  let start = Instant::now();
  let outcome = panic::catch_unwind(panic::AssertUnwindSafe(move || algorithm.run(input)));
  let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

  match outcome {
    Ok(Ok(output)) => {
      let sorted = is_sorted(&output);
      if !sorted {
        tracing::warn!(algorithm = algorithm.name, "Output is not fully sorted");
      }
      tracing::debug!(algorithm = algorithm.name, elapsed_ms, "Algorithm finished");
      TimingResult {
        algorithm: algorithm.name.to_string(),
        attribute: attribute.to_string(),
        elapsed_ms,
        success: true,
        sorted,
        error: None,
      }
    }
    Ok(Err(e)) => {
      tracing::warn!(algorithm = algorithm.name, error = %e, "Input outside algorithm domain");
      TimingResult::failed(algorithm, attribute, e.to_string())
    }
    Err(payload) => {
      let message = if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
      } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
      } else {
        "unknown panic".to_string()
      };
      tracing::error!(algorithm = algorithm.name, %message, "Algorithm panicked");
      TimingResult::failed(algorithm, attribute, format!("panicked: {message}"))
    }
  }
}

/// Benchmarks a single attribute: extract, normalize, time every algorithm, chart.
///
/// A chart that cannot be written is logged and reported as `chart: None`.
pub fn benchmark_attribute(
  records: &[Record],
  spec: &AttributeSpec,
  config: &Config,
) -> AttributeReport {
  let span = tracing::info_span!("attribute", label = %spec.label);
  let _enter = span.enter();

  let raw = extract_column(records, spec);
  tracing::info!("Analyzing {} with {} values", spec.label, raw.len());

  let column = normalize(&raw);
  tracing::info!(provenance = %column.provenance, "Normalized {} values", column.len());

  let results = run_algorithms(&spec.label, &column, registry());
  for result in &results {
    tracing::info!(
      algorithm = %result.algorithm,
      success = result.success,
      "{:.4} ms",
      result.elapsed_ms
    );
  }

  let chart = match write_chart(&results, &spec.label, column.provenance, &config.results_dir) {
    Ok(path) => {
      tracing::info!(path = %path.display(), "Chart written");
      Some(path)
    }
    Err(e) => {
      tracing::error!(error = %e, "Skipping chart for {}", spec.label);
      None
    }
  };

  AttributeReport {
    attribute: spec.label.clone(),
    provenance: column.provenance,
    len: column.len(),
    results,
    chart,
  }
}

/// Main benchmark pass: loads the records named by `config` and benchmarks each selected attribute.
///
/// Fails only when the records cannot be loaded or the attribute selection is invalid.
/// An empty record set produces no reports.
pub fn run_benchmarks(config: &Config) -> Result<Vec<AttributeReport>, BenchError> {
  let span = tracing::info_span!("benchmark_pass", input = %config.input.display());
  let _enter = span.enter();

  let attributes = config.selected_attributes()?;
  let records = load_records(&config.input)?;
  tracing::info!("Loaded {} records", records.len());

  if records.is_empty() {
    tracing::warn!("Input contains no records. Nothing to benchmark.");
    return Ok(Vec::new());
  }

  tracing::info!("--- Starting Benchmark Pass ---");
  let reports = attributes
    .iter()
    .map(|spec| benchmark_attribute(&records, spec, config))
    .collect();
  tracing::info!("--- Benchmark pass complete ---");

  Ok(reports)
}

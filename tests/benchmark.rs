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
use biblio_bench::benchmark::run_algorithms;
use biblio_bench::benchmark::run_benchmarks;
use biblio_bench::cli::RunArgs;
use biblio_bench::config::Config;
use biblio_bench::error::BenchError;
use biblio_bench::error::ConfigError;
use biblio_bench::error::InputError;
use biblio_bench::error::RenderError;
use biblio_bench::normalize::NormalizedColumn;
use biblio_bench::normalize::ProvenanceTag;
use biblio_bench::record::AttributeSpec;
use biblio_bench::record::FieldKind;
use biblio_bench::report::chart_path;
use biblio_bench::report::render_svg;
use biblio_bench::report::write_chart;
use biblio_bench::sorts::Algorithm;
use biblio_bench::sorts::Domain;
use biblio_bench::sorts::SortResult;
use biblio_bench::sorts::registry;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn original(values: Vec<f64>) -> NormalizedColumn {
  NormalizedColumn {
    values,
    provenance: ProvenanceTag::Original,
  }
}

fn write_articles(dir: &Path) -> std::path::PathBuf {
  let path = dir.join("processed_articles.json");
  fs::write(
    &path,
    r#"[
      {"year": "2021", "author": "Lovelace, Ada", "doi": "10.1000/a", "journal": "Computing", "month": "mar", "type": "article", "title": "Notes"},
      {"year": "2019", "author": "Hopper, Grace", "doi": "10.1000/b", "journal": "Compilers", "type": "article", "title": "A-0"},
      {"year": "n.d.", "author": "Turing, Alan", "journal": "Mind", "month": "oct", "type": "article", "title": "Machinery"}
    ]"#,
  )
  .unwrap();
  path
}

fn config_for(dir: &Path) -> Config {
  Config {
    input: write_articles(dir),
    results_dir: dir.join("resultados"),
    ..Config::default()
  }
}

#[test]
fn test_runner_reports_every_algorithm_in_registry_order() {
  let column = original(vec![5.0, 3.0, 8.0, 1.0, 9.0, 2.0]);
  let results = run_algorithms("Año", &column, registry());

  assert_eq!(results.len(), 15);
  for (result, algorithm) in results.iter().zip(registry()) {
    assert_eq!(result.algorithm, algorithm.name);
    assert_eq!(result.attribute, "Año");
    assert!(result.success, "{}", result.algorithm);
    assert!(result.elapsed_ms >= 0.0);
    assert!(result.error.is_none());
    let best_effort = matches!(algorithm.name, "Bitonic Sort" | "Busrbu Sort");
    assert_eq!(result.sorted, !best_effort, "{}", result.algorithm);
  }
}

#[test]
fn test_runner_does_not_mutate_the_column() {
  let column = original(vec![9.0, 4.0, 4.0, 1.0, 7.0]);
  let before = column.clone();
  run_algorithms("Año", &column, registry());
  assert_eq!(column, before);
}

#[test]
fn test_domain_error_is_isolated_to_one_algorithm() {
  let column = original(vec![-1.0, 2.0, 3.0]);
  let results = run_algorithms("Año", &column, registry());

  assert_eq!(results.len(), 15);
  for result in &results {
    if result.algorithm == "Radix Sort" {
      assert!(!result.success);
      assert_eq!(result.elapsed_ms, 0.0);
      assert!(result.error.as_deref().unwrap().contains("negative"));
    } else {
      assert!(result.success, "{}", result.algorithm);
    }
  }
}

#[test]
fn test_empty_column_runs_every_algorithm() {
  let column = NormalizedColumn {
    values: Vec::new(),
    provenance: ProvenanceTag::NoData,
  };
  let results = run_algorithms("Mes", &column, registry());

  assert_eq!(results.len(), 15);
  assert!(results.iter().all(|result| result.success && result.sorted));
  assert!(results.iter().all(|result| result.elapsed_ms < 1_000.0));
}

#[test]
fn test_nan_column_completes_every_algorithm() {
  let column = original(vec![f64::NAN, 1.0, f64::INFINITY]);
  let results = run_algorithms("Mes", &column, registry());

  assert_eq!(results.len(), 15);
  for result in &results {
    let distribution = matches!(
      result.algorithm.as_str(),
      "Pigeonhole Sort" | "Bucket Sort" | "Radix Sort"
    );
    assert_eq!(result.success, !distribution, "{}", result.algorithm);
  }
}

fn panicking_sort(_values: Vec<f64>) -> SortResult {
  panic!("comparator exploded")
}

#[test]
fn test_panicking_algorithm_is_recorded_as_failure() {
  let algorithms = [
    Algorithm {
      name: "Exploding Sort",
      sort: panicking_sort,
      domain: Domain::Unrestricted,
    },
    *registry().first().unwrap(),
  ];
  let results = run_algorithms("DOI", &original(vec![2.0, 1.0]), &algorithms);

  assert!(!results[0].success);
  assert!(results[0].error.as_deref().unwrap().contains("comparator exploded"));
  assert!(results[1].success);
}

#[test]
fn test_chart_path_replaces_spaces_only() {
  let dir = Path::new("out");
  assert_eq!(chart_path(dir, "Año"), dir.join("Año.svg"));
  assert_eq!(chart_path(dir, "Publication Year"), dir.join("Publication_Year.svg"));
}

#[test]
fn test_write_chart_creates_directory_and_overwrites() {
  let temp = tempdir().unwrap();
  let results_dir = temp.path().join("nested").join("resultados");
  let column = original(vec![3.0, 1.0, 2.0]);
  let results = run_algorithms("Año", &column, registry());

  let path = write_chart(&results, "Año", ProvenanceTag::Original, &results_dir).unwrap();
  assert_eq!(path, results_dir.join("Año.svg"));
  let first = fs::read_to_string(&path).unwrap();
  assert!(first.contains("<svg"));
  assert!(first.contains("Sorting time comparison for Año (Original)"));
  assert!(first.contains("Bidirectional Bubble Sort"));

  let path = write_chart(&results[..1], "Año", ProvenanceTag::Original, &results_dir).unwrap();
  let second = fs::read_to_string(&path).unwrap();
  assert!(!second.contains("Bidirectional Bubble Sort"));
}

#[test]
fn test_failed_algorithms_are_marked_in_chart() {
  let results = run_algorithms("Año", &original(vec![-4.0, 2.5]), registry());
  let svg = render_svg(&results, "Año", ProvenanceTag::Original).unwrap();
  assert!(svg.contains("Radix Sort (failed)"));
  assert!(svg.contains("Pigeonhole Sort (failed)"));
  assert!(!svg.contains("TimSort (failed)"));
}

#[test]
fn test_write_chart_reports_unusable_directory() {
  let temp = tempdir().unwrap();
  let blocker = temp.path().join("blocker");
  fs::write(&blocker, "not a directory").unwrap();

  let err = write_chart(&[], "Año", ProvenanceTag::NoData, &blocker).unwrap_err();
  assert!(matches!(err, RenderError::CreateDir { .. }));
}

#[test]
fn test_benchmark_pass_writes_one_chart_per_attribute() {
  let temp = tempdir().unwrap();
  let config = config_for(temp.path());

  let reports = run_benchmarks(&config).unwrap();
  assert_eq!(reports.len(), 7);

  for report in &reports {
    assert_eq!(report.len, 3);
    assert_eq!(report.results.len(), 15);
    let chart = report.chart.as_ref().unwrap();
    assert!(chart.exists(), "{}", chart.display());
  }

  let year = &reports[0];
  assert_eq!(year.attribute, "Año");
  assert_eq!(year.provenance, ProvenanceTag::Original);
  assert!(config.results_dir.join("Título.svg").exists());

  let author = &reports[1];
  assert_eq!(author.provenance, ProvenanceTag::SumaASCII);
}

#[test]
fn test_benchmark_pass_aborts_without_input() {
  let temp = tempdir().unwrap();
  let config = Config {
    input: temp.path().join("missing.json"),
    results_dir: temp.path().join("resultados"),
    ..Config::default()
  };

  let err = run_benchmarks(&config).unwrap_err();
  assert!(matches!(err, BenchError::Input(InputError::Absent { .. })));
  assert!(!config.results_dir.exists());
}

#[test]
fn test_benchmark_pass_with_no_records_produces_nothing() {
  let temp = tempdir().unwrap();
  let input = temp.path().join("empty.json");
  fs::write(&input, "[]").unwrap();
  let config = Config {
    input,
    results_dir: temp.path().join("resultados"),
    ..Config::default()
  };

  assert!(run_benchmarks(&config).unwrap().is_empty());
  assert!(!config.results_dir.exists());
}

#[test]
fn test_benchmark_pass_restricted_to_selected_attributes() {
  let temp = tempdir().unwrap();
  let config = Config {
    only: vec!["DOI".to_string()],
    ..config_for(temp.path())
  };

  let reports = run_benchmarks(&config).unwrap();
  assert_eq!(reports.len(), 1);
  assert_eq!(reports[0].attribute, "DOI");
}

#[test]
fn test_unknown_attribute_is_a_config_error() {
  let temp = tempdir().unwrap();
  let config = Config {
    only: vec!["Abstract".to_string()],
    ..config_for(temp.path())
  };

  let err = run_benchmarks(&config).unwrap_err();
  assert!(matches!(
    err,
    BenchError::Config(ConfigError::UnknownAttribute { .. })
  ));
}

#[test]
fn test_config_cli_flags_override_defaults() {
  let config = Config::try_from(RunArgs {
    input: Some("articles.json".into()),
    results_dir: Some("charts".into()),
    attributes: vec!["Año".to_string()],
    ..RunArgs::default()
  })
  .unwrap();

  assert_eq!(config.input, Path::new("articles.json"));
  assert_eq!(config.results_dir, Path::new("charts"));
  assert_eq!(config.only, vec!["Año".to_string()]);
  assert_eq!(config.attributes, AttributeSpec::defaults());
}

#[test]
fn test_config_file_replaces_attribute_list() {
  let temp = tempdir().unwrap();
  let file = temp.path().join("bench.toml");
  fs::write(
    &file,
    r#"
results_dir = "from-file"

[[attributes]]
label = "Publication Year"
field = "year"
kind = "integer"

[[attributes]]
label = "Publisher"
field = "publisher"
"#,
  )
  .unwrap();

  let config = Config::try_from(RunArgs {
    config: Some(file),
    input: Some("articles.json".into()),
    ..RunArgs::default()
  })
  .unwrap();

  assert_eq!(config.results_dir, Path::new("from-file"));
  assert_eq!(
    config.attributes,
    vec![
      AttributeSpec::new("Publication Year", "year", FieldKind::Integer),
      AttributeSpec::new("Publisher", "publisher", FieldKind::Text),
    ]
  );
}

#[test]
fn test_missing_config_file_is_an_error() {
  let err = Config::try_from(RunArgs {
    config: Some("does-not-exist.toml".into()),
    ..RunArgs::default()
  })
  .unwrap_err();
  assert!(matches!(err, ConfigError::MissingFile(_)));
}

#[test]
fn test_config_rejects_unknown_cli_attribute() {
  let err = Config::try_from(RunArgs {
    input: Some("articles.json".into()),
    attributes: vec!["Abstract".to_string()],
    ..RunArgs::default()
  })
  .unwrap_err();
  assert!(matches!(err, ConfigError::UnknownAttribute { .. }));
}

#[test]
fn test_config_rejects_labels_with_path_separators() {
  let temp = tempdir().unwrap();
  let file = temp.path().join("bench.toml");
  fs::write(
    &file,
    r#"
[[attributes]]
label = "../escape"
field = "title"
"#,
  )
  .unwrap();

  let err = Config::try_from(RunArgs {
    config: Some(file),
    input: Some("articles.json".into()),
    ..RunArgs::default()
  })
  .unwrap_err();
  assert!(matches!(err, ConfigError::InvalidLabel { label } if label == "../escape"));
}

#[test]
fn test_benchmark_pass_rejects_windows_separator_in_label() {
  let temp = tempdir().unwrap();
  let config = Config {
    attributes: vec![AttributeSpec::new(r"charts\year", "year", FieldKind::Integer)],
    ..config_for(temp.path())
  };

  let err = run_benchmarks(&config).unwrap_err();
  assert!(matches!(
    err,
    BenchError::Config(ConfigError::InvalidLabel { .. })
  ));
  assert!(!config.results_dir.exists());
}

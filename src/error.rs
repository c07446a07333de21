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
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error enum for the biblio-bench library.
#[derive(Error, Debug)]
pub enum BenchError {
  #[error("Input records unavailable")]
  Input(#[from] InputError),

  #[error("Configuration error")]
  Config(#[from] ConfigError),
}

/// Errors obtaining the record sequence (src/record.rs). All of them abort the pass.
#[derive(Error, Debug)]
pub enum InputError {
  #[error("Input file not found: {path}")]
  Absent { path: PathBuf },

  #[error("Failed to read input file: {path}")]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to parse input JSON: {path}")]
  Parse {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("Top-level JSON value in {path} is not an array")]
  NotAnArray { path: PathBuf },

  #[error("Element {index} of {path} is not an object")]
  NotAnObject { path: PathBuf, index: usize },
}

/// Errors related to configuration resolution (src/config.rs).
#[derive(Error, Debug)]
pub enum ConfigError {
  #[error("Configuration file not found: {0}")]
  MissingFile(PathBuf),

  #[error("Failed to load configuration: {0}")]
  Load(#[from] figment::Error),

  #[error("Attribute label '{label}' must be non-empty and free of path separators")]
  InvalidLabel { label: String },

  #[error("Unknown attribute '{label}'. Available: {available:?}")]
  UnknownAttribute {
    label: String,
    available: Vec<String>,
  },
}

/// Errors writing a chart (src/report.rs). Scoped to a single attribute.
#[derive(Error, Debug)]
pub enum RenderError {
  #[error("Failed to create results directory: {path}")]
  CreateDir {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to draw chart: {0}")]
  Draw(String),

  #[error("Failed to write chart: {path}")]
  Write {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

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
use crate::cli::RunArgs;
use crate::error::ConfigError;
use crate::record::AttributeSpec;
use figment::Figment;
use figment::providers::Env;
use figment::providers::Format;
use figment::providers::Serialized;
use figment::providers::Toml;
use serde::Deserialize;
use serde::Serialize;
use std::path::PathBuf;

/// Configuration file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "biblio-bench.toml";

/// Prefix of the environment variables that override file settings.
pub const ENV_PREFIX: &str = "BIBLIO_BENCH_";

// --- Default Values ---
fn default_input() -> PathBuf {
  PathBuf::from("processed_articles.json")
}

fn default_results_dir() -> PathBuf {
  PathBuf::from("resultados")
}

/// Fully resolved benchmark configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
  /// JSON document with the article records.
  pub input: PathBuf,
  /// Where charts are written.
  pub results_dir: PathBuf,
  /// Every attribute that can be benchmarked.
  pub attributes: Vec<AttributeSpec>,
  /// Labels to restrict the run to; empty means all of `attributes`.
  #[serde(default)]
  pub only: Vec<String>,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      input: default_input(),
      results_dir: default_results_dir(),
      attributes: AttributeSpec::defaults(),
      only: Vec::new(),
    }
  }
}

impl Config {
  /// The attributes this run benchmarks, in configuration order.
  pub fn selected_attributes(&self) -> Result<Vec<AttributeSpec>, ConfigError> {
    // Labels name chart files inside `results_dir`.
    if let Some(spec) = self
      .attributes
      .iter()
      .find(|spec| spec.label.is_empty() || spec.label.contains(['/', '\\']))
    {
      return Err(ConfigError::InvalidLabel {
        label: spec.label.clone(),
      });
    }

    if self.only.is_empty() {
      return Ok(self.attributes.clone());
    }

    if let Some(label) = self
      .only
      .iter()
      .find(|label| !self.attributes.iter().any(|spec| &spec.label == *label))
    {
      return Err(ConfigError::UnknownAttribute {
        label: label.clone(),
        available: self.attributes.iter().map(|spec| spec.label.clone()).collect(),
      });
    }

    Ok(
      self
        .attributes
        .iter()
        .filter(|spec| self.only.contains(&spec.label))
        .cloned()
        .collect(),
    )
  }
}

/// Layers defaults, the TOML file, `BIBLIO_BENCH_*` variables and the CLI flags, in that order.
impl TryFrom<RunArgs> for Config {
  type Error = ConfigError;

  fn try_from(
    RunArgs {
      config,
      input,
      results_dir,
      attributes,
    }: RunArgs,
  ) -> Result<Self, Self::Error> {
    let config_file = match config {
      Some(path) if !path.exists() => return Err(ConfigError::MissingFile(path)),
      Some(path) => path,
      None => PathBuf::from(DEFAULT_CONFIG_FILE),
    };

    let mut figment = Figment::from(Serialized::defaults(Config::default()))
      .merge(Toml::file(&config_file))
      .merge(Env::prefixed(ENV_PREFIX).only(&["input", "results_dir"]));

    if let Some(input) = input {
      figment = figment.merge(Serialized::default("input", input));
    }
    if let Some(results_dir) = results_dir {
      figment = figment.merge(Serialized::default("results_dir", results_dir));
    }
    if !attributes.is_empty() {
      figment = figment.merge(Serialized::default("only", attributes));
    }

    let config: Config = figment.extract()?;
    tracing::debug!(?config, file = %config_file.display(), "Resolved configuration");

    // Surface unknown labels before any work starts.
    config.selected_attributes()?;
    Ok(config)
  }
}

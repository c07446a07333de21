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
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
  version,
  about = "Sorting algorithm benchmark over bibliographic record attributes"
)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
  /// Benchmark every algorithm on each attribute and write one chart per attribute.
  Run(RunArgs),

  /// List the registered algorithms and their input domains.
  Algorithms,
}

#[derive(Debug, Args, Default)]
pub struct RunArgs {
  /// TOML configuration file. Defaults to `biblio-bench.toml` when present.
  #[arg(long, env = "BIBLIO_BENCH_CONFIG")]
  pub config: Option<PathBuf>,

  /// JSON document holding the array of article records.
  #[arg(long)]
  pub input: Option<PathBuf>,

  /// Directory the charts are written to. Created if missing.
  #[arg(long)]
  pub results_dir: Option<PathBuf>,

  /// Restrict the run to these attribute labels (repeatable).
  /// Example: --attribute Año --attribute DOI
  #[arg(long = "attribute")]
  pub attributes: Vec<String>,
}

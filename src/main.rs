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
use Commands::Algorithms;
use Commands::Run;
use anyhow::Context;
use anyhow::Result;
use biblio_bench::benchmark::run_benchmarks;
use biblio_bench::cli::Cli;
use biblio_bench::cli::Commands;
use biblio_bench::config::Config;
use biblio_bench::logging::setup_tracing;
use biblio_bench::sorts::registry;
use clap::Parser;

fn main() -> Result<()> {
  let _guard = setup_tracing()?;

  let Cli { command } = Cli::parse();
  let main_span = tracing::info_span!("biblio_bench");
  let _enter = main_span.enter();

  match command {
    Algorithms => {
      for algorithm in registry() {
        println!("{}\t{:?}", algorithm.name, algorithm.domain);
      }
    }
    Run(run_args) => {
      tracing::info!("Initializing Benchmark Run...");

      let config = Config::try_from(run_args).context("Failed to resolve configuration")?;
      let reports = run_benchmarks(&config).context("Benchmark pass aborted")?;

      for report in &reports {
        for result in &report.results {
          println!("{}", serde_json::to_string(result)?);
        }
      }

      let charts = reports.iter().filter(|report| report.chart.is_some()).count();
      tracing::info!("Process complete: {} of {} charts written", charts, reports.len());
    }
  }

  Ok(())
}

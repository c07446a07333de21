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

//! # biblio-bench
//!
//! `biblio-bench` compares fifteen sorting algorithms on the attributes of a
//! bibliographic dataset. Each attribute (year, author, DOI, ...) is pulled out
//! of every article record, normalized into numbers, sorted by every algorithm
//! on a private copy, and the timings are charted.
//!
//! This crate contains the main library logic for the `biblio-bench` CLI, but
//! its core modules (`record`, `normalize`, `sorts`, `benchmark`, `report`)
//! can be used independently.
//!
//! ## Core Modules
//!
//! * [`record`]: Loads the JSON record array and extracts one attribute column.
//! * [`normalize`]: Turns a raw column into numbers tagged with their provenance.
//! * [`sorts`]: The fifteen sorting algorithms and their fixed registry.
//! * [`benchmark`]: Times every algorithm per attribute and runs the full pass.
//! * [`report`]: Renders the per-attribute SVG bar chart.
//! * [`config`]: Resolves the `Config` from defaults, TOML, environment and CLI.
//! * [`cli`]: Defines the `clap`-based command-line interface.
//! * [`error`]: Defines the custom error types for the library.
//! * [`logging`]: Provides the `setup_tracing` utility.

pub mod benchmark;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod normalize;
pub mod record;
pub mod report;
pub mod sorts;

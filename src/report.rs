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
//! Bar charts of algorithm timings, drawn with `plotters` into SVG.
use crate::benchmark::TimingResult;
use crate::error::RenderError;
use crate::normalize::ProvenanceTag;
use plotters::coord::ranged1d::IntoSegmentedCoord;
use plotters::coord::ranged1d::SegmentValue;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::FontTransform;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

const SIZE: (u32, u32) = (1000, 600);
const BAR_FILL: RGBColor = RGBColor(135, 206, 235);
const FONT: &str = "sans-serif";

/// Chart location for `attribute`: spaces become underscores, nothing else changes.
pub fn chart_path(results_dir: &Path, attribute: &str) -> PathBuf {
  results_dir.join(format!("{}.svg", attribute.replace(' ', "_")))
}

/// Renders the timings for one attribute and writes them to [`chart_path`],
/// creating `results_dir` if needed and replacing any previous chart.
pub fn write_chart(
  results: &[TimingResult],
  attribute: &str,
  provenance: ProvenanceTag,
  results_dir: &Path,
) -> Result<PathBuf, RenderError> {
  fs::create_dir_all(results_dir).map_err(|source| RenderError::CreateDir {
    path: results_dir.to_path_buf(),
    source,
  })?;

  let path = chart_path(results_dir, attribute);
  let svg = render_svg(results, attribute, provenance)?;
  fs::write(&path, svg).map_err(|source| RenderError::Write {
    path: path.clone(),
    source,
  })?;

  Ok(path)
}

fn bar_label(result: &TimingResult) -> String {
  if result.success {
    result.algorithm.clone()
  } else {
    format!("{} (failed)", result.algorithm)
  }
}

/// Draws one bar per result, in order. Failed algorithms get a zero-height
/// bar and a marked label.
pub fn render_svg(
  results: &[TimingResult],
  attribute: &str,
  provenance: ProvenanceTag,
) -> Result<String, RenderError> {
  let draw_error = |e: DrawingAreaErrorKind<std::io::Error>| RenderError::Draw(e.to_string());

  let labels: Vec<String> = results.iter().map(bar_label).collect();
  let peak = results
    .iter()
    .filter(|result| result.success)
    .map(|result| result.elapsed_ms)
    .fold(0.0_f64, f64::max);
  let y_max = if peak > 0.0 { peak * 1.1 } else { 1.0 };
  let slots = results.len().max(1);

  let mut svg = String::new();
  {
    let root = SVGBackend::with_string(&mut svg, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(draw_error)?;

    let mut chart = ChartBuilder::on(&root)
      .caption(
        format!("Sorting time comparison for {attribute} ({provenance})"),
        (FONT, 20),
      )
      .margin(10)
      .x_label_area_size(190)
      .y_label_area_size(80)
      .build_cartesian_2d((0..slots).into_segmented(), 0.0..y_max)
      .map_err(draw_error)?;

    chart
      .configure_mesh()
      .disable_x_mesh()
      .x_labels(slots + 1)
      .x_label_style(
        (FONT, 12)
          .into_font()
          .transform(FontTransform::Rotate90),
      )
      .x_label_formatter(&|value| match value {
        SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
        _ => String::new(),
      })
      .y_label_formatter(&|ms| format!("{ms:.3}"))
      .x_desc("Sorting algorithms")
      .y_desc("Execution time (ms)")
      .draw()
      .map_err(draw_error)?;

    chart
      .draw_series(results.iter().enumerate().map(|(i, result)| {
        let value = if result.success { result.elapsed_ms } else { 0.0 };
        let mut bar = Rectangle::new(
          [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), value)],
          BAR_FILL.filled(),
        );
        bar.set_margin(0, 0, 6, 6);
        bar
      }))
      .map_err(draw_error)?;

    root.present().map_err(draw_error)?;
  }

  Ok(svg)
}

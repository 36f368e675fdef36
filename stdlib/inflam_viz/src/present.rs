use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;

use crate::chart::{figure_svg, finite_range, sparkline_ascii};
use crate::error::VizError;
use crate::text::format_vector;
use crate::view::ViewData;

/// Turns the statistics of one input into some form of output.
///
/// `source` names the input the statistics were computed from. Presenters
/// only read `view`.
pub trait Presenter {
    fn present(
        &mut self,
        source: &str,
        view: &ViewData,
        out: &mut dyn Write,
    ) -> Result<(), VizError>;
}

fn name_width(view: &ViewData) -> usize {
    view.iter().map(|(n, _)| n.len()).max().unwrap_or(0)
}

/// Terminal plot: one sparkline per statistic with its value range.
#[derive(Debug, Clone)]
pub struct SparklinePresenter {
    width: usize,
}

impl SparklinePresenter {
    pub fn new(width: usize) -> Self {
        Self { width }
    }
}

impl Presenter for SparklinePresenter {
    fn present(
        &mut self,
        source: &str,
        view: &ViewData,
        out: &mut dyn Write,
    ) -> Result<(), VizError> {
        let pad = name_width(view);
        writeln!(out, "{source}")?;
        for (name, values) in view.iter() {
            match finite_range(values) {
                Some((lo, hi)) => {
                    let line = sparkline_ascii(values, self.width.min(values.len()));
                    writeln!(out, "  {name:<pad$} |{line}| {lo:.2} .. {hi:.2}")?;
                }
                None => writeln!(out, "  {name:<pad$} (no data)")?,
            }
        }
        Ok(())
    }
}

/// Multi-line listing of every statistic's full vector.
#[derive(Debug, Clone)]
pub struct TextSummary {
    precision: usize,
}

impl TextSummary {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }
}

impl Presenter for TextSummary {
    fn present(
        &mut self,
        source: &str,
        view: &ViewData,
        out: &mut dyn Write,
    ) -> Result<(), VizError> {
        let pad = name_width(view);
        writeln!(out, "Summary of statistics for {source}:")?;
        for (name, values) in view.iter() {
            writeln!(
                out,
                "  {name:<pad$} : {}",
                format_vector(values, self.precision)
            )?;
        }
        Ok(())
    }
}

/// Writes `<stem>.svg` into a directory, one chart panel per statistic.
///
/// Inputs from different paths that share a file stem get `<stem>-2.svg`,
/// `<stem>-3.svg` and so on, in the order they are presented.
#[derive(Debug, Clone)]
pub struct SvgPresenter {
    dir: PathBuf,
    width: u32,
    panel_height: u32,
    written: HashMap<String, PathBuf>,
}

impl SvgPresenter {
    pub fn new(dir: impl Into<PathBuf>, width: u32, panel_height: u32) -> Self {
        Self {
            dir: dir.into(),
            width,
            panel_height,
            written: HashMap::new(),
        }
    }

    /// Destination file for statistics computed from `source`.
    pub fn output_path(&self, source: &str) -> PathBuf {
        if let Some(path) = self.written.get(source) {
            return path.clone();
        }
        let stem = Path::new(source)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "statistics".to_string());
        let mut path = self.dir.join(format!("{stem}.svg"));
        let mut n = 2;
        while self.written.values().any(|taken| *taken == path) {
            path = self.dir.join(format!("{stem}-{n}.svg"));
            n += 1;
        }
        path
    }
}

impl Presenter for SvgPresenter {
    fn present(
        &mut self,
        source: &str,
        view: &ViewData,
        _out: &mut dyn Write,
    ) -> Result<(), VizError> {
        let path = self.output_path(source);
        let svg = figure_svg(view.iter(), self.width, self.panel_height)?;
        fs::create_dir_all(&self.dir)
            .and_then(|()| fs::write(&path, svg))
            .map_err(|err| VizError::File {
                path: path.clone(),
                source: err,
            })?;
        info!("wrote {}", path.display());
        self.written.insert(source.to_string(), path);
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    source: &'a str,
    statistics: &'a ViewData,
}

/// One JSON object per input, newline separated.
#[derive(Debug, Clone, Default)]
pub struct JsonPresenter;

impl JsonPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Presenter for JsonPresenter {
    fn present(
        &mut self,
        source: &str,
        view: &ViewData,
        out: &mut dyn Write,
    ) -> Result<(), VizError> {
        let record = JsonRecord {
            source,
            statistics: view,
        };
        serde_json::to_writer(&mut *out, &record)?;
        writeln!(out)?;
        Ok(())
    }
}

use std::io::Write;
use std::path::{Path, PathBuf};

use inflam_data::{load_csv, DataError};
use inflam_stats::{daily_above_threshold, DailyStatistics, StatsError};
use inflam_viz::{
    JsonPresenter, Presenter, SparklinePresenter, SvgPresenter, TextSummary, ViewData, VizError,
};
use log::{debug, info};
use serde::Serialize;
use thiserror::Error;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("no input files given")]
    NoInput,
    #[error("failed to load '{}': {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: DataError,
    },
    #[error("{}: {source}", .path.display())]
    Threshold {
        path: PathBuf,
        #[source]
        source: StatsError,
    },
    #[error("failed to present '{}': {source}", .path.display())]
    Present {
        path: PathBuf,
        #[source]
        source: VizError,
    },
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Count readings of one patient above a cutoff, per input file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdQuery {
    pub threshold: f64,
    pub patient: usize,
}

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub infiles: Vec<PathBuf>,
    /// Print the full statistic vectors.
    pub text: bool,
    /// Emit JSON lines instead of the terminal plot and text summary.
    pub json: bool,
    /// Skip the terminal plot.
    pub quiet: bool,
    pub threshold: Option<ThresholdQuery>,
    pub config: Config,
}

/// Name the daily statistics for presentation.
pub fn build_view(stats: &DailyStatistics) -> ViewData {
    stats
        .entries()
        .into_iter()
        .map(|(name, values)| (name, values.to_vec()))
        .collect()
}

/// Presenters selected by `options`, in output order.
pub fn presenters_for(options: &RunOptions) -> Vec<Box<dyn Presenter>> {
    let config = &options.config;
    let mut presenters: Vec<Box<dyn Presenter>> = Vec::new();
    if options.json {
        presenters.push(Box::new(JsonPresenter::new()));
    } else {
        if !options.quiet {
            presenters.push(Box::new(SparklinePresenter::new(config.plot.sparkline_width)));
        }
        if options.text {
            presenters.push(Box::new(TextSummary::new(config.text.precision)));
        }
    }
    if let Some(dir) = &config.plot.svg_dir {
        presenters.push(Box::new(SvgPresenter::new(
            dir,
            config.plot.svg_width,
            config.plot.svg_height,
        )));
    }
    presenters
}

#[derive(Serialize)]
struct ThresholdRecord<'a> {
    source: &'a str,
    patient: usize,
    threshold: f64,
    above: usize,
}

/// Process every input in order. The first failure stops the run.
pub fn run(options: &RunOptions, out: &mut dyn Write) -> Result<(), RunError> {
    if options.infiles.is_empty() {
        return Err(RunError::NoInput);
    }
    let mut presenters = presenters_for(options);
    debug!("{} presenter(s) active", presenters.len());

    for path in &options.infiles {
        process_file(path, options, &mut presenters, out)?;
    }
    out.flush()?;
    Ok(())
}

fn process_file(
    path: &Path,
    options: &RunOptions,
    presenters: &mut [Box<dyn Presenter>],
    out: &mut dyn Write,
) -> Result<(), RunError> {
    info!("processing {}", path.display());
    let table = load_csv(path).map_err(|source| RunError::Load {
        path: path.to_path_buf(),
        source,
    })?;

    let stats = DailyStatistics::compute(&table);
    let view = build_view(&stats);
    let source = path.display().to_string();
    for presenter in presenters.iter_mut() {
        presenter
            .present(&source, &view, out)
            .map_err(|err| RunError::Present {
                path: path.to_path_buf(),
                source: err,
            })?;
    }

    if let Some(query) = options.threshold {
        let above = daily_above_threshold(&table, query.threshold, query.patient).map_err(
            |err| RunError::Threshold {
                path: path.to_path_buf(),
                source: err,
            },
        )?;
        if options.json {
            let record = ThresholdRecord {
                source: &source,
                patient: query.patient,
                threshold: query.threshold,
                above,
            };
            serde_json::to_writer(&mut *out, &record).map_err(std::io::Error::from)?;
            writeln!(out)?;
        } else {
            writeln!(
                out,
                "patient {}: {above} reading(s) above {}",
                query.patient, query.threshold
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use inflam_data::InflammationTable;
    use pretty_assertions::assert_eq;

    #[test]
    fn view_names_match_statistics() {
        let t = InflammationTable::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let view = build_view(&DailyStatistics::compute(&t));
        let names: Vec<&str> = view.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["average", "max", "min", "std_dev"]);
        assert_eq!(view.get("average"), Some(&[2.0, 3.0][..]));
    }

    #[test]
    fn presenter_selection_follows_flags() {
        let mut options = RunOptions::default();
        assert_eq!(presenters_for(&options).len(), 1);

        options.text = true;
        assert_eq!(presenters_for(&options).len(), 2);

        options.quiet = true;
        assert_eq!(presenters_for(&options).len(), 1);

        options.json = true;
        options.config.plot.svg_dir = Some(PathBuf::from("plots"));
        assert_eq!(presenters_for(&options).len(), 2);
    }

    #[test]
    fn no_input_is_an_error() {
        let mut out = Vec::new();
        let err = run(&RunOptions::default(), &mut out).unwrap_err();
        assert!(matches!(err, RunError::NoInput));
    }
}

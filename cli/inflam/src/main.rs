use std::io;
use std::path::PathBuf;

use clap::Parser;
use inflam::{run, Config, RunOptions, ThresholdQuery};
use log::{debug, LevelFilter};

#[derive(Debug, Parser)]
#[command(
    name = "inflam",
    version,
    about = "A basic patient inflammation data management system",
    long_about = "inflam computes the daily average, maximum, minimum and standard deviation\n\
        of patient inflammation readings and plots them.\n\n\
        Each input is a CSV file with one patient per row and one day per column.\n\n\
        EXAMPLES:\n\
        \n  inflam data/inflammation-01.csv                 Plot daily statistics\n\
        \n  inflam --text data/*.csv                        Also list the full vectors\n\
        \n  inflam --svg-dir plots data/inflammation-01.csv Write an SVG chart per file\n\
        \n  inflam --threshold 10 --patient 0 data/a.csv    Count readings above 10\n\
        \n  inflam --config inflam.toml --print-config      Show the settings in effect"
)]
struct Cli {
    /// Input CSV(s) containing inflammation series for each patient
    #[arg(value_name = "INFILES", required_unless_present = "print_config")]
    infiles: Vec<PathBuf>,

    /// Show statistics in text on command line
    #[arg(long)]
    text: bool,

    /// Emit statistics as JSON lines instead of the plot and text summary
    #[arg(long, conflicts_with = "text")]
    json: bool,

    /// Write an SVG line chart per input file into this directory
    #[arg(long = "svg-dir", value_name = "DIR")]
    svg_dir: Option<PathBuf>,

    /// Report how many readings of --patient exceed this value
    #[arg(long, value_name = "T", requires = "patient", allow_negative_numbers = true)]
    threshold: Option<f64>,

    /// Patient row index (0-based) used with --threshold
    #[arg(long, value_name = "INDEX", requires = "threshold")]
    patient: Option<usize>,

    /// TOML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress the terminal plot
    #[arg(short, long)]
    quiet: bool,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG, when set, overrides the -v level.
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match cli.config.as_deref().map(Config::load).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    };
    if let Some(dir) = cli.svg_dir {
        config.plot.svg_dir = Some(dir);
    }
    debug!("configuration: {config}");

    if cli.print_config {
        match config.to_toml() {
            Ok(text) => {
                print!("{text}");
                return;
            }
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
    }

    let threshold = cli
        .threshold
        .zip(cli.patient)
        .map(|(threshold, patient)| ThresholdQuery { threshold, patient });

    let options = RunOptions {
        infiles: cli.infiles,
        text: cli.text,
        json: cli.json,
        quiet: cli.quiet,
        threshold,
        config,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run(&options, &mut out) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

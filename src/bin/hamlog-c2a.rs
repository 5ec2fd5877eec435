//! CLI tool to convert a HamLog CSV export to ADIF.
//!
//! Usage:
//!   hamlog-c2a [-i HamLog.csv] [-c BG1REN] [-s 0] [-o output.adi]
//!
//! If no output file is specified, writes to stdout. Per-line errors and the
//! closing counts go to stderr.

use clap::Parser;
use hamlog_c2a::{Config, config, convert};
use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

/// Convert a HamLog CSV export to ADIF.
#[derive(Parser)]
#[command(name = "hamlog-c2a", version)]
struct Cli {
    /// Input CSV filename
    #[arg(short, long, default_value = config::DEFAULT_INPUT)]
    input: String,

    /// Station callsign
    #[arg(short, long, default_value = config::DEFAULT_STATION_CALLSIGN)]
    callsign: String,

    /// Lowest record number to export
    #[arg(short, long, default_value_t = 0)]
    start: u64,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Log progress at debug level on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn open_output(path: &str) -> io::Result<File> {
    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    File::create(path)
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config {
        input: cli.input.into(),
        station_callsign: cli.callsign,
        start_no: cli.start,
    };

    let file = match File::open(&config.input) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Fail to open {}: {e}", config.input.display());
            process::exit(1);
        }
    };

    let out: Box<dyn Write> = match &cli.output {
        Some(path) => match open_output(path) {
            Ok(file) => Box::new(io::BufWriter::new(file)),
            Err(e) => {
                eprintln!("Error creating output file '{path}': {e}");
                process::exit(1);
            }
        },
        None => Box::new(io::stdout().lock()),
    };

    let generated = chrono::Local::now();
    if let Err(e) = convert(
        &config,
        BufReader::new(file),
        out,
        io::stderr().lock(),
        &generated,
    ) {
        tracing::error!(error = %e, "conversion aborted");
        eprintln!("Error writing output: {e}");
        process::exit(1);
    }
}

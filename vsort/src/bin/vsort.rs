use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use vsort::{
    create_sink, open_lines, BitmapSort, DuplicatePolicy, PopulateError, RunReport, SortConfig,
    SortError,
};

/// Exit code for an unreadable or malformed config file
const CONFIG_EXIT: u8 = 6;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(
    about = "vsort - Sort and de-duplicate a file of bounded non-negative integers with a bitmap"
)]
struct Cli {
    /// Input file, one non-negative integer per line
    #[arg(short, long, default_value = "./input.txt")]
    input: PathBuf,

    /// Output file, written one value per line in ascending order
    #[arg(short, long, default_value = "./output.txt")]
    output: PathBuf,

    /// Exclusive upper bound on input values (overrides the config file)
    #[arg(long)]
    capacity: Option<usize>,

    /// Accept repeated values instead of aborting on them
    #[arg(long)]
    allow_duplicates: bool,

    /// JSON config file with `capacity` and `duplicates` fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Memory-map the input file instead of buffered reads
    #[arg(long)]
    mmap: bool,

    /// Print the run report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("fatal: failed to load config: {e}");
            return ExitCode::from(CONFIG_EXIT);
        }
    };

    let start_time = Instant::now();
    let mut sort = BitmapSort::new(config);

    // Any failure is fatal to the run
    if let Err(e) = populate_input(&mut sort, &cli) {
        eprintln!("fatal: {e}");
        return ExitCode::from(e.error.exit_code());
    }

    let emitted = match create_sink(&cli.output)
        .map_err(SortError::from)
        .and_then(|sink| sort.emit(sink))
    {
        Ok(emitted) => emitted,
        Err(e) => {
            eprintln!("fatal: failed to write {}: {e}", cli.output.display());
            return ExitCode::from(e.exit_code());
        }
    };

    let report = RunReport {
        entries: sort.processed(),
        emitted,
        capacity: sort.config().capacity(),
        max_bits: sort.vector().map_or(0, |v| v.max_bits()),
        elapsed: start_time.elapsed(),
    };

    if cli.json {
        match report.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("fatal: failed to encode report: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{report}");
    }

    ExitCode::SUCCESS
}

/// Build the run config: defaults, then the config file, then flags
fn load_config(cli: &Cli) -> io::Result<SortConfig> {
    let mut config = match &cli.config {
        Some(path) => SortConfig::from_json_file(path)?,
        None => SortConfig::default(),
    };

    if let Some(capacity) = cli.capacity {
        config.capacity = capacity;
    }
    if cli.allow_duplicates {
        config = config.with_duplicates(DuplicatePolicy::Ignore);
    }

    Ok(config)
}

/// Open the input file and populate the run from it
fn populate_input(sort: &mut BitmapSort, cli: &Cli) -> Result<usize, PopulateError> {
    let opened = |e: io::Error| PopulateError {
        processed: 0,
        error: e.into(),
    };

    #[cfg(feature = "mmap")]
    if cli.mmap {
        let input = vsort::MmapInput::open(&cli.input).map_err(opened)?;
        return sort.populate(input.lines());
    }

    #[cfg(not(feature = "mmap"))]
    if cli.mmap {
        eprintln!("Warning: built without the 'mmap' feature, using buffered reads");
    }

    sort.populate(open_lines(&cli.input).map_err(opened)?)
}

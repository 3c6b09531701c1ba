//! SORTLINE CLI
//!
//! Run any of the fifteen instrumented sorts, replay its steps in the
//! terminal and export or verify recorded traces.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod input;
mod playback;
mod render;

use clap::{Parser, Subcommand};
use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use console::Term;
use input::InputArgs;
use playback::PlayOutcome;
use sortline_engine::{Algorithm, SortConfig, SorterRegistry, TraceRecord};
use sortline_ledger::{CanonicalEncode, Direction, PlaybackSpeed};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "sortline=info,sortline_engine=info";

#[derive(Parser)]
#[command(name = "sortline")]
#[command(about = "SORTLINE - step-by-step sorting algorithm explorer", long_about = None)]
struct Cli {
    /// Engine tuning file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the algorithm catalog
    List {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Sort once and print every recorded step
    Run {
        /// Algorithm name, e.g. "Merge Sort"
        #[arg(short, long)]
        algorithm: String,
        #[command(flatten)]
        input: InputArgs,
        /// Only print the result and metrics
        #[arg(long)]
        summary: bool,
        /// Write the trace to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Animate a run, or a saved trace, in the terminal
    Play {
        /// Algorithm name; ignored when --trace is given
        #[arg(short, long, required_unless_present = "trace")]
        algorithm: Option<String>,
        /// Saved trace to replay
        #[arg(short, long)]
        trace: Option<PathBuf>,
        #[command(flatten)]
        input: InputArgs,
        /// Playback speed from 1 (slow) to 100 (fast)
        #[arg(short, long, default_value_t = 50)]
        speed: u8,
        /// First step to show; defaults to the first step, or the last with --reverse
        #[arg(long)]
        from: Option<usize>,
        /// Play from later steps back toward the start
        #[arg(long)]
        reverse: bool,
    },
    /// Show one step of a saved trace
    Show {
        /// Trace file
        #[arg(short, long)]
        trace: PathBuf,
        /// Step index; out-of-range indices show the initial state
        #[arg(short, long)]
        index: usize,
    },
    /// Check a saved trace against its digest
    Verify {
        /// Trace file
        #[arg(short, long)]
        trace: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();
    let cli = Cli::parse();
    let registry = load_registry(cli.config.as_deref())?;

    match cli.command {
        Commands::List { json } => list(json),
        Commands::Run {
            algorithm,
            input,
            summary,
            output,
        } => {
            let trace = record(&registry, &algorithm, &input)?;
            if !summary {
                for (i, step) in trace.steps.iter().enumerate() {
                    println!("{}", render::step_line(i, step));
                }
                println!();
            }
            println!("Input:  {:?}", trace.original);
            println!("Output: {:?}", trace.output);
            println!("{}", render::metrics(&trace.metrics, false));
            println!("Digest: {}", trace.digest);
            if let Some(path) = output {
                save(&trace, &path)?;
            }
            Ok(())
        }
        Commands::Play {
            algorithm,
            trace,
            input,
            speed,
            from,
            reverse,
        } => {
            let trace = match (trace, algorithm) {
                (Some(path), _) => load(&path)?,
                (None, Some(name)) => record(&registry, &name, &input)?,
                (None, None) => return Err(eyre!("either --algorithm or --trace is required")),
            };
            let (direction, start) = if reverse {
                (Direction::Backward, from.unwrap_or(usize::MAX))
            } else {
                (Direction::Forward, from.unwrap_or(0))
            };
            let term = Term::stdout();
            let speed = PlaybackSpeed::new(speed);
            let outcome = playback::play(&trace, speed, start, direction, |lines| {
                term.clear_screen()?;
                for line in lines {
                    term.write_line(line)?;
                }
                Ok(())
            })
            .await?;
            if let PlayOutcome::Interrupted { at } = outcome {
                println!("Stopped before step {at}.");
            }
            Ok(())
        }
        Commands::Show { trace, index } => {
            let trace = load(&trace)?;
            let step = trace.state_at(index);
            println!("{}", render::step_line(index, &step));
            for line in render::bars(&step) {
                println!("{line}");
            }
            Ok(())
        }
        Commands::Verify { trace } => {
            let trace = load(&trace)?;
            println!(
                "OK: {} steps of {}, digest {}",
                trace.steps.len(),
                trace.algorithm,
                trace.digest
            );
            Ok(())
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_registry(config: Option<&Path>) -> Result<SorterRegistry> {
    let Some(path) = config else {
        return Ok(SorterRegistry::new());
    };
    let text =
        std::fs::read_to_string(path).wrap_err_with(|| format!("reading {}", path.display()))?;
    let config = SortConfig::from_json(&text)
        .wrap_err_with(|| format!("loading config {}", path.display()))?;
    Ok(SorterRegistry::new().with_config(config)?)
}

fn list(json: bool) -> Result<()> {
    if json {
        let catalog: Vec<_> = Algorithm::ALL
            .into_iter()
            .map(|algorithm| serde_json::json!({ "name": algorithm.name(), "info": algorithm.info() }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }
    for algorithm in Algorithm::ALL {
        println!("{}", render::catalog_row(algorithm));
    }
    Ok(())
}

/// Sort `input` with `name` and capture the finished run
fn record(registry: &SorterRegistry, name: &str, input: &InputArgs) -> Result<TraceRecord<i64>> {
    let values = input.resolve()?;
    let mut sorter = registry.get(name, &values)?;
    sorter.sort();
    let trace = TraceRecord::from_sorter(&sorter)?;
    info!(
        algorithm = name,
        steps = trace.steps.len(),
        digest = %trace.digest,
        "run recorded"
    );
    Ok(trace)
}

fn save(trace: &TraceRecord<i64>, path: &Path) -> Result<()> {
    std::fs::write(path, trace.encode_pretty()?)
        .wrap_err_with(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), "trace written");
    Ok(())
}

/// Read and verify a saved trace
fn load(path: &Path) -> Result<TraceRecord<i64>> {
    let bytes = std::fs::read(path).wrap_err_with(|| format!("reading {}", path.display()))?;
    TraceRecord::import(&bytes).wrap_err_with(|| format!("verifying {}", path.display()))
}

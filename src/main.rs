use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use skipcycle::{skip_cycle, skip_cycle_fn, CyclicStepper, StepperConfig, Tick};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "skipcycle", about = "Walk a sequence cyclically with a fixed stride")]
struct Cli {
    /// Values to cycle through.
    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<i64>,
    /// Positions advanced per call.
    #[arg(long, default_value_t = StepperConfig::default().step)]
    step: usize,
    /// Number of calls to print.
    #[arg(long, default_value_t = 30)]
    calls: usize,
    /// Which form of the stepper drives the walk.
    #[arg(long, value_enum, default_value_t = Encoding::Stepper)]
    encoding: Encoding,
    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Plain)]
    format: Format,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Encoding {
    /// Stateful object with `advance()`.
    Stepper,
    /// Lazy iterator.
    Iterator,
    /// Closure returning one tick per call.
    Closure,
}

/// `json` is only offered when built with the `serde` feature.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    /// `index cycle value` per line.
    Plain,
    /// One JSON object per line.
    #[cfg(feature = "serde")]
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run(cli, &mut out)?;
    out.flush().context("failed to flush output")?;

    Ok(())
}

fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    info!(
        len = cli.values.len(),
        step = cli.step,
        calls = cli.calls,
        encoding = ?cli.encoding,
        "starting walk"
    );

    let ticks = walk(cli.values, cli.step, cli.encoding).context("failed to build stepper")?;
    for tick in ticks.take(cli.calls) {
        print_tick(out, &tick, cli.format)?;
    }

    Ok(())
}

/// Unbounded walk driven by the chosen encoding
fn walk(
    values: Vec<i64>,
    step: usize,
    encoding: Encoding,
) -> Result<Box<dyn Iterator<Item = Tick<i64>>>> {
    let ticks: Box<dyn Iterator<Item = Tick<i64>>> = match encoding {
        Encoding::Stepper => {
            let mut stepper = CyclicStepper::new(values, step)?;
            Box::new(std::iter::from_fn(move || Some(stepper.advance())))
        }
        Encoding::Iterator => Box::new(skip_cycle(values, step)?),
        Encoding::Closure => Box::new(std::iter::repeat_with(skip_cycle_fn(values, step)?)),
    };
    Ok(ticks)
}

fn print_tick<W: Write>(out: &mut W, tick: &Tick<i64>, format: Format) -> Result<()> {
    match format {
        Format::Plain => writeln!(out, "{}", tick)?,
        #[cfg(feature = "serde")]
        Format::Json => {
            serde_json::to_writer(&mut *out, tick).context("failed to encode tick")?;
            writeln!(out)?;
        }
    }
    Ok(())
}

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// List the Uposatha days (full moon and new moon) of a Gregorian year.
#[derive(Parser)]
#[command(name = "uposatha", version, about = "Myanmar calendar Uposatha days")]
struct Cli {
    /// Gregorian year to list.
    #[arg(default_value_t = 2026, allow_negative_numbers = true)]
    year: i32,

    /// Print the Myanmar date next to each day.
    #[arg(short, long)]
    details: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Initialize tracing based on verbosity. `RUST_LOG` overrides the flag if set.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("uposatha={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let days = uposatha::find_uposatha_days(cli.year)
        .with_context(|| format!("failed to list Uposatha days of {}", cli.year))?;
    tracing::info!(year = cli.year, count = days.len(), "listing uposatha days");
    for day in days {
        if cli.details {
            println!("{}  {}", day.date.iso_gregorian(), day.myanmar);
        } else {
            println!("{}", day.date.iso_gregorian());
        }
    }
    Ok(())
}

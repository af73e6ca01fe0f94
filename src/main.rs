use anyhow::{anyhow, Context, Result};
use clap::Parser;
use colored::*;
use optionals::Optional;
use std::io::Write;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `OPTIONALS_LOG=debug`.
const LOG_ENV: &str = "OPTIONALS_LOG";

#[derive(Parser)]
#[command(name = "optionals")]
#[command(about = "Adds integers with a short-circuiting optional chain", long_about = None)]
#[command(version)]
struct Cli {
    /// Values to add; anything that is not an integer is absent
    #[arg(allow_negative_numbers = true)]
    values: Vec<String>,
    /// Print this instead of `none` when the sum is absent
    #[arg(long, allow_negative_numbers = true)]
    default: Option<i64>,
    /// Drop values that are not integers instead of stopping at them
    #[arg(long)]
    skip_invalid: bool,
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!(e))
        .context("failed to install the tracing subscriber")
}

fn parse_value(text: &str) -> Optional<i64> {
    Optional::from_result(text.trim().parse::<i64>())
}

fn sum_values(values: &[String], skip_invalid: bool) -> Optional<i64> {
    values
        .iter()
        .enumerate()
        .fold(Optional::some(0), |sum, (index, text)| {
            sum.bind(|total| match parse_value(text) {
                Optional::Present(value) => {
                    debug!(index, value, "adding value");
                    // Overflow ends the chain like any other absent step
                    Optional::of(total.checked_add(value))
                }
                Optional::Absent if skip_invalid => {
                    debug!(index, text = text.as_str(), "skipping value that is not an integer");
                    Optional::some(total)
                }
                Optional::Absent => {
                    debug!(index, text = text.as_str(), "chain stopped at value that is not an integer");
                    Optional::none()
                }
            })
        })
}

fn render(sum: Optional<i64>, default: Option<i64>) -> ColoredString {
    match default {
        Some(default) => sum.get_or_else(default).to_string().bold(),
        None => sum.match_with(
            |total| Optional::some(total).to_string().green(),
            || Optional::<i64>::none().to_string().yellow(),
        ),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing()?;

    debug!(count = cli.values.len(), skip_invalid = cli.skip_invalid, "summing values");
    let sum = sum_values(&cli.values, cli.skip_invalid);

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", render(sum, cli.default)).context("failed to write the result")?;
    Ok(())
}

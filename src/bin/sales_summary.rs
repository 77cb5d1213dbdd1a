// ============================================================================
// Sales Summary CLI
// Prints the exact total, average and top period of a CSV table
// ============================================================================

use anyhow::{Context, Result};
use clap::Parser;
use decimal_summary::domain::DEFAULT_AVERAGE_SCALE;
use decimal_summary::prelude::*;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Exact-decimal total, average and first top period of a CSV table
#[derive(Parser, Debug)]
#[command(name = "sales-summary", version)]
struct Args {
    /// Delimited input file with a header row
    path: PathBuf,

    /// Header of the integer period column
    #[arg(long, default_value = "period")]
    period_column: String,

    /// Header of the decimal value column
    #[arg(long, default_value = "value")]
    value_column: String,

    /// Field delimiter (single-byte character)
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Fractional digits kept when the average does not terminate
    #[arg(long, default_value_t = DEFAULT_AVERAGE_SCALE)]
    average_scale: u32,

    /// Find the top period on a lossy f64 copy with the vectorized search
    #[arg(long)]
    lossy_argmax: bool,

    /// Print the summary as JSON
    #[cfg(feature = "serde")]
    #[arg(long)]
    json: bool,
}

impl Args {
    fn summary_config(&self) -> Result<SummaryConfig> {
        let delimiter =
            u8::try_from(self.delimiter).context("delimiter must be a single-byte character")?;
        let strategy = if self.lossy_argmax {
            ArgmaxStrategy::LossyFloat
        } else {
            ArgmaxStrategy::Exact
        };

        Ok(SummaryConfig::new()
            .with_columns(self.period_column.clone(), self.value_column.clone())
            .with_delimiter(delimiter)
            .with_average_scale(self.average_scale)
            .with_argmax_strategy(strategy))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.summary_config()?;

    let loader = TableLoader::new(config.clone())?;
    let table: Table = loader
        .load_path(&args.path)
        .with_context(|| format!("failed to load {}", args.path.display()))?;
    info!(rows = table.len(), path = %args.path.display(), "table ready");

    let summary = DecimalAggregator::from_config(&config)
        .summarize(&table)
        .context("failed to summarize table")?;

    #[cfg(feature = "serde")]
    {
        if args.json {
            println!("{}", summary.to_json()?);
            return Ok(());
        }
    }

    println!("rows: {}", summary.rows);
    println!("total {}: {}", config.value_column, summary.total);
    println!("average {}: {}", config.value_column, summary.average);
    println!(
        "{} with highest {}: {}",
        config.period_column, config.value_column, summary.top_period
    );

    Ok(())
}

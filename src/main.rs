use clap::Parser;
use miette::{IntoDiagnostic, Result};
use rulechain::application::engine::ValidationEngine;
use rulechain::config::RuleConfig;
use rulechain::interfaces::csv::record::ProcessedRecord;
use rulechain::interfaces::csv::record_reader::RecordReader;
use rulechain::interfaces::csv::record_writer::{OutputFormat, RecordWriter};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input CSV file of payments and the transactions to validate
    input: PathBuf,

    /// Shortfall under which a transaction is subsidized up to the payment amount
    #[arg(long, default_value_t = RuleConfig::DEFAULT_SUBSIDY_THRESHOLD)]
    subsidy_threshold: Decimal,

    /// Output format of the processed transactions
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    // Logs go to stderr, stdout only carries results
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    let cli = Cli::parse();

    let config = RuleConfig::new(cli.subsidy_threshold).into_diagnostic()?;
    let engine = ValidationEngine::with_config(&config);

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = RecordReader::new(file);
    let stdout = io::stdout();
    let mut writer = RecordWriter::new(stdout.lock(), cli.format);

    for record_result in reader.records() {
        match record_result {
            Ok(record) => {
                let (id, payment, trx) = record.into_parts();
                match engine.process(&payment, trx) {
                    Ok(processed) => writer
                        .write_record(&ProcessedRecord::new(id, processed))
                        .into_diagnostic()?,
                    Err(e) => warn!(id, error = %e, "Error processing record"),
                }
            }
            Err(e) => warn!(error = %e, "Error reading record"),
        }
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}

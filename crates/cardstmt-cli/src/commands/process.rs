//! Process command - extract data from a single statement.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use cardstmt_core::models::config::CardstmtConfig;
use cardstmt_core::models::statement::StatementRecord;
use cardstmt_core::statement::rules::format_amount;
use cardstmt_core::statement::ExtractionResult;

use super::config::load_config;
use super::input::{read_statement_text, DialectChoice};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF or extracted text)
    #[arg(required = true)]
    input: PathBuf,

    /// Issuer dialect (e.g. hdfc, chase, or auto)
    #[arg(short, long)]
    dialect: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Transactions to show in text output (overrides config)
    #[arg(long)]
    rows: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV of transactions
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    /// File extension used when writing this format to disk.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;
    let choice = DialectChoice::resolve(args.dialect.as_deref(), &config)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")?,
    );

    pb.set_message("Reading statement...");
    let text = read_statement_text(&args.input, &config)?;

    pb.set_message("Extracting statement data...");
    let result = extract(&text, &choice, &config)?;

    pb.finish_and_clear();

    for warning in &result.warnings {
        eprintln!("{} {}", style("⚠").yellow(), warning);
    }

    let rows = args.rows.unwrap_or(config.output.preview_rows);
    let output = format_statement(&result.record, args.format, &config, rows)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Pick the parser for `text`, run it, and apply the configured strictness.
pub fn extract(
    text: &str,
    choice: &DialectChoice,
    config: &CardstmtConfig,
) -> anyhow::Result<ExtractionResult> {
    let parser = choice.parser_for(text)?;
    let result = parser.parse(text)?;

    if config.extraction.require_transactions && result.record.transactions.is_empty() {
        anyhow::bail!(
            "No transactions found in {} statement",
            parser.dialect().bank_name()
        );
    }

    Ok(result)
}

/// Render a record in the requested format.
pub fn format_statement(
    record: &StatementRecord,
    format: OutputFormat,
    config: &CardstmtConfig,
    rows: usize,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            if config.output.pretty_json {
                Ok(serde_json::to_string_pretty(record)?)
            } else {
                Ok(serde_json::to_string(record)?)
            }
        }
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record, rows)),
    }
}

fn format_csv(record: &StatementRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["date", "description", "amount", "type"])?;
    for tx in &record.transactions {
        wtr.write_record([
            tx.date.as_str(),
            tx.description.as_str(),
            &tx.amount.to_string(),
            tx.kind.as_str(),
        ])?;
    }

    Ok(String::from_utf8(wtr.into_inner()?)?)
}

fn format_text(record: &StatementRecord, rows: usize) -> String {
    let mut output = String::new();

    output.push_str("Card Info:\n");
    let info = record.card_info();
    let width = info.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    for (key, value) in &info {
        output.push_str(&format!("  {:<width$}  {}\n", key, value, width = width));
    }
    output.push('\n');

    let total = record.transactions.len();
    let shown = rows.min(total);
    output.push_str(&format!("Transactions (showing {} of {}):\n", shown, total));
    for tx in record.transactions.iter().take(shown) {
        output.push_str(&format!(
            "  {:<10}  {:<40}  {:>12}  {}\n",
            tx.date,
            tx.description,
            format_amount(tx.amount),
            tx.kind
        ));
    }
    output.push('\n');

    output.push_str(&format!(
        "Debits:  {}\n",
        format_amount(record.debit_total())
    ));
    output.push_str(&format!(
        "Credits: {}\n",
        format_amount(record.credit_total())
    ));

    output
}

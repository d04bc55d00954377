use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::{error, info};

use trade_mapper::app::upload_use_case::UploadUseCase;
use trade_mapper::config::Config;
use trade_mapper::infra::ReqwestBulkIngest;
use trade_mapper::mapping::{map_rows_with_summary, Schema};
use trade_mapper::{constants, csv_source, lifecycle, logging};

#[derive(Parser)]
#[command(name = "trade_mapper")]
#[command(about = "Map equity and FX trade CSVs to the capture services' bulk ingest format")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Map a CSV file and write the normalized trades as a JSON array
    Map {
        file: PathBuf,
        /// Schema to map under (equity, fx). Defaults to the file name prefix
        #[arg(long)]
        schema: Option<Schema>,
        /// Output file (stdout when omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
        #[arg(long)]
        pretty: bool,
    },
    /// Map CSV files and POST them to their bulk ingest endpoints
    Upload {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        #[arg(long, default_value = constants::DEFAULT_CONFIG_PATH)]
        config: PathBuf,
        /// Map and report without sending anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Show the approval status of a lifecycle event from its settlement date
    Settlement {
        date: String,
        /// Reference date (YYYY-MM-DD), defaults to the local date
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Current event status
        #[arg(long)]
        status: Option<String>,
    },
}

fn run_map(file: PathBuf, schema: Option<Schema>, output: Option<PathBuf>, pretty: bool) -> anyhow::Result<()> {
    let schema = match schema {
        Some(s) => s,
        None => Schema::from_file_name(&file)?,
    };
    let rows = csv_source::read_file(&file).with_context(|| format!("reading {}", file.display()))?;
    let (records, summary) = map_rows_with_summary(schema, &rows);
    info!(
        "Mapped {} {} rows, {} with fallbacks ({:?})",
        summary.rows, schema, summary.rows_with_warnings, summary.warnings
    );

    let mut writer: Box<dyn Write> = match &output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };
    if pretty {
        serde_json::to_writer_pretty(&mut writer, &records)?;
    } else {
        serde_json::to_writer(&mut writer, &records)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

async fn run_upload(files: Vec<PathBuf>, config: PathBuf, dry_run: bool) -> anyhow::Result<()> {
    let config = Config::load(&config)?;
    let use_case = UploadUseCase::new(Box::new(ReqwestBulkIngest::new(config.ingest)?));

    let mut failures = 0;
    for (path, result) in use_case.upload_files(&files, dry_run).await {
        match result {
            Ok(report) => {
                println!("\n📊 {}", path.display());
                println!("   Schema: {}", report.summary.schema);
                println!("   Rows: {}", report.summary.rows);
                println!("   Rows with fallbacks: {}", report.summary.rows_with_warnings);
                match report.receipt {
                    Some(receipt) => {
                        println!("   Submitted: {} in {} request(s)", receipt.submitted, receipt.requests);
                        println!("   Accepted: {}", receipt.accepted);
                        println!("   Endpoint: {}", receipt.endpoint);
                    }
                    None => println!("   Dry run: nothing submitted"),
                }
            }
            Err(e) => {
                failures += 1;
                error!("Upload failed for {}: {}", path.display(), e);
                println!("❌ {}: {}", path.display(), e);
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} uploads failed", failures, files.len());
    }
    Ok(())
}

fn run_settlement(date: String, today: Option<NaiveDate>, status: Option<String>) {
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let result = lifecycle::settlement_status(Some(date.as_str()), status.as_deref(), today);
    println!(
        "{:?} (event status: {}, manual approval allowed: {})",
        result,
        result.event_status().or(status.as_deref()).unwrap_or(constants::STATUS_PENDING),
        result.can_approve()
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _guard = logging::init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Map { file, schema, output, pretty } => run_map(file, schema, output, pretty)?,
        Commands::Upload { files, config, dry_run } => run_upload(files, config, dry_run).await?,
        Commands::Settlement { date, today, status } => run_settlement(date, today, status),
    }
    Ok(())
}

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the result sheet ingestion tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use result_portal_ingest::{extract_file, extract_url, ingest_file};
use result_portal_result_models::ResultRecord;
use result_portal_store::connect_by_name;

#[derive(Parser)]
#[command(name = "result_portal_ingest", about = "Student result sheet ingestion tool")]
struct Cli {
    /// Store backend to use (currently only "memory")
    #[arg(long, env = "RESULT_PORTAL_STORE", default_value = "memory")]
    store: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract records from local result sheet PDFs and print them
    Extract {
        /// PDF files to process
        files: Vec<PathBuf>,
        /// Print records as JSON instead of a summary table
        #[arg(long)]
        json: bool,
    },
    /// Download a result sheet by URL and extract its records
    Fetch {
        /// URL of the result sheet PDF
        url: String,
        /// Print records as JSON instead of a summary table
        #[arg(long)]
        json: bool,
    },
    /// Extract local PDFs and insert the records into the store
    Store {
        /// PDF files to process
        files: Vec<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { files, json } => {
            let mut all_records = Vec::new();
            for file in &files {
                match extract_file(file).await {
                    Ok(mut records) => all_records.append(&mut records),
                    Err(e) => log::error!("Failed to extract {}: {e}", file.display()),
                }
            }
            print_records(&all_records, json)?;
        }
        Commands::Fetch { url, json } => {
            let client = reqwest::Client::builder()
                .user_agent("result-portal/0.1")
                .build()?;
            let records = extract_url(&client, &url).await?;
            print_records(&records, json)?;
        }
        Commands::Store { files } => {
            let store = connect_by_name(&cli.store)?;
            let mut total = 0usize;
            for file in &files {
                match ingest_file(store.as_ref(), file).await {
                    Ok(stored) => {
                        total += stored.len();
                        for record in &stored {
                            println!("{}  {} ({})", record.id, record.student_name, record.student_id);
                        }
                    }
                    Err(e) => log::error!("Failed to ingest {}: {e}", file.display()),
                }
            }
            log::info!("Stored {total} record(s) total");
        }
    }

    Ok(())
}

/// Prints records as a summary table, or JSON with `--json`.
fn print_records(records: &[ResultRecord], json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    println!(
        "{:<12} {:<24} {:<12} {:>9} {:>8} {:>6}",
        "STUDENT", "NAME", "EXAM", "OBTAINED", "PERCENT", "GRADE"
    );
    println!("{}", "-".repeat(76));
    for record in records {
        println!(
            "{:<12} {:<24} {:<12} {:>4}/{:<4} {:>7.2} {:>6}",
            record.student_id,
            record.student_name,
            record.exam_name,
            record.obtained_marks,
            record.total_marks,
            record.percentage,
            record.grade,
        );
    }
    println!("{} record(s)", records.len());

    Ok(())
}

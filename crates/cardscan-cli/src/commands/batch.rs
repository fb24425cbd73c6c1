//! Batch command - extract contacts from many text files.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, warn};

use cardscan_core::{ContactParser, ParsedContact, RuleContactParser};

use super::load_config;
use super::output::{format_contact, Format};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern of .txt files
    #[arg(required = true)]
    input: String,

    /// Output directory (default: stdout)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file (default: from config, else json)
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Include the address split into postal components
    #[arg(long)]
    split_address: bool,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Number of parallel workers
    #[arg(short = 'j', long, default_value = "4")]
    jobs: usize,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    contact: Option<ParsedContact>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let mut files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("txt"))
        })
        .collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    eprintln!("{} Found {} files to process", style("ℹ").blue(), files.len());

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let parser = Arc::new(RuleContactParser::from_config(&config.extraction));
    let semaphore = Arc::new(Semaphore::new(args.jobs.max(1)));
    let mut tasks = JoinSet::new();

    for (index, path) in files.into_iter().enumerate() {
        let permit = semaphore.clone().acquire_owned().await?;
        let parser = Arc::clone(&parser);
        tasks.spawn_blocking(move || {
            let _permit = permit;
            let file_start = Instant::now();
            let contact = process_single_file(&path, parser.as_ref());
            (index, path, contact, file_start.elapsed().as_millis() as u64)
        });
    }

    let mut results = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        let (index, path, contact, processing_time_ms) = joined?;

        match contact {
            Ok(contact) => results.push((
                index,
                ProcessResult {
                    path,
                    contact: Some(contact),
                    error: None,
                    processing_time_ms,
                },
            )),
            Err(e) => {
                let error_msg = e.to_string();
                if !args.continue_on_error {
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    pb.abandon();
                    anyhow::bail!("Processing failed for {}: {}", path.display(), error_msg);
                }
                warn!("Failed to process {}: {}", path.display(), error_msg);
                results.push((
                    index,
                    ProcessResult {
                        path,
                        contact: None,
                        error: Some(error_msg),
                        processing_time_ms,
                    },
                ));
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    // Workers finish out of order
    results.sort_by_key(|(index, _)| *index);
    let results: Vec<ProcessResult> = results.into_iter().map(|(_, r)| r).collect();

    let format = args.format.unwrap_or_else(|| config.output.format.into());
    let split_address = args.split_address || config.output.split_address;

    for result in &results {
        let Some(contact) = &result.contact else {
            continue;
        };
        let content = format_contact(contact, format, split_address)?;

        match &args.output_dir {
            Some(output_dir) => {
                let output_name = result
                    .path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("contact");
                let output_path = output_dir.join(format!("{}.{}", output_name, format.extension()));
                fs::write(&output_path, content)?;
                debug!("Wrote output to {}", output_path.display());
            }
            None => {
                println!("{} {}", style("==>").dim(), result.path.display());
                println!("{}", content.trim_end());
            }
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        eprintln!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    eprintln!();
    eprintln!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    eprintln!(
        "   {} successful, {} failed",
        style(results.len() - failed.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        eprintln!();
        eprintln!("{}", style("Failed files:").red());
        for result in &failed {
            eprintln!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn process_single_file(path: &Path, parser: &RuleContactParser) -> anyhow::Result<ParsedContact> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8(bytes)
        .map_err(|_| anyhow::anyhow!("File is not valid UTF-8"))?;

    if text.trim().is_empty() {
        anyhow::bail!("File is empty");
    }

    let result = parser.parse(&text);
    debug!(
        "{}: {} fields, {} warnings",
        path.display(),
        result.contact.field_count(),
        result.warnings.len()
    );
    Ok(result.contact)
}

/// One row of the batch summary CSV.
#[derive(Serialize)]
struct SummaryRow<'a> {
    filename: &'a str,
    status: &'static str,
    full_name: Option<&'a str>,
    company_name: Option<&'a str>,
    email: Option<&'a str>,
    phone: Option<&'a str>,
    field_count: Option<usize>,
    processing_time_ms: u64,
    error: Option<&'a str>,
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        let contact = result.contact.as_ref();

        wtr.serialize(SummaryRow {
            filename,
            status: if contact.is_some() { "success" } else { "error" },
            full_name: contact.and_then(|c| c.full_name.as_deref()),
            company_name: contact.and_then(|c| c.company_name.as_deref()),
            email: contact.and_then(|c| c.email.as_deref()),
            phone: contact.and_then(|c| c.phone.as_deref()),
            field_count: contact.map(|c| c.field_count()),
            processing_time_ms: result.processing_time_ms,
            error: result.error.as_deref(),
        })?;
    }

    wtr.flush()?;
    Ok(())
}

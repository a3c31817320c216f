//! Main entry point for the backup-archive CLI application.
//!
//! Reads a backup archive from the local filesystem or an HTTP URL and prints
//! its metadata, lists its entries, or pipes its decompressed content.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use backup_archive::{ArchiveFile, Cli, EntryKind, HttpFetcher};

/// Application entry point.
///
/// Parses command-line arguments, builds the archive accessor for the local
/// path or remote URL, and dispatches to the requested action.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if cli.is_http_url() {
        let fetcher = HttpFetcher::new(Duration::from_secs(cli.timeout), cli.retries)?;
        let archive = fetcher.fetch(&cli.archive).await?;

        process_archive(&archive, &cli)?;

        // Display network transfer statistics for HTTP sources
        if !cli.is_quiet() {
            eprintln!(
                "\nTotal bytes transferred: {}",
                format_size(fetcher.transferred_bytes())
            );
        }
    } else {
        let archive = ArchiveFile::from_path(&cli.archive, None);
        process_archive(&archive, &cli)?;
    }

    Ok(())
}

/// Run the action selected on the command line against one archive.
fn process_archive(archive: &ArchiveFile, cli: &Cli) -> Result<()> {
    if cli.pipe {
        let mut reader = archive.open().context("Cannot open backup archive")?;
        let mut stdout = io::stdout().lock();
        io::copy(&mut reader, &mut stdout)?;
        stdout.flush()?;
        return Ok(());
    }

    if cli.list {
        return list_entries(archive, cli.verbose);
    }

    let meta = archive
        .metadata()
        .context("Cannot read backup metadata")?;
    println!("{}", meta.to_json()?);

    Ok(())
}

/// List the entries of the archive.
///
/// Supports two output formats:
/// - Simple format (`-l`): Just entry names, one per line
/// - Verbose format (`-lv`): Size, kind and name, with a summary line
fn list_entries(archive: &ArchiveFile, verbose: bool) -> Result<()> {
    let entries = archive.entries().context("Cannot list backup archive")?;

    if verbose {
        println!("{:>10}  {:<9}  Name", "Length", "Kind");
        println!("{}", "-".repeat(50));
    }

    let mut total = 0u64;
    let mut file_count = 0usize;

    for entry in &entries {
        if verbose {
            println!(
                "{:>10}  {:<9}  {}",
                entry.size,
                kind_label(entry.kind),
                entry.path
            );

            if entry.kind != EntryKind::Directory {
                total += entry.size;
                file_count += 1;
            }
        } else {
            println!("{}", entry.path);
        }
    }

    if verbose {
        println!("{}", "-".repeat(50));
        println!("{:>10}  {:<9}  {} files", total, "", file_count);
    }

    Ok(())
}

fn kind_label(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Metadata => "metadata",
        EntryKind::Dump => "dump",
        EntryKind::Payload => "payload",
        EntryKind::Directory => "dir",
    }
}

/// Format a byte size into a human-readable string.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_size(500), "500 bytes");
/// assert_eq!(format_size(1536), "1.50 KB");
/// ```
fn format_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}

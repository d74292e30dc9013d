//! Command-line interface for repo-bench
//!
//! # Usage Examples
//!
//! ## Scan content roots
//! ```bash
//! # Build the catalog and print it as JSON
//! repo-bench scan --data-dir /data/content --data-dir /data/extra
//! ```
//!
//! ## Generate property data
//! ```bash
//! # One batch from a property set, entropy-seeded
//! repo-bench generate \
//!   --data-dir /data/content \
//!   --profiles properties.yaml
//!
//! # Reproducible run: 100 batches with a fixed seed, one JSON line each
//! repo-bench generate \
//!   --data-dir /data/content \
//!   --profiles properties.yaml \
//!   --batches 100 --seed 42
//! ```
//!
//! ## Property set format
//! ```yaml
//! version: 1
//! seed: 42            # optional; --seed overrides
//! properties:
//!   - name: title
//!     kind: text
//!     restrictions:
//!       min_length: 5
//!       max_length: 20
//!   - name: attachment
//!     kind: content
//! ```

use anyhow::Context;
use bench_core::{ContentItem, PropertySet, RepositoryProfile};
use bench_dataprovider::{ContentCatalog, DataProvider, FsDirectoryLister, GuessingMimeResolver};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "repo-bench")]
#[command(about = "Synthetic data provider for content-repository load testing")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan content roots and print the resulting catalog as JSON
    Scan {
        /// Content root directory (repeatable)
        #[arg(long = "data-dir", value_name = "DIR", required = true)]
        data_dirs: Vec<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Generate property data batches from a property set
    Generate {
        /// Content root directory (repeatable)
        #[arg(long = "data-dir", value_name = "DIR", required = true)]
        data_dirs: Vec<PathBuf>,

        /// Property set YAML file
        #[arg(long, value_name = "PATH")]
        profiles: PathBuf,

        /// Number of batches to generate (one JSON document per batch)
        #[arg(long, default_value_t = 1)]
        batches: u64,

        /// Seed for reproducible output (overrides the property set's seed)
        #[arg(long, env = "REPO_BENCH_SEED")]
        seed: Option<u64>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(serde::Serialize)]
struct ScanSummary<'a> {
    count: usize,
    items: &'a [ContentItem],
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scan { data_dirs, pretty } => run_scan(&data_dirs, pretty),
        Commands::Generate {
            data_dirs,
            profiles,
            batches,
            seed,
            pretty,
        } => run_generate(&data_dirs, &profiles, batches, seed, pretty),
    }
}

fn scan_catalog(data_dirs: &[PathBuf]) -> anyhow::Result<ContentCatalog> {
    ContentCatalog::scan(data_dirs, &FsDirectoryLister, &GuessingMimeResolver)
        .context("Failed to build content catalog")
}

fn run_scan(data_dirs: &[PathBuf], pretty: bool) -> anyhow::Result<()> {
    let catalog = scan_catalog(data_dirs)?;

    let summary = ScanSummary {
        count: catalog.len(),
        items: catalog.items(),
    };
    let json = if pretty {
        serde_json::to_string_pretty(&summary)?
    } else {
        serde_json::to_string(&summary)?
    };
    println!("{json}");
    Ok(())
}

fn run_generate(
    data_dirs: &[PathBuf],
    profiles: &Path,
    batches: u64,
    seed: Option<u64>,
    pretty: bool,
) -> anyhow::Result<()> {
    let catalog = scan_catalog(data_dirs)?;
    let set = PropertySet::from_file(profiles)
        .with_context(|| format!("Failed to load property set from {}", profiles.display()))?;

    let provider = match seed.or(set.seed) {
        Some(seed) => {
            tracing::info!("Generating {batches} batches with seed {seed}");
            DataProvider::seeded(catalog, seed)
        }
        None => {
            tracing::info!("Generating {batches} batches (entropy-seeded)");
            DataProvider::new(catalog)
        }
    };

    let repository = RepositoryProfile::default();
    for _ in 0..batches {
        let result = provider.get_property_data(&repository, &set.properties)?;
        let json = if pretty {
            serde_json::to_string_pretty(&result)?
        } else {
            serde_json::to_string(&result)?
        };
        println!("{json}");
    }
    Ok(())
}

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::Level;

use xbloom_core::BloomFilter;

#[derive(Parser)]
#[command(name = "xbloom", about = "Query Bloom filter files written by the cross-platform builder")]
struct Cli {
    /// Log loader activity to stderr
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Test one or more values for membership
    Check {
        #[arg(long)]
        filter: PathBuf,
        /// Values are hex-encoded bytes
        #[arg(long, default_value_t = false)]
        hex: bool,
        /// Read the file through a memory map
        #[arg(long, default_value_t = false)]
        mmap: bool,
        #[arg(long, default_value_t = false)]
        json: bool,
        #[arg(required = true, num_args = 1..)]
        values: Vec<String>,
    },

    /// Print header fields and the estimated false positive rate
    Info {
        #[arg(long)]
        filter: PathBuf,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Serialize)]
struct CheckResult<'a> {
    value: &'a str,
    present: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn open_filter(path: &Path, mmap: bool) -> Result<BloomFilter> {
    let loaded = if mmap { BloomFilter::load_mapped(path) } else { BloomFilter::load(path) };
    let bf = loaded.with_context(|| format!("failed to load filter {}", path.display()))?;
    if let Err(e) = bf.ensure_queryable() {
        tracing::warn!(path = %path.display(), "{e}; every query will report absent");
    }
    Ok(bf)
}

fn value_bytes(value: &str, is_hex: bool) -> Result<Vec<u8>> {
    if is_hex {
        hex::decode(value).with_context(|| format!("invalid hex value '{value}'"))
    } else {
        Ok(value.as_bytes().to_vec())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Cmd::Check { filter, hex, mmap, json, values } => {
            let bf = open_filter(&filter, mmap)?;
            let mut results = Vec::with_capacity(values.len());
            for v in &values {
                let data = value_bytes(v, hex)?;
                results.push(CheckResult { value: v, present: bf.contains(&data) });
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                for r in &results {
                    let verdict = if r.present { "likely" } else { "not" };
                    println!("'{}' is {} in the Bloom filter", r.value, verdict);
                }
            }
        }
        Cmd::Info { filter, json } => {
            let bf = open_filter(&filter, false)?;
            let stats = bf.stats();
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("{stats}");
            }
        }
    }
    Ok(())
}

//! Discovery Search - result formatting CLI
//!
//! Runs the result shaping helpers over search service responses stored as
//! JSON files and prints the UI-facing JSON to stdout.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use discovery_formatter::catalog::{self, FILTER_TYPES, SORT_KEYS, SORT_TYPES};
use discovery_formatter::config::{load_config, FormatterConfig};
use discovery_formatter::sort::{paginate, sort_results};
use discovery_formatter::{format_value, get_totals, object_without_properties, parse_data};

/// Result formatting for the search results front end
#[derive(Parser)]
#[command(name = "discovery-fmt")]
#[command(about = "Shape search service responses for the results UI")]
struct Cli {
    /// Config file (defaults to <config dir>/discovery-formatter/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a document response, optionally linked with passages
    Format {
        /// Document query response (JSON)
        #[arg(short, long)]
        results: PathBuf,
        /// Passage query response (JSON)
        #[arg(short, long)]
        passages: Option<PathBuf>,
        /// Re-sort by type (HIGHEST, LOWEST, NEWEST, OLDEST, BEST, WORST)
        #[arg(short, long)]
        sort: Option<String>,
        /// 1-based page to print
        #[arg(long)]
        page: Option<usize>,
    },
    /// Print the raw response next to its results
    Parse {
        #[arg(short, long)]
        results: PathBuf,
    },
    /// Count sentiment labels of the formatted results
    Totals {
        #[arg(short, long)]
        results: PathBuf,
        #[arg(short, long)]
        passages: Option<PathBuf>,
    },
    /// Copy a JSON object without some of its keys
    Strip {
        #[arg(short, long)]
        input: PathBuf,
        /// Keys to remove
        #[arg(short = 'x', long, value_delimiter = ',')]
        remove: Vec<String>,
    },
    /// Print filter and sort catalogs
    Catalog,
}

fn read_json(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid JSON in {}", path.display()))
}

fn read_object(path: &Path) -> Result<Map<String, Value>> {
    match read_json(path)? {
        Value::Object(map) => Ok(map),
        _ => bail!("{} does not contain a JSON object", path.display()),
    }
}

fn read_passages(path: Option<&Path>) -> Result<Value> {
    match path {
        Some(p) => read_json(p),
        None => Ok(json!({})),
    }
}

fn print<T: Serialize>(value: &T, config: &FormatterConfig) -> Result<()> {
    let out = if config.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", out);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref()).context("Failed to load config")?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Format {
            results,
            passages,
            sort,
            page,
        } => {
            let data = read_json(&results)?;
            let passages = read_passages(passages.as_deref())?;
            let mut formatted = format_value(&data, &passages)
                .with_context(|| format!("Failed to format {}", results.display()))?;

            if let Some(kind) = sort {
                let key = catalog::sort_key(&kind)?;
                tracing::debug!("Sorting by {} ({})", key.kind, key.sort_by_int);
                formatted.results = sort_results(formatted.results, key)?;
            }
            formatted.results = paginate(&formatted.results, &config.view(page));

            print(&formatted, &config)?;
        }
        Commands::Parse { results } => {
            let data = read_object(&results)?;
            print(&parse_data(&data), &config)?;
        }
        Commands::Totals { results, passages } => {
            let data = read_json(&results)?;
            let passages = read_passages(passages.as_deref())?;
            let formatted = format_value(&data, &passages)
                .with_context(|| format!("Failed to format {}", results.display()))?;
            print(&get_totals(&formatted), &config)?;
        }
        Commands::Strip { input, remove } => {
            let object = read_object(&input)?;
            print(&object_without_properties(&object, &remove), &config)?;
        }
        Commands::Catalog => {
            let default_sort = catalog::sort_key(&config.default_sort)?;
            let tables = json!({
                "itemsPerPage": config.items_per_page,
                "defaultSort": default_sort,
                "filterTypes": FILTER_TYPES,
                "sortKeys": SORT_KEYS,
                "sortTypes": *SORT_TYPES,
                "sentimentTermItem": catalog::SENTIMENT_TERM_ITEM,
                "trendingTermItem": catalog::TRENDING_TERM_ITEM,
            });
            print(&tables, &config)?;
        }
    }

    Ok(())
}

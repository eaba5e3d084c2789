//! Researcher Impact - Entry Point
//!
//! Serves the analysis tools over stdio, runs one tool, or exports the
//! metric, adjacency and corrected-author tables as CSV.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use researcher_impact::{
    config::{files, Config},
    corpus::loader,
    models::AwardScale,
    network::CoauthorGraph,
    resolver::{resolve_corpus, ResolverOptions},
    scoring::Scorer,
    server::McpServer,
    tools, Corpus,
};

#[derive(Parser, Debug)]
#[command(name = "researcher-impact")]
#[command(about = "Researcher identity resolution and impact metrics")]
#[command(version)]
struct Cli {
    /// Directory holding the input CSV tables
    #[arg(long, default_value = "data", env = "IMPACT_DATA_DIR", global = true)]
    data_dir: PathBuf,

    /// Year metrics are computed as of (default: IMPACT_CURRENT_YEAR or this year)
    #[arg(long, global = true)]
    current_year: Option<i32>,

    /// Award weighting scale: points or tiered
    #[arg(long, global = true)]
    award_scale: Option<AwardScale>,

    /// Shard per-author metric computation across threads
    #[arg(long, global = true)]
    parallel: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG", global = true)]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the tools over stdio JSON-RPC
    Serve,

    /// List the available tools
    List,

    /// Run one tool and print its output
    Run {
        /// Tool name (see `list`)
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(long, default_value = "{}")]
        input: String,
    },

    /// Write metric, co-author adjacency and corrected author tables
    Export {
        /// Output directory
        #[arg(long, default_value = "out")]
        out: PathBuf,

        /// Skip paper dedup and name completion before scoring
        #[arg(long)]
        raw: bool,

        /// Keep the original last name when completing a first name
        #[arg(long)]
        keep_last_name: bool,
    },
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    // stdout carries protocol traffic and tool output
    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr)).init();
    }
}

fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::from_env()?;
    if let Some(year) = cli.current_year {
        config.current_year = year;
    }
    if let Some(scale) = cli.award_scale {
        config.award_scale = scale;
    }
    config.parallel |= cli.parallel;
    Ok(config)
}

async fn load(cli: &Cli) -> anyhow::Result<Corpus> {
    let corpus = loader::load_dir(&cli.data_dir)
        .await
        .inspect_err(|e| {
            if e.is_malformed_input() {
                tracing::error!(error = %e, "Input table has a row that does not decode");
            }
        })
        .with_context(|| format!("loading tables from {}", cli.data_dir.display()))?;
    let warnings = corpus.validate();
    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Authorship relation has invariant violations");
    }
    Ok(corpus)
}

fn export(corpus: Corpus, config: &Config, out: &Path, raw: bool) -> anyhow::Result<()> {
    std::fs::create_dir_all(out).with_context(|| format!("creating {}", out.display()))?;

    let corpus = if raw {
        corpus
    } else {
        let (deduped, dedup) = corpus.deduplicated();
        let options = ResolverOptions { replace_last_name: config.replace_last_name };
        let (resolved, names) = resolve_corpus(&deduped, options);
        tracing::info!(
            dropped_papers = dedup.dropped.len(),
            repeated_rows = dedup.repeated_rows,
            id_conflicts = dedup.conflicts.len(),
            completed_names = names.completed.len(),
            ambiguous_names = names.ambiguous.len(),
            "Applied identity corrections"
        );
        resolved
    };

    let metrics = Scorer::new(&corpus, config).score_all();
    let adjacency = CoauthorGraph::build(&corpus).edges();

    loader::write_table(&out.join(files::OUT_METRICS), &metrics)?;
    loader::write_table(&out.join(files::OUT_COAUTHORS), &adjacency)?;
    loader::write_table(&out.join(files::OUT_AUTHORS), corpus.authors())?;

    tracing::info!(
        out = %out.display(),
        authors = metrics.len(),
        coauthor_rows = adjacency.len(),
        "Export complete"
    );
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let mut config = build_config(&cli)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        current_year = config.current_year,
        award_scale = ?config.award_scale,
        "Starting researcher-impact"
    );

    match &cli.command {
        Command::List => {
            for tool in tools::register_all_tools() {
                println!("{:<20} {}", tool.name(), tool.description());
            }
        }
        Command::Serve => {
            let corpus = load(&cli).await?;
            McpServer::new(corpus, config).run_stdio().await?;
        }
        Command::Run { tool, input } => {
            let input: serde_json::Value = serde_json::from_str(input).context("--input must be a JSON object")?;
            let corpus = load(&cli).await?;
            let server = McpServer::new(corpus, config);
            match server.call(tool, input).await {
                Ok(output) => println!("{output}"),
                Err(e) => anyhow::bail!(e.to_user_message()),
            }
        }
        Command::Export { out, raw, keep_last_name } => {
            if *keep_last_name {
                config.replace_last_name = false;
            }
            let corpus = load(&cli).await?;
            export(corpus, &config, out, *raw)?;
        }
    }

    Ok(())
}

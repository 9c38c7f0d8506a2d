/*!
nlsql-chart Command Line Interface

Reads a query result (a JSON array of row objects) and prints column types,
the suggested chart family, or the chart configuration.
*/

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use nlsql_chart::writer::{ChartJsWriter, Writer};
use nlsql_chart::{ChartEngine, ChartFamily, EngineConfig, ResultSet, VERSION};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nlsql-chart")]
#[command(about = "Automatic chart configuration for SQL query results")]
#[command(version = VERSION)]
pub struct Cli {
    /// Engine configuration file (JSON)
    #[arg(long, global = true, env = "NLSQL_CHART_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "nlsql_chart=trace". Takes precedence over
    /// RUST_LOG; defaults to "warn" when neither is set
    #[arg(long, global = true, env = "NLSQL_CHART_LOG")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args)]
pub struct OutputArgs {
    /// Chart family to build instead of the detected one (bar, line, pie, scatter)
    #[arg(long)]
    pub family: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the inferred type of every column
    Classify {
        /// Result set JSON file, or "-" for stdin
        input: PathBuf,
    },

    /// Print the suggested chart family
    Detect {
        /// Result set JSON file, or "-" for stdin
        input: PathBuf,
    },

    /// Print the chart specification (labels and datasets)
    Build {
        /// Result set JSON file, or "-" for stdin
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print a complete Chart.js configuration
    Render {
        /// Result set JSON file, or "-" for stdin
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,

        /// Output file path
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    let engine = ChartEngine::new(config);

    match cli.command {
        Commands::Classify { input } => {
            let results = read_results(&input)?;
            for column in engine.classify_columns(&results) {
                println!("{}\t{}", column.name, column.column_type);
            }
        }

        Commands::Detect { input } => {
            let results = read_results(&input)?;
            match engine.detect(&results) {
                Some(family) => println!("{}", family),
                None => println!("none"),
            }
        }

        Commands::Build { input, output } => {
            let results = read_results(&input)?;
            let family = match output.family.as_deref() {
                Some(name) => parse_family(name)?,
                None => match engine.detect(&results) {
                    Some(family) => family,
                    None => bail!("No chart family suits these results; pass --family"),
                },
            };

            let Some(spec) = engine.build(&results, family) else {
                bail!("Cannot build a {} chart from these results", family);
            };
            let json = if output.pretty {
                serde_json::to_string_pretty(&spec)?
            } else {
                serde_json::to_string(&spec)?
            };
            println!("{}", json);
        }

        Commands::Render { input, output, out } => {
            let results = read_results(&input)?;
            let requested = output.family.as_deref().map(parse_family).transpose()?;
            let resolved = engine.resolve(&results, requested);

            let writer = ChartJsWriter::new().pretty(output.pretty);
            let document = writer.render(&resolved)?;

            match out {
                Some(path) => {
                    std::fs::write(&path, document)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    tracing::info!(path = %path.display(), family = %resolved.family, "wrote chart");
                }
                None => println!("{}", document),
            }
        }
    }

    Ok(())
}

/// Default log filter when neither `--log-level` nor `RUST_LOG` is set
const DEFAULT_LOG_FILTER: &str = "warn";

fn init_tracing(log_level: Option<&str>) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = log_filter(log_level, rust_log.as_deref());
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
        eprintln!("Invalid log filter '{}': {}", filter, err);
        EnvFilter::new(DEFAULT_LOG_FILTER)
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Pick the log filter: the CLI value first, then `RUST_LOG`, then the default
fn log_filter<'a>(log_level: Option<&'a str>, rust_log: Option<&'a str>) -> &'a str {
    log_level
        .or(rust_log)
        .filter(|f| !f.trim().is_empty())
        .unwrap_or(DEFAULT_LOG_FILTER)
}

fn parse_family(name: &str) -> anyhow::Result<ChartFamily> {
    name.parse::<ChartFamily>().map_err(anyhow::Error::msg)
}

fn read_results(input: &Path) -> anyhow::Result<ResultSet> {
    let contents = if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read {}", input.display()))?
    };

    let results = ResultSet::from_json_str(&contents)?;
    tracing::debug!(rows = results.len(), columns = ?results.columns(), "loaded result set");
    Ok(results)
}

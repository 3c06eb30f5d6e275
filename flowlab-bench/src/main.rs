mod config;
mod report;
mod scenario;
mod timing;

use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{AlgoArg, FileConfig, Format, Overrides, Settings};
use report::Reporter;
use scenario::{Agreement, Bench, Large};

#[derive(Parser)]
#[command(
    name = "flowlab-bench",
    version,
    about = "Wall-clock benchmarks of maximum flow and Gomory-Hu tree algorithms"
)]
struct Cli {
    /// Path to a TOML file with default settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Number of runs averaged for every measurement (default: 3)
    #[arg(short, long, global = true, env = "FLOWLAB_REPEATS")]
    repeats: Option<usize>,

    /// Seed of the random graphs (default: 42)
    #[arg(long, global = true, env = "FLOWLAB_SEED")]
    seed: Option<u64>,

    /// Output format (default: text)
    #[arg(long, global = true, value_enum, env = "FLOWLAB_FORMAT")]
    format: Option<Format>,

    /// Comma-separated algorithms to measure (default: dinitz, edmonds-karp,
    /// shortest-augmenting-path)
    #[arg(short, long = "algo", global = true, value_enum, value_delimiter = ',')]
    algos: Vec<AlgoArg>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Maximum flow on random sparse matrices
    Random {
        /// Number of vertices
        #[arg(long, default_value_t = 1000)]
        size: usize,

        /// Comma-separated matrix densities
        #[arg(long, value_delimiter = ',', default_values_t = [0.1, 0.3, 0.5])]
        densities: Vec<f64>,
    },
    /// Maximum flow on a banded matrix
    Banded {
        /// Number of vertices
        #[arg(long, default_value_t = 500)]
        size: usize,

        /// Number of columns on each side of the diagonal
        #[arg(long, default_value_t = 50)]
        half_width: usize,
    },
    /// Check that two algorithms agree on random graphs
    Agree {
        /// Number of vertices
        #[arg(long, default_value_t = 1000)]
        size: usize,

        /// Matrix density
        #[arg(long, default_value_t = 0.1)]
        density: f64,

        /// Graphs are generated from seeds 0, 1, ..., up to this number
        #[arg(long, default_value_t = 100)]
        seeds: u64,

        #[arg(long, value_enum, default_value = "edmonds-karp")]
        first: AlgoArg,

        #[arg(long, value_enum, default_value = "dinitz")]
        second: AlgoArg,
    },
    /// Maximum flow on a complete graph, a pyramid and DIMACS instances
    Large {
        /// Number of vertices of the complete graph
        #[arg(long, default_value_t = 50)]
        complete: usize,

        /// Number of rows of the pyramid
        #[arg(long, default_value_t = 100)]
        pyramid: usize,

        /// DIMACS max-flow instances
        instances: Vec<PathBuf>,
    },
    /// Gomory-Hu trees of the built-in graphs
    GomoryHu,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let file = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };

    let overrides = Overrides {
        repeats: cli.repeats,
        seed: cli.seed,
        format: cli.format,
        algos: cli.algos,
    };

    let settings = Settings::resolve(overrides, file).context("invalid settings")?;
    info!(
        repeats = settings.repeats.get(),
        seed = settings.seed,
        algos = ?settings.algos,
        "settings resolved"
    );

    let stdout = io::stdout();
    let mut reporter = Reporter::new(stdout.lock(), settings.format);
    let mut bench = Bench {
        settings: &settings,
        reporter: &mut reporter,
    };

    match cli.command {
        Command::Random { size, densities } => scenario::random(&mut bench, size, &densities),
        Command::Banded { size, half_width } => scenario::banded(&mut bench, size, half_width),
        Command::Agree {
            size,
            density,
            seeds,
            first,
            second,
        } => scenario::agree(
            &mut bench,
            Agreement {
                size,
                density,
                seeds,
                first: first.into(),
                second: second.into(),
            },
        ),
        Command::Large {
            complete,
            pyramid,
            instances,
        } => scenario::large(
            &mut bench,
            Large {
                complete,
                pyramid,
                instances: &instances,
            },
        ),
        Command::GomoryHu => scenario::gomory_hu(&mut bench),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_global_options() {
        let cli = Cli::try_parse_from([
            "flowlab-bench",
            "random",
            "--densities",
            "0.2,0.4",
            "--algo",
            "dinitz,preflow-push",
            "--repeats",
            "1",
        ])
        .unwrap();

        assert_eq!(cli.algos, vec![AlgoArg::Dinitz, AlgoArg::PreflowPush]);
        assert_eq!(cli.repeats, Some(1));
        assert!(matches!(
            cli.command,
            Command::Random { size: 1000, ref densities } if densities == &[0.2, 0.4]
        ));
    }
}

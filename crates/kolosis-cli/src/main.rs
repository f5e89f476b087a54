mod fetch;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use kolosis_core::{FacultyCode, ProgramLevel};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "kolosis-cli")]
#[command(about = "Fetch course-catalog records from the KULASIS syllabus portal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Log in, fetch one catalog section and write its records to a file.
    Fetch {
        /// Program level: `g` (graduate) or `u` (undergraduate).
        #[arg(long, default_value = "u")]
        level: ProgramLevel,
        /// Faculty code, e.g. `common`, `let`, `t`.
        #[arg(long, default_value = "common")]
        faculty: FacultyCode,
        /// Output path. Defaults to `kulasis_{faculty}_{level}.yml` (or `.json`).
        #[arg(long, short)]
        output: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
        /// Detail pages fetched in parallel per listing page; overrides
        /// `KOLOSIS_DETAIL_CONCURRENCY`.
        #[arg(long)]
        concurrency: Option<usize>,
    },
    /// Print the known faculty codes and which levels offer them.
    Faculties,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Yaml,
    Json,
}

fn init_tracing(fallback_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(fallback_level))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command {
        Commands::Fetch {
            level,
            faculty,
            output,
            format,
            concurrency,
        } => {
            let config = kolosis_core::load_app_config()?;
            init_tracing(&config.log_level)?;
            let args = fetch::FetchArgs {
                level,
                faculty,
                output,
                format,
                concurrency,
            };
            fetch::run_fetch(&config, args).await?;
        }
        Commands::Faculties => {
            init_tracing("info")?;
            fetch::print_faculties();
        }
    }

    Ok(())
}

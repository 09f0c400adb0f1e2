use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

mod commands;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::Completion { shell } = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            env!("CARGO_BIN_NAME"),
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    init_tracing();

    let paths = if cli.config.is_empty() {
        vec![PathBuf::from(pageguard_config::DEFAULT_CONFIG_PATH)]
    } else {
        cli.config
    };
    let config = pageguard_config::load(&paths).context("Failed to load config")?;

    match cli.command {
        Command::Serve => commands::serve::serve(config).await?,
        Command::CheckConfig { verbose } => {
            verbose.then(|| println!("{config:#?}"));
        }
        Command::Completion { .. } => unreachable!(),
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer().with_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,pageguard=debug")),
            ),
        )
        .init();
}

#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Path(s) of the configuration file(s)
    #[arg(short, long, global = true, env = "PAGEGUARD_CONFIG")]
    config: Vec<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the REST API server
    #[command(aliases(["run", "start", "r", "s"]))]
    Serve,
    /// Validate configuration
    CheckConfig {
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate shell completion scripts
    Completion { shell: Shell },
}

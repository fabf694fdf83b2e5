use crate::{config::Config, error::CliError, shutdown::ShutdownCoordinator};
use block_graph::BlockGraph;
use clap::Parser;
use commands::Commands;
use sql_codegen::compiler;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod error;
mod output;
mod shutdown;
mod watch;

#[derive(Parser)]
#[command(
    name = "blocksql",
    version = "0.1.0",
    about = "Compile visual SQL block graphs into SQL"
)]
struct Cli {
    #[arg(long, global = true, help = "Optional .env file with BLOCKSQL_* settings")]
    env_file: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let config = Config::load(cli.env_file.as_deref())?;

    // Initialize logger
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Compile { graph, output } => {
            info!("Compiling block graph: {}, output: {:?}", graph, output);

            let graph = load_graph(&graph).await?;
            let sql = compiler::compile(&graph);

            match output {
                Some(path) => output::write_sql(&sql, &path).await?,
                None => output::print_sql(&sql),
            }
        }
        Commands::Ast { graph } => {
            let graph = load_graph(&graph).await?;
            let json = output::to_pretty_json(&compiler::script(&graph))?;
            println!("{json}");
        }
        Commands::Watch { graph, json } => {
            let shutdown = ShutdownCoordinator::new(CancellationToken::new());
            shutdown.register_handlers();
            watch::run(&graph, &config, json, shutdown.cancel_token()).await?;
        }
        Commands::Form { action } => {
            let action = action.into_action().await?;
            info!("Generating SQL for form: {}", action.label());
            output::print_sql(&action.generate()?);
        }
    }

    Ok(())
}

async fn load_graph(path: &str) -> Result<BlockGraph, CliError> {
    let source = tokio::fs::read_to_string(path).await?;
    Ok(BlockGraph::from_json(&source)?)
}

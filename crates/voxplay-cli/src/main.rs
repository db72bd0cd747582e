//! CLI entry point.
//!
//! Initializes logging and `.env`, parses arguments and dispatches to the
//! command handlers.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use voxplay_cli::handlers::serve::ServeOptions;
use voxplay_cli::{Cli, CliError, Commands, handlers};

#[tokio::main]
async fn main() {
    // Load .env before parsing so it can supply VOXPLAY_* defaults
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.default_log_filter());

    let Some(command) = cli.command else {
        // No command provided - show help
        if let Err(e) = Cli::command().print_help() {
            eprintln!("{e}");
        }
        return;
    };

    if let Err(e) = run(command).await {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Serve {
            host,
            port,
            voices,
            cors_origins,
            engine,
            playback,
        } => {
            handlers::serve::execute(ServeOptions {
                host,
                port,
                voices,
                cors_origins,
                engine,
                playback,
            })
            .await
        }
        Commands::Say {
            text,
            voice,
            output,
            engine,
            playback,
        } => handlers::say::execute(text, voice, output.as_deref(), &engine, &playback).await,
        Commands::Voices { engine } => handlers::voices::execute(&engine).await,
    }
}

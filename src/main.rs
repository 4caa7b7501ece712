//! platctl - Main entry point

use clap::Parser;
use log::{debug, info};

use platctl::{
    run_check_command, run_context_command, Cli, Command, ContextResolver, ContextStore,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting platctl v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: context={:?}, quiet={}, command={:?}",
        cli.context, cli.quiet, cli.command
    );

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let store = ContextStore::new();
    debug!("Using config file {}", store.path().display());

    match &cli.command {
        Command::Config { action } => run_context_command(&store, action),
        Command::Check(args) => {
            let resolver = ContextResolver::new(store, cli.context.as_deref());
            run_check_command(&resolver, cli.quiet, args).await?;
            Ok(())
        }
    }
}

//! Config management CLI arguments (kubectl-style)

use clap::{Parser, Subcommand};

/// Config subcommands for managing named contexts
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create or update a context entry in the config file
    #[command(name = "set-context", visible_alias = "create")]
    SetContext(SetContextArgs),

    /// Set the current-context in the config file
    #[command(name = "use-context")]
    UseContext(UseContextArgs),

    /// List all contexts
    #[command(name = "get-contexts")]
    GetContexts,

    /// Display the current-context
    #[command(name = "current-context")]
    CurrentContext,

    /// Delete the specified context from the config file
    #[command(name = "delete-context")]
    DeleteContext(DeleteContextArgs),

    /// Display config file contents (tokens masked)
    View,
}

/// Arguments for 'config set-context' subcommand
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        platctl config set-context prod --url https://prod.example.com --tenant t-123\n  \
        platctl config set-context dev --url http://localhost:8080 --token <TOKEN>\n  \
        platctl config set-context prod --tenant t-456   # update existing context")]
pub struct SetContextArgs {
    /// Context name
    pub name: String,
    /// Platform endpoint URL
    #[arg(long)]
    pub url: Option<String>,
    /// Tenant identifier
    #[arg(long)]
    pub tenant: Option<String>,
    /// API token (stored in config file)
    #[arg(long)]
    pub token: Option<String>,
}

/// Arguments for 'config use-context' subcommand
#[derive(Parser, Debug)]
pub struct UseContextArgs {
    /// Context name to activate
    pub name: String,
}

/// Arguments for 'config delete-context' subcommand
#[derive(Parser, Debug)]
pub struct DeleteContextArgs {
    /// Context name to delete
    pub name: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

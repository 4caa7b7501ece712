//! Context resolution from multiple sources

use log::{debug, warn};

use crate::config::context as context_config;

use super::models::{Context, ContextConfig};
use super::store::ContextStore;

/// Source of the currently selected configuration context
pub trait ContextProvider {
    /// The active context, or `None` if nothing is selected
    fn current_context(&self) -> Option<Context>;
}

/// A fixed context (or none), mostly useful for callers that already hold one
impl ContextProvider for Option<Context> {
    fn current_context(&self) -> Option<Context> {
        self.clone()
    }
}

/// Resolves the active context from the CLI flag, environment and config file
#[derive(Debug, Clone)]
pub struct ContextResolver {
    store: ContextStore,
    cli_context: Option<String>,
}

impl ContextResolver {
    pub fn new(store: ContextStore, cli_context: Option<&str>) -> Self {
        Self {
            store,
            cli_context: cli_context.map(str::to_string),
        }
    }
}

impl ContextProvider for ContextResolver {
    fn current_context(&self) -> Option<Context> {
        let config = match self.store.load() {
            Ok(c) => c,
            Err(e) => {
                warn!("Ignoring context config: {}", e);
                return None;
            }
        };

        let env_context = std::env::var(context_config::ENV_VAR).ok();
        let name = resolve_active_context_name(self.cli_context.as_deref(), env_context, &config)?;

        match config.get_named(&name) {
            Ok(ctx) => {
                debug!("Resolved context '{}': url={}", name, ctx.url);
                Some(ctx)
            }
            Err(e) => {
                warn!("{}", e);
                None
            }
        }
    }
}

/// Pick the active context name:
/// 1. --context CLI flag
/// 2. PLATCTL_CONTEXT env var
/// 3. current-context from config file
fn resolve_active_context_name(
    cli_context: Option<&str>,
    env_context: Option<String>,
    config: &ContextConfig,
) -> Option<String> {
    if let Some(name) = cli_context {
        debug!("Using context from CLI flag: {}", name);
        return Some(name.to_string());
    }

    if let Some(name) = env_context.filter(|n| !n.is_empty()) {
        debug!(
            "Using context from {} env var: {}",
            context_config::ENV_VAR,
            name
        );
        return Some(name);
    }

    if let Some(name) = &config.current_context {
        debug!("Using context from config file: {}", name);
        return Some(name.clone());
    }

    None
}

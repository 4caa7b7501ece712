//! Context management module
//!
//! Provides named contexts that bundle connection parameters (url, tenant,
//! token) for switching between platform instances.

mod commands;
mod models;
mod resolve;
mod store;

pub use commands::run_context_command;
pub use models::{Context, ContextConfig};
pub use resolve::{ContextProvider, ContextResolver};
pub use store::ContextStore;

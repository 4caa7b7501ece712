//! platctl - run platform operations against named contexts
//!
//! A CLI tool that keeps named contexts (endpoint URL, tenant, token) and
//! wraps each operation in a [`CallContext`]: the resolved context, a
//! cancellable [`CallScope`] and, on an interactive terminal, a spinner that
//! ends in a ✓ or × status line.
//!
//! # Example
//!
//! ```bash
//! # Create a context (the first one becomes current)
//! platctl config set-context prod --url https://prod.example.com --tenant t-123
//!
//! # List contexts
//! platctl config get-contexts
//!
//! # Validate the active context
//! platctl check
//!
//! # Same, against another context and without the spinner
//! platctl check --context dev -q
//! ```

pub mod call;
pub mod check;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod ui;

pub use call::{CallContext, CallScope};
pub use check::run_check_command;
pub use cli::{CheckArgs, Cli, Command, ConfigAction};
pub use context::{
    run_context_command, Context, ContextConfig, ContextProvider, ContextResolver, ContextStore,
};
pub use error::{PlatError, Result};
pub use ui::StatusSpinner;

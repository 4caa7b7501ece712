//! Call context module
//!
//! Wraps a single operation with its resolved context, an optional
//! cancellable scope and a progress spinner.

mod context;
mod scope;

pub use context::CallContext;
pub use scope::CallScope;

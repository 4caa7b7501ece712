//! Per-call execution environment: active context, scope and spinner

use log::info;
use std::future::Future;
use std::io::IsTerminal;

use crate::context::{Context, ContextProvider};
use crate::error::{PlatError, Result};
use crate::ui::StatusSpinner;

use super::scope::CallScope;

/// Execution environment of one logical operation.
///
/// Holds the resolved context for the whole call and, when output is
/// interactive and not quiet, a spinner that callers toggle around the
/// operation. Spinner methods are safe to call unconditionally.
#[derive(Debug)]
pub struct CallContext {
    scope: CallScope,
    context: Context,
    spinner: Option<StatusSpinner>,
}

impl CallContext {
    /// Resolve the active context and decide whether stderr gets a spinner.
    ///
    /// Fails with [`PlatError::MissingContext`] when no context is selected.
    pub fn new<P>(provider: &P, scope: Option<CallScope>, quiet: bool) -> Result<Self>
    where
        P: ContextProvider + ?Sized,
    {
        Self::with_terminal(provider, scope, quiet, std::io::stderr().is_terminal())
    }

    /// Same as [`new`](Self::new) with the stderr interactivity given
    pub fn with_terminal<P>(
        provider: &P,
        scope: Option<CallScope>,
        quiet: bool,
        interactive: bool,
    ) -> Result<Self>
    where
        P: ContextProvider + ?Sized,
    {
        let spinner = (!quiet && interactive).then(StatusSpinner::new);
        Self::build(provider, scope, spinner)
    }

    fn build<P>(
        provider: &P,
        scope: Option<CallScope>,
        spinner: Option<StatusSpinner>,
    ) -> Result<Self>
    where
        P: ContextProvider + ?Sized,
    {
        let context = provider.current_context().ok_or(PlatError::MissingContext)?;
        info!(
            "Using context: name={}, url={}, tenant={}",
            context.name,
            context.url,
            context.tenant.as_deref().unwrap_or("<not set>")
        );

        Ok(Self {
            scope: scope.unwrap_or_default(),
            context,
            spinner,
        })
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn scope(&self) -> &CallScope {
        &self.scope
    }

    pub fn has_spinner(&self) -> bool {
        self.spinner.is_some()
    }

    pub fn spinner(&self) -> Option<&StatusSpinner> {
        self.spinner.as_ref()
    }

    /// Animate the spinner with `"<label> in progress"`
    pub fn start_spinner(&mut self, label: &str) {
        if let Some(spinner) = self.spinner.as_mut() {
            spinner.start(label);
        }
    }

    /// Stop the spinner, leaving a ✓/× status line for a labelled start
    pub fn stop_spinner(&mut self, succeeded: bool) {
        if let Some(spinner) = self.spinner.as_mut() {
            spinner.stop(succeeded);
        }
    }

    /// Stop the spinner without leaving a status line
    pub fn stop_spinner_hide(&mut self) {
        if let Some(spinner) = self.spinner.as_mut() {
            spinner.stop_hide();
        }
    }

    /// Run `fut` inside the call scope with the spinner showing `label`
    pub async fn run<T, F>(&mut self, label: &str, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        self.start_spinner(label);
        let result = self.scope.run(fut).await;
        self.stop_spinner(result.is_ok());
        result
    }
}

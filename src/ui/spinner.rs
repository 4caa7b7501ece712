//! Progress spinner with a success/failure status line

use console::style;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use log::debug;
use std::fmt;
use std::time::Duration;

use crate::config::spinner as spinner_config;

/// Plain status glyph for an operation outcome
pub fn status_glyph(succeeded: bool) -> &'static str {
    if succeeded {
        spinner_config::SUCCESS_GLYPH
    } else {
        spinner_config::FAILURE_GLYPH
    }
}

fn styled_glyph(succeeded: bool) -> String {
    let glyph = style(status_glyph(succeeded));
    if succeeded {
        glyph.green().to_string()
    } else {
        glyph.red().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Stderr,
    Hidden,
}

/// An animated spinner line on stderr.
///
/// The spinner is created stopped. [`start`](Self::start) animates it with
/// an optional label; [`stop`](Self::stop) leaves a `"<glyph> <label>"` line
/// behind when a label was given, and [`stop_hide`](Self::stop_hide) leaves
/// nothing.
pub struct StatusSpinner {
    target: Target,
    bar: Option<ProgressBar>,
    label: Option<String>,
    final_line: Option<String>,
}

impl fmt::Debug for StatusSpinner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatusSpinner")
            .field("target", &self.target)
            .field("running", &self.is_running())
            .field("label", &self.label)
            .field("final_line", &self.final_line)
            .finish()
    }
}

impl Default for StatusSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusSpinner {
    /// Spinner drawing to stderr
    pub fn new() -> Self {
        Self::with_target(Target::Stderr)
    }

    /// Spinner that keeps its state but draws nowhere
    pub fn hidden() -> Self {
        Self::with_target(Target::Hidden)
    }

    fn with_target(target: Target) -> Self {
        Self {
            target,
            bar: None,
            label: None,
            final_line: None,
        }
    }

    /// Whether the spinner is currently animating
    pub fn is_running(&self) -> bool {
        self.bar.is_some()
    }

    /// Plain text of the line left behind by the most recent stop, if any
    pub fn final_line(&self) -> Option<&str> {
        self.final_line.as_deref()
    }

    /// Start animating. An empty label shows a bare spinner and stages no
    /// final line. Starting a running spinner restarts it.
    pub fn start(&mut self, label: &str) {
        self.stop_hide();

        let bar = self.new_bar();
        if !label.is_empty() {
            bar.set_message(format!("{} in progress", label));
            self.label = Some(label.to_string());
        }
        bar.enable_steady_tick(Duration::from_millis(spinner_config::TICK_INTERVAL_MS));
        self.bar = Some(bar);
    }

    /// Stop animating, leaving a status line if a label was staged
    pub fn stop(&mut self, succeeded: bool) {
        let Some(bar) = self.bar.take() else {
            return;
        };

        match self.label.take() {
            Some(label) => {
                match ProgressStyle::with_template("{msg}") {
                    Ok(style) => bar.set_style(style),
                    Err(e) => debug!("Invalid final spinner template: {}", e),
                }
                bar.finish_with_message(format!("{} {}", styled_glyph(succeeded), label));
                self.final_line = Some(format!("{} {}", status_glyph(succeeded), label));
            }
            None => bar.finish_and_clear(),
        }
    }

    /// Stop animating without leaving any status line
    pub fn stop_hide(&mut self) {
        self.label = None;
        self.final_line = None;
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }

    fn new_bar(&self) -> ProgressBar {
        let draw_target = match self.target {
            Target::Stderr => ProgressDrawTarget::stderr(),
            Target::Hidden => ProgressDrawTarget::hidden(),
        };
        let bar = ProgressBar::with_draw_target(None, draw_target);
        match ProgressStyle::default_spinner()
            .tick_strings(spinner_config::TICK_STRINGS)
            .template(spinner_config::TEMPLATE)
        {
            Ok(style) => bar.set_style(style),
            Err(e) => debug!("Invalid spinner template: {}", e),
        }
        bar
    }
}

impl Drop for StatusSpinner {
    fn drop(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_spinner_is_stopped() {
        let spinner = StatusSpinner::hidden();
        assert!(!spinner.is_running());
        assert!(spinner.label.is_none());
        assert!(spinner.final_line().is_none());
    }

    #[test]
    fn test_start_stages_label() {
        let mut spinner = StatusSpinner::hidden();
        spinner.start("fetch data");
        assert!(spinner.is_running());
        assert_eq!(spinner.label.as_deref(), Some("fetch data"));
        assert_eq!(
            spinner.bar.as_ref().unwrap().message(),
            "fetch data in progress"
        );
        spinner.stop_hide();
    }

    #[test]
    fn test_stop_success_line() {
        let mut spinner = StatusSpinner::hidden();
        spinner.start("fetch data");
        spinner.stop(true);
        assert!(!spinner.is_running());
        assert_eq!(spinner.final_line(), Some("✓ fetch data"));
    }

    #[test]
    fn test_stop_failure_line() {
        let mut spinner = StatusSpinner::hidden();
        spinner.start("fetch data");
        spinner.stop(false);
        assert_eq!(spinner.final_line(), Some("× fetch data"));
    }

    #[test]
    fn test_empty_label_leaves_no_line() {
        let mut spinner = StatusSpinner::hidden();
        spinner.start("");
        assert!(spinner.label.is_none());
        assert!(spinner.bar.as_ref().unwrap().message().is_empty());
        spinner.stop(true);
        assert!(spinner.final_line().is_none());
    }

    #[test]
    fn test_label_text_kept_verbatim() {
        let mut spinner = StatusSpinner::hidden();
        spinner.start("deploy  app v2");
        spinner.stop(true);
        assert_eq!(spinner.final_line(), Some("✓ deploy  app v2"));
    }

    #[test]
    fn test_stop_without_start_is_noop() {
        let mut spinner = StatusSpinner::hidden();
        spinner.stop(true);
        spinner.stop(false);
        assert!(!spinner.is_running());
        assert!(spinner.final_line().is_none());
    }

    #[test]
    fn test_stop_hide_after_any_sequence() {
        let mut spinner = StatusSpinner::hidden();
        spinner.start("deploy");
        spinner.stop_hide();
        assert!(spinner.final_line().is_none());

        spinner.start("deploy");
        spinner.stop(true);
        spinner.stop_hide();
        assert!(spinner.final_line().is_none());
        assert!(spinner.label.is_none());

        spinner.stop_hide();
        assert!(!spinner.is_running());
    }

    #[test]
    fn test_restart_replaces_label() {
        let mut spinner = StatusSpinner::hidden();
        spinner.start("first");
        spinner.start("second");
        spinner.stop(false);
        assert_eq!(spinner.final_line(), Some("× second"));
    }

    #[test]
    fn test_second_stop_keeps_first_line() {
        let mut spinner = StatusSpinner::hidden();
        spinner.start("fetch");
        spinner.stop(true);
        spinner.stop(false);
        assert_eq!(spinner.final_line(), Some("✓ fetch"));
    }

    #[test]
    fn test_status_glyph() {
        assert_eq!(status_glyph(true), "✓");
        assert_eq!(status_glyph(false), "×");
    }
}

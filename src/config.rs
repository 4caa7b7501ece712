/// Configuration constants for named contexts
pub mod context {
    /// Directory (relative to HOME) holding the config file
    pub const DIR_NAME: &str = ".platctl";

    /// Config file name
    pub const FILE_NAME: &str = "config.json";

    /// Environment variable selecting the active context
    pub const ENV_VAR: &str = "PLATCTL_CONTEXT";
}

/// Configuration constants for the progress spinner
pub mod spinner {
    /// Animation frames
    pub const TICK_STRINGS: &[&str] = &[
        "⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏",
    ];

    /// Refresh interval in milliseconds
    pub const TICK_INTERVAL_MS: u64 = 50;

    /// Template for the animated line
    pub const TEMPLATE: &str = "{spinner:.cyan} {msg}";

    /// Glyph shown when the wrapped operation succeeded (check mark)
    pub const SUCCESS_GLYPH: &str = "\u{2713}";

    /// Glyph shown when the wrapped operation failed (cross mark)
    pub const FAILURE_GLYPH: &str = "\u{00d7}";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Default timeout for `check`, in seconds
    pub const CHECK_TIMEOUT_SECS: u64 = 30;
}

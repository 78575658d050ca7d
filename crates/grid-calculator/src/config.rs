//! Application configuration, built from command-line arguments

use serde::{Deserialize, Serialize};

/// Logging verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Warnings and errors
    #[default]
    Normal,
    /// Informational messages
    Verbose,
    /// Every dispatched event
    Debug,
    /// Everything
    Trace,
}

impl Verbosity {
    /// Derives a verbosity from `-q` and the number of `-v` flags
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Default `tracing` filter directive for this level
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when the stream is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should stdout be colored
    #[must_use]
    pub fn should_color_stdout(self) -> bool {
        self.resolve(|| std::io::IsTerminal::is_terminal(&std::io::stdout()))
    }

    /// Should stderr (logs) be colored
    #[must_use]
    pub fn should_color_stderr(self) -> bool {
        self.resolve(|| std::io::IsTerminal::is_terminal(&std::io::stderr()))
    }

    fn resolve(self, is_terminal: impl FnOnce() -> bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => is_terminal(),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogFormat {
    /// Compact human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
    /// Multi-line pretty output for development
    Pretty,
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice
    pub color: ColorChoice,
    /// Log output format
    pub log_format: LogFormat,
    /// Capture mouse clicks in the terminal front end
    pub mouse: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Normal,
            color: ColorChoice::Auto,
            log_format: LogFormat::Text,
            mouse: true,
        }
    }
}

impl AppConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set log format
    #[must_use]
    pub const fn with_log_format(mut self, log_format: LogFormat) -> Self {
        self.log_format = log_format;
        self
    }

    /// Enable or disable mouse capture
    #[must_use]
    pub const fn with_mouse(mut self, mouse: bool) -> Self {
        self.mouse = mouse;
        self
    }
}

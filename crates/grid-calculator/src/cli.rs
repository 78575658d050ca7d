//! Command-line interface
//!
//! ```bash
//! grid-calc                      # interactive keypad (same as `grid-calc tui`)
//! grid-calc tui --no-mouse       # keyboard focus only
//! grid-calc press 1 2 + 3 =      # replay presses, print both display lines
//! grid-calc press --json 6 / 3 = # events, final state and display as JSON
//! ```

use std::io::Write;

use clap::{Args, Parser, Subcommand, ValueEnum};
use console::style;
use tracing::info;

use crate::config::{AppConfig, ColorChoice, LogFormat, Verbosity};
use crate::display::DisplayLines;
use crate::driver::{CalculatorDriver, HeadlessDriver};
use crate::error::AppResult;

/// Button-grid calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "grid-calc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output
    #[arg(long, value_enum, default_value_t = ColorArg::Auto, global = true)]
    pub color: ColorArg,

    /// Log line format
    #[arg(long, value_enum, default_value_t = LogFormatArg::Text, global = true)]
    pub log_format: LogFormatArg,

    /// Subcommand to run (defaults to `tui`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive keypad
    Tui(TuiArgs),

    /// Press keypad buttons by label and print the display
    Press(PressArgs),
}

/// Arguments for the tui command
#[derive(Args, Debug, Default)]
pub struct TuiArgs {
    /// Do not capture the mouse
    #[arg(long)]
    pub no_mouse: bool,
}

/// Arguments for the press command
#[derive(Args, Debug)]
pub struct PressArgs {
    /// Print events, final state and display as JSON
    #[arg(long)]
    pub json: bool,

    /// Button labels in order: 0-9 . + - * ÷ (or /) AC DEL =
    #[arg(required = true, value_name = "LABEL")]
    pub labels: Vec<String>,
}

/// Color argument
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum ColorArg {
    /// Detect terminal
    #[default]
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// Log format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum LogFormatArg {
    /// Compact text
    #[default]
    Text,
    /// JSON lines
    Json,
    /// Pretty multi-line
    Pretty,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Text => Self::Text,
            LogFormatArg::Json => Self::Json,
            LogFormatArg::Pretty => Self::Pretty,
        }
    }
}

/// Builds the application configuration from parsed arguments
#[must_use]
pub fn build_config(cli: &Cli) -> AppConfig {
    let mouse = match &cli.command {
        Some(Commands::Tui(args)) => !args.no_mouse,
        _ => true,
    };

    AppConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_color(cli.color.into())
        .with_log_format(cli.log_format.into())
        .with_mouse(mouse)
}

/// Runs the selected command
pub fn run(cli: Cli, config: &AppConfig) -> AppResult<()> {
    match cli.command {
        None | Some(Commands::Tui(_)) => crate::tui::run(config),
        Some(Commands::Press(args)) => {
            let color = config.color.should_color_stdout();
            console::set_colors_enabled(color);
            let output = run_press(&args, color)?;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

/// Replays the labels from the initial state and renders the output text
pub fn run_press(args: &PressArgs, color: bool) -> AppResult<String> {
    info!(presses = args.labels.len(), "replaying keypad presses");

    let mut driver = HeadlessDriver::new();
    for label in &args.labels {
        driver.press(label)?;
    }

    if args.json {
        let mut json = serde_json::to_string_pretty(&driver.report())?;
        json.push('\n');
        return Ok(json);
    }

    Ok(render_lines(&driver.display(), color))
}

fn render_lines(display: &DisplayLines, color: bool) -> String {
    if color {
        format!(
            "{}\n{}\n",
            style(&display.previous_line).dim(),
            style(&display.current_line).bold()
        )
    } else {
        format!("{}\n{}\n", display.previous_line, display.current_line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn press(labels: &[&str]) -> PressArgs {
        PressArgs {
            json: false,
            labels: labels.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn test_cli_parses_press() {
        let cli = Cli::try_parse_from(["grid-calc", "press", "1", "+", "2", "="]).unwrap();
        match cli.command {
            Some(Commands::Press(args)) => assert_eq!(args.labels, ["1", "+", "2", "="]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parses_minus_label() {
        let cli = Cli::try_parse_from(["grid-calc", "press", "5", "-", "2"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Press(ref a)) if a.labels[1] == "-"));
    }

    #[test]
    fn test_cli_press_requires_labels() {
        assert!(Cli::try_parse_from(["grid-calc", "press"]).is_err());
    }

    #[test]
    fn test_cli_defaults_to_tui() {
        let cli = Cli::try_parse_from(["grid-calc"]).unwrap();
        assert!(cli.command.is_none());
        assert!(build_config(&cli).mouse);
    }

    #[test]
    fn test_build_config_flags() {
        let cli = Cli::try_parse_from([
            "grid-calc",
            "-vv",
            "--color",
            "never",
            "--log-format",
            "json",
            "tui",
            "--no-mouse",
        ])
        .unwrap();
        let config = build_config(&cli);
        assert_eq!(config.verbosity, Verbosity::Debug);
        assert_eq!(config.color, ColorChoice::Never);
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(!config.mouse);
    }

    #[test]
    fn test_build_config_quiet() {
        let cli = Cli::try_parse_from(["grid-calc", "-q", "press", "1"]).unwrap();
        assert_eq!(build_config(&cli).verbosity, Verbosity::Quiet);
    }

    #[test]
    fn test_run_press_plain() {
        let output = run_press(&press(&["1", "2", "0", "0", "+", "3"]), false).unwrap();
        assert_eq!(output, "1,200 +\n3\n");
    }

    #[test]
    fn test_run_press_blank_previous_line() {
        let output = run_press(&press(&["6", "/", "3", "="]), false).unwrap();
        assert_eq!(output, "\n2\n");
    }

    #[test]
    fn test_run_press_unknown_label() {
        let err = run_press(&press(&["1", "sqrt"]), false).unwrap_err();
        assert!(matches!(err, AppError::UnknownTrigger { ref label } if label == "sqrt"));
    }

    #[test]
    fn test_run_press_json() {
        let mut args = press(&["2", "*", "3", "="]);
        args.json = true;
        let output = run_press(&args, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["display"]["current_line"], "6");
        assert_eq!(value["state"]["overwrite"], true);
        assert_eq!(value["events"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_render_lines_colored_keeps_text() {
        let display = DisplayLines {
            previous_line: "1 +".into(),
            current_line: "2".into(),
        };
        console::set_colors_enabled(true);
        let output = render_lines(&display, true);
        assert!(output.contains("1 +"));
        assert!(output.contains('2'));
    }
}

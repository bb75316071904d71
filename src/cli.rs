//! Command-line argument parsing for the path swapper
//!
//! Supports:
//! - A line of text as an argument or on stdin
//! - One or more cursor offsets
//! - Forcing the raw flag instead of auto-detection
//! - JSON output for editor integrations

use clap::Parser;
use std::path::PathBuf;

/// Swap quoted Windows/Linux path literals under the cursor
#[derive(Parser, Debug)]
#[command(
    name = "pathswap",
    version,
    about = "Swap quoted Windows/Linux path literals under the cursor"
)]
pub struct CliArgs {
    /// Line of text to rewrite; reads one line from stdin when absent or "-"
    #[arg(value_name = "LINE")]
    pub line: Option<String>,

    /// Cursor offset into the line (0-indexed chars; repeatable)
    #[arg(short = 'c', long = "cursor", value_name = "N", required = true)]
    pub cursors: Vec<usize>,

    /// Treat the literal as already raw instead of detecting an `r` prefix
    #[arg(long)]
    pub raw: bool,

    /// Print one JSON outcome per converted literal instead of the
    /// rewritten line
    #[arg(long)]
    pub json: bool,

    /// Config file to use instead of ~/.config/pathswap/config.yaml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// True when the line must come from stdin
    pub fn reads_stdin(&self) -> bool {
        matches!(self.line.as_deref(), None | Some("-"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_argument() {
        let args = CliArgs::parse_from(["pathswap", "--cursor", "6", r#"a = "C:\x""#]);
        assert!(!args.reads_stdin());
        assert_eq!(args.cursors, vec![6]);
        assert!(!args.raw);
        assert!(!args.json);
    }

    #[test]
    fn test_stdin_when_line_absent() {
        let args = CliArgs::parse_from(["pathswap", "--cursor", "3"]);
        assert!(args.reads_stdin());
    }

    #[test]
    fn test_stdin_when_line_is_dash() {
        let args = CliArgs::parse_from(["pathswap", "--cursor", "3", "-"]);
        assert!(args.reads_stdin());
    }

    #[test]
    fn test_repeated_cursors() {
        let args = CliArgs::parse_from(["pathswap", "-c", "6", "-c", "22", "line"]);
        assert_eq!(args.cursors, vec![6, 22]);
    }

    #[test]
    fn test_cursor_is_required() {
        assert!(CliArgs::try_parse_from(["pathswap", "line"]).is_err());
    }

    #[test]
    fn test_config_override() {
        let args =
            CliArgs::parse_from(["pathswap", "-c", "1", "--config", "/tmp/custom.yaml", "x"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/custom.yaml")));
    }
}

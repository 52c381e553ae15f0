//! # Namespace Console
//!
//! A line-oriented front end for the namespace service. Commands are read one
//! per line from a script or stdin and executed against a single in-memory
//! namespace.
//!
//! ## Philosophy
//!
//! - The console owns nothing but the namespace it drives
//! - A failing command reports its error and the script keeps going
//! - Output is plain text so scripts can be diffed

pub mod commands;
pub mod tree;

pub use commands::{CommandError, CommandHandler, ConsoleCommand, ConsoleCommandParser};
pub use tree::render_tree;

use services_namespace::{ConfigError, NamespaceConfig};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use thiserror::Error;

/// Errors raised while setting up the console
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Loads a JSON namespace configuration from a file
///
/// Unlike [`services_namespace::load_config_safe`], a malformed file is an
/// error.
pub fn load_config_file(path: &Path) -> Result<NamespaceConfig, ConsoleError> {
    let bytes = fs::read(path)?;
    Ok(NamespaceConfig::from_json(&bytes)?)
}

/// Outcome of running a script
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    /// Commands that ran successfully
    pub succeeded: usize,
    /// Commands that reported an error
    pub failed: usize,
}

/// Runs every line of `input` through `handler`
///
/// Command output goes to `output`; command errors are written there too,
/// prefixed with `error:`, and counted in the summary.
pub fn run_script<R: BufRead, W: Write>(
    handler: &mut CommandHandler,
    input: R,
    output: &mut W,
) -> Result<ScriptSummary, ConsoleError> {
    let mut summary = ScriptSummary::default();

    for line in input.lines() {
        match handler.run_line(&line?) {
            Ok(None) => {}
            Ok(Some(text)) => {
                if !text.is_empty() {
                    writeln!(output, "{}", text)?;
                }
                summary.succeeded += 1;
            }
            Err(err) => {
                writeln!(output, "error: {}", err)?;
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_run_script_reports_errors_and_continues() {
        let script = "\
# build a small tree
mkdir C: docs
touch C:\\docs a.txt
rm C:\\missing
write C:\\docs\\a.txt hello
";
        let mut handler = CommandHandler::default();
        let mut output = Vec::new();
        let summary = run_script(&mut handler, Cursor::new(script), &mut output).unwrap();

        assert_eq!(summary, ScriptSummary { succeeded: 3, failed: 1 });
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("error: Not found: C:\\missing"));
        assert!(text.ends_with("Wrote 5 chars to C:\\docs\\a.txt\n"));
    }

    #[test]
    fn test_empty_output_is_not_printed() {
        let mut handler = CommandHandler::default();
        let mut output = Vec::new();
        run_script(&mut handler, Cursor::new("ls C:\n"), &mut output).unwrap();
        assert!(output.is_empty());
    }
}

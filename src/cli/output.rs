/// Output: the result file and console messages.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{info, warn};

use super::errors::OutputError;

/// Write `line` plus a newline to `path`, replacing any existing file.
///
/// The writer is flushed before returning and the handle is closed on every
/// path.
///
/// # Errors
///
/// Returns `OutputError` if the file cannot be created, written, or flushed.
pub fn write_result_line(path: &Path, line: &str) -> Result<(), OutputError> {
    let to_err = |source| OutputError {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(to_err)?;
    let mut out = BufWriter::new(file);
    writeln!(out, "{line}").map_err(to_err)?;
    out.flush().map_err(to_err)?;
    info!(path = %path.display(), "wrote result");
    Ok(())
}

/// Print a user-facing message to stdout.
pub fn write_console(message: &str) {
    println!("{message}");
}

/// Console message for a failed result write. The run still completes.
#[must_use]
pub fn write_failure_message(err: &OutputError) -> String {
    warn!(error = %err, "result not written");
    format!("Error writing output file: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_result_line_newline_terminated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.txt");
        write_result_line(&path, "A,B:10").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "A,B:10\n");
    }

    #[test]
    fn test_write_result_line_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.txt");
        std::fs::write(&path, "a much longer previous result\n").unwrap();
        write_result_line(&path, "A:1").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "A:1\n");
    }

    #[test]
    fn test_write_result_line_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("result.txt");
        let err = write_result_line(&path, "A:1").unwrap_err();
        assert_eq!(err.path, path);

        let message = write_failure_message(&err);
        assert!(message.starts_with("Error writing output file: "));
        assert!(message.contains("result.txt"));
    }
}

/// Errors from the CLI layer. Both kinds are reported on the console only.
use std::path::PathBuf;

use clap::error::ErrorKind;
use thiserror::Error;

/// Failures while resolving the input and output paths.
#[derive(Debug, Error)]
pub enum ArgsError {
    /// `--in` or `--out` was absent or empty.
    #[error("Input and output files must be provided.")]
    MissingArguments,

    /// The argument list could not be parsed (flag without a value, unknown flag).
    #[error("Invalid arguments: {message}")]
    InvalidArguments {
        /// Parser diagnostic, first line only.
        message: String,
    },

    /// `--help` or `--version` was requested; carries the rendered text.
    #[error("{0}")]
    Info(String),
}

impl ArgsError {
    /// Classify a clap parse failure.
    #[must_use]
    pub fn from_clap(err: &clap::Error) -> Self {
        let rendered = err.render().to_string();
        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                Self::Info(rendered.trim_end().to_owned())
            }
            _ => {
                let message = rendered
                    .lines()
                    .next()
                    .unwrap_or_default()
                    .trim_start_matches("error: ")
                    .to_owned();
                Self::InvalidArguments { message }
            }
        }
    }
}

/// Failure writing the result file.
#[derive(Debug, Error)]
#[error("{} ({source})", path.display())]
pub struct OutputError {
    /// Output file path.
    pub path: PathBuf,
    /// Underlying I/O failure.
    #[source]
    pub source: std::io::Error,
}

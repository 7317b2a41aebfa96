/// CLI argument definitions via clap derive, and input/output path resolution.
use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use tracing::debug;

use super::errors::ArgsError;

/// cardscore — score dealt card hands and report the winners.
#[derive(Debug, Parser)]
#[command(
    name = "cardscore",
    about = "Score dealt card hands from a text file and write the winners to another",
    version,
    args_override_self = true
)]
pub struct Cli {
    /// Input file: one `<name>:<card>,<card>,...` line per player.
    #[arg(long = "in", value_name = "PATH", allow_hyphen_values = true)]
    pub input: Option<String>,

    /// Output file for the result line. Overwritten if it exists.
    #[arg(long = "out", value_name = "PATH", allow_hyphen_values = true)]
    pub output: Option<String>,
}

/// Input and output paths, both known to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Cli {
    /// Turn the parsed flags into paths.
    ///
    /// # Errors
    ///
    /// Returns `ArgsError::MissingArguments` if either flag is absent or empty.
    pub fn into_paths(self) -> Result<ResolvedPaths, ArgsError> {
        let input = self.input.unwrap_or_default();
        let output = self.output.unwrap_or_default();
        if input.is_empty() || output.is_empty() {
            return Err(ArgsError::MissingArguments);
        }
        Ok(ResolvedPaths {
            input: PathBuf::from(input),
            output: PathBuf::from(output),
        })
    }
}

/// Resolve `--in` and `--out` from a raw argument list (program name first).
///
/// When a flag is repeated the last occurrence wins. Any other argument,
/// flag or positional, is dropped and parsing is retried without it.
///
/// # Errors
///
/// Returns `ArgsError::InvalidArguments` when `--in` or `--out` has no value,
/// `ArgsError::Info` for `--help`/`--version`, and
/// `ArgsError::MissingArguments` when either path is absent or empty.
pub fn resolve_paths<I, T>(args: I) -> Result<ResolvedPaths, ArgsError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    loop {
        let err = match Cli::try_parse_from(&args) {
            Ok(cli) => return cli.into_paths(),
            Err(err) => err,
        };
        let Some(idx) = unknown_argument(&err).and_then(|arg| position_of(&args, &arg)) else {
            return Err(ArgsError::from_clap(&err));
        };
        let ignored = args.remove(idx);
        debug!(argument = %ignored.to_string_lossy(), "ignoring unrecognized argument");
    }
}

/// The offending argument of a clap "unexpected argument" failure.
fn unknown_argument(err: &clap::Error) -> Option<String> {
    if err.kind() != ErrorKind::UnknownArgument {
        return None;
    }
    match err.get(ContextKind::InvalidArg)? {
        ContextValue::String(arg) => Some(arg.clone()),
        _ => None,
    }
}

/// Index of `arg` in `args`, skipping the program name. `--flag` also matches
/// an attached `--flag=value`.
fn position_of(args: &[OsString], arg: &str) -> Option<usize> {
    let attached = format!("{arg}=");
    args.iter()
        .enumerate()
        .skip(1)
        .find(|(_, a)| {
            let a = a.to_string_lossy();
            a == arg || (arg.starts_with("--") && a.starts_with(&attached))
        })
        .map(|(idx, _)| idx)
}

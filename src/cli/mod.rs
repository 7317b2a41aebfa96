/// CLI layer: argument resolution and output.
pub mod args;
pub mod errors;
pub mod output;

pub use args::{ResolvedPaths, resolve_paths};
pub use errors::OutputError;
pub use output::{write_console, write_failure_message, write_result_line};

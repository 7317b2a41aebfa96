/// The scoring run: deal, score, rank, resolve, write.
use std::ffi::OsString;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::cli::{
    OutputError, ResolvedPaths, resolve_paths, write_failure_message, write_result_line,
};
use crate::game::{
    GameError, Winners, rank_players, read_players, resolve_winners, score_players,
};
use crate::types::{Standing, standings_json};

/// Resolve arguments and run, returning the console message, if any.
///
/// `None` means the result (or an `Exception:` line) was written to the
/// output file and nothing is shown. Argument problems and output write
/// failures come back as the message to print; no file is written for
/// argument problems.
pub fn execute<I, T>(args: I) -> Option<String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let paths = match resolve_paths(args) {
        Ok(paths) => paths,
        Err(err) => {
            debug!(error = ?err, "no run");
            return Some(err.to_string());
        }
    };
    run(&paths).err().map(|err| write_failure_message(&err))
}

/// Run the whole pipeline for one input/output pair.
///
/// Game failures are not returned: they become the `Exception:<message>`
/// line in the output file.
///
/// # Errors
///
/// Returns `OutputError` if the result line cannot be written.
pub fn run(paths: &ResolvedPaths) -> Result<(), OutputError> {
    let line = match play(&paths.input) {
        Ok(winners) => winners.result_line(),
        Err(err) => {
            warn!(error = %err, card = err.card(), "run aborted");
            err.exception_line()
        }
    };
    write_result_line(&paths.output, &line)
}

/// Deal and score the hands in `input` and return the winners.
///
/// # Errors
///
/// Returns the first `GameError` from reading, parsing, or scoring, and
/// `GameError::NoPlayers` when the file holds no hands.
pub fn play(input: &Path) -> Result<Winners, GameError> {
    let mut players = read_players(input)?;
    score_players(&mut players)?;
    rank_players(&mut players);

    debug!(
        standings = %standings_json(&Standing::from_ranked(&players)),
        "final standings"
    );

    let winners = resolve_winners(&players).ok_or(GameError::NoPlayers)?;
    info!(
        winners = ?winners.names,
        score = winners.score,
        tie = winners.is_tie(),
        "resolved winners"
    );
    Ok(winners)
}

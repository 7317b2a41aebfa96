/// Errors from the game domain layer.
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while dealing, scoring, or ranking hands.
///
/// Every variant is reported through the output file, so results and
/// failures share one place.
#[derive(Debug, Error)]
pub enum GameError {
    /// The input file could not be opened or read.
    #[error("Could not read input file '{}': {source}", path.display())]
    InputRead {
        /// Path of the input file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A non-empty line has no `:` between the player name and the cards.
    #[error("Line {line_number} is missing the ':' separator: '{line}'")]
    MalformedLine {
        /// 1-based line number in the input file.
        line_number: usize,
        /// The offending line, as read.
        line: String,
    },

    /// The input file contained no player lines.
    #[error("No players found in input.")]
    NoPlayers,

    /// A card face is neither numeric nor one of `J`, `Q`, `K`, `A`.
    #[error("Invalid card face value.")]
    InvalidCardFace {
        /// The full card label that failed.
        card: String,
    },

    /// A card suit is not one of `D`, `H`, `S`, `C`.
    #[error("Invalid card suit value.")]
    InvalidCardSuit {
        /// The full card label that failed.
        card: String,
    },
}

impl GameError {
    /// The card label behind a decode failure, if any.
    #[must_use]
    pub fn card(&self) -> Option<&str> {
        match self {
            Self::InvalidCardFace { card } | Self::InvalidCardSuit { card } => {
                Some(card.as_str())
            }
            _ => None,
        }
    }

    /// The line written to the output file for this error.
    #[must_use]
    pub fn exception_line(&self) -> String {
        format!("Exception:{self}")
    }
}

/// Serializable records emitted in structured log events.
///
/// These are decoupled from the internal `Player` type so the log shape stays
/// stable if the pipeline record grows.
use serde::{Deserialize, Serialize};

use crate::game::Player;

/// One row of the final standings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// 1-based position after ranking.
    pub position: usize,
    /// Player name.
    pub name: String,
    /// Total face points.
    pub score: i64,
    /// Suit rank of the player's last card.
    pub suit_score: u8,
    /// Number of cards in the hand.
    pub cards: usize,
}

impl Standing {
    /// Build the standings table from players already in ranking order.
    #[must_use]
    pub fn from_ranked(players: &[Player]) -> Vec<Self> {
        players
            .iter()
            .enumerate()
            .map(|(idx, p)| Self {
                position: idx + 1,
                name: p.name.clone(),
                score: p.score,
                suit_score: p.suit_score,
                cards: p.cards.len(),
            })
            .collect()
    }
}

/// Render standings as compact JSON for a log field.
#[must_use]
pub fn standings_json(standings: &[Standing]) -> String {
    match serde_json::to_string(standings) {
        Ok(s) => s,
        Err(e) => format!("<unserializable standings: {e}>"),
    }
}

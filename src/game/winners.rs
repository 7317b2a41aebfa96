/// Winner resolution and result-line formatting.
use std::cmp::Ordering;

use super::player::Player;

/// Separator between winner names in a tie.
pub const WINNER_SEP: &str = ",";

/// The players sharing the top score, in ranking order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Winners {
    /// Winner names in post-sort order.
    pub names: Vec<String>,
    /// The shared top score.
    pub score: i64,
}

impl Winners {
    /// Render the result line: `<name>:<score>` or `<n1>,<n2>,...:<score>`.
    #[must_use]
    pub fn result_line(&self) -> String {
        format!("{}:{}", self.names.join(WINNER_SEP), self.score)
    }

    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.names.len() > 1
    }
}

/// Ranking order: score descending, then suit score descending.
#[must_use]
pub fn compare_standing(a: &Player, b: &Player) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| b.suit_score.cmp(&a.suit_score))
}

/// Sort players into ranking order.
///
/// The sort is stable: players equal on both keys keep their input order.
pub fn rank_players(players: &mut [Player]) {
    players.sort_by(compare_standing);
}

/// Collect the winners from players already in ranking order.
///
/// Every player whose score equals the leader's wins, whatever their suit
/// score. Scanning stops at the first lower score. Returns `None` for an
/// empty list.
#[must_use]
pub fn resolve_winners(ranked: &[Player]) -> Option<Winners> {
    let top = ranked.first()?.score;
    let names = ranked
        .iter()
        .take_while(|p| p.score == top)
        .map(|p| p.name.clone())
        .collect();
    Some(Winners { names, score: top })
}

/// Scorer: turns raw card labels into face points and a suit tie-breaker.
use tracing::{debug, trace};

use super::card::Card;
use super::errors::GameError;
use super::player::Player;

/// Score every player's hand in place.
///
/// `score` accumulates the face value of each card. `suit_score` is
/// overwritten by each card's suit rank, so it ends as the rank of the last
/// card in the hand.
///
/// # Errors
///
/// Stops at the first card that fails to decode and returns
/// `GameError::InvalidCardFace` or `GameError::InvalidCardSuit`.
pub fn score_players(players: &mut [Player]) -> Result<(), GameError> {
    for player in players.iter_mut() {
        score_player(player)?;
        debug!(
            name = %player.name,
            score = player.score,
            suit_score = player.suit_score,
            "scored hand"
        );
    }
    Ok(())
}

/// Score a single player's hand in place.
///
/// # Errors
///
/// Returns the decode error of the first invalid card label.
pub fn score_player(player: &mut Player) -> Result<(), GameError> {
    for label in &player.cards {
        let card = Card::parse(label)?;
        trace!(name = %player.name, %card, "scoring card");
        player.score = player.score.saturating_add(i64::from(card.face.value()));
        player.suit_score = card.suit.rank();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, cards: &[&str]) -> Player {
        Player::new(name, cards.iter().map(|&c| c.to_owned()).collect())
    }

    #[test]
    fn test_king_of_spades() {
        let mut p = player("A", &["KS"]);
        score_player(&mut p).unwrap();
        assert_eq!(p.score, 13);
        assert_eq!(p.suit_score, 3);
    }

    #[test]
    fn test_suit_score_is_last_card() {
        let mut p = player("A", &["2D", "KH"]);
        score_player(&mut p).unwrap();
        assert_eq!(p.score, 15);
        assert_eq!(p.suit_score, 2);
    }

    #[test]
    fn test_suit_score_overwrites_higher_rank() {
        let mut p = player("A", &["AC", "3D"]);
        score_player(&mut p).unwrap();
        assert_eq!(p.score, 14);
        assert_eq!(p.suit_score, 1);
    }

    #[test]
    fn test_empty_hand_scores_zero() {
        let mut p = player("A", &[]);
        score_player(&mut p).unwrap();
        assert_eq!(p.score, 0);
        assert_eq!(p.suit_score, 0);
    }

    #[test]
    fn test_out_of_range_numeric_face_is_accepted() {
        let mut p = player("A", &["25C", "1D"]);
        score_player(&mut p).unwrap();
        assert_eq!(p.score, 26);
        assert_eq!(p.suit_score, 1);
    }

    #[test]
    fn test_invalid_card_stops_run() {
        let mut players = vec![player("A", &["KS"]), player("B", &["XZ"]), player("C", &["2H"])];
        let err = score_players(&mut players).unwrap_err();
        assert!(matches!(err, GameError::InvalidCardFace { ref card } if card == "XZ"));
        assert_eq!(players[0].score, 13);
        assert_eq!(players[2].score, 0);
    }

    #[test]
    fn test_invalid_suit() {
        let mut p = player("A", &["10X"]);
        assert!(matches!(
            score_player(&mut p),
            Err(GameError::InvalidCardSuit { .. })
        ));
    }
}

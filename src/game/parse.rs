/// Hand parser: reads `<name>:<card>,<card>,...` lines into players.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use super::errors::GameError;
use super::player::Player;

/// Separator between the player name and the card list.
pub const NAME_SEP: char = ':';

/// Separator between card labels.
pub const CARD_SEP: char = ',';

/// Read every player line from the file at `path`.
///
/// The file handle is released before this function returns, on success and
/// on every error path.
///
/// # Errors
///
/// Returns `GameError::InputRead` if the file cannot be opened or read,
/// `GameError::MalformedLine` for a line without a `:` separator.
pub fn read_players(path: &Path) -> Result<Vec<Player>, GameError> {
    let file = File::open(path).map_err(|source| GameError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;
    let players = parse_players(BufReader::new(file), path)?;
    info!(path = %path.display(), players = players.len(), "dealt hands");
    Ok(players)
}

/// Parse player lines from any buffered reader.
///
/// `source` names the input in read errors. Blank lines are skipped. A final
/// line without a trailing newline is still parsed.
///
/// # Errors
///
/// Returns `GameError::InputRead` on a read failure and
/// `GameError::MalformedLine` for a line without `:`.
pub fn parse_players<R: BufRead>(reader: R, source: &Path) -> Result<Vec<Player>, GameError> {
    let mut players = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|err| GameError::InputRead {
            path: source.to_path_buf(),
            source: err,
        })?;
        if line.is_empty() {
            continue;
        }
        let player = parse_line(&line, idx + 1)?;
        debug!(name = %player.name, cards = player.cards.len(), "parsed hand");
        players.push(player);
    }
    Ok(players)
}

/// Parse a single `<name>:<cards>` line.
///
/// Splits on the first `:` only; the name is trimmed, card labels are not.
/// An empty card list yields a player with no cards.
///
/// # Errors
///
/// Returns `GameError::MalformedLine` if the line has no `:`.
pub fn parse_line(line: &str, line_number: usize) -> Result<Player, GameError> {
    let Some((name, cards)) = line.split_once(NAME_SEP) else {
        return Err(GameError::MalformedLine {
            line_number,
            line: line.to_owned(),
        });
    };

    let cards = if cards.is_empty() {
        Vec::new()
    } else {
        cards.split(CARD_SEP).map(str::to_owned).collect()
    };

    Ok(Player::new(name.trim(), cards))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn parse(input: &str) -> Vec<Player> {
        parse_players(Cursor::new(input), Path::new("hands.txt")).unwrap()
    }

    #[test]
    fn test_parse_line_trims_name_only() {
        let player = parse_line("  Alice :KS, 2H", 1).unwrap();
        assert_eq!(player.name, "Alice");
        assert_eq!(player.cards, vec!["KS".to_owned(), " 2H".to_owned()]);
        assert_eq!(player.score, 0);
        assert_eq!(player.suit_score, 0);
    }

    #[test]
    fn test_parse_line_splits_on_first_colon() {
        let player = parse_line("Bob:KS:2H", 1).unwrap();
        assert_eq!(player.name, "Bob");
        assert_eq!(player.cards, vec!["KS:2H".to_owned()]);
    }

    #[test]
    fn test_parse_line_empty_card_list() {
        let player = parse_line("Carol:", 1).unwrap();
        assert!(player.cards.is_empty());
    }

    #[test]
    fn test_parse_line_keeps_empty_labels() {
        let player = parse_line("Dan:KS,,2H", 1).unwrap();
        assert_eq!(player.cards.len(), 3);
        assert_eq!(player.cards[1], "");
    }

    #[test]
    fn test_parse_line_missing_separator() {
        let err = parse_line("Eve KS", 4).unwrap_err();
        assert!(matches!(
            err,
            GameError::MalformedLine { line_number: 4, .. }
        ));
    }

    #[test]
    fn test_parse_players_preserves_order() {
        let players = parse("A:10H\nB:2D,3C\nC:KS");
        let names: Vec<&str> = players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(players[1].cards, vec!["2D".to_owned(), "3C".to_owned()]);
    }

    #[test]
    fn test_parse_players_crlf_and_blank_lines() {
        let players = parse("A:10H\r\n\r\nB:KS\r\n");
        assert_eq!(players.len(), 2);
        assert_eq!(players[0].cards, vec!["10H".to_owned()]);
        assert_eq!(players[1].cards, vec!["KS".to_owned()]);
    }

    #[test]
    fn test_parse_players_reports_line_number() {
        let result = parse_players(
            Cursor::new("A:KS\n\nbroken\n"),
            Path::new("hands.txt"),
        );
        assert!(matches!(
            result,
            Err(GameError::MalformedLine { line_number: 3, .. })
        ));
    }

    #[test]
    fn test_parse_players_invalid_utf8_is_read_error() {
        let bytes = vec![b'A', b':', 0xff, b'H'];
        let result = parse_players(Cursor::new(bytes), Path::new("hands.txt"));
        assert!(matches!(result, Err(GameError::InputRead { .. })));
    }

    #[test]
    fn test_read_players_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_players(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, GameError::InputRead { .. }));
    }
}

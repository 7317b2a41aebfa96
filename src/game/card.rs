/// Card labels and their face/suit value tables.
///
/// A label is `<face><suit>`: the suit is the final character and the face is
/// everything before it (`KS`, `10H`, `7C`).
use core::fmt;

use super::errors::GameError;

/// The rank portion of a card label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    /// A numeric face, taken at its literal value (no range check).
    Number(i32),
    Jack,
    Queen,
    King,
    Ace,
}

impl Face {
    /// Look up a face from its label text.
    ///
    /// Numeric text always wins over the letter table, so `"11"` is
    /// `Number(11)` rather than an error. Surrounding whitespace is allowed
    /// around a number (`" 2"`); letters must match exactly.
    #[must_use]
    pub fn from_label(face: &str) -> Option<Self> {
        if let Ok(value) = face.trim().parse::<i32>() {
            return Some(Self::Number(value));
        }
        match face {
            "J" => Some(Self::Jack),
            "Q" => Some(Self::Queen),
            "K" => Some(Self::King),
            "A" => Some(Self::Ace),
            _ => None,
        }
    }

    /// Points this face adds to a player's score.
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Self::Number(value) => value,
            Self::Jack | Self::Ace => 11,
            Self::Queen => 12,
            Self::King => 13,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Jack => f.write_str("J"),
            Self::Queen => f.write_str("Q"),
            Self::King => f.write_str("K"),
            Self::Ace => f.write_str("A"),
        }
    }
}

/// Card suit, ordered by tie-break rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
    Clubs = 4,
}

impl Suit {
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'D' => Some(Self::Diamonds),
            'H' => Some(Self::Hearts),
            'S' => Some(Self::Spades),
            'C' => Some(Self::Clubs),
            _ => None,
        }
    }

    /// Tie-break rank: `D`=1, `H`=2, `S`=3, `C`=4.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Diamonds => 'D',
            Self::Hearts => 'H',
            Self::Spades => 'S',
            Self::Clubs => 'C',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A card label decoded into its face and suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub face: Face,
    pub suit: Suit,
}

impl Card {
    /// Decode a raw card label.
    ///
    /// The face is checked before the suit, so a label that is wrong on both
    /// counts reports the face.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidCardFace` for an empty label or an unknown
    /// face, and `GameError::InvalidCardSuit` for an unknown suit character.
    pub fn parse(label: &str) -> Result<Self, GameError> {
        let Some(symbol) = label.chars().next_back() else {
            return Err(GameError::InvalidCardFace {
                card: label.to_owned(),
            });
        };
        let face_text = &label[..label.len() - symbol.len_utf8()];

        let face = Face::from_label(face_text).ok_or_else(|| GameError::InvalidCardFace {
            card: label.to_owned(),
        })?;
        let suit = Suit::from_symbol(symbol).ok_or_else(|| GameError::InvalidCardSuit {
            card: label.to_owned(),
        })?;

        Ok(Self { face, suit })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.suit)
    }
}

/// The per-player record that flows through the pipeline.
/// One dealt hand and its running score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Trimmed player name. Not required to be unique.
    pub name: String,
    /// Raw card labels, exactly as they appeared on the input line.
    pub cards: Vec<String>,
    /// Sum of face values.
    pub score: i64,
    /// Suit rank of the last card scored (0 while no card has been scored).
    pub suit_score: u8,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>, cards: Vec<String>) -> Self {
        Self {
            name: name.into(),
            cards,
            score: 0,
            suit_score: 0,
        }
    }
}

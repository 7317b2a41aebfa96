/// Game domain layer: card tables, hand parsing, scoring, winner resolution.
pub mod card;
pub mod errors;
pub mod parse;
pub mod player;
pub mod scoring;
pub mod winners;

pub use errors::GameError;
pub use parse::read_players;
pub use player::Player;
pub use scoring::score_players;
pub use winners::{Winners, rank_players, resolve_winners};

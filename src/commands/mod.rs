/// Command layer: the scoring run that ties the CLI to the game domain.
pub mod score;

pub use score::execute;

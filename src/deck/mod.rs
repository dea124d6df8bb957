pub mod card_stack;
pub mod cards;
pub mod stack;

use thiserror::Error;

pub use card_stack::CardStack;
pub use cards::{InfectionCard, PlayerCard};
pub use stack::Stack;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Cannot split a deck into {0} piles")]
    InvalidSplit(usize),
}

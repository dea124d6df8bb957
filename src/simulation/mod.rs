pub mod engine;
pub mod setup;

use crate::board::NetworkError;
use crate::deck::DeckError;
use crate::disease::DiseaseError;
use thiserror::Error;

pub use engine::{run_game, EndReason, GameResult};
pub use setup::{Game, Scenario, SimulationConfig};

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("City network error: {0}")]
    Network(#[from] NetworkError),
    #[error("Deck error: {0}")]
    Deck(#[from] DeckError),
    #[error("Disease error: {0}")]
    Disease(#[from] DiseaseError),
}

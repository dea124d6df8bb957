pub mod board;
pub mod deck;
pub mod disease;
pub mod graph;
pub mod rng;
pub mod simulation;

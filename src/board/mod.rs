pub mod city;
pub mod network;

pub use city::{City, CityName};
pub use network::{CityNetwork, CityRecord, NetworkError};

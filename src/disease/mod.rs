pub mod manager;
pub mod types;

pub use manager::{
    DiseaseError, DiseaseManager, InfectionReport, INFECTION_RATE_TRACK,
    MAX_CUBES_PER_CITY,
};
pub use types::{DiseaseState, DiseaseType};

use crate::board::CityName;
use crate::disease::DiseaseType;
use serde::{Deserialize, Serialize};

/// Infection deck card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InfectionCard {
    pub city: CityName,
}

impl InfectionCard {
    pub fn disease(&self) -> DiseaseType {
        self.city.native_disease()
    }
}

/// Player deck card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "card_type", rename_all = "lowercase")]
pub enum PlayerCard {
    City { city: CityName },
    Epidemic,
    Event { name: String },
}

impl PlayerCard {
    pub fn is_epidemic(&self) -> bool {
        matches!(self, PlayerCard::Epidemic)
    }
}

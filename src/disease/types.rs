use serde::{Deserialize, Serialize};
use std::fmt;

/// The four diseases on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiseaseType {
    Red,
    Yellow,
    Blue,
    Black,
}

impl DiseaseType {
    pub const ALL: [DiseaseType; 4] = [
        DiseaseType::Red,
        DiseaseType::Yellow,
        DiseaseType::Blue,
        DiseaseType::Black,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DiseaseType::Red => "red",
            DiseaseType::Yellow => "yellow",
            DiseaseType::Blue => "blue",
            DiseaseType::Black => "black",
        }
    }
}

impl fmt::Display for DiseaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Global status of a disease. Transitions only move forward:
/// Uncured -> Cured -> Eradicated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiseaseState {
    #[default]
    Uncured,
    Cured,
    Eradicated,
}

impl fmt::Display for DiseaseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DiseaseState::Uncured => "uncured",
            DiseaseState::Cured => "cured",
            DiseaseState::Eradicated => "eradicated",
        };
        f.write_str(s)
    }
}

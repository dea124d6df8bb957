use crate::disease::DiseaseType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Every city on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CityName {
    // Blue
    #[serde(alias = "atalanta")]
    Atlanta,
    Chicago,
    Montreal,
    NewYork,
    Washington,
    SanFrancisco,
    London,
    Madrid,
    Paris,
    Essen,
    Milan,
    StPetersburg,
    // Yellow
    LosAngeles,
    MexicoCity,
    Miami,
    Bogota,
    Lima,
    Santiago,
    BuenosAires,
    SaoPaulo,
    Lagos,
    Kinshasa,
    Johannesburg,
    Khartoum,
    // Black
    Algiers,
    Cairo,
    Istanbul,
    Moscow,
    Baghdad,
    Riyadh,
    Tehran,
    Karachi,
    Mumbai,
    Delhi,
    Chennai,
    Kolkata,
    // Red
    Beijing,
    Seoul,
    Tokyo,
    Shanghai,
    HongKong,
    Taipei,
    Osaka,
    Bangkok,
    HoChiMinhCity,
    Manila,
    Jakarta,
    Sydney,
}

impl CityName {
    pub const ALL: [CityName; 48] = [
        CityName::Atlanta,
        CityName::Chicago,
        CityName::Montreal,
        CityName::NewYork,
        CityName::Washington,
        CityName::SanFrancisco,
        CityName::London,
        CityName::Madrid,
        CityName::Paris,
        CityName::Essen,
        CityName::Milan,
        CityName::StPetersburg,
        CityName::LosAngeles,
        CityName::MexicoCity,
        CityName::Miami,
        CityName::Bogota,
        CityName::Lima,
        CityName::Santiago,
        CityName::BuenosAires,
        CityName::SaoPaulo,
        CityName::Lagos,
        CityName::Kinshasa,
        CityName::Johannesburg,
        CityName::Khartoum,
        CityName::Algiers,
        CityName::Cairo,
        CityName::Istanbul,
        CityName::Moscow,
        CityName::Baghdad,
        CityName::Riyadh,
        CityName::Tehran,
        CityName::Karachi,
        CityName::Mumbai,
        CityName::Delhi,
        CityName::Chennai,
        CityName::Kolkata,
        CityName::Beijing,
        CityName::Seoul,
        CityName::Tokyo,
        CityName::Shanghai,
        CityName::HongKong,
        CityName::Taipei,
        CityName::Osaka,
        CityName::Bangkok,
        CityName::HoChiMinhCity,
        CityName::Manila,
        CityName::Jakarta,
        CityName::Sydney,
    ];

    /// The disease colour printed on this city's card
    pub fn native_disease(&self) -> DiseaseType {
        use CityName::*;
        match self {
            Atlanta | Chicago | Montreal | NewYork | Washington | SanFrancisco | London
            | Madrid | Paris | Essen | Milan | StPetersburg => DiseaseType::Blue,
            LosAngeles | MexicoCity | Miami | Bogota | Lima | Santiago | BuenosAires
            | SaoPaulo | Lagos | Kinshasa | Johannesburg | Khartoum => DiseaseType::Yellow,
            Algiers | Cairo | Istanbul | Moscow | Baghdad | Riyadh | Tehran | Karachi
            | Mumbai | Delhi | Chennai | Kolkata => DiseaseType::Black,
            Beijing | Seoul | Tokyo | Shanghai | HongKong | Taipei | Osaka | Bangkok
            | HoChiMinhCity | Manila | Jakarta | Sydney => DiseaseType::Red,
        }
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A city on the board with its infection state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    pub name: CityName,
    pub infected: bool,
    pub research_station: bool,
    cube_counts: HashMap<DiseaseType, u32>,
}

impl City {
    pub fn new(name: CityName) -> Self {
        City {
            name,
            infected: false,
            research_station: false,
            cube_counts: HashMap::new(),
        }
    }

    pub fn cube_count(&self, disease: DiseaseType) -> u32 {
        self.cube_counts.get(&disease).copied().unwrap_or(0)
    }

    /// Total cubes of every colour in this city
    pub fn total_cubes(&self) -> u32 {
        self.cube_counts.values().sum()
    }

    /// Diseases with at least one cube here
    pub fn diseases(&self) -> Vec<DiseaseType> {
        DiseaseType::ALL
            .into_iter()
            .filter(|d| self.has_disease(*d))
            .collect()
    }

    pub fn has_disease(&self, disease: DiseaseType) -> bool {
        self.cube_count(disease) > 0
    }

    pub(crate) fn add_cubes(&mut self, disease: DiseaseType, amount: u32) {
        if amount == 0 {
            return;
        }
        *self.cube_counts.entry(disease).or_insert(0) += amount;
        self.infected = true;
    }

    /// Remove up to `amount` cubes, returning how many were removed
    pub(crate) fn remove_cubes(&mut self, disease: DiseaseType, amount: u32) -> u32 {
        let removed = match self.cube_counts.get_mut(&disease) {
            Some(count) => {
                let removed = amount.min(*count);
                *count -= removed;
                if *count == 0 {
                    self.cube_counts.remove(&disease);
                }
                removed
            }
            None => 0,
        };
        self.infected = !self.cube_counts.is_empty();
        removed
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for disease in self.diseases() {
            write!(f, " {}:{}", disease, self.cube_count(disease))?;
        }
        if self.research_station {
            write!(f, " [station]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_city_is_clean() {
        let city = City::new(CityName::Paris);
        assert!(!city.infected);
        assert!(!city.research_station);
        assert!(city.diseases().is_empty());
        assert_eq!(city.cube_count(DiseaseType::Blue), 0);
    }

    #[test]
    fn test_presence_follows_cube_count() {
        let mut city = City::new(CityName::Paris);
        city.add_cubes(DiseaseType::Blue, 2);
        assert!(city.infected);
        assert_eq!(city.diseases(), vec![DiseaseType::Blue]);

        assert_eq!(city.remove_cubes(DiseaseType::Blue, 5), 2);
        assert!(city.diseases().is_empty());
        assert!(!city.infected);
    }

    #[test]
    fn test_zero_cubes_do_not_infect() {
        let mut city = City::new(CityName::Lima);
        city.add_cubes(DiseaseType::Yellow, 0);
        assert!(!city.infected);
        assert!(!city.has_disease(DiseaseType::Yellow));
    }

    #[test]
    fn test_city_name_serde() {
        let name: CityName = serde_json::from_str("\"ho_chi_minh_city\"").unwrap();
        assert_eq!(name, CityName::HoChiMinhCity);
        let alias: CityName = serde_json::from_str("\"atalanta\"").unwrap();
        assert_eq!(alias, CityName::Atlanta);
        assert_eq!(serde_json::to_string(&CityName::NewYork).unwrap(), "\"new_york\"");
    }

    #[test]
    fn test_twelve_cities_per_colour() {
        for disease in DiseaseType::ALL {
            let count = CityName::ALL
                .iter()
                .filter(|c| c.native_disease() == disease)
                .count();
            assert_eq!(count, 12, "{} should have 12 cities", disease);
        }
    }
}

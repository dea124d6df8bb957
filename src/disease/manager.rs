use crate::board::{CityName, CityNetwork, NetworkError};
use crate::disease::types::{DiseaseState, DiseaseType};
use std::collections::{HashMap, HashSet, VecDeque};
use thiserror::Error;

/// Most cubes of one colour a single city can hold
pub const MAX_CUBES_PER_CITY: u32 = 3;

/// Infection cards drawn per turn, indexed by epidemics resolved
pub const INFECTION_RATE_TRACK: [usize; 7] = [2, 2, 2, 3, 3, 4, 4];

#[derive(Error, Debug)]
pub enum DiseaseError {
    #[error(transparent)]
    Network(#[from] NetworkError),
    #[error("Cannot treat disease. {0} is not infected")]
    CityNotInfected(CityName),
    #[error("Cannot treat disease. {0} is already eradicated")]
    DiseaseEradicated(DiseaseType),
    #[error("Cannot treat disease. {city} has no {disease} cubes")]
    DiseaseNotPresent { city: CityName, disease: DiseaseType },
    #[error("Cannot cure disease. {disease} is already {state}")]
    AlreadyCured {
        disease: DiseaseType,
        state: DiseaseState,
    },
}

/// What a single infection did to the board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfectionReport {
    /// Cubes actually placed, including those spread by outbreaks
    pub cubes_placed: u32,
    /// Cities that outbroke, in the order they did
    pub outbreaks: Vec<CityName>,
}

/// Global disease state for one game
#[derive(Debug, Clone)]
pub struct DiseaseManager {
    states: HashMap<DiseaseType, DiseaseState>,
    cube_counts: HashMap<DiseaseType, u32>,
    outbreaks: u32,
    infection_rate: u32,
}

impl DiseaseManager {
    pub fn new() -> Self {
        DiseaseManager {
            states: DiseaseType::ALL
                .into_iter()
                .map(|d| (d, DiseaseState::Uncured))
                .collect(),
            cube_counts: DiseaseType::ALL.into_iter().map(|d| (d, 0)).collect(),
            outbreaks: 0,
            infection_rate: 0,
        }
    }

    pub fn state_of(&self, disease: DiseaseType) -> DiseaseState {
        self.states.get(&disease).copied().unwrap_or_default()
    }

    fn set_state_of(&mut self, disease: DiseaseType, state: DiseaseState) {
        self.states.insert(disease, state);
    }

    /// Cubes of `disease` currently on the board
    pub fn disease_cube_count_of(&self, disease: DiseaseType) -> u32 {
        self.cube_counts.get(&disease).copied().unwrap_or(0)
    }

    pub fn outbreaks(&self) -> u32 {
        self.outbreaks
    }

    /// Number of epidemics resolved so far
    pub fn infection_rate(&self) -> u32 {
        self.infection_rate
    }

    /// Infection cards to draw at the end of a turn
    pub fn infection_rate_cards(&self) -> usize {
        let index = (self.infection_rate as usize).min(INFECTION_RATE_TRACK.len() - 1);
        INFECTION_RATE_TRACK[index]
    }

    /// Move one step along the infection-rate track
    pub fn increase_infection_rate(&mut self) {
        self.infection_rate += 1;
    }

    /// Infect a city. Cubes past the per-city cap are not placed; the city
    /// outbreaks instead. An eradicated disease places nothing.
    pub fn infect(
        &mut self,
        network: &mut CityNetwork,
        city: CityName,
        disease: DiseaseType,
        count: u32,
    ) -> Result<InfectionReport, DiseaseError> {
        let mut report = InfectionReport::default();
        if self.state_of(disease) == DiseaseState::Eradicated {
            network.get_city_by_name(city)?;
            return Ok(report);
        }

        if self.place_cubes(network, city, disease, count, &mut report)? {
            self.cascade(network, city, disease, &mut report)?;
        }
        Ok(report)
    }

    /// Raise the infection rate, then infect
    pub fn epidemic_at(
        &mut self,
        network: &mut CityNetwork,
        city: CityName,
        disease: DiseaseType,
        count: u32,
    ) -> Result<InfectionReport, DiseaseError> {
        self.increase_infection_rate();
        self.infect(network, city, disease, count)
    }

    /// Outbreak `city`: one cube of `disease` goes to every neighbour, and
    /// any neighbour pushed past the cap outbreaks in turn. Each city
    /// outbreaks at most once per cascade. An eradicated disease spreads
    /// nothing.
    pub fn outbreak(
        &mut self,
        network: &mut CityNetwork,
        city: CityName,
        disease: DiseaseType,
    ) -> Result<InfectionReport, DiseaseError> {
        network.get_city_by_name(city)?;
        let mut report = InfectionReport::default();
        if self.state_of(disease) == DiseaseState::Eradicated {
            return Ok(report);
        }
        self.cascade(network, city, disease, &mut report)?;
        Ok(report)
    }

    fn cascade(
        &mut self,
        network: &mut CityNetwork,
        origin: CityName,
        disease: DiseaseType,
        report: &mut InfectionReport,
    ) -> Result<(), DiseaseError> {
        let mut visited: HashSet<CityName> = HashSet::new();
        let mut pending: VecDeque<CityName> = VecDeque::from([origin]);

        while let Some(city) = pending.pop_front() {
            if !visited.insert(city) {
                continue;
            }
            self.outbreaks += 1;
            report.outbreaks.push(city);

            let neighbours = network.neighbour_names(city).to_vec();
            for neighbour in neighbours {
                if visited.contains(&neighbour) {
                    continue;
                }
                let overflowed = self.place_cubes(network, neighbour, disease, 1, report)?;
                if overflowed && !pending.contains(&neighbour) {
                    pending.push_back(neighbour);
                }
            }
        }
        Ok(())
    }

    /// Place up to `count` cubes, returning true if some did not fit
    fn place_cubes(
        &mut self,
        network: &mut CityNetwork,
        city: CityName,
        disease: DiseaseType,
        count: u32,
        report: &mut InfectionReport,
    ) -> Result<bool, DiseaseError> {
        let target = network.city_mut(city)?;
        let room = MAX_CUBES_PER_CITY.saturating_sub(target.cube_count(disease));
        let placed = count.min(room);
        target.add_cubes(disease, placed);

        *self.cube_counts.entry(disease).or_insert(0) += placed;
        report.cubes_placed += placed;
        Ok(count > room)
    }

    /// Remove cubes from a city, returning how many were removed.
    ///
    /// An uncured disease loses `count` cubes (or whatever is left); a cured
    /// one loses every cube in the city. A cured disease with no cubes left
    /// anywhere becomes eradicated.
    pub fn treat_disease_at(
        &mut self,
        network: &mut CityNetwork,
        city: CityName,
        disease: DiseaseType,
        count: u32,
    ) -> Result<u32, DiseaseError> {
        let state = self.state_of(disease);
        let target = network.city_mut(city)?;
        if !target.infected {
            return Err(DiseaseError::CityNotInfected(city));
        }

        let removed = match state {
            DiseaseState::Eradicated => return Err(DiseaseError::DiseaseEradicated(disease)),
            DiseaseState::Cured | DiseaseState::Uncured if !target.has_disease(disease) => {
                return Err(DiseaseError::DiseaseNotPresent { city, disease })
            }
            DiseaseState::Cured => {
                let all = target.cube_count(disease);
                target.remove_cubes(disease, all)
            }
            DiseaseState::Uncured => target.remove_cubes(disease, count),
        };

        let remaining = self.cube_counts.entry(disease).or_insert(0);
        *remaining = remaining.saturating_sub(removed);
        if *remaining == 0 && state == DiseaseState::Cured {
            self.eradicate_disease(disease);
        }
        Ok(removed)
    }

    pub fn cure_disease(&mut self, disease: DiseaseType) -> Result<(), DiseaseError> {
        let state = self.state_of(disease);
        if state != DiseaseState::Uncured {
            return Err(DiseaseError::AlreadyCured { disease, state });
        }
        self.set_state_of(disease, DiseaseState::Cured);
        Ok(())
    }

    pub fn eradicate_disease(&mut self, disease: DiseaseType) {
        self.set_state_of(disease, DiseaseState::Eradicated);
    }
}

impl Default for DiseaseManager {
    fn default() -> Self {
        Self::new()
    }
}

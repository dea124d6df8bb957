use crate::board::city::{City, CityName};
use crate::disease::DiseaseType;
use crate::graph::Graph;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("City not found: {0}. Error loading city config")]
    CityNotFound(CityName),
}

/// One entry of the city configuration file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityRecord {
    pub name: CityName,
    #[serde(default)]
    pub neighbours: Vec<CityName>,
}

/// The board: cities connected by routes
#[derive(Debug, Clone, Default)]
pub struct CityNetwork {
    graph: Graph<CityName>,
    cities: HashMap<CityName, City>,
}

impl CityNetwork {
    /// Load the network from a JSON array of `{ name, neighbours }` records
    pub fn build_from_file(path: &str) -> Result<Self, NetworkError> {
        let content = std::fs::read_to_string(path)?;
        let records: Vec<CityRecord> = serde_json::from_str(&content)?;
        Ok(Self::from_records(records))
    }

    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = CityRecord>,
    {
        let mut network = CityNetwork::default();
        for record in records {
            network.add_city(record.name);
            for neighbour in record.neighbours {
                network.add_city(neighbour);
                network.graph.add_edge(&record.name, &neighbour);
            }
        }
        network
    }

    // Cities already on the board keep their state.
    fn add_city(&mut self, name: CityName) {
        if !self.graph.has_vertex(&name) {
            self.graph.add_vertex(name);
            self.cities.insert(name, City::new(name));
        }
    }

    pub fn get_city_by_name(&self, name: CityName) -> Result<&City, NetworkError> {
        self.cities
            .get(&name)
            .ok_or(NetworkError::CityNotFound(name))
    }

    pub(crate) fn city_mut(&mut self, name: CityName) -> Result<&mut City, NetworkError> {
        self.cities
            .get_mut(&name)
            .ok_or(NetworkError::CityNotFound(name))
    }

    pub fn has_city(&self, name: CityName) -> bool {
        self.cities.contains_key(&name)
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Names of the cities directly connected to `name`
    pub fn neighbour_names(&self, name: CityName) -> &[CityName] {
        self.graph.get_neighbours(&name)
    }

    pub fn get_neighbouring_cities(&self, name: CityName) -> Vec<&City> {
        self.neighbour_names(name)
            .iter()
            .filter_map(|n| self.cities.get(n))
            .collect()
    }

    pub fn are_cities_neighbours(&self, a: CityName, b: CityName) -> bool {
        self.graph.are_neighbours(&a, &b)
    }

    /// Place cubes directly, without the 3-cube cap or outbreaks.
    /// Use `DiseaseManager::infect` for rule-checked infection.
    pub fn infect_city(
        &mut self,
        name: CityName,
        disease: DiseaseType,
        count: u32,
    ) -> Result<(), NetworkError> {
        let city = self.city_mut(name)?;
        city.add_cubes(disease, count);
        city.infected = true;
        Ok(())
    }

    pub fn build_research_station(&mut self, name: CityName) -> Result<(), NetworkError> {
        self.city_mut(name)?.research_station = true;
        Ok(())
    }

    pub fn research_stations(&self) -> Vec<CityName> {
        self.iter()
            .filter(|c| c.research_station)
            .map(|c| c.name)
            .collect()
    }

    /// Sum of `disease` cubes across every city
    pub fn total_cubes(&self, disease: DiseaseType) -> u32 {
        self.cities.values().map(|c| c.cube_count(disease)).sum()
    }

    /// Cities in load order
    pub fn iter(&self) -> impl Iterator<Item = &City> + '_ {
        self.graph.iter().filter_map(move |name| self.cities.get(name))
    }

    pub fn graph(&self) -> &Graph<CityName> {
        &self.graph
    }
}

use crate::board::{CityName, CityNetwork};
use crate::deck::{CardStack, InfectionCard, PlayerCard};
use crate::disease::DiseaseManager;
use crate::rng::GameRng;
use crate::simulation::SimulationError;

/// Cubes placed by each round of the initial infection
const INITIAL_INFECTION: [u32; 3] = [3, 2, 1];

/// Cities infected per round of the initial infection
const CITIES_PER_ROUND: usize = 3;

/// Where the static game data lives and how a game is played out
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub cities_path: String,
    pub infection_cards_path: String,
    pub player_cards_path: String,
    /// Epidemic cards shuffled into the player deck (4 = introductory, 6 = heroic)
    pub epidemics: usize,
    pub max_turns: u32,
    pub max_outbreaks: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            cities_path: "data/cities.json".to_string(),
            infection_cards_path: "data/infection_cards.json".to_string(),
            player_cards_path: "data/player_cards.json".to_string(),
            epidemics: 4,
            max_turns: 100,
            max_outbreaks: 8,
        }
    }
}

/// Static data loaded once and shared by every game
#[derive(Debug, Clone)]
pub struct Scenario {
    pub config: SimulationConfig,
    network: CityNetwork,
    infection_cards: CardStack<InfectionCard>,
    player_cards: CardStack<PlayerCard>,
}

impl Scenario {
    pub fn load(config: SimulationConfig) -> Result<Self, SimulationError> {
        let network = CityNetwork::build_from_file(&config.cities_path)?;
        let infection_cards = CardStack::build_from_file(&config.infection_cards_path)?;
        let player_cards = CardStack::build_from_file(&config.player_cards_path)?;

        Ok(Scenario {
            config,
            network,
            infection_cards,
            player_cards,
        })
    }

    pub fn network(&self) -> &CityNetwork {
        &self.network
    }
}

/// Everything one game owns
#[derive(Debug, Clone)]
pub struct Game {
    pub network: CityNetwork,
    pub diseases: DiseaseManager,
    pub infection_deck: CardStack<InfectionCard>,
    pub infection_discard: CardStack<InfectionCard>,
    pub player_deck: CardStack<PlayerCard>,
    pub rng: GameRng,
}

impl Game {
    /// Set up a fresh board: research station in Atlanta, shuffled decks
    /// with epidemics spread evenly, and the initial infection.
    pub fn new(scenario: &Scenario, seed: u64) -> Result<Self, SimulationError> {
        let mut rng = GameRng::new(Some(seed));
        let mut network = scenario.network.clone();
        if network.has_city(CityName::Atlanta) {
            network.build_research_station(CityName::Atlanta)?;
        }

        let mut infection_deck = scenario.infection_cards.clone();
        infection_deck.shuffle(&mut rng);

        let mut player_deck = scenario.player_cards.clone();
        player_deck.shuffle(&mut rng);
        let player_deck = insert_epidemics(player_deck, scenario.config.epidemics, &mut rng)?;

        let mut game = Game {
            network,
            diseases: DiseaseManager::new(),
            infection_deck,
            infection_discard: CardStack::build_empty_stack(),
            player_deck,
            rng,
        };
        game.initial_infection()?;
        Ok(game)
    }

    fn initial_infection(&mut self) -> Result<(), SimulationError> {
        for cubes in INITIAL_INFECTION {
            for card in self.infection_deck.take(CITIES_PER_ROUND as isize) {
                self.diseases
                    .infect(&mut self.network, card.city, card.disease(), cubes)?;
                self.infection_discard.put(card);
            }
        }
        Ok(())
    }
}

/// Split the deck into one pile per epidemic, shuffle an epidemic into
/// each pile, and stack the piles back up
pub fn insert_epidemics(
    deck: CardStack<PlayerCard>,
    epidemics: usize,
    rng: &mut GameRng,
) -> Result<CardStack<PlayerCard>, SimulationError> {
    if epidemics == 0 {
        return Ok(deck);
    }

    let mut piles = deck.split(epidemics)?;
    for pile in piles.iter_mut() {
        pile.put(PlayerCard::Epidemic);
        pile.shuffle(rng);
    }
    Ok(CardStack::merge(piles))
}

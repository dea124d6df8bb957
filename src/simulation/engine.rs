use crate::deck::{CardStack, PlayerCard};
use crate::disease::{DiseaseType, InfectionReport};
use crate::simulation::setup::{Game, Scenario};
use crate::simulation::SimulationError;
use std::collections::HashMap;
use std::fmt;

/// Player cards drawn each turn
const PLAYER_CARDS_PER_TURN: usize = 2;

/// Cubes placed on the bottom infection card during an epidemic
const EPIDEMIC_CUBES: u32 = 3;

/// Cubes of each colour in the box
const CUBE_SUPPLY_PER_DISEASE: u32 = 24;

/// Why a game stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndReason {
    OutbreakLimit,
    CubeSupplyExhausted(DiseaseType),
    PlayerDeckExhausted,
    TurnLimit,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndReason::OutbreakLimit => write!(f, "outbreak limit"),
            EndReason::CubeSupplyExhausted(d) => write!(f, "{} cubes exhausted", d),
            EndReason::PlayerDeckExhausted => write!(f, "player deck exhausted"),
            EndReason::TurnLimit => write!(f, "turn limit"),
        }
    }
}

/// Result of a single game simulation
#[derive(Debug, Clone)]
pub struct GameResult {
    pub seed: u64,
    /// Turns completed before the game stopped
    pub turns: u32,
    pub outbreaks: u32,
    pub epidemics: u32,
    pub cubes_on_board: HashMap<DiseaseType, u32>,
    pub end: EndReason,
}

/// Play one game with no player interventions: every turn draws player
/// cards (resolving epidemics) then infects, until something gives out.
pub fn run_game(scenario: &Scenario, seed: u64, verbose: bool) -> Result<GameResult, SimulationError> {
    let mut game = Game::new(scenario, seed)?;
    if verbose {
        println!("=== Setup (seed {}) ===", seed);
        print_board(&game);
    }

    let mut turns = 0;
    let end = loop {
        if turns >= scenario.config.max_turns {
            break EndReason::TurnLimit;
        }
        turns += 1;
        if verbose {
            println!("\n--- Turn {} ---", turns);
        }

        let drawn = game.player_deck.take(PLAYER_CARDS_PER_TURN as isize);
        let short_draw = drawn.len() < PLAYER_CARDS_PER_TURN;
        for card in drawn {
            if card.is_epidemic() {
                resolve_epidemic(&mut game, verbose)?;
            } else if verbose {
                println!("  Drew {}", describe(&card));
            }
        }
        if short_draw {
            break EndReason::PlayerDeckExhausted;
        }
        if let Some(reason) = check_end(&game, scenario.config.max_outbreaks) {
            break reason;
        }

        infect_cities(&mut game, verbose)?;
        if let Some(reason) = check_end(&game, scenario.config.max_outbreaks) {
            break reason;
        }
    };

    if verbose {
        println!("\n=== Game over after {} turns: {} ===", turns, end);
        print_board(&game);
    }

    Ok(GameResult {
        seed,
        turns,
        outbreaks: game.diseases.outbreaks(),
        epidemics: game.diseases.infection_rate(),
        cubes_on_board: DiseaseType::ALL
            .into_iter()
            .map(|d| (d, game.diseases.disease_cube_count_of(d)))
            .collect(),
        end,
    })
}

/// Increase, infect, intensify. The rate goes up even when the infection
/// deck has no bottom card left to infect from.
fn resolve_epidemic(game: &mut Game, verbose: bool) -> Result<(), SimulationError> {
    game.diseases.increase_infection_rate();
    if let Some(card) = game.infection_deck.take_bottom() {
        let report = game
            .diseases
            .infect(&mut game.network, card.city, card.disease(), EPIDEMIC_CUBES)?;
        if verbose {
            println!(
                "  EPIDEMIC in {} ({}), infection rate now {}",
                card.city,
                card.disease(),
                game.diseases.infection_rate_cards()
            );
            print_outbreaks(&report);
        }
        game.infection_discard.put(card);
    } else if verbose {
        println!(
            "  EPIDEMIC with an empty infection deck, infection rate now {}",
            game.diseases.infection_rate_cards()
        );
    }

    game.infection_discard.shuffle(&mut game.rng);
    let deck = std::mem::take(&mut game.infection_deck);
    let discard = std::mem::take(&mut game.infection_discard);
    game.infection_deck = CardStack::merge(vec![deck, discard]);
    Ok(())
}

fn infect_cities(game: &mut Game, verbose: bool) -> Result<(), SimulationError> {
    let rate = game.diseases.infection_rate_cards();
    for card in game.infection_deck.take(rate as isize) {
        let report = game
            .diseases
            .infect(&mut game.network, card.city, card.disease(), 1)?;
        if verbose {
            println!("  Infect {} ({})", card.city, card.disease());
            print_outbreaks(&report);
        }
        game.infection_discard.put(card);
    }
    Ok(())
}

fn check_end(game: &Game, max_outbreaks: u32) -> Option<EndReason> {
    if game.diseases.outbreaks() >= max_outbreaks {
        return Some(EndReason::OutbreakLimit);
    }
    DiseaseType::ALL
        .into_iter()
        .find(|d| game.diseases.disease_cube_count_of(*d) > CUBE_SUPPLY_PER_DISEASE)
        .map(EndReason::CubeSupplyExhausted)
}

fn describe(card: &PlayerCard) -> String {
    match card {
        PlayerCard::City { city } => format!("{} ({})", city, city.native_disease()),
        PlayerCard::Epidemic => "Epidemic".to_string(),
        PlayerCard::Event { name } => format!("event {}", name),
    }
}

fn print_outbreaks(report: &InfectionReport) {
    if !report.outbreaks.is_empty() {
        let chain: Vec<String> = report.outbreaks.iter().map(|c| c.to_string()).collect();
        println!("    Outbreak chain: {}", chain.join(" -> "));
    }
}

fn print_board(game: &Game) {
    for city in game.network.iter().filter(|c| c.infected) {
        println!("  {}", city);
    }
    println!(
        "  Outbreaks: {}, infection rate: {}",
        game.diseases.outbreaks(),
        game.diseases.infection_rate_cards()
    );
}

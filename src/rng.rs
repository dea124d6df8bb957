//! Deck randomness. Each game owns one `GameRng`, so replaying a seed
//! replays every shuffle in the same order.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone)]
pub struct GameRng {
    seed: u64,
    rng: ChaCha8Rng,
}

impl GameRng {
    /// Seeded from `seed`, or from the thread RNG when none is given
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
        GameRng {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Seed of the `index`th game in a batch started from this seed
    pub fn game_seed(&self, index: usize) -> u64 {
        self.seed.wrapping_add(index as u64)
    }

    pub fn shuffle<T>(&mut self, cards: &mut [T]) {
        cards.shuffle(&mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CityName;

    #[test]
    fn test_same_seed_same_deck_order() {
        let mut first = CityName::ALL.to_vec();
        let mut second = CityName::ALL.to_vec();

        GameRng::new(Some(42)).shuffle(&mut first);
        GameRng::new(Some(42)).shuffle(&mut second);

        assert_eq!(first, second, "Same seed should deal the same deck");
        assert_ne!(first, CityName::ALL.to_vec());
    }

    #[test]
    fn test_consecutive_shuffles_differ() {
        let mut rng = GameRng::new(Some(8));
        let mut first = CityName::ALL.to_vec();
        let mut second = CityName::ALL.to_vec();
        rng.shuffle(&mut first);
        rng.shuffle(&mut second);
        assert_ne!(first, second);
    }

    #[test]
    fn test_shuffle_keeps_every_city() {
        let mut deck = CityName::ALL.to_vec();
        GameRng::new(Some(7)).shuffle(&mut deck);
        deck.sort();
        assert_eq!(deck, CityName::ALL.to_vec());

        let mut empty: Vec<CityName> = vec![];
        GameRng::new(Some(1)).shuffle(&mut empty);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_seed_is_reported() {
        assert_eq!(GameRng::new(Some(999)).seed(), 999);
        let drawn = GameRng::new(None);
        assert_eq!(GameRng::new(Some(drawn.seed())).seed(), drawn.seed());
    }

    #[test]
    fn test_game_seeds_follow_the_base_seed() {
        let rng = GameRng::new(Some(u64::MAX - 1));
        assert_eq!(rng.game_seed(0), u64::MAX - 1);
        assert_eq!(rng.game_seed(1), u64::MAX);
        assert_eq!(rng.game_seed(2), 0);
    }
}

use crate::deck::stack::Stack;
use crate::deck::DeckError;
use crate::rng::GameRng;
use serde::de::DeserializeOwned;

/// A deck of cards. The stack never looks inside a card, so any card type
/// works; by default cards are raw JSON values.
#[derive(Debug, Clone, PartialEq)]
pub struct CardStack<C = serde_json::Value> {
    stack: Stack<C>,
}

impl<C> CardStack<C> {
    /// Load cards from a JSON array; the last card in the file ends up on top
    pub fn build_from_file(path: &str) -> Result<Self, DeckError>
    where
        C: DeserializeOwned,
    {
        let content = std::fs::read_to_string(path)?;
        let cards: Vec<C> = serde_json::from_str(&content)?;

        let mut card_stack = CardStack::build_empty_stack();
        card_stack.stack.push_all(cards);
        Ok(card_stack)
    }

    pub fn build_empty_stack() -> Self {
        CardStack {
            stack: Stack::new(),
        }
    }

    pub fn build_from_existing_stack(stack: Stack<C>) -> Self {
        CardStack { stack }
    }

    /// Combine several decks into one; the first deck ends up at the bottom
    pub fn merge(card_stacks: Vec<CardStack<C>>) -> Self {
        let stacks = card_stacks.into_iter().map(|c| c.stack).collect();
        CardStack::build_from_existing_stack(Stack::merge_stacks(stacks))
    }

    pub fn shuffle(&mut self, rng: &mut GameRng) {
        self.stack.shuffle(rng);
    }

    /// Draw up to `n` cards from the top. A negative count draws nothing and
    /// an exhausted deck returns whatever was left.
    pub fn take(&mut self, n: isize) -> Vec<C> {
        if n < 0 {
            return Vec::new();
        }

        let mut cards = Vec::with_capacity((n as usize).min(self.stack.len()));
        for _ in 0..n {
            match self.stack.pop() {
                Some(card) => cards.push(card),
                None => break,
            }
        }
        cards
    }

    /// Draw the bottom card
    pub fn take_bottom(&mut self) -> Option<C> {
        self.stack.pop_bottom()
    }

    pub fn put(&mut self, card: C) {
        self.stack.push(card);
    }

    pub fn peek(&self) -> Option<&C> {
        self.stack.peek()
    }

    /// Cut the deck into `n` piles of near-equal size
    pub fn split(self, n: usize) -> Result<Vec<CardStack<C>>, DeckError> {
        Ok(Stack::split_stacks(self.stack, n)?
            .into_iter()
            .map(CardStack::build_from_existing_stack)
            .collect())
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Remaining cards, top first
    pub fn iter(&self) -> impl Iterator<Item = &C> + '_ {
        self.stack.iter()
    }
}

impl<C> Default for CardStack<C> {
    fn default() -> Self {
        Self::build_empty_stack()
    }
}

impl<C> FromIterator<C> for CardStack<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        CardStack::build_from_existing_stack(iter.into_iter().collect())
    }
}

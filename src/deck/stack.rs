use crate::deck::DeckError;
use crate::rng::GameRng;

/// LIFO sequence; the top of the stack is the end of the backing vector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Stack {
            items: Vec::with_capacity(cap),
        }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Push items in order, so the last one ends up on top
    pub fn push_all<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.items.extend(items);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Remove the bottom item. Shifts every remaining item down, so this is
    /// O(n); decks are a few dozen cards and draw from the bottom only on
    /// epidemics.
    pub fn pop_bottom(&mut self) -> Option<T> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    /// Peek at the top item without removing it
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.items);
    }

    /// Top to bottom
    pub fn iter(&self) -> std::iter::Rev<std::slice::Iter<'_, T>> {
        self.items.iter().rev()
    }

    /// Stack the inputs in order: the first ends up at the bottom, the last on top
    pub fn merge_stacks(stacks: Vec<Stack<T>>) -> Stack<T> {
        let total = stacks.iter().map(|s| s.len()).sum();
        let mut merged = Stack::with_capacity(total);
        for stack in stacks {
            merged.items.extend(stack.items);
        }
        merged
    }

    /// Cut a stack into `n` contiguous piles whose sizes differ by at most one.
    /// Piles are returned bottom first; order inside each pile is kept.
    pub fn split_stacks(stack: Stack<T>, n: usize) -> Result<Vec<Stack<T>>, DeckError> {
        if n == 0 {
            return Err(DeckError::InvalidSplit(n));
        }

        let base = stack.len() / n;
        let extra = stack.len() % n;
        let mut items = stack.items.into_iter();
        let piles = (0..n)
            .map(|i| {
                let size = base + usize::from(i < extra);
                Stack {
                    items: items.by_ref().take(size).collect(),
                }
            })
            .collect();
        Ok(piles)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = std::iter::Rev<std::slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack_of(range: std::ops::Range<u32>) -> Stack<u32> {
        range.collect()
    }

    #[test]
    fn test_push_pop_is_lifo() {
        let mut stack = Stack::new();
        stack.push_all([1, 2, 3]);
        assert_eq!(stack.peek(), Some(&3));
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_pop_bottom() {
        let mut stack = stack_of(0..3);
        assert_eq!(stack.pop_bottom(), Some(0));
        assert_eq!(stack.len(), 2);
        // The rest keep their order, top first
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(stack.pop_bottom(), Some(1));
        assert_eq!(stack.peek(), Some(&2));
        let mut empty: Stack<u32> = Stack::new();
        assert_eq!(empty.pop_bottom(), None);
    }

    #[test]
    fn test_iter_top_to_bottom() {
        let stack = stack_of(0..4);
        let order: Vec<_> = stack.iter().copied().collect();
        assert_eq!(order, vec![3, 2, 1, 0]);
        // Iteration does not consume
        assert_eq!(stack.len(), 4);
    }

    #[test]
    fn test_merge_order() {
        let merged = Stack::merge_stacks(vec![stack_of(0..2), stack_of(10..12)]);
        let order: Vec<_> = merged.iter().copied().collect();
        assert_eq!(order, vec![11, 10, 1, 0]);
    }

    #[test]
    fn test_split_sizes() {
        let piles = Stack::split_stacks(stack_of(0..10), 4).unwrap();
        let sizes: Vec<_> = piles.iter().map(|p| p.len()).collect();
        assert_eq!(sizes, vec![3, 3, 2, 2]);
        let first: Vec<_> = piles[0].iter().copied().collect();
        assert_eq!(first, vec![2, 1, 0]);
    }

    #[test]
    fn test_split_more_piles_than_items() {
        let piles = Stack::split_stacks(stack_of(0..2), 3).unwrap();
        let sizes: Vec<_> = piles.iter().map(|p| p.len()).collect();
        assert_eq!(sizes, vec![1, 1, 0]);
    }

    #[test]
    fn test_split_zero_is_rejected() {
        let result = Stack::split_stacks(stack_of(0..2), 0);
        assert!(matches!(result, Err(DeckError::InvalidSplit(0))));
    }

    #[test]
    fn test_split_then_merge_restores_order() {
        let original = stack_of(0..17);
        let piles = Stack::split_stacks(original.clone(), 5).unwrap();
        assert_eq!(Stack::merge_stacks(piles), original);
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let mut a = stack_of(0..30);
        let mut b = stack_of(0..30);
        a.shuffle(&mut GameRng::new(Some(5)));
        b.shuffle(&mut GameRng::new(Some(5)));
        assert_eq!(a, b);
        assert_eq!(a.len(), 30);
    }
}

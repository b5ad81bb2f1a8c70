//! Client-side cache of the user's saved cards.
//!
//! The store is only ever replaced wholesale from a successful fetch. Saving
//! a card does not insert locally; the deck asks for a refetch instead so the
//! cache always carries the server's ids and timestamps.

use std::collections::HashSet;

use crate::model::card::Card;

/// Keeps the first card seen for each `(character, pinyin)` pair, in input order.
pub fn deduplicate(cards: impl IntoIterator<Item = Card>) -> Vec<Card> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    cards
        .into_iter()
        .filter(|card| seen.insert((card.character.clone(), card.pinyin.clone())))
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardStore {
    cards: Vec<Card>,
}

impl CardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Replaces the whole cache with a fresh fetch result.
    pub fn replace(&mut self, fetched: Vec<Card>) {
        self.cards = deduplicate(fetched);
    }
}

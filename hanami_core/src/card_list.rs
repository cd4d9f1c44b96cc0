use std::slice;

use crate::{card::Card, utils::VecExtensions};

/// An ordered pile of cards, ascending by rank. A new card that ties an
/// existing rank goes in front of the cards already holding that rank.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SortedCardList {
    cards: Vec<Card>,
}

impl SortedCardList {
    pub fn new() -> Self {
        SortedCardList { cards: vec![] }
    }

    pub fn insert(&mut self, card: Card) {
        let at = self
            .cards
            .iter()
            .position(|existing| card.rank <= existing.rank)
            .unwrap_or(self.cards.len());
        self.cards.insert(at, card);
    }

    /// Removes and returns the first card matching `rank` in ascending
    /// order, leaving the rest untouched.
    pub fn take(&mut self, rank: u32) -> Option<Card> {
        self.cards.remove_first_where(|card| card.rank == rank)
    }

    pub fn find(&self, rank: u32) -> Option<&Card> {
        self.cards.iter().find(|card| card.rank == rank)
    }

    pub fn first(&self) -> Option<&Card> {
        self.cards.first()
    }

    pub fn last(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl<'a> IntoIterator for &'a SortedCardList {
    type Item = &'a Card;
    type IntoIter = slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl FromIterator<Card> for SortedCardList {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut list = SortedCardList::new();
        for card in iter {
            list.insert(card);
        }
        list
    }
}

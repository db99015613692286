use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::Serialize;
use tracing::{debug, info};

use crate::catalogue::stats::Stats;
use crate::error::CatalogueError;

/// Cards every fresh catalogue starts with. Values are range-checked at compile time.
const SEED_CARDS: [(&str, Stats); 8] = [
    ("Hobgoblin", Stats::from_const(7, 1, 25, 15)),
    ("Sasquatch", Stats::from_const(1, 6, 21, 19)),
    ("Godzilla", Stats::from_const(5, 15, 18, 22)),
    ("Blazegolem", Stats::from_const(15, 20, 23, 6)),
    ("Websnake", Stats::from_const(7, 15, 10, 5)),
    ("Demogorgon", Stats::from_const(21, 18, 14, 5)),
    ("Dracula", Stats::from_const(19, 13, 19, 2)),
    ("Mindflayer", Stats::from_const(16, 7, 4, 12)),
];

/// Monster cards keyed by their exact, case-sensitive name.
///
/// Backed by a `BTreeMap`, so [`Catalogue::iter`] always yields names in
/// ascending order and a name can never appear twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct Catalogue {
    cards: BTreeMap<String, Stats>,
}

impl Catalogue {
    pub fn new() -> Self {
        Catalogue::default()
    }

    /// A catalogue holding the eight starter cards.
    pub fn seeded() -> Self {
        let cards = SEED_CARDS
            .iter()
            .map(|(name, stats)| (name.to_string(), *stats))
            .collect();
        Catalogue { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.cards.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Stats> {
        let found = self.cards.get(name);
        debug!(name, hit = found.is_some(), "catalogue lookup");
        found
    }

    /// Adds a new card. An existing name is never overwritten.
    pub fn insert(&mut self, name: &str, stats: Stats) -> Result<(), CatalogueError> {
        if self.cards.contains_key(name) {
            return Err(CatalogueError::Duplicate(name.to_string()));
        }
        info!(name, "card added");
        self.cards.insert(name.to_string(), stats);
        Ok(())
    }

    /// Replaces the stats of an existing card, returning the previous ones.
    pub fn replace(&mut self, name: &str, stats: Stats) -> Result<Stats, CatalogueError> {
        let slot = self
            .cards
            .get_mut(name)
            .ok_or_else(|| CatalogueError::NotFound(name.to_string()))?;
        info!(name, "card updated");
        Ok(std::mem::replace(slot, stats))
    }

    /// Removes a card, returning its stats.
    pub fn remove(&mut self, name: &str) -> Result<Stats, CatalogueError> {
        let removed = self
            .cards
            .remove(name)
            .ok_or_else(|| CatalogueError::NotFound(name.to_string()))?;
        info!(name, "card deleted");
        Ok(removed)
    }

    /// Cards in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Stats)> {
        self.cards.iter().map(|(name, stats)| (name.as_str(), stats))
    }
}

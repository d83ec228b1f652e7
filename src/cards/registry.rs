//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores every card definition a game can produce,
//! keyed by card name. It is built once, eagerly, and shared behind an
//! `Arc` by every game that uses it.

use rustc_hash::FxHashMap;

use super::definition::CardDefinition;
use crate::core::{EngineError, Result};

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use ccg_tags::cards::{CardDefinition, CardRegistry};
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardDefinition::minion("Wisp", 0, 1, 1));
///
/// let found = registry.get("Wisp").unwrap();
/// assert_eq!(found.mana, 0);
/// assert!(registry.lookup("Nobody").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<String, CardDefinition>,
    order: Vec<String>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in card set.
    #[must_use]
    pub fn basic() -> Self {
        let mut registry = Self::new();
        for card in super::library::basic_cards() {
            registry.register(card);
        }
        registry
    }

    /// Register a card definition, replacing any card of the same name.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.name) {
            tracing::warn!(card = %card.name, "replacing card definition");
        } else {
            self.order.push(card.name.clone());
        }
        self.cards.insert(card.name.clone(), card);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CardDefinition> {
        self.cards.get(name)
    }

    /// Get a card definition, failing on unknown names.
    pub fn lookup(&self, name: &str) -> Result<&CardDefinition> {
        self.cards
            .get(name)
            .ok_or_else(|| EngineError::UnknownCard(name.to_string()))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.cards.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.order.iter().filter_map(|name| self.cards.get(name))
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &CardDefinition>
    where
        F: Fn(&CardDefinition) -> bool,
    {
        self.iter().filter(move |c| predicate(c))
    }

    /// Load a registry from a JSON array of card definitions.
    pub fn from_json(json: &str) -> Result<Self> {
        let cards: Vec<CardDefinition> = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for card in cards {
            registry.register(card);
        }
        Ok(registry)
    }

    /// Write every definition as a JSON array.
    pub fn to_json(&self) -> Result<String> {
        let cards: Vec<&CardDefinition> = self.iter().collect();
        Ok(serde_json::to_string_pretty(&cards)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CharacterClass;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = CardRegistry::new();
        registry.register(CardDefinition::minion("Wisp", 0, 1, 1));
        registry.register(CardDefinition::minion("Chillwind Yeti", 4, 4, 5));

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("Wisp"));
        assert!(matches!(registry.lookup("Ragnaros"), Err(EngineError::UnknownCard(_))));
        let names: Vec<_> = registry.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Wisp", "Chillwind Yeti"]);
    }

    #[test]
    fn test_replace_keeps_order() {
        let mut registry = CardRegistry::new();
        registry.register(CardDefinition::minion("Wisp", 0, 1, 1));
        registry.register(CardDefinition::minion("Yeti", 4, 4, 5));
        registry.register(CardDefinition::minion("Wisp", 1, 2, 2));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("Wisp").unwrap().mana, 1);
        assert_eq!(registry.iter().next().unwrap().name, "Wisp");
    }

    #[test]
    fn test_find() {
        let registry = CardRegistry::basic();
        assert!(registry.find(|c| c.class == CharacterClass::Mage).count() > 0);
        assert!(registry.find(|c| !c.collectible).any(|c| c.name == "Damaged Golem"));
    }

    #[test]
    fn test_json_round_trip() {
        let registry = CardRegistry::basic();
        let json = registry.to_json().unwrap();
        let loaded = CardRegistry::from_json(&json).unwrap();

        assert_eq!(loaded.len(), registry.len());
        for card in registry.iter() {
            assert_eq!(loaded.get(&card.name), Some(card));
        }
    }
}

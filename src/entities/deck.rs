//! A player's deck: a fixed pool of card names plus a drawn bitset.

use serde::{Deserialize, Serialize};

use crate::cards::CharacterClass;
use crate::core::{EngineError, Result};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub class: CharacterClass,
    cards: Vec<String>,
    drawn: Vec<bool>,
}

impl Deck {
    /// Build a deck, insisting on exactly `size` cards.
    pub fn new(class: CharacterClass, cards: Vec<String>, size: usize) -> Result<Self> {
        if cards.len() != size {
            return Err(EngineError::InvalidDeck {
                expected: size,
                found: cards.len(),
            });
        }
        let drawn = vec![false; cards.len()];
        Ok(Self { class, cards, drawn })
    }

    /// Every card name in the pool, drawn or not, in deck order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.cards
    }

    /// Cards left to draw.
    #[must_use]
    pub fn left(&self) -> usize {
        self.drawn.iter().filter(|d| !**d).count()
    }

    #[must_use]
    pub fn can_draw(&self) -> bool {
        self.left() > 0
    }

    /// Undrawn cards with their pool positions.
    pub fn undrawn(&self) -> impl Iterator<Item = (usize, &str)> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(i, _)| !self.drawn[*i])
            .map(|(i, name)| (i, name.as_str()))
    }

    /// Draw the `k`-th undrawn card.
    pub fn draw_nth(&mut self, k: usize) -> Option<String> {
        let (pos, _) = self.undrawn().nth(k)?;
        self.take(pos)
    }

    /// Mark the card at pool position `pos` drawn.
    pub fn take(&mut self, pos: usize) -> Option<String> {
        if *self.drawn.get(pos)? {
            return None;
        }
        self.drawn[pos] = true;
        Some(self.cards[pos].clone())
    }

    /// Return a drawn card to the deck.
    ///
    /// Names that were never part of the pool are appended as new cards.
    pub fn put_back(&mut self, name: &str) -> Result<()> {
        let mut seen = false;
        for (i, card) in self.cards.iter().enumerate() {
            if card == name {
                seen = true;
                if self.drawn[i] {
                    self.drawn[i] = false;
                    return Ok(());
                }
            }
        }
        if seen {
            return Err(EngineError::CardNotDrawn(name.to_string()));
        }
        self.cards.push(name.to_string());
        self.drawn.push(false);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(names: &[&str]) -> Deck {
        Deck::new(
            CharacterClass::Mage,
            names.iter().map(|s| s.to_string()).collect(),
            names.len(),
        )
        .unwrap()
    }

    #[test]
    fn test_size_enforced() {
        let err = Deck::new(CharacterClass::Mage, vec!["Wisp".into()], 30).unwrap_err();
        assert!(matches!(err, EngineError::InvalidDeck { expected: 30, found: 1 }));
    }

    #[test]
    fn test_draw_nth_skips_drawn() {
        let mut d = deck(&["A", "B", "C"]);
        assert_eq!(d.draw_nth(1).as_deref(), Some("B"));
        assert_eq!(d.left(), 2);
        assert_eq!(d.draw_nth(1).as_deref(), Some("C"));
        assert_eq!(d.draw_nth(1), None);
        assert_eq!(d.draw_nth(0).as_deref(), Some("A"));
        assert!(!d.can_draw());
    }

    #[test]
    fn test_put_back() {
        let mut d = deck(&["A", "A", "B"]);
        d.draw_nth(1);
        d.put_back("A").unwrap();
        assert_eq!(d.left(), 3);

        // both copies undrawn
        assert!(matches!(d.put_back("A"), Err(EngineError::CardNotDrawn(_))));

        d.put_back("Z").unwrap();
        assert_eq!(d.names().len(), 4);
        assert_eq!(d.left(), 4);
    }
}

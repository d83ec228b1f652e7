//! Playing a replay back through the engine.

use std::sync::Arc;

use crate::cards::CardRegistry;
use crate::core::{EngineError, GameConfig, PlayerAction, PlayerId, Result, ScriptedRandom};
use crate::rules::{Game, GameBuilder};

use super::format::Replay;
use super::moves::ReplayMove;
use super::refs::CharacterRef;

impl Replay {
    /// Rebuild the match and apply every move in order.
    ///
    /// Random numbers come from the replay, never from a generator, so
    /// the returned game is in the exact state the recording ended in. It
    /// records as it plays, so [`Game::replay`] gives the document back.
    pub fn play(&self, registry: Arc<CardRegistry>, config: GameConfig) -> Result<Game> {
        if self.header.decks.len() != 2 {
            return Err(EngineError::Replay(format!(
                "expected two decks, found {}",
                self.header.decks.len()
            )));
        }
        let mut builder = GameBuilder::new(registry)
            .config(config.clone())
            .random_source(Box::new(ScriptedRandom::new(self.randoms())))
            .record();
        for (player, deck) in PlayerId::all().zip(&self.header.decks) {
            builder = builder.deck(player, deck.class, deck.expand(config.deck_size)?);
        }
        for (player, kept) in PlayerId::all().zip(&self.header.keeps) {
            builder = builder.keep(player, kept.clone());
        }
        let mut game = builder.build()?;
        game.pre_game()?;

        for (number, recorded) in self.moves.iter().enumerate() {
            if game.is_over() {
                tracing::warn!(move_number = number, "replay continues past the end of the match");
                break;
            }
            game.begin()?;
            step(&mut game, &recorded.mv)?;
        }
        tracing::debug!(moves = self.moves.len(), over = game.is_over(), "replay played back");
        Ok(game)
    }
}

fn resolve(game: &Game, at: CharacterRef) -> Result<crate::core::EntityId> {
    at.resolve(game)
        .ok_or_else(|| EngineError::Replay(format!("nothing at {at}")))
}

fn step(game: &mut Game, mv: &ReplayMove) -> Result<()> {
    let player = game.current_player();
    let action = match *mv {
        ReplayMove::Start => return Ok(()),
        ReplayMove::End => PlayerAction::EndTurn,
        ReplayMove::Concede => PlayerAction::Concede,
        ReplayMove::Play { card, target } | ReplayMove::Summon { card, target, .. } => {
            let target = target.map(|t| resolve(game, t)).transpose()?;
            let position = match *mv {
                ReplayMove::Summon { index, .. } => Some(index),
                _ => None,
            };
            game.pending.option = card.option;
            PlayerAction::PlayCard {
                index: card.index,
                target,
                position,
            }
        }
        ReplayMove::Attack { attacker, target } => PlayerAction::Attack {
            attacker: resolve(game, attacker)?,
            target: Some(resolve(game, target)?),
        },
        ReplayMove::Power { target } => PlayerAction::UsePower {
            target: target.map(|t| resolve(game, t)).transpose()?,
        },
    };
    game.apply(player, &action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RulesEngine;

    fn registry() -> Arc<CardRegistry> {
        Arc::new(CardRegistry::basic())
    }

    #[test]
    fn test_needs_two_decks() {
        let replay = Replay::parse("deck(Mage,Wisp)\nstart()").unwrap();
        let err = replay.play(registry(), GameConfig::default()).unwrap_err();
        assert!(matches!(err, EngineError::Replay(_)));
    }

    #[test]
    fn test_plays_moves() {
        let text = "deck(Mage,Wisp)\ndeck(Warrior,Wisp)\nstart()\nsummon(0,0)\nend()\n";
        let game = Replay::parse(text).unwrap().play(registry(), GameConfig::default()).unwrap();
        assert_eq!(game.player(PlayerId::FIRST).minions.len(), 1);
        assert_eq!(game.current_player(), PlayerId::SECOND);
        assert!(game.is_terminal().is_none());
    }

    #[test]
    fn test_unresolved_reference() {
        let text = "deck(Mage,Wisp)\ndeck(Warrior,Wisp)\nstart()\nattack(p1:0,p2)\n";
        let err = Replay::parse(text).unwrap().play(registry(), GameConfig::default()).unwrap_err();
        assert!(err.to_string().contains("nothing at p1:0"), "{err}");
    }

    #[test]
    fn test_concede() {
        let text = "deck(Mage,Wisp)\ndeck(Warrior,Wisp)\nstart()\nconcede()\nend()\n";
        let game = Replay::parse(text).unwrap().play(registry(), GameConfig::default()).unwrap();
        assert_eq!(game.result(), Some(&crate::rules::GameResult::Winner(PlayerId::SECOND)));
    }
}

use rustc_hash::FxHashMap;

use crate::core::{EntityId, PlayerId};
use crate::rules::Game;

use super::format::{DeckList, RecordedMove, Replay, ReplayHeader};
use super::moves::ReplayMove;
use super::refs::{board_refs, CharacterRef};

/// Builds a [`Replay`] as the engine reports what happens.
///
/// Targets are written against the board as it stood when the move
/// began, so a minion that dies or shifts mid-move is still named by the
/// slot the player saw.
#[derive(Clone, Debug)]
pub struct Recorder {
    replay: Replay,
    board: FxHashMap<EntityId, CharacterRef>,
    awaiting_target: bool,
}

impl Recorder {
    #[must_use]
    pub fn new(decks: Vec<DeckList>) -> Self {
        Self {
            replay: Replay {
                header: ReplayHeader {
                    decks,
                    ..ReplayHeader::default()
                },
                moves: Vec::new(),
            },
            board: FxHashMap::default(),
            awaiting_target: false,
        }
    }

    pub(crate) fn begin(&mut self, game: &Game, mv: ReplayMove) {
        self.board = board_refs(game);
        self.awaiting_target = matches!(
            mv,
            ReplayMove::Play { .. } | ReplayMove::Summon { .. } | ReplayMove::Power { .. }
        );
        self.replay.moves.push(RecordedMove::new(mv));
    }

    /// The first target picked during a move is the move's target; later
    /// picks (battlecries of summoned tokens, secrets) are not the player's.
    pub(crate) fn target(&mut self, game: &Game, target: Option<EntityId>) {
        if !std::mem::take(&mut self.awaiting_target) {
            return;
        }
        let Some(target) = target else {
            return;
        };
        let position = self.board.get(&target).copied().or_else(|| CharacterRef::of(game, target));
        match self.replay.moves.last_mut().map(|m| &mut m.mv) {
            Some(
                ReplayMove::Play { target, .. } | ReplayMove::Summon { target, .. } | ReplayMove::Power { target },
            ) => *target = position,
            _ => {}
        }
    }

    pub(crate) fn index(&mut self, slot: usize) {
        if let Some(ReplayMove::Summon { index, .. }) = self.replay.moves.last_mut().map(|m| &mut m.mv) {
            *index = slot;
        }
    }

    pub(crate) fn option(&mut self, chosen: usize) {
        if let Some(ReplayMove::Play { card, .. } | ReplayMove::Summon { card, .. }) =
            self.replay.moves.last_mut().map(|m| &mut m.mv)
        {
            card.option.get_or_insert(chosen);
        }
    }

    pub(crate) fn keep(&mut self, player: PlayerId, kept: Vec<usize>) {
        tracing::trace!(player = %player, kept = ?kept, "card check recorded");
        self.replay.header.keeps.push(kept);
    }

    /// Attach numbers drawn since the last call to the move in progress,
    /// or to the header before the first move.
    pub(crate) fn random(&mut self, values: Vec<i32>) {
        if values.is_empty() {
            return;
        }
        match self.replay.moves.last_mut() {
            Some(last) => last.random.extend(values),
            None => self.replay.header.random.extend(values),
        }
    }

    #[must_use]
    pub fn replay(&self) -> Replay {
        self.replay.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CharacterClass;
    use crate::replay::CardRef;
    use crate::rules::test_support::{put_minion, started_game};

    fn recorder() -> Recorder {
        let deck = DeckList {
            class: CharacterClass::Mage,
            cards: vec!["Wisp".to_string()],
        };
        Recorder::new(vec![deck.clone(), deck])
    }

    #[test]
    fn test_randoms_before_first_move_go_to_header() {
        let game = started_game();
        let mut rec = recorder();
        rec.random(vec![1, 2]);
        rec.begin(&game, ReplayMove::Start);
        rec.random(vec![3]);
        rec.random(Vec::new());
        let replay = rec.replay();
        assert_eq!(replay.header.random, vec![1, 2]);
        assert_eq!(replay.moves[0].random, vec![3]);
    }

    #[test]
    fn test_target_uses_position_at_move_start() {
        let mut game = started_game();
        let wisp = put_minion(&mut game, PlayerId::SECOND, "Wisp");
        let mut rec = recorder();
        rec.begin(
            &game,
            ReplayMove::Play {
                card: CardRef { index: 0, option: None },
                target: None,
            },
        );
        game.player_mut(PlayerId::SECOND).minions.clear();
        rec.target(&game, Some(wisp));
        // only the first pick counts
        rec.target(&game, Some(game.player(PlayerId::FIRST).hero));
        rec.option(1);
        let replay = rec.replay();
        assert_eq!(
            replay.moves[0].mv,
            ReplayMove::Play {
                card: CardRef {
                    index: 0,
                    option: Some(1)
                },
                target: Some(CharacterRef::minion(PlayerId::SECOND, 0)),
            }
        );
    }

    #[test]
    fn test_summon_index() {
        let game = started_game();
        let mut rec = recorder();
        rec.begin(
            &game,
            ReplayMove::Summon {
                card: CardRef { index: 2, option: None },
                index: 0,
                target: None,
            },
        );
        rec.index(3);
        assert_eq!(rec.replay().moves[0].mv.to_string(), "summon(2,3)");
    }
}

//! Board integration tests: minion positions, aura reversal, death order.

mod common;

use ccg_tags::core::PlayerId;
use ccg_tags::rules::Game;
use ccg_tags::tags::{Aura, PlayerScope, Selector, Status};
use proptest::prelude::*;

use common::{put, wisp_game};

const NAMES: [&str; 5] = ["Wisp", "Raid Leader", "Dire Wolf Alpha", "Harvest Golem", "Loot Hoarder"];

#[derive(Clone, Debug)]
enum BoardOp {
    Summon { player: u8, name: usize, index: usize },
    Remove { player: u8, pick: usize },
    Bounce { player: u8, pick: usize },
    Kill { player: u8, pick: usize },
    Transform { player: u8, pick: usize, name: usize },
}

fn board_op() -> impl Strategy<Value = BoardOp> {
    prop_oneof![
        3 => (0u8..2, 0..NAMES.len(), 0usize..8).prop_map(|(player, name, index)| BoardOp::Summon { player, name, index }),
        1 => (0u8..2, 0usize..8).prop_map(|(player, pick)| BoardOp::Remove { player, pick }),
        1 => (0u8..2, 0usize..8).prop_map(|(player, pick)| BoardOp::Bounce { player, pick }),
        1 => (0u8..2, 0usize..8).prop_map(|(player, pick)| BoardOp::Kill { player, pick }),
        1 => (0u8..2, 0usize..8, 0..NAMES.len()).prop_map(|(player, pick, name)| BoardOp::Transform { player, pick, name }),
    ]
}

fn pick(game: &Game, player: PlayerId, pick: usize) -> Option<ccg_tags::EntityId> {
    let minions = &game.player(player).minions;
    (!minions.is_empty()).then(|| minions[pick % minions.len()])
}

fn apply_op(game: &mut Game, op: &BoardOp) {
    match *op {
        BoardOp::Summon { player, name, index } => {
            game.summon(NAMES[name], PlayerId::new(player), index).unwrap();
        }
        BoardOp::Remove { player, pick: p } => {
            if let Some(id) = pick(game, PlayerId::new(player), p) {
                game.remove_from_board(id).unwrap();
            }
        }
        BoardOp::Bounce { player, pick: p } => {
            if let Some(id) = pick(game, PlayerId::new(player), p) {
                game.bounce(id).unwrap();
            }
        }
        BoardOp::Kill { player, pick: p } => {
            if let Some(id) = pick(game, PlayerId::new(player), p) {
                game.damage(id, 100, None).unwrap();
                game.check_delayed().unwrap();
            }
        }
        BoardOp::Transform { player, pick: p, name } => {
            if let Some(id) = pick(game, PlayerId::new(player), p) {
                game.transform(id, NAMES[name]).unwrap();
            }
        }
    }
}

fn assert_indices(game: &Game) {
    for player in PlayerId::all() {
        let minions = &game.player(player).minions;
        assert!(minions.len() <= game.config().max_board_size);
        for (position, id) in minions.iter().enumerate() {
            let index = game.character(*id).and_then(|c| c.minion()).map(|m| m.index);
            assert_eq!(index, Some(position), "{player} minion {id}");
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_minion_index_matches_position(ops in prop::collection::vec(board_op(), 1..40)) {
        let mut game = wisp_game();
        for op in &ops {
            apply_op(&mut game, op);
            assert_indices(&game);
        }
    }

    #[test]
    fn prop_aura_removal_restores_stats(status in prop_oneof![
        (-3i32..4).prop_map(|amount| Status::ChangeAttack { amount }),
        (0i32..6).prop_map(|amount| Status::SetAttack { amount }),
        Just(Status::DoubleAttack),
        (1i32..4).prop_map(|amount| Status::ChangeHealth { amount }),
        Just(Status::Taunt),
    ]) {
        let mut game = wisp_game();
        let yeti = put(&mut game, PlayerId::FIRST, "Chillwind Yeti");
        let raptor = put(&mut game, PlayerId::FIRST, "Bloodfen Raptor");
        let enemy = put(&mut game, PlayerId::SECOND, "River Crocolisk");
        let before: Vec<(i32, i32)> = [yeti, raptor, enemy]
            .iter()
            .map(|id| (game.calculate_attack(*id), game.calculate_max_health(*id)))
            .collect();

        let owner = put(&mut game, PlayerId::FIRST, "Wisp");
        game.add_aura(owner, Aura::new(status, Selector::minions(PlayerScope::Friendly)));
        game.silence(owner).unwrap();

        let after: Vec<(i32, i32)> = [yeti, raptor, enemy]
            .iter()
            .map(|id| (game.calculate_attack(*id), game.calculate_max_health(*id)))
            .collect();
        prop_assert_eq!(before, after);
        prop_assert!(!game.character(yeti).unwrap().has_taunt());
    }
}

#[test]
fn test_aura_follows_board() {
    let mut game = wisp_game();
    let wisp = put(&mut game, PlayerId::FIRST, "Wisp");
    let leader = put(&mut game, PlayerId::FIRST, "Raid Leader");
    assert_eq!(game.calculate_attack(wisp), 2);
    assert_eq!(game.calculate_attack(leader), 2, "the leader does not buff itself");

    let late = put(&mut game, PlayerId::FIRST, "Wisp");
    assert_eq!(game.calculate_attack(late), 2);

    game.remove_from_board(leader).unwrap();
    assert_eq!(game.calculate_attack(wisp), 1);
    assert_eq!(game.calculate_attack(late), 1);
}

#[test]
fn test_adjacent_aura_moves_with_neighbours() {
    let mut game = wisp_game();
    let left = put(&mut game, PlayerId::FIRST, "Wisp");
    let alpha = put(&mut game, PlayerId::FIRST, "Dire Wolf Alpha");
    let right = put(&mut game, PlayerId::FIRST, "Wisp");
    assert_eq!(game.calculate_attack(left), 2);
    assert_eq!(game.calculate_attack(right), 2);

    // a minion slotted in between pushes the left Wisp out of range
    let between = game.summon("Wisp", PlayerId::FIRST, 1).unwrap().unwrap();
    assert_eq!(game.player(PlayerId::FIRST).minions, vec![left, between, alpha, right]);
    assert_eq!(game.calculate_attack(left), 1);
    assert_eq!(game.calculate_attack(between), 2);
}

#[test]
fn test_deaths_resolve_in_birth_order() {
    let mut game = wisp_game();
    let older = put(&mut game, PlayerId::SECOND, "Wisp");
    let younger = game.summon("Murloc Raider", PlayerId::SECOND, 0).unwrap().unwrap();
    assert!(game.character(older).unwrap().born < game.character(younger).unwrap().born);

    game.damage(younger, 5, None).unwrap();
    game.damage(older, 5, None).unwrap();
    assert!(game.is_dead(older) && game.is_dead(younger));
    assert_eq!(game.player(PlayerId::SECOND).minions.len(), 2, "deaths wait for the flush");

    game.check_delayed().unwrap();
    assert!(game.player(PlayerId::SECOND).minions.is_empty());
    assert_eq!(game.player(PlayerId::SECOND).graveyard, vec!["Wisp", "Murloc Raider"]);
}

#[test]
fn test_deathrattle_summons_on_the_right() {
    let mut game = wisp_game();
    put(&mut game, PlayerId::FIRST, "Wisp");
    let golem = put(&mut game, PlayerId::FIRST, "Harvest Golem");
    put(&mut game, PlayerId::FIRST, "Wisp");

    game.damage(golem, 3, None).unwrap();
    game.check_delayed().unwrap();

    let names: Vec<&str> = game
        .player(PlayerId::FIRST)
        .minions
        .iter()
        .map(|id| game.character(*id).unwrap().card.as_str())
        .collect();
    assert_eq!(names, vec!["Wisp", "Wisp", "Damaged Golem"]);
}

#[test]
fn test_silence_clamps_health() {
    let mut game = wisp_game();
    let ogre = put(&mut game, PlayerId::FIRST, "Boulderfist Ogre");
    game.add_buff(ogre, ccg_tags::tags::Buff::new(Status::ChangeHealth { amount: 3 }));
    assert_eq!(game.calculate_max_health(ogre), 10);
    game.damage(ogre, 2, None).unwrap();
    assert_eq!(game.character(ogre).unwrap().health, 8);

    game.silence(ogre).unwrap();
    assert_eq!(game.calculate_max_health(ogre), 7);
    assert_eq!(game.character(ogre).unwrap().health, 7);
}

#[test]
fn test_tribal_aura_tracks_the_board() {
    let mut game = wisp_game();
    let oracle = put(&mut game, PlayerId::FIRST, "Grimscale Oracle");
    let raptor = put(&mut game, PlayerId::FIRST, "Bloodfen Raptor");
    let raider = put(&mut game, PlayerId::SECOND, "Murloc Raider");
    assert_eq!(game.calculate_attack(oracle), 1, "the oracle skips itself");
    assert_eq!(game.calculate_attack(raptor), 3);
    assert_eq!(game.calculate_attack(raider), 3, "murlocs on both sides");

    // a murloc arriving later picks the aura up
    let scout = put(&mut game, PlayerId::FIRST, "Murloc Scout");
    assert_eq!(game.calculate_attack(scout), 2);

    // a minion that stops being a murloc loses it
    game.transform(raider, "Sheep").unwrap();
    let sheep = *game.player(PlayerId::SECOND).minions.last().unwrap();
    assert_eq!(game.calculate_attack(sheep), 1);

    game.remove_from_board(oracle).unwrap();
    assert_eq!(game.calculate_attack(scout), 1);
    assert_eq!(game.calculate_attack(raptor), 3);
}

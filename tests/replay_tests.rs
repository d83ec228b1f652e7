//! Whole matches between agents, recorded and played back.

mod common;

use ccg_tags::agents::StrategyAgent;
use ccg_tags::cards::CharacterClass;
use ccg_tags::core::{GameConfig, PlayerId};
use ccg_tags::replay::{Replay, ReplayMove};
use ccg_tags::rules::{Game, GameBuilder, GameResult};

use common::{init_tracing, registry};

const MAGE: [&str; 6] = [
    "Wisp",
    "Frostbolt",
    "Bloodfen Raptor",
    "Arcane Missiles",
    "Chillwind Yeti",
    "Mana Wyrm",
];
const WARRIOR: [&str; 6] = [
    "Fiery War Axe",
    "Frostwolf Grunt",
    "Wisp",
    "Harvest Golem",
    "Whirlwind",
    "Sen'jin Shieldmasta",
];

fn config() -> GameConfig {
    GameConfig::new().with_max_turns(40)
}

fn deck(pattern: &[&str]) -> Vec<String> {
    pattern.iter().cycle().take(30).map(|c| (*c).to_string()).collect()
}

fn recorded_match(seed: u64) -> Game {
    init_tracing();
    GameBuilder::new(registry())
        .config(config())
        .deck(PlayerId::FIRST, CharacterClass::Mage, deck(&MAGE))
        .deck(PlayerId::SECOND, CharacterClass::Warrior, deck(&WARRIOR))
        .agent(PlayerId::FIRST, Box::new(StrategyAgent::random(seed)))
        .agent(PlayerId::SECOND, Box::new(StrategyAgent::predictable()))
        .seed(seed)
        .record()
        .build()
        .unwrap()
}

fn board(game: &Game) -> Vec<(String, i32)> {
    PlayerId::all()
        .flat_map(|p| {
            let player = game.player(p);
            std::iter::once(player.hero)
                .chain(player.minions.iter().copied())
                .map(|id| {
                    let c = game.character(id).unwrap();
                    (c.card.clone(), c.health)
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

#[test]
fn test_agents_finish_a_match() {
    let mut game = recorded_match(1);
    let result = game.start().unwrap();
    assert!(game.is_over());
    assert_eq!(game.result(), Some(&result));
    if let GameResult::Winner(winner) = result {
        assert!(game.hero(winner.opponent()).unwrap().health <= 0);
    }
}

#[test]
fn test_same_seed_same_match() {
    let mut a = recorded_match(9);
    let mut b = recorded_match(9);
    assert_eq!(a.start().unwrap(), b.start().unwrap());
    assert_eq!(a.replay().unwrap().to_text(), b.replay().unwrap().to_text());
}

#[test]
fn test_recording_shape() {
    let mut game = recorded_match(4);
    game.start().unwrap();
    let replay = game.replay().unwrap();
    assert_eq!(replay.header.decks.len(), 2);
    assert_eq!(replay.header.keeps.len(), 2);
    assert_eq!(replay.moves[0].mv, ReplayMove::Start);
    assert!(replay.moves.iter().any(|m| m.mv == ReplayMove::End));

    let text = replay.to_text();
    assert!(text.starts_with("deck(Mage,Wisp,Frostbolt,Bloodfen Raptor,Arcane Missiles,Chillwind Yeti,Mana Wyrm)\n"));
    assert!(text.contains("\nstart()\n"));
}

#[test]
fn test_text_replay_reproduces_match() {
    for seed in [2, 5, 13] {
        let mut game = recorded_match(seed);
        let result = game.start().unwrap();
        let text = game.replay().unwrap().to_text();

        let mut replayed = Replay::parse(&text).unwrap().play(registry(), config()).unwrap();
        assert_eq!(replayed.result(), Some(&result), "seed {seed}");
        assert_eq!(board(&replayed), board(&game), "seed {seed}");
        assert_eq!(replayed.replay().unwrap().to_text(), text, "seed {seed}");
    }
}

#[test]
fn test_json_replay_reproduces_match() {
    let mut game = recorded_match(7);
    game.start().unwrap();
    let replay = game.replay().unwrap();
    let json = replay.to_json().unwrap();
    let parsed = Replay::from_json(&json).unwrap();
    assert_eq!(parsed, replay);

    let mut replayed = parsed.play(registry(), config()).unwrap();
    assert_eq!(replayed.result(), game.result());
    assert_eq!(replayed.replay().unwrap(), replay);
}

#[test]
fn test_truncated_replay_stops_mid_match() {
    let mut game = recorded_match(3);
    game.start().unwrap();
    let mut replay = game.replay().unwrap();
    let ends: Vec<usize> = replay
        .moves
        .iter()
        .enumerate()
        .filter(|(_, m)| m.mv == ReplayMove::End)
        .map(|(i, _)| i)
        .collect();
    assert!(ends.len() >= 2);
    replay.moves.truncate(ends[1] + 1);

    let partial = replay.play(registry(), config()).unwrap();
    assert!(!partial.is_over());
    assert_eq!(partial.turn(), 3);
    assert_eq!(partial.current_player(), PlayerId::FIRST);
}

//! Combat, secrets and rule violations through the public API.

mod common;

use ccg_tags::cards::CharacterClass;
use ccg_tags::core::{EngineError, GameConfig, PlayerAction, PlayerId, RuleViolation};
use ccg_tags::tags::{Buff, Status};
use ccg_tags::triggers::EventKind;
use ccg_tags::EntityId;

use common::{game_with, hand_index, pass_until, put, wisp_game};

fn rule(err: EngineError) -> RuleViolation {
    err.rule().cloned().unwrap_or_else(|| panic!("expected a rule violation, got {err}"))
}

#[test]
fn test_simultaneous_exchange_skips_dead_taunt() {
    let mut game = wisp_game();
    let raptor = put(&mut game, PlayerId::FIRST, "Bloodfen Raptor");
    game.add_buff(raptor, Buff::new(Status::ChangeHealth { amount: 2 }));
    game.add_buff(raptor, Buff::new(Status::Charge));
    assert_eq!(game.calculate_attack(raptor), 3);
    assert_eq!(game.character(raptor).unwrap().health, 4);

    let geomancer = put(&mut game, PlayerId::SECOND, "Kobold Geomancer");
    let grunt = put(&mut game, PlayerId::SECOND, "Frostwolf Grunt");
    game.damage(grunt, 2, None).unwrap();
    assert!(game.is_dead(grunt));

    let enemy_hero = game.player(PlayerId::SECOND).hero;
    assert_eq!(game.attack_targets(PlayerId::FIRST), vec![geomancer, enemy_hero]);

    game.apply(
        PlayerId::FIRST,
        &PlayerAction::Attack {
            attacker: raptor,
            target: Some(geomancer),
        },
    )
    .unwrap();

    assert_eq!(game.character(raptor).unwrap().health, 2);
    assert!(game.player(PlayerId::SECOND).minions.is_empty());
    // the geomancer is older, so its death resolves first
    assert_eq!(
        game.player(PlayerId::SECOND).graveyard,
        vec!["Kobold Geomancer", "Frostwolf Grunt"]
    );
    assert_eq!(game.character(raptor).unwrap().attacks_performed, 1);
    assert!(!game.can_attack(raptor));
}

#[test]
fn test_taunt_must_be_attacked() {
    let mut game = wisp_game();
    let boar = put(&mut game, PlayerId::FIRST, "Stonetusk Boar");
    let wisp = put(&mut game, PlayerId::SECOND, "Wisp");
    let footman = put(&mut game, PlayerId::SECOND, "Goldshire Footman");
    assert_eq!(game.attack_targets(PlayerId::FIRST), vec![footman]);

    let err = game
        .apply(
            PlayerId::FIRST,
            &PlayerAction::Attack {
                attacker: boar,
                target: Some(wisp),
            },
        )
        .unwrap_err();
    assert_eq!(rule(err), RuleViolation::IllegalTarget(wisp));
    assert_eq!(game.character(boar).unwrap().attacks_performed, 0);
}

#[test]
fn test_divine_shield_absorbs_one_hit() {
    let mut game = wisp_game();
    let squire = put(&mut game, PlayerId::SECOND, "Argent Squire");
    game.damage(squire, 5, None).unwrap();
    let c = game.character(squire).unwrap();
    assert_eq!(c.health, 1);
    assert_eq!(c.counters.divine_shield, 0);
    game.damage(squire, 1, None).unwrap();
    assert!(game.is_dead(squire));
}

#[test]
fn test_armor_and_weapon() {
    let mut game = wisp_game();
    let me = game.player(PlayerId::FIRST).hero;
    let them = game.player(PlayerId::SECOND).hero;
    game.equip(PlayerId::FIRST, "Fiery War Axe").unwrap();
    game.increase_armor(them, 2).unwrap();
    assert_eq!(game.calculate_attack(me), 3);

    game.apply(
        PlayerId::FIRST,
        &PlayerAction::Attack {
            attacker: me,
            target: Some(them),
        },
    )
    .unwrap();
    let hero = game.character(them).unwrap();
    assert_eq!(hero.hero().unwrap().armor, 0);
    assert_eq!(hero.health, 29);
    let durability = game.character(me).unwrap().hero().unwrap().weapon.as_ref().map(|w| w.durability);
    assert_eq!(durability, Some(1));

    // the weapon only swings on its owner's turn
    game.apply(PlayerId::FIRST, &PlayerAction::EndTurn).unwrap();
    assert_eq!(game.calculate_attack(me), 0);
}

#[test]
fn test_secret_fires_once() {
    let mut game = game_with(
        (CharacterClass::Mage, "Ice Barrier"),
        (CharacterClass::Warrior, "Stonetusk Boar"),
        GameConfig::default(),
    );
    game.begin().unwrap();
    pass_until(&mut game, 5);
    game.apply(PlayerId::FIRST, &PlayerAction::play(0)).unwrap();
    assert_eq!(game.player(PlayerId::FIRST).secrets.len(), 1);

    game.apply(PlayerId::FIRST, &PlayerAction::EndTurn).unwrap();
    let watched = EntityId::player(PlayerId::SECOND);
    let armed = game.listeners(watched, EventKind::CharacterAttack);
    assert!(armed > 0);

    let hero = game.player(PlayerId::FIRST).hero;
    for _ in 0..2 {
        let index = hand_index(&game, PlayerId::SECOND, "Stonetusk Boar").unwrap();
        game.apply(PlayerId::SECOND, &PlayerAction::play(index)).unwrap();
        let boar = *game.player(PlayerId::SECOND).minions.last().unwrap();
        game.apply(
            PlayerId::SECOND,
            &PlayerAction::Attack {
                attacker: boar,
                target: Some(hero),
            },
        )
        .unwrap();
    }

    let c = game.character(hero).unwrap();
    assert_eq!(c.hero().unwrap().armor, 6, "8 armor from one reveal, minus two hits");
    assert_eq!(c.health, 30);
    assert!(game.player(PlayerId::FIRST).secrets.is_empty());
    assert_eq!(game.listeners(watched, EventKind::CharacterAttack), armed - 1);
}

#[test]
fn test_duplicate_secret_rejected() {
    let mut game = game_with(
        (CharacterClass::Hunter, "Explosive Trap"),
        (CharacterClass::Warrior, "Wisp"),
        GameConfig::default(),
    );
    game.begin().unwrap();
    pass_until(&mut game, 7);
    game.apply(PlayerId::FIRST, &PlayerAction::play(0)).unwrap();
    let err = game.apply(PlayerId::FIRST, &PlayerAction::play(0)).unwrap_err();
    assert_eq!(rule(err), RuleViolation::DuplicateSecret("Explosive Trap".to_string()));
    assert_eq!(game.player(PlayerId::FIRST).mana, 2);
}

#[test]
fn test_violations_leave_state_untouched() {
    let mut game = game_with(
        (CharacterClass::Mage, "Chillwind Yeti"),
        (CharacterClass::Warrior, "Chillwind Yeti"),
        GameConfig::default(),
    );
    game.begin().unwrap();
    let hand = game.player(PlayerId::FIRST).hand.clone();
    let history = game.history().len();

    let err = game.apply(PlayerId::FIRST, &PlayerAction::play(0)).unwrap_err();
    assert_eq!(
        rule(err),
        RuleViolation::InsufficientMana {
            needed: 4,
            available: 1
        }
    );
    let err = game.apply(PlayerId::FIRST, &PlayerAction::play(42)).unwrap_err();
    assert_eq!(rule(err), RuleViolation::NoSuchCard(42));
    let err = game.apply(PlayerId::SECOND, &PlayerAction::EndTurn).unwrap_err();
    assert_eq!(rule(err), RuleViolation::NotYourTurn);
    let err = game.apply(PlayerId::FIRST, &PlayerAction::UsePower { target: None }).unwrap_err();
    assert!(err.is_rule_violation());

    let fresh = put(&mut game, PlayerId::FIRST, "Wisp");
    let err = game
        .apply(
            PlayerId::FIRST,
            &PlayerAction::Attack {
                attacker: fresh,
                target: None,
            },
        )
        .unwrap_err();
    assert_eq!(rule(err), RuleViolation::CannotAttack(fresh));

    assert_eq!(game.player(PlayerId::FIRST).hand, hand);
    assert_eq!(game.player(PlayerId::FIRST).mana, 1);
    assert_eq!(game.history().len(), history);
    assert_eq!(game.current_player(), PlayerId::FIRST);
}

#[test]
fn test_targeted_spell_rejects_bad_target() {
    let mut game = game_with(
        (CharacterClass::Mage, "Frostbolt"),
        (CharacterClass::Warrior, "Wisp"),
        GameConfig::default(),
    );
    game.begin().unwrap();
    pass_until(&mut game, 3);
    let bogus = EntityId(999);
    let err = game
        .apply(
            PlayerId::FIRST,
            &PlayerAction::PlayCard {
                index: 0,
                target: Some(bogus),
                position: None,
            },
        )
        .unwrap_err();
    assert_eq!(rule(err), RuleViolation::IllegalTarget(bogus));

    let them = game.player(PlayerId::SECOND).hero;
    game.apply(
        PlayerId::FIRST,
        &PlayerAction::PlayCard {
            index: 0,
            target: Some(them),
            position: None,
        },
    )
    .unwrap();
    let hero = game.character(them).unwrap();
    assert_eq!(hero.health, 27);
    assert!(hero.is_frozen());
}

#[test]
fn test_dead_minion_takes_no_more_damage() {
    let mut game = wisp_game();
    let acolyte = put(&mut game, PlayerId::FIRST, "Acolyte of Pain");
    let hand = game.player(PlayerId::FIRST).hand.len();

    game.damage(acolyte, 3, None).unwrap();
    assert!(game.is_dead(acolyte));
    assert_eq!(game.player(PlayerId::FIRST).hand.len(), hand + 1);

    // still on the board until the flush, but out of the fight
    game.damage(acolyte, 1, None).unwrap();
    assert_eq!(game.player(PlayerId::FIRST).hand.len(), hand + 1);
    assert_eq!(game.character(acolyte).unwrap().health, 0);
}

#[test]
fn test_countered_spell_is_not_counted() {
    let mut game = game_with(
        (CharacterClass::Mage, "Counterspell"),
        (CharacterClass::Mage, "Frostbolt"),
        GameConfig::default(),
    );
    game.begin().unwrap();
    pass_until(&mut game, 5);
    game.apply(PlayerId::FIRST, &PlayerAction::play(0)).unwrap();
    game.apply(PlayerId::FIRST, &PlayerAction::EndTurn).unwrap();

    let hero = game.player(PlayerId::FIRST).hero;
    let bolt = hand_index(&game, PlayerId::SECOND, "Frostbolt").unwrap();
    game.apply(
        PlayerId::SECOND,
        &PlayerAction::PlayCard {
            index: bolt,
            target: Some(hero),
            position: None,
        },
    )
    .unwrap();

    let p = game.player(PlayerId::SECOND);
    assert_eq!(p.cards_played, 0);
    assert_eq!(p.mana, 1, "the mana is spent anyway");
    assert_eq!(game.character(hero).unwrap().health, 30);
    assert!(game.player(PlayerId::FIRST).secrets.is_empty());
}

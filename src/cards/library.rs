//! The built-in card set.
//!
//! Every definition here is data: a composition of actions, selectors,
//! conditions and events. Tokens produced by other cards (hero power
//! summons, transforms, deathrattle spawns) are uncollectible.

use super::attributes::{CharacterClass, MinionType, Rarity};
use super::definition::CardDefinition;
use crate::tags::{
    Action, Aura, Battlecry, CardQuery, Choice, Condition, Deathrattle, Effect, Enrage, Event, Picker, PlayerScope,
    Selector, Status, TargetKind, Targeting,
};
use crate::triggers::EventKind;

use CharacterClass::{Druid, Hunter, Mage, Paladin, Priest, Rogue, Shaman, Warlock, Warrior};
use PlayerScope::{Both, Enemy, Friendly};

/// Name of the card the second player receives.
pub const THE_COIN: &str = "The Coin";

fn on_target(action: Action) -> Battlecry {
    Battlecry::new(action, Selector::target())
}

fn on_self(action: Action) -> Battlecry {
    Battlecry::new(action, Selector::SelfSelector)
}

fn for_me(action: Action) -> Battlecry {
    Battlecry::new(action, Selector::player(Friendly))
}

fn draw() -> Action {
    Action::Draw { amount: 1 }
}

fn damage(amount: i32) -> Action {
    Action::Damage { amount }
}

fn user(selector: Selector) -> Selector {
    selector.with_picker(Picker::User)
}

fn other_friendly_minions() -> Selector {
    Selector::minions(Friendly).with_condition(Condition::IsNotSelf)
}

fn spell_target(kind: TargetKind, players: PlayerScope) -> Targeting {
    Targeting::new(kind, players)
}

fn neutral_minions() -> Vec<CardDefinition> {
    vec![
        CardDefinition::minion("Wisp", 0, 1, 1),
        CardDefinition::minion("Murloc Raider", 1, 2, 1).minion_type(MinionType::Murloc),
        CardDefinition::minion("Stonetusk Boar", 1, 1, 1)
            .minion_type(MinionType::Beast)
            .status(Status::Charge),
        CardDefinition::minion("Goldshire Footman", 1, 1, 2).status(Status::Taunt),
        CardDefinition::minion("Argent Squire", 1, 1, 1).status(Status::DivineShield),
        CardDefinition::minion("Leper Gnome", 1, 2, 1)
            .deathrattle(Deathrattle::new(damage(2), Selector::hero(Enemy))),
        CardDefinition::minion("Elven Archer", 1, 1, 1)
            .battlecry(Battlecry::new(damage(1), user(Selector::characters(Both)))),
        CardDefinition::minion("Worgen Infiltrator", 1, 2, 1).status(Status::Stealth),
        CardDefinition::minion("Shieldbearer", 1, 0, 4).status(Status::Taunt),
        CardDefinition::minion("Grimscale Oracle", 1, 1, 1)
            .minion_type(MinionType::Murloc)
            .aura(Aura::new(
                Status::ChangeAttack { amount: 1 },
                Selector::minions(Both).with_condition(Condition::and([
                    Condition::is_type(MinionType::Murloc),
                    Condition::IsNotSelf,
                ])),
            )),
        CardDefinition::minion("Bloodfen Raptor", 2, 3, 2).minion_type(MinionType::Beast),
        CardDefinition::minion("River Crocolisk", 2, 2, 3).minion_type(MinionType::Beast),
        CardDefinition::minion("Frostwolf Grunt", 2, 2, 2).status(Status::Taunt),
        CardDefinition::minion("Novice Engineer", 2, 1, 1).battlecry(for_me(draw())),
        CardDefinition::minion("Loot Hoarder", 2, 2, 1)
            .deathrattle(Deathrattle::new(draw(), Selector::player(Friendly))),
        CardDefinition::minion("Kobold Geomancer", 2, 2, 2)
            .aura(Aura::new(Status::SpellDamage { damage: 1 }, Selector::SelfSelector)),
        CardDefinition::minion("Faerie Dragon", 2, 3, 2)
            .minion_type(MinionType::Dragon)
            .status(Status::NoSpellTarget),
        CardDefinition::minion("Amani Berserker", 2, 2, 3).enrage(Enrage::new(
            vec![Status::ChangeAttack { amount: 3 }],
            Selector::SelfSelector,
        )),
        CardDefinition::minion("Knife Juggler", 2, 3, 2).rarity(Rarity::Rare).effect(Effect::new(
            Event::on(EventKind::MinionSummoned, Friendly).when(Condition::IsNotSelf),
            damage(1),
            Selector::characters(Enemy).with_picker(Picker::Random { count: 1 }),
        )),
        CardDefinition::minion("Wild Pyromancer", 2, 3, 2).rarity(Rarity::Rare).effect(Effect::new(
            Event::on(EventKind::CardUsed, Friendly).when(Condition::IsSpell),
            damage(1),
            Selector::minions(Both),
        )),
        CardDefinition::minion("Dire Wolf Alpha", 2, 2, 2)
            .minion_type(MinionType::Beast)
            .aura(Aura::new(
                Status::ChangeAttack { amount: 1 },
                Selector::minions(Friendly).with_condition(Condition::Adjacent),
            )),
        CardDefinition::minion("Murloc Tidehunter", 2, 2, 1)
            .minion_type(MinionType::Murloc)
            .battlecry(for_me(Action::summon("Murloc Scout"))),
        CardDefinition::minion("Youthful Brewmaster", 2, 3, 2)
            .battlecry(Battlecry::new(Action::Bounce, user(other_friendly_minions()))),
        CardDefinition::minion("Acolyte of Pain", 3, 1, 3).effect(Effect::new(
            Event::new(EventKind::Damaged),
            draw(),
            Selector::player(Friendly),
        )),
        CardDefinition::minion("Harvest Golem", 3, 2, 3)
            .minion_type(MinionType::Mech)
            .deathrattle(Deathrattle::new(
                Action::summon("Damaged Golem"),
                Selector::player(Friendly),
            )),
        CardDefinition::minion("Raid Leader", 3, 2, 2)
            .aura(Aura::new(Status::ChangeAttack { amount: 1 }, other_friendly_minions())),
        CardDefinition::minion("Ironbeak Owl", 3, 2, 1)
            .minion_type(MinionType::Beast)
            .battlecry(Battlecry::new(
                Action::Silence,
                user(Selector::minions(Both).with_condition(Condition::IsNotSelf)),
            )),
        CardDefinition::minion("Magma Rager", 3, 5, 1),
        CardDefinition::minion("Cult Master", 4, 4, 2).effect(Effect::new(
            Event::on(EventKind::MinionDied, Friendly).when(Condition::IsNotSelf),
            draw(),
            Selector::player(Friendly),
        )),
        CardDefinition::minion("Chillwind Yeti", 4, 4, 5),
        CardDefinition::minion("Sen'jin Shieldmasta", 4, 3, 5).status(Status::Taunt),
        CardDefinition::minion("Gnomish Inventor", 4, 2, 4).battlecry(for_me(draw())),
        CardDefinition::minion("Oasis Snapjaw", 4, 2, 7).minion_type(MinionType::Beast),
        CardDefinition::minion("Abomination", 5, 4, 4)
            .rarity(Rarity::Rare)
            .status(Status::Taunt)
            .deathrattle(Deathrattle::new(damage(2), Selector::characters(Both))),
        CardDefinition::minion("Booty Bay Bodyguard", 5, 5, 4).status(Status::Taunt),
        CardDefinition::minion("Venture Co. Mercenary", 5, 7, 6).aura(Aura::new(
            Status::ManaChange {
                amount: 3,
                minimum: 0,
                card: Some(Condition::IsMinion),
            },
            Selector::player(Friendly),
        )),
        CardDefinition::minion("Boulderfist Ogre", 6, 6, 7),
        CardDefinition::minion("Core Hound", 7, 9, 5).minion_type(MinionType::Beast),
        CardDefinition::minion("Stormwind Champion", 7, 6, 6)
            .aura(Aura::new(Status::ChangeAttack { amount: 1 }, other_friendly_minions()))
            .aura(Aura::new(Status::ChangeHealth { amount: 1 }, other_friendly_minions())),
        CardDefinition::minion("War Golem", 7, 7, 7),
    ]
}

fn mage_cards() -> Vec<CardDefinition> {
    vec![
        CardDefinition::minion("Mana Wyrm", 1, 1, 3).effect(Effect::new(
            Event::on(EventKind::SpellCast, Friendly),
            Action::give(Status::ChangeAttack { amount: 1 }),
            Selector::SelfSelector,
        )),
        CardDefinition::minion("Sorcerer's Apprentice", 2, 3, 2).aura(Aura::new(
            Status::ManaChange {
                amount: -1,
                minimum: 0,
                card: Some(Condition::IsSpell),
            },
            Selector::player(Friendly),
        )),
        CardDefinition::minion("Water Elemental", 4, 3, 6).effect(Effect::new(
            Event::new(EventKind::DidDamage),
            Action::Freeze,
            Selector::target(),
        )),
        CardDefinition::spell("Arcane Missiles", 1).battlecry(Battlecry::new(
            damage(1),
            Selector::characters(Enemy).with_picker(Picker::Random { count: 3 }),
        )),
        CardDefinition::spell("Frostbolt", 2)
            .targeting_with(Targeting::any_character())
            .battlecry(Battlecry::with_actions(vec![damage(3), Action::Freeze], Selector::target())),
        CardDefinition::spell("Arcane Explosion", 2).battlecry(Battlecry::new(damage(1), Selector::minions(Enemy))),
        CardDefinition::spell("Arcane Intellect", 3).battlecry(for_me(Action::Draw { amount: 2 })),
        CardDefinition::spell("Polymorph", 4)
            .targeting_with(Targeting::any_minion())
            .battlecry(on_target(Action::Transform {
                card: CardQuery::named("Sheep"),
            })),
        CardDefinition::spell("Fireball", 4)
            .targeting_with(Targeting::any_character())
            .battlecry(on_target(damage(6))),
        CardDefinition::spell("Flamestrike", 7).battlecry(Battlecry::new(damage(4), Selector::minions(Enemy))),
        CardDefinition::secret(
            "Counterspell",
            3,
            Event::on(EventKind::CardPlayed, Enemy).when(Condition::IsSpell),
            vec![Action::Counter],
            Selector::target(),
        )
        .rarity(Rarity::Rare),
        CardDefinition::secret(
            "Ice Barrier",
            3,
            Event::on(EventKind::CharacterAttack, Enemy).when(Condition::TargetIsHero),
            vec![Action::IncreaseArmor { amount: 8 }],
            Selector::hero(Friendly),
        ),
        CardDefinition::secret(
            "Vaporize",
            3,
            Event::on(EventKind::CharacterAttack, Enemy)
                .when(Condition::and([Condition::TargetIsHero, Condition::IsMinion])),
            vec![Action::Kill],
            Selector::target(),
        )
        .rarity(Rarity::Rare),
    ]
    .into_iter()
    .map(|c| c.class(Mage))
    .collect()
}

fn hunter_cards() -> Vec<CardDefinition> {
    vec![
        CardDefinition::minion("Timber Wolf", 1, 1, 1)
            .minion_type(MinionType::Beast)
            .aura(Aura::new(
                Status::ChangeAttack { amount: 1 },
                other_friendly_minions()
                    .with_condition(Condition::and([Condition::IsNotSelf, Condition::is_type(MinionType::Beast)])),
            )),
        CardDefinition::spell("Arcane Shot", 1)
            .targeting_with(Targeting::any_character())
            .battlecry(on_target(damage(2))),
        CardDefinition::spell("Multi-Shot", 4).battlecry(Battlecry::new(
            damage(3),
            Selector::minions(Enemy).with_picker(Picker::Random { count: 2 }),
        )),
        CardDefinition::secret(
            "Explosive Trap",
            2,
            Event::on(EventKind::CharacterAttack, Enemy).when(Condition::TargetIsHero),
            vec![damage(2)],
            Selector::characters(Enemy),
        ),
        CardDefinition::secret(
            "Snipe",
            2,
            Event::on(EventKind::MinionPlayed, Enemy),
            vec![damage(4)],
            Selector::target(),
        ),
    ]
    .into_iter()
    .map(|c| c.class(Hunter))
    .collect()
}

fn shaman_cards() -> Vec<CardDefinition> {
    vec![
        CardDefinition::minion("Dust Devil", 1, 3, 1).status(Status::Windfury).overload(2),
        CardDefinition::minion("Flametongue Totem", 2, 0, 3)
            .minion_type(MinionType::Totem)
            .aura(Aura::new(
                Status::ChangeAttack { amount: 2 },
                Selector::minions(Friendly).with_condition(Condition::Adjacent),
            )),
        CardDefinition::spell("Lightning Bolt", 1)
            .overload(1)
            .targeting_with(Targeting::any_character())
            .battlecry(on_target(damage(3))),
        CardDefinition::spell("Rockbiter Weapon", 1)
            .targeting_with(spell_target(TargetKind::Character, Friendly))
            .battlecry(on_target(Action::IncreaseTempAttack { amount: 3 })),
        CardDefinition::spell("Feral Spirit", 3).overload(2).battlecry(for_me(Action::Summon {
            card: CardQuery::named("Spirit Wolf"),
            count: 2,
        })),
        CardDefinition::spell("Hex", 3)
            .targeting_with(Targeting::any_minion())
            .battlecry(on_target(Action::Transform {
                card: CardQuery::named("Frog"),
            })),
        CardDefinition::weapon("Stormforged Axe", 2, 2, 3).overload(1),
    ]
    .into_iter()
    .map(|c| c.class(Shaman))
    .collect()
}

fn warrior_cards() -> Vec<CardDefinition> {
    vec![
        CardDefinition::weapon("Fiery War Axe", 2, 3, 2),
        CardDefinition::weapon("Arcanite Reaper", 5, 5, 2),
        CardDefinition::spell("Execute", 1)
            .targeting_with(spell_target(TargetKind::Minion, Enemy).when(Condition::IsDamaged))
            .battlecry(on_target(Action::Kill)),
        CardDefinition::spell("Whirlwind", 1).battlecry(Battlecry::new(damage(1), Selector::minions(Both))),
        CardDefinition::spell("Heroic Strike", 2).battlecry(Battlecry::new(
            Action::IncreaseTempAttack { amount: 4 },
            Selector::hero(Friendly),
        )),
        CardDefinition::spell("Shield Block", 3)
            .battlecry(Battlecry::new(Action::IncreaseArmor { amount: 5 }, Selector::hero(Friendly)))
            .battlecry(for_me(draw())),
    ]
    .into_iter()
    .map(|c| c.class(Warrior))
    .collect()
}

fn druid_cards() -> Vec<CardDefinition> {
    vec![
        CardDefinition::spell("Innervate", 0).battlecry(for_me(Action::GainMana { amount: 2 })),
        CardDefinition::spell("Moonfire", 0)
            .targeting_with(Targeting::any_character())
            .battlecry(on_target(damage(1))),
        CardDefinition::spell("Claw", 1).battlecry(Battlecry::with_actions(
            vec![
                Action::IncreaseTempAttack { amount: 2 },
                Action::IncreaseArmor { amount: 2 },
            ],
            Selector::hero(Friendly),
        )),
        CardDefinition::spell("Mark of the Wild", 2)
            .targeting_with(Targeting::any_minion())
            .battlecry(Battlecry::with_actions(
                vec![
                    Action::give(Status::Taunt),
                    Action::give(Status::ChangeAttack { amount: 2 }),
                    Action::give(Status::ChangeHealth { amount: 2 }),
                ],
                Selector::target(),
            )),
        CardDefinition::spell("Wrath", 2)
            .targeting_with(Targeting::any_minion())
            .choice(Choice::new("Solar Wrath", vec![on_target(damage(3))]))
            .choice(Choice::new("Nature's Wrath", vec![on_target(damage(1)), for_me(draw())])),
        CardDefinition::spell("Savage Roar", 3).battlecry(Battlecry::new(
            Action::IncreaseTempAttack { amount: 2 },
            Selector::characters(Friendly),
        )),
        CardDefinition::minion("Druid of the Claw", 5, 4, 4)
            .minion_type(MinionType::Beast)
            .choice(Choice::new("Cat Form", vec![on_self(Action::give(Status::Charge))]))
            .choice(Choice::new(
                "Bear Form",
                vec![Battlecry::with_actions(
                    vec![
                        Action::give(Status::ChangeHealth { amount: 2 }),
                        Action::give(Status::Taunt),
                    ],
                    Selector::SelfSelector,
                )],
            )),
        CardDefinition::spell("Starfire", 6)
            .targeting_with(Targeting::any_character())
            .battlecry(on_target(damage(5)))
            .battlecry(for_me(draw())),
    ]
    .into_iter()
    .map(|c| c.class(Druid))
    .collect()
}

fn priest_cards() -> Vec<CardDefinition> {
    vec![
        CardDefinition::minion("Northshire Cleric", 1, 1, 3).effect(Effect::new(
            Event::on(EventKind::CharacterHealed, Both).when(Condition::IsMinion),
            draw(),
            Selector::player(Friendly),
        )),
        CardDefinition::spell("Power Word: Shield", 1)
            .targeting_with(Targeting::any_minion())
            .battlecry(on_target(Action::give(Status::ChangeHealth { amount: 2 })))
            .battlecry(for_me(draw())),
        CardDefinition::spell("Holy Smite", 1)
            .targeting_with(Targeting::any_character())
            .battlecry(on_target(damage(2))),
        CardDefinition::spell("Shadow Word: Pain", 2)
            .targeting_with(Targeting::any_minion().when(Condition::AttackLessThanOrEqualTo {
                value: 3,
                include_self: false,
            }))
            .battlecry(on_target(Action::Kill)),
        CardDefinition::spell("Mind Blast", 2).battlecry(Battlecry::new(damage(5), Selector::hero(Enemy))),
        CardDefinition::spell("Shadow Word: Death", 3)
            .targeting_with(Targeting::any_minion().when(Condition::AttackGreaterThan {
                value: 4,
                include_self: false,
            }))
            .battlecry(on_target(Action::Kill)),
    ]
    .into_iter()
    .map(|c| c.class(Priest))
    .collect()
}

fn paladin_cards() -> Vec<CardDefinition> {
    vec![
        CardDefinition::weapon("Light's Justice", 1, 1, 4),
        CardDefinition::spell("Blessing of Might", 1)
            .targeting_with(Targeting::any_minion())
            .battlecry(on_target(Action::give(Status::ChangeAttack { amount: 3 }))),
        CardDefinition::spell("Hand of Protection", 1)
            .targeting_with(Targeting::any_minion())
            .battlecry(on_target(Action::give(Status::DivineShield))),
        CardDefinition::spell("Humility", 1)
            .targeting_with(Targeting::any_minion())
            .battlecry(on_target(Action::give(Status::SetAttack { amount: 1 }))),
        CardDefinition::spell("Blessing of Kings", 4)
            .targeting_with(Targeting::any_minion())
            .battlecry(Battlecry::with_actions(
                vec![
                    Action::give(Status::ChangeAttack { amount: 4 }),
                    Action::give(Status::ChangeHealth { amount: 4 }),
                ],
                Selector::target(),
            )),
        CardDefinition::spell("Hammer of Wrath", 4)
            .targeting_with(Targeting::any_character())
            .battlecry(on_target(damage(3)))
            .battlecry(for_me(draw())),
        CardDefinition::minion("Guardian of Kings", 7, 5, 6)
            .battlecry(Battlecry::new(Action::Heal { amount: 6 }, Selector::hero(Friendly))),
    ]
    .into_iter()
    .map(|c| c.class(Paladin))
    .collect()
}

fn rogue_cards() -> Vec<CardDefinition> {
    vec![
        CardDefinition::spell("Backstab", 0)
            .targeting_with(Targeting::any_minion().when(Condition::not(Condition::IsDamaged)))
            .battlecry(on_target(damage(2))),
        CardDefinition::spell("Preparation", 0).rarity(Rarity::Epic).battlecry(for_me(Action::GiveAura {
            aura: Aura::new(
                Status::ManaChange {
                    amount: -3,
                    minimum: 0,
                    card: Some(Condition::IsSpell),
                },
                Selector::player(Friendly),
            )
            .until(Event::on(EventKind::SpellCast, Friendly)),
        })),
        CardDefinition::spell("Sinister Strike", 1).battlecry(Battlecry::new(damage(3), Selector::hero(Enemy))),
        CardDefinition::spell("Sap", 2)
            .targeting_with(spell_target(TargetKind::Minion, Enemy))
            .battlecry(on_target(Action::Bounce)),
        CardDefinition::spell("Eviscerate", 2)
            .targeting_with(Targeting::any_character())
            .battlecry(on_target(damage(2)))
            .combo(on_target(damage(4))),
        CardDefinition::minion("Defias Ringleader", 2, 2, 2).combo(for_me(Action::summon("Defias Bandit"))),
        CardDefinition::spell("Fan of Knives", 3)
            .battlecry(Battlecry::new(damage(1), Selector::minions(Enemy)))
            .battlecry(for_me(draw())),
        CardDefinition::minion("SI:7 Agent", 3, 3, 3)
            .rarity(Rarity::Rare)
            .combo(Battlecry::new(damage(2), user(Selector::characters(Both)))),
        CardDefinition::spell("Assassinate", 5)
            .targeting_with(spell_target(TargetKind::Minion, Enemy))
            .battlecry(on_target(Action::Kill)),
        CardDefinition::weapon("Assassin's Blade", 5, 3, 4),
    ]
    .into_iter()
    .map(|c| c.class(Rogue))
    .collect()
}

fn warlock_cards() -> Vec<CardDefinition> {
    vec![
        CardDefinition::minion("Voidwalker", 1, 1, 3)
            .minion_type(MinionType::Demon)
            .status(Status::Taunt),
        CardDefinition::minion("Flame Imp", 1, 3, 2)
            .minion_type(MinionType::Demon)
            .battlecry(Battlecry::new(damage(3), Selector::hero(Friendly))),
        CardDefinition::spell("Soulfire", 1)
            .targeting_with(Targeting::any_character())
            .battlecry(on_target(damage(4)))
            .battlecry(for_me(Action::Discard { amount: 1 })),
        CardDefinition::spell("Shadow Bolt", 3)
            .targeting_with(Targeting::any_minion())
            .battlecry(on_target(damage(4))),
        CardDefinition::spell("Drain Life", 3)
            .targeting_with(Targeting::any_character())
            .battlecry(on_target(damage(2)))
            .battlecry(Battlecry::new(Action::Heal { amount: 2 }, Selector::hero(Friendly))),
        CardDefinition::spell("Hellfire", 4).battlecry(Battlecry::new(damage(3), Selector::characters(Both))),
        CardDefinition::minion("Dread Infernal", 6, 6, 6)
            .minion_type(MinionType::Demon)
            .battlecry(Battlecry::new(
                damage(1),
                Selector::characters(Both).with_condition(Condition::IsNotSelf),
            )),
    ]
    .into_iter()
    .map(|c| c.class(Warlock))
    .collect()
}

fn tokens() -> Vec<CardDefinition> {
    let totem = |name: &str, attack, health| {
        CardDefinition::minion(name, 1, attack, health)
            .class(Shaman)
            .minion_type(MinionType::Totem)
    };
    vec![
        CardDefinition::spell(THE_COIN, 0).battlecry(for_me(Action::GainMana { amount: 1 })),
        CardDefinition::minion("Damaged Golem", 1, 2, 1).minion_type(MinionType::Mech),
        CardDefinition::minion("Murloc Scout", 0, 1, 1).minion_type(MinionType::Murloc),
        CardDefinition::minion("Sheep", 0, 1, 1).minion_type(MinionType::Beast),
        CardDefinition::minion("Frog", 0, 0, 1)
            .minion_type(MinionType::Beast)
            .status(Status::Taunt),
        CardDefinition::minion("Spirit Wolf", 2, 2, 3).class(Shaman).status(Status::Taunt),
        CardDefinition::minion("Defias Bandit", 1, 2, 1).class(Rogue),
        CardDefinition::minion("Silver Hand Recruit", 1, 1, 1).class(Paladin),
        CardDefinition::weapon("Wicked Knife", 1, 1, 2).class(Rogue),
        totem("Searing Totem", 1, 1),
        totem("Stoneclaw Totem", 0, 2).status(Status::Taunt),
        totem("Healing Totem", 0, 2).effect(Effect::new(
            Event::on(EventKind::TurnEnded, Friendly),
            Action::Heal { amount: 1 },
            Selector::minions(Friendly),
        )),
        totem("Wrath of Air Totem", 0, 2).aura(Aura::new(Status::SpellDamage { damage: 1 }, Selector::SelfSelector)),
    ]
    .into_iter()
    .map(|c| c.rarity(Rarity::Free).uncollectible())
    .collect()
}

/// Every built-in card definition.
#[must_use]
pub fn basic_cards() -> Vec<CardDefinition> {
    let mut cards = neutral_minions();
    cards.extend(mage_cards());
    cards.extend(hunter_cards());
    cards.extend(shaman_cards());
    cards.extend(warrior_cards());
    cards.extend(druid_cards());
    cards.extend(priest_cards());
    cards.extend(paladin_cards());
    cards.extend(rogue_cards());
    cards.extend(warlock_cards());
    cards.extend(tokens());
    cards
}

//! Hero powers: one per class, usable once per turn.

use crate::cards::CharacterClass;
use crate::core::{EntityId, PlayerId, Result, RuleViolation};
use crate::entities::Character;
use crate::replay::ReplayMove;
use crate::tags::{Action, Battlecry, CardQuery, PlayerScope, Selector, Targeting};
use crate::triggers::{EventKind, GameEvent};

use super::game::Game;

const TOTEMS: [&str; 4] = ["Healing Totem", "Searing Totem", "Stoneclaw Totem", "Wrath of Air Totem"];

/// A hero power. Its battlecries run with the hero as owner and the chosen
/// target, if any, as focus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroPower {
    pub name: &'static str,
    pub targeting: Option<Targeting>,
    pub battlecries: Vec<Battlecry>,
}

impl HeroPower {
    fn untargeted(name: &'static str, battlecries: Vec<Battlecry>) -> Self {
        Self {
            name,
            targeting: None,
            battlecries,
        }
    }

    fn targeted(name: &'static str, action: Action) -> Self {
        Self {
            name,
            targeting: Some(Targeting::any_character()),
            battlecries: vec![Battlecry::new(action, Selector::target())],
        }
    }

    #[must_use]
    pub fn for_class(class: CharacterClass) -> Option<Self> {
        let own_hero = Selector::SelfSelector;
        let power = match class {
            CharacterClass::All => return None,
            CharacterClass::Mage => Self::targeted("Fireblast", Action::Damage { amount: 1 }),
            CharacterClass::Priest => Self::targeted("Lesser Heal", Action::Heal { amount: 2 }),
            CharacterClass::Warrior => {
                Self::untargeted("Armor Up!", vec![Battlecry::new(Action::IncreaseArmor { amount: 2 }, own_hero)])
            }
            CharacterClass::Hunter => Self::untargeted(
                "Steady Shot",
                vec![Battlecry::new(Action::Damage { amount: 2 }, Selector::hero(PlayerScope::Enemy))],
            ),
            CharacterClass::Rogue => Self::untargeted(
                "Dagger Mastery",
                vec![Battlecry::new(
                    Action::Equip {
                        weapon: "Wicked Knife".to_string(),
                    },
                    own_hero,
                )],
            ),
            CharacterClass::Paladin => Self::untargeted(
                "Reinforce",
                vec![Battlecry::new(Action::summon("Silver Hand Recruit"), own_hero)],
            ),
            CharacterClass::Shaman => Self::untargeted(
                "Totemic Call",
                vec![Battlecry::new(
                    Action::Summon {
                        card: CardQuery::RandomOf {
                            cards: TOTEMS.iter().map(|t| (*t).to_string()).collect(),
                            not_on_board: true,
                        },
                        count: 1,
                    },
                    own_hero,
                )],
            ),
            CharacterClass::Warlock => Self::untargeted(
                "Life Tap",
                vec![
                    Battlecry::new(Action::Draw { amount: 1 }, Selector::player(PlayerScope::Friendly)),
                    Battlecry::new(Action::Damage { amount: 2 }, own_hero),
                ],
            ),
            CharacterClass::Druid => Self::untargeted(
                "Shapeshift",
                vec![Battlecry::with_actions(
                    vec![
                        Action::IncreaseTempAttack { amount: 1 },
                        Action::IncreaseArmor { amount: 1 },
                    ],
                    own_hero,
                )],
            ),
        };
        Some(power)
    }

    fn summons(&self) -> bool {
        self.battlecries
            .iter()
            .flat_map(|b| &b.actions)
            .any(|a| matches!(a, Action::Summon { .. }))
    }
}

impl Game {
    /// The power of `player`'s hero.
    #[must_use]
    pub fn hero_power(&self, player: PlayerId) -> Option<HeroPower> {
        let class = self.hero(player)?.hero()?.class;
        HeroPower::for_class(class)
    }

    /// Validate a power use; returns the power and its target candidates.
    fn check_power(
        &self,
        player: PlayerId,
        target: Option<EntityId>,
    ) -> std::result::Result<(HeroPower, Vec<EntityId>), RuleViolation> {
        self.ensure_running()?;
        let power = self.hero_power(player).ok_or(RuleViolation::PowerUnavailable)?;
        let p = self.player(player);
        let used = self.hero(player).and_then(Character::hero).map_or(true, |h| h.power_used);
        if used || p.mana < self.config.hero_power_cost {
            return Err(RuleViolation::PowerUnavailable);
        }
        if power.summons() {
            if p.minions.len() >= self.config.max_board_size {
                return Err(RuleViolation::PowerUnavailable);
            }
            let on_board = |name: &str| p.minions.iter().any(|m| self.card_name_of(*m) == Some(name));
            if power.name == "Totemic Call" && TOTEMS.iter().all(|t| on_board(t)) {
                return Err(RuleViolation::PowerUnavailable);
            }
        }
        let candidates = match &power.targeting {
            Some(t) => {
                let candidates = t.candidates(self, p.hero, true);
                if candidates.is_empty() {
                    return Err(RuleViolation::MissingTarget);
                }
                candidates
            }
            None => Vec::new(),
        };
        if let Some(t) = target {
            if !candidates.contains(&t) {
                return Err(RuleViolation::IllegalTarget(t));
            }
        }
        Ok((power, candidates))
    }

    #[must_use]
    pub fn can_use_power(&self, player: PlayerId) -> bool {
        self.check_power(player, None).is_ok()
    }

    /// Use the current player's hero power.
    pub fn use_power(&mut self, target: Option<EntityId>) -> Result<()> {
        let player = self.current;
        let (power, candidates) = self.check_power(player, target).map_err(|v| {
            tracing::warn!(player = %player, error = %v, "illegal hero power use");
            v
        })?;
        let cost = self.config.hero_power_cost;
        let hero = self.player(player).hero;
        self.player_mut(player).mana -= cost;
        if let Some(h) = self.character_mut(hero).and_then(Character::hero_mut) {
            h.power_used = true;
        }
        self.with_journal(|j, g| j.begin(g, ReplayMove::Power { target: None }));
        self.pending.target = target;
        let focus = if power.targeting.is_some() {
            self.choose_target(player, &candidates)?
        } else {
            None
        };
        tracing::debug!(player = %player, power = power.name, target = ?focus, "hero power");
        self.trigger(EntityId::player(player), GameEvent::new(EventKind::UsedPower).with_subject(hero))?;
        for battlecry in &power.battlecries {
            battlecry.run(self, hero, focus)?;
        }
        self.check_delayed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_class_has_a_power() {
        for class in CharacterClass::PLAYABLE {
            let power = HeroPower::for_class(class).unwrap();
            assert!(!power.battlecries.is_empty(), "{}", power.name);
        }
        assert!(HeroPower::for_class(CharacterClass::All).is_none());
    }

    #[test]
    fn test_targeted_powers() {
        let targeted: Vec<_> = CharacterClass::PLAYABLE
            .into_iter()
            .filter_map(HeroPower::for_class)
            .filter(|p| p.targeting.is_some())
            .map(|p| p.name)
            .collect();
        assert_eq!(targeted, vec!["Fireblast", "Lesser Heal"]);
    }

    #[test]
    fn test_summon_detection() {
        assert!(HeroPower::for_class(CharacterClass::Shaman).unwrap().summons());
        assert!(HeroPower::for_class(CharacterClass::Paladin).unwrap().summons());
        assert!(!HeroPower::for_class(CharacterClass::Mage).unwrap().summons());
    }
}

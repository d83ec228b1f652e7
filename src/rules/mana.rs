//! The mana-cost pipeline.

use crate::core::EntityId;
use crate::tags::ConditionContext;

use super::game::Game;

impl Game {
    /// Cost of a card instance after its owner's filters.
    ///
    /// Filters run in installation order; each one clamps the running cost
    /// to its own floor before the next is applied.
    #[must_use]
    pub fn mana_cost(&self, card: EntityId) -> i32 {
        let Some(instance) = self.card(card) else {
            return 0;
        };
        let Some(def) = self.registry.get(&instance.name) else {
            return 0;
        };
        let owner = EntityId::player(instance.owner);
        self.player(instance.owner)
            .mana_filters
            .iter()
            .filter(|f| {
                f.condition
                    .as_ref()
                    .map_or(true, |c| c.evaluate(&ConditionContext::subject(self, owner, card)))
            })
            .fold(def.mana, |cost, f| f.apply(cost))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::PlayerId;
    use crate::entities::ManaFilter;
    use crate::rules::test_support::small_game;
    use crate::tags::Condition;

    #[test]
    fn test_filters_clamp_in_order() {
        let mut game = small_game();
        let card = game.add_card_to_hand(PlayerId::FIRST, "Chillwind Yeti").unwrap().unwrap();
        assert_eq!(game.mana_cost(card), 4);

        let filters = &mut game.player_mut(PlayerId::FIRST).mana_filters;
        filters.push(ManaFilter { amount: -2, minimum: 0, condition: None, source: None });
        filters.push(ManaFilter { amount: -3, minimum: 1, condition: None, source: None });
        assert_eq!(game.mana_cost(card), 1);
    }

    #[test]
    fn test_conditional_filter() {
        let mut game = small_game();
        let yeti = game.add_card_to_hand(PlayerId::FIRST, "Chillwind Yeti").unwrap().unwrap();
        let bolt = game.add_card_to_hand(PlayerId::FIRST, "Frostbolt").unwrap().unwrap();
        game.player_mut(PlayerId::FIRST).mana_filters.push(ManaFilter {
            amount: -1,
            minimum: 0,
            condition: Some(Condition::IsSpell),
            source: None,
        });
        assert_eq!(game.mana_cost(yeti), 4);
        assert_eq!(game.mana_cost(bolt), 1);
    }
}

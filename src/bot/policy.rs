/// Heuristic policy over the engine's two read surfaces: the preflop
/// pair ladder and the postflop stronger-enemy chance. Thresholds are
/// BotSettings data. Internal odds errors degrade to an abandoned
/// decision, which folds, never a panic mid-round.
pub struct Bot {
    settings: BotSettings,
    odds: Arc<OddsTable>,
    rng: SmallRng,
    cooldown: u32,
}

impl Bot {
    pub fn new(settings: BotSettings, odds: Arc<OddsTable>, seed: u64) -> Self {
        Self {
            settings,
            odds,
            rng: SmallRng::seed_from_u64(seed),
            cooldown: 0,
        }
    }

    fn preflop(&mut self, ballot: &Ballot) -> Option<Action> {
        let rank = match self.odds.pair_rank(ballot.hole) {
            Ok(rank) => rank,
            Err(e) => {
                log::warn!("preflop lookup failed: {}", e);
                return None;
            }
        };
        let confidence = rank as f64 / self.odds.highest_pair_rank().max(1) as f64;
        if rank >= self.settings.strong_pair_threshold && !self.silent() {
            return Some(self.value_raise(ballot, confidence));
        }
        if rank >= self.settings.trust_pair_rank_threshold {
            return Some(Action::Call);
        }
        match self.overcommitted(ballot) {
            true => Some(Action::Fold),
            false => Some(Action::Call),
        }
    }

    fn postflop(&mut self, ballot: &Ballot) -> Option<Action> {
        let cards = ballot
            .hole
            .iter()
            .chain(ballot.community.iter())
            .copied()
            .collect::<Vec<Card>>();
        let strength = match evaluate(&cards) {
            Ok(combination) => combination.strength(),
            Err(e) => {
                log::warn!("self-evaluation failed: {}", e);
                return None;
            }
        };
        let threat = match self.odds.chance_of_stronger(ballot.community, strength) {
            Ok(Some(threat)) => threat,
            Ok(None) => return Some(Action::Call),
            Err(e) => {
                log::warn!("postflop lookup failed: {}", e);
                return None;
            }
        };
        if threat > self.settings.panic_threshold && self.overcommitted(ballot) {
            return Some(Action::Fold);
        }
        if threat > self.settings.enemy_stronger_middle_threshold {
            return Some(Action::Call);
        }
        if threat < self.settings.enemy_stronger_panic_threshold && !self.silent() {
            return Some(self.value_raise(ballot, 1.0 - threat));
        }
        Some(Action::Call)
    }

    fn bluff(&mut self, ballot: &Ballot) -> Option<Action> {
        if self.cooldown < self.settings.min_rounds_without_fool {
            return None;
        }
        if self.rng.random::<f64>() >= self.settings.fool_chance {
            return None;
        }
        self.cooldown = 0;
        let amount = (ballot.balance as f64 * self.settings.fool_raise_percent) as Chips;
        match amount > 0 {
            true => Some(Action::Raise(amount)),
            false => None,
        }
    }

    fn value_raise(&mut self, ballot: &Ballot, confidence: f64) -> Action {
        let amount = (ballot.balance as f64
            * self.settings.strong_pair_raise_percent
            * confidence
            + ballot.pot as f64 * self.settings.raise_offset) as Chips;
        let amount = amount.min(ballot.balance - ballot.to_call());
        match amount > 0 {
            true => Action::Raise(amount),
            false => Action::Call,
        }
    }

    /// slow-play roll.
    fn silent(&mut self) -> bool {
        self.rng.random::<f64>() < self.settings.silent_chance
    }

    /// the call would eat too deep into the remaining stack.
    fn overcommitted(&self, ballot: &Ballot) -> bool {
        ballot.to_call() as f64 > ballot.balance as f64 * self.settings.low_money_threshold
    }
}

impl Policy for Bot {
    fn decide(&mut self, ballot: &Ballot) -> Option<Action> {
        self.cooldown += 1;
        if let Some(action) = self.bluff(ballot) {
            return Some(action);
        }
        match ballot.community.len() < 3 {
            true => self.preflop(ballot),
            false => self.postflop(ballot),
        }
    }
}

use crate::Chips;
use crate::bot::settings::BotSettings;
use crate::cards::card::Card;
use crate::evaluation::evaluator::evaluate;
use crate::odds::table::OddsTable;
use crate::table::action::Action;
use crate::table::driver::Ballot;
use crate::table::driver::Policy;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::sync::Arc;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rank::Rank;
    use crate::cards::suit::Suit;

    fn card(s: &str) -> Card {
        Card::try_from(s).unwrap()
    }

    fn mini_deck() -> Vec<Card> {
        [Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]
            .into_iter()
            .flat_map(|rank| Suit::all().into_iter().map(move |suit| Card::new(rank, suit)))
            .collect()
    }

    fn sober() -> BotSettings {
        // no bluffs, no slow-play, so decisions are deterministic
        BotSettings {
            fool_chance: 0.0,
            silent_chance: 0.0,
            ..BotSettings::default()
        }
    }

    fn bot(settings: BotSettings) -> Bot {
        Bot::new(settings, Arc::new(OddsTable::build(&mini_deck())), 3)
    }

    fn ballot<'a>(hole: [Card; 2], community: &'a [Card], minimum_bet: Chips) -> Ballot<'a> {
        Ballot {
            hole,
            community,
            balance: 100,
            bet: 0,
            minimum_bet,
            pot: 10,
        }
    }

    #[test]
    fn always_decides_something() {
        let mut bot = bot(sober());
        let hole = [card("As"), card("Kd")];
        assert!(bot.decide(&ballot(hole, &[], 0)).is_some());
        let board = [card("Qh"), card("Jh"), card("Kc")];
        assert!(bot.decide(&ballot(hole, &board, 0)).is_some());
    }

    #[test]
    fn foreign_cards_degrade_to_a_fold() {
        let mut bot = bot(sober());
        // ranks outside the table the bot was built from
        let hole = [card("2s"), card("7d")];
        assert_eq!(bot.decide(&ballot(hole, &[], 0)), None);
        let board = [card("2h"), card("3h"), card("4c")];
        assert_eq!(
            bot.decide(&ballot([card("As"), card("Kd")], &board, 0)),
            None
        );
    }

    #[test]
    fn weak_spot_folds_under_pressure() {
        let mut settings = sober();
        // every pair is untrustworthy, every call too expensive
        settings.trust_pair_rank_threshold = u16::MAX;
        settings.strong_pair_threshold = u16::MAX;
        settings.low_money_threshold = 0.0;
        let mut bot = bot(settings);
        let hole = [card("Js"), card("Qd")];
        assert_eq!(bot.decide(&ballot(hole, &[], 50)), Some(Action::Fold));
    }

    #[test]
    fn free_weak_spot_calls_along() {
        let mut settings = sober();
        settings.trust_pair_rank_threshold = u16::MAX;
        settings.strong_pair_threshold = u16::MAX;
        let mut bot = bot(settings);
        let hole = [card("Js"), card("Qd")];
        assert_eq!(bot.decide(&ballot(hole, &[], 0)), Some(Action::Call));
    }

    #[test]
    fn premium_pair_raises() {
        let mut settings = sober();
        // everything is premium
        settings.strong_pair_threshold = 0;
        let mut bot = bot(settings);
        let hole = [card("As"), card("Ad")];
        match bot.decide(&ballot(hole, &[], 0)) {
            Some(Action::Raise(amount)) => assert!(amount > 0),
            other => panic!("expected a raise, got {:?}", other),
        }
    }

    #[test]
    fn bluffs_respect_the_cooldown() {
        let mut settings = sober();
        settings.fool_chance = 1.0;
        settings.min_rounds_without_fool = 3;
        let mut bot = bot(settings);
        let hole = [card("Js"), card("Qd")];
        let b = ballot(hole, &[], 0);
        assert!(!matches!(bot.decide(&b), Some(Action::Raise(_))));
        assert!(!matches!(bot.decide(&b), Some(Action::Raise(_))));
        // cooldown satisfied, guaranteed bluff
        assert!(matches!(bot.decide(&b), Some(Action::Raise(_))));
    }
}

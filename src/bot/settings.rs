/// Decision thresholds for the bot policy. These are data, not code:
/// the defaults below came out of self-play tuning and presets load
/// from json, so behaviour variants ship without a recompile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotSettings {
    /// preflop pair rank at or above which the hole is a premium.
    pub strong_pair_threshold: u16,
    /// preflop pair rank worth calling on.
    pub trust_pair_rank_threshold: u16,
    /// stronger-enemy chance above which the bot stops raising.
    pub enemy_stronger_middle_threshold: f64,
    /// stronger-enemy chance below which the bot attacks.
    pub enemy_stronger_panic_threshold: f64,
    /// stronger-enemy chance above which the bot considers bailing.
    pub panic_threshold: f64,
    /// fraction of the balance a call may cost before folding weak
    /// spots.
    pub low_money_threshold: f64,
    /// decisions between bluffs, at minimum.
    pub min_rounds_without_fool: u32,
    /// chance to bluff once the cooldown has passed.
    pub fool_chance: f64,
    /// chance to slow-play a strong spot as a flat call.
    pub silent_chance: f64,
    /// balance fraction wagered on a bluff raise.
    pub fool_raise_percent: f64,
    /// balance fraction wagered on a value raise, scaled by
    /// confidence.
    pub strong_pair_raise_percent: f64,
    /// pot fraction added on top of every value raise.
    pub raise_offset: f64,
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            strong_pair_threshold: 19,
            trust_pair_rank_threshold: 13,
            enemy_stronger_middle_threshold: 0.51371320977807,
            enemy_stronger_panic_threshold: 0.405301503837109,
            panic_threshold: 0.551069484502077,
            low_money_threshold: 0.408863117620349,
            min_rounds_without_fool: 21,
            fool_chance: 0.432952526481822,
            silent_chance: 0.503569041788578,
            fool_raise_percent: 0.554264077916741,
            strong_pair_raise_percent: 0.460994556993246,
            raise_offset: 0.576030493974686,
        }
    }
}

impl BotSettings {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

use serde::Deserialize;
use serde::Serialize;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_fill_missing_fields_with_defaults() {
        let preset = BotSettings::from_json(r#"{ "strong_pair_threshold": 30 }"#).unwrap();
        assert_eq!(preset.strong_pair_threshold, 30);
        assert_eq!(
            preset.silent_chance,
            BotSettings::default().silent_chance
        );
    }

    #[test]
    fn junk_presets_are_rejected() {
        assert!(BotSettings::from_json("{ not json").is_err());
        assert!(BotSettings::from_json(r#"{ "fool_chance": "lots" }"#).is_err());
    }
}

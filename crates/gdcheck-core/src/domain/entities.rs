//! The five record types that make up a dataset snapshot.
//!
//! Field names mirror the on-disk table columns one-to-one; the loader
//! adapter relies on that for serde decoding. The types are deliberately
//! permissive — `amount` is a plain `i64`, `kill_condition` a plain
//! integer — so that an authored `-3` or `7` survives loading and is
//! reported by a domain check instead of killing the run.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Valid values for [`Enemy::kill_condition`].
///
/// The dataset assigns no names to these values, so neither do we.
pub const KILL_CONDITIONS: RangeInclusive<i64> = 0..=3;

/// An enemy definition. Keyed by `name_en`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    /// English name; globally unique, non-empty, lowercase by convention.
    pub name_en: String,
    /// Japanese name; globally unique and non-empty.
    pub name_jp: String,
    pub stompable: bool,
    pub flammable: bool,
    pub starrable: bool,
    /// Bosses are unique encounters: their appearance amounts must sum to 1.
    pub boss: bool,
    /// How the enemy is defeated; must fall in [`KILL_CONDITIONS`].
    pub kill_condition: i64,
}

/// A stage within a zone. Keyed by `(zone, stage)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub zone: String,
    pub stage: String,
    pub stars: i64,
    pub coins: i64,
    pub question_blocks: i64,
    pub money_bags: i64,
}

impl Level {
    /// The composite key identifying this level.
    pub fn key(&self) -> (&str, &str) {
        (&self.zone, &self.stage)
    }
}

/// A join record placing an enemy in a level, with a count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyAppearance {
    pub enemy_name_en: String,
    pub level_zone: String,
    pub level_stage: String,
    pub amount: i64,
}

impl EnemyAppearance {
    /// The `(zone, stage)` location this appearance points at.
    pub fn location(&self) -> (&str, &str) {
        (&self.level_zone, &self.level_stage)
    }
}

/// A projectile definition. Keyed by `name`.
///
/// `enemy_name_en` links the projectile to the enemy that emits it;
/// `None` (absent or `null` in the source data) means the projectile is
/// environmental and exempt from location parity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub name: String,
    #[serde(default)]
    pub enemy_name_en: Option<String>,
    pub starrable: bool,
}

/// A join record placing a projectile in a level, with a count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileAppearance {
    pub projectile_name: String,
    pub level_zone: String,
    pub level_stage: String,
    pub amount: i64,
}

impl ProjectileAppearance {
    /// The `(zone, stage)` location this appearance points at.
    pub fn location(&self) -> (&str, &str) {
        (&self.level_zone, &self.level_stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enemy_round_trips_through_json() {
        let json = r#"{
            "name_en": "spike_top",
            "name_jp": "トゲメット",
            "stompable": false,
            "flammable": true,
            "starrable": true,
            "boss": false,
            "kill_condition": 1
        }"#;
        let enemy: Enemy = serde_json::from_str(json).unwrap();
        assert_eq!(enemy.name_en, "spike_top");
        assert!(!enemy.stompable);
        assert_eq!(enemy.kill_condition, 1);
    }

    #[test]
    fn projectile_link_defaults_to_none() {
        let unlinked: Projectile =
            serde_json::from_str(r#"{"name": "rock", "starrable": false}"#).unwrap();
        assert_eq!(unlinked.enemy_name_en, None);

        let null_link: Projectile =
            serde_json::from_str(r#"{"name": "rock", "enemy_name_en": null, "starrable": false}"#)
                .unwrap();
        assert_eq!(null_link.enemy_name_en, None);
    }

    #[test]
    fn missing_field_is_a_decode_error() {
        let result = serde_json::from_str::<Level>(r#"{"zone": "desert"}"#);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("stage"));
    }

    #[test]
    fn negative_amount_survives_decoding() {
        // Negative counts are a *domain* violation, not a decode failure.
        let json = r#"{
            "enemy_name_en": "walker",
            "level_zone": "desert",
            "level_stage": "1-1",
            "amount": -3
        }"#;
        let appearance: EnemyAppearance = serde_json::from_str(json).unwrap();
        assert_eq!(appearance.amount, -3);
    }
}

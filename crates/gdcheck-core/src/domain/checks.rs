//! The constraint catalog.
//!
//! Every integrity rule the dataset must satisfy lives here as one named
//! [`Check`]: a pure function of the snapshot returning [`CheckOutcome`].
//! [`CATALOG`] fixes the declaration order, which is also the report
//! order. Checks are mutually independent — each one rebuilds whatever
//! index it needs from the snapshot and never looks at another check's
//! outcome.
//!
//! All derived indexes use `BTreeMap`/`BTreeSet` so that violation lists
//! come out in a deterministic order regardless of hashing.

use std::collections::{BTreeMap, BTreeSet};

use super::dataset::{Dataset, Table};
use super::entities::KILL_CONDITIONS;
use super::violation::Violation;

/// Expected number of boss-flagged enemies in the dataset.
pub const EXPECTED_BOSS_COUNT: i64 = 9;

/// Expected number of distinct zones: six themed worlds plus the overworld.
pub const EXPECTED_ZONE_COUNT: i64 = 7;

// ── Check plumbing ────────────────────────────────────────────────────────────

/// Which part of the dataset a check looks at; report grouping only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckScope {
    Enemy,
    Level,
    EnemyAppearance,
    Projectile,
    ProjectileAppearance,
    CrossTable,
}

impl std::fmt::Display for CheckScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Enemy => write!(f, "enemy"),
            Self::Level => write!(f, "level"),
            Self::EnemyAppearance => write!(f, "enemy-appearance"),
            Self::Projectile => write!(f, "projectile"),
            Self::ProjectileAppearance => write!(f, "projectile-appearance"),
            Self::CrossTable => write!(f, "cross-table"),
        }
    }
}

/// The result of evaluating one check.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    Pass,
    Fail(Vec<Violation>),
}

impl CheckOutcome {
    /// `Pass` when the violation list is empty, `Fail` otherwise.
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        if violations.is_empty() {
            Self::Pass
        } else {
            Self::Fail(violations)
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Pass => &[],
            Self::Fail(violations) => violations,
        }
    }
}

/// One named constraint over the full dataset snapshot.
pub struct Check {
    pub name: &'static str,
    pub scope: CheckScope,
    eval: fn(&Dataset) -> CheckOutcome,
}

impl Check {
    pub fn evaluate(&self, dataset: &Dataset) -> CheckOutcome {
        (self.eval)(dataset)
    }

    /// Synthetic checks for engine tests.
    #[cfg(test)]
    pub(crate) fn for_tests(name: &'static str, eval: fn(&Dataset) -> CheckOutcome) -> Self {
        Self {
            name,
            scope: CheckScope::CrossTable,
            eval,
        }
    }
}

/// The full catalog, in report order.
pub static CATALOG: &[Check] = &[
    Check {
        name: "enemy-records-well-formed",
        scope: CheckScope::Enemy,
        eval: enemy_records_well_formed,
    },
    Check {
        name: "enemy-fields-valid",
        scope: CheckScope::Enemy,
        eval: enemy_fields_valid,
    },
    Check {
        name: "enemy-name-en-unique",
        scope: CheckScope::Enemy,
        eval: enemy_name_en_unique,
    },
    Check {
        name: "enemy-name-jp-unique",
        scope: CheckScope::Enemy,
        eval: enemy_name_jp_unique,
    },
    Check {
        name: "boss-count",
        scope: CheckScope::Enemy,
        eval: boss_count,
    },
    Check {
        name: "boss-appearance-totals",
        scope: CheckScope::CrossTable,
        eval: boss_appearance_totals,
    },
    Check {
        name: "level-records-well-formed",
        scope: CheckScope::Level,
        eval: level_records_well_formed,
    },
    Check {
        name: "level-fields-valid",
        scope: CheckScope::Level,
        eval: level_fields_valid,
    },
    Check {
        name: "level-key-unique",
        scope: CheckScope::Level,
        eval: level_key_unique,
    },
    Check {
        name: "zone-count",
        scope: CheckScope::Level,
        eval: zone_count,
    },
    Check {
        name: "enemy-appearance-records-well-formed",
        scope: CheckScope::EnemyAppearance,
        eval: enemy_appearance_records_well_formed,
    },
    Check {
        name: "enemy-appearance-fields-valid",
        scope: CheckScope::EnemyAppearance,
        eval: enemy_appearance_fields_valid,
    },
    Check {
        name: "enemy-appearance-references",
        scope: CheckScope::EnemyAppearance,
        eval: enemy_appearance_references,
    },
    Check {
        name: "every-enemy-appears",
        scope: CheckScope::CrossTable,
        eval: every_enemy_appears,
    },
    Check {
        name: "projectile-records-well-formed",
        scope: CheckScope::Projectile,
        eval: projectile_records_well_formed,
    },
    Check {
        name: "projectile-fields-valid",
        scope: CheckScope::Projectile,
        eval: projectile_fields_valid,
    },
    Check {
        name: "projectile-name-unique",
        scope: CheckScope::Projectile,
        eval: projectile_name_unique,
    },
    Check {
        name: "projectile-enemy-references",
        scope: CheckScope::Projectile,
        eval: projectile_enemy_references,
    },
    Check {
        name: "projectile-appearance-records-well-formed",
        scope: CheckScope::ProjectileAppearance,
        eval: projectile_appearance_records_well_formed,
    },
    Check {
        name: "projectile-appearance-fields-valid",
        scope: CheckScope::ProjectileAppearance,
        eval: projectile_appearance_fields_valid,
    },
    Check {
        name: "projectile-appearance-references",
        scope: CheckScope::ProjectileAppearance,
        eval: projectile_appearance_references,
    },
    Check {
        name: "every-projectile-appears",
        scope: CheckScope::CrossTable,
        eval: every_projectile_appears,
    },
    Check {
        name: "projectile-location-parity",
        scope: CheckScope::CrossTable,
        eval: projectile_location_parity,
    },
];

// ── Shared helpers ────────────────────────────────────────────────────────────

/// Fallback display key for records whose own key fields are empty.
fn display_key(key: &str, row: usize) -> String {
    if key.is_empty() {
        format!("#{row}")
    } else {
        key.to_owned()
    }
}

fn location_key(zone: &str, stage: &str) -> String {
    format!("{zone}/{stage}")
}

/// Structural check body, shared by all five tables: the loader recorded
/// shape issues per raw row, this surfaces the ones for `table`.
fn shape_of(dataset: &Dataset, table: Table) -> CheckOutcome {
    CheckOutcome::from_violations(
        dataset
            .shape_issues()
            .iter()
            .filter(|issue| issue.table == table)
            .map(|issue| Violation::Shape {
                table: issue.table,
                row: issue.row,
                problem: issue.problem.clone(),
            })
            .collect(),
    )
}

/// Keyed duplicate scan: every key seen more than once becomes one
/// violation, in key order.
fn duplicates(entity: &'static str, keys: impl Iterator<Item = String>) -> CheckOutcome {
    let mut seen: BTreeMap<String, usize> = BTreeMap::new();
    for key in keys {
        *seen.entry(key).or_default() += 1;
    }
    CheckOutcome::from_violations(
        seen.into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(key, _)| Violation::Duplicate { entity, key })
            .collect(),
    )
}

fn enemy_names(dataset: &Dataset) -> BTreeSet<&str> {
    dataset
        .enemies()
        .iter()
        .map(|enemy| enemy.name_en.as_str())
        .collect()
}

fn level_keys(dataset: &Dataset) -> BTreeSet<(&str, &str)> {
    dataset.levels().iter().map(|level| level.key()).collect()
}

// ── Structural checks ─────────────────────────────────────────────────────────

fn enemy_records_well_formed(dataset: &Dataset) -> CheckOutcome {
    shape_of(dataset, Table::Enemies)
}

fn level_records_well_formed(dataset: &Dataset) -> CheckOutcome {
    shape_of(dataset, Table::Levels)
}

fn enemy_appearance_records_well_formed(dataset: &Dataset) -> CheckOutcome {
    shape_of(dataset, Table::EnemyAppearances)
}

fn projectile_records_well_formed(dataset: &Dataset) -> CheckOutcome {
    shape_of(dataset, Table::Projectiles)
}

fn projectile_appearance_records_well_formed(dataset: &Dataset) -> CheckOutcome {
    shape_of(dataset, Table::ProjectileAppearances)
}

// ── Enemy checks ──────────────────────────────────────────────────────────────

fn enemy_fields_valid(dataset: &Dataset) -> CheckOutcome {
    let mut violations = Vec::new();
    for (row, enemy) in dataset.enemies().iter().enumerate() {
        let key = display_key(&enemy.name_en, row);
        let mut flag = |problem: String| {
            violations.push(Violation::Domain {
                entity: "enemy",
                key: key.clone(),
                problem,
            });
        };

        if enemy.name_en.is_empty() {
            flag("name_en must be non-empty".into());
        } else if enemy.name_en != enemy.name_en.to_lowercase() {
            flag(format!("name_en '{}' must be lowercase", enemy.name_en));
        }
        if enemy.name_jp.is_empty() {
            flag("name_jp must be non-empty".into());
        }
        if !KILL_CONDITIONS.contains(&enemy.kill_condition) {
            flag(format!(
                "kill_condition is {}, allowed values are 0 through 3",
                enemy.kill_condition
            ));
        }
    }
    CheckOutcome::from_violations(violations)
}

fn enemy_name_en_unique(dataset: &Dataset) -> CheckOutcome {
    duplicates(
        "enemy",
        dataset.enemies().iter().map(|enemy| enemy.name_en.clone()),
    )
}

fn enemy_name_jp_unique(dataset: &Dataset) -> CheckOutcome {
    duplicates(
        "enemy (name_jp)",
        dataset.enemies().iter().map(|enemy| enemy.name_jp.clone()),
    )
}

fn boss_count(dataset: &Dataset) -> CheckOutcome {
    let found = dataset.enemies().iter().filter(|enemy| enemy.boss).count() as i64;
    if found == EXPECTED_BOSS_COUNT {
        CheckOutcome::Pass
    } else {
        CheckOutcome::Fail(vec![Violation::CountMismatch {
            what: "boss enemies",
            found,
            expected: EXPECTED_BOSS_COUNT,
        }])
    }
}

fn boss_appearance_totals(dataset: &Dataset) -> CheckOutcome {
    let mut violations = Vec::new();
    for enemy in dataset.enemies().iter().filter(|enemy| enemy.boss) {
        let total: i64 = dataset
            .enemy_appearances()
            .iter()
            .filter(|appearance| appearance.enemy_name_en == enemy.name_en)
            .map(|appearance| appearance.amount)
            .sum();
        if total != 1 {
            violations.push(Violation::Domain {
                entity: "boss",
                key: enemy.name_en.clone(),
                problem: format!("appearance amounts sum to {total}, expected exactly 1"),
            });
        }
    }
    CheckOutcome::from_violations(violations)
}

// ── Level checks ──────────────────────────────────────────────────────────────

fn level_fields_valid(dataset: &Dataset) -> CheckOutcome {
    let mut violations = Vec::new();
    for (row, level) in dataset.levels().iter().enumerate() {
        let key = display_key(&location_key(&level.zone, &level.stage), row);
        let mut flag = |problem: String| {
            violations.push(Violation::Domain {
                entity: "level",
                key: key.clone(),
                problem,
            });
        };

        if level.zone.is_empty() {
            flag("zone must be non-empty".into());
        }
        if level.stage.is_empty() {
            flag("stage must be non-empty".into());
        }
        for (field, value) in [
            ("stars", level.stars),
            ("coins", level.coins),
            ("question_blocks", level.question_blocks),
            ("money_bags", level.money_bags),
        ] {
            if value < 0 {
                flag(format!("{field} is {value}, must be non-negative"));
            }
        }
    }
    CheckOutcome::from_violations(violations)
}

fn level_key_unique(dataset: &Dataset) -> CheckOutcome {
    duplicates(
        "level",
        dataset
            .levels()
            .iter()
            .map(|level| location_key(&level.zone, &level.stage)),
    )
}

fn zone_count(dataset: &Dataset) -> CheckOutcome {
    let zones: BTreeSet<&str> = dataset
        .levels()
        .iter()
        .map(|level| level.zone.as_str())
        .collect();
    let found = zones.len() as i64;
    if found == EXPECTED_ZONE_COUNT {
        CheckOutcome::Pass
    } else {
        CheckOutcome::Fail(vec![Violation::CountMismatch {
            what: "distinct zones",
            found,
            expected: EXPECTED_ZONE_COUNT,
        }])
    }
}

// ── Enemy appearance checks ───────────────────────────────────────────────────

fn enemy_appearance_fields_valid(dataset: &Dataset) -> CheckOutcome {
    let mut violations = Vec::new();
    for (row, appearance) in dataset.enemy_appearances().iter().enumerate() {
        let key = display_key(&appearance.enemy_name_en, row);
        let mut flag = |problem: String| {
            violations.push(Violation::Domain {
                entity: "enemy appearance",
                key: key.clone(),
                problem,
            });
        };

        if appearance.enemy_name_en.is_empty() {
            flag("enemy_name_en must be non-empty".into());
        }
        if appearance.level_zone.is_empty() {
            flag("level_zone must be non-empty".into());
        }
        if appearance.level_stage.is_empty() {
            flag("level_stage must be non-empty".into());
        }
        if appearance.amount < 0 {
            flag(format!(
                "amount is {}, must be non-negative",
                appearance.amount
            ));
        }
    }
    CheckOutcome::from_violations(violations)
}

fn enemy_appearance_references(dataset: &Dataset) -> CheckOutcome {
    let enemies = enemy_names(dataset);
    let levels = level_keys(dataset);

    let mut violations = Vec::new();
    for appearance in dataset.enemy_appearances() {
        if !enemies.contains(appearance.enemy_name_en.as_str()) {
            violations.push(Violation::Unresolved {
                child: "enemy appearance",
                parent: "enemy",
                key: appearance.enemy_name_en.clone(),
            });
        }
        if !levels.contains(&appearance.location()) {
            violations.push(Violation::Unresolved {
                child: "enemy appearance",
                parent: "level",
                key: location_key(&appearance.level_zone, &appearance.level_stage),
            });
        }
    }
    CheckOutcome::from_violations(violations)
}

fn every_enemy_appears(dataset: &Dataset) -> CheckOutcome {
    let appearing: BTreeSet<&str> = dataset
        .enemy_appearances()
        .iter()
        .map(|appearance| appearance.enemy_name_en.as_str())
        .collect();

    CheckOutcome::from_violations(
        dataset
            .enemies()
            .iter()
            .filter(|enemy| !appearing.contains(enemy.name_en.as_str()))
            .map(|enemy| Violation::Domain {
                entity: "enemy",
                key: enemy.name_en.clone(),
                problem: "never appears in any level".into(),
            })
            .collect(),
    )
}

// ── Projectile checks ─────────────────────────────────────────────────────────

fn projectile_fields_valid(dataset: &Dataset) -> CheckOutcome {
    let mut violations = Vec::new();
    for (row, projectile) in dataset.projectiles().iter().enumerate() {
        let key = display_key(&projectile.name, row);
        let mut flag = |problem: String| {
            violations.push(Violation::Domain {
                entity: "projectile",
                key: key.clone(),
                problem,
            });
        };

        if projectile.name.is_empty() {
            flag("name must be non-empty".into());
        }
        if matches!(&projectile.enemy_name_en, Some(link) if link.is_empty()) {
            flag("enemy_name_en, when present, must be non-empty".into());
        }
    }
    CheckOutcome::from_violations(violations)
}

fn projectile_name_unique(dataset: &Dataset) -> CheckOutcome {
    duplicates(
        "projectile",
        dataset
            .projectiles()
            .iter()
            .map(|projectile| projectile.name.clone()),
    )
}

fn projectile_enemy_references(dataset: &Dataset) -> CheckOutcome {
    let enemies = enemy_names(dataset);
    CheckOutcome::from_violations(
        dataset
            .projectiles()
            .iter()
            .filter_map(|projectile| {
                let link = projectile.enemy_name_en.as_deref()?;
                (!link.is_empty() && !enemies.contains(link)).then(|| Violation::Unresolved {
                    child: "projectile",
                    parent: "enemy",
                    key: link.to_owned(),
                })
            })
            .collect(),
    )
}

// ── Projectile appearance checks ──────────────────────────────────────────────

fn projectile_appearance_fields_valid(dataset: &Dataset) -> CheckOutcome {
    let mut violations = Vec::new();
    for (row, appearance) in dataset.projectile_appearances().iter().enumerate() {
        let key = display_key(&appearance.projectile_name, row);
        let mut flag = |problem: String| {
            violations.push(Violation::Domain {
                entity: "projectile appearance",
                key: key.clone(),
                problem,
            });
        };

        if appearance.projectile_name.is_empty() {
            flag("projectile_name must be non-empty".into());
        }
        if appearance.level_zone.is_empty() {
            flag("level_zone must be non-empty".into());
        }
        if appearance.level_stage.is_empty() {
            flag("level_stage must be non-empty".into());
        }
        if appearance.amount < 0 {
            flag(format!(
                "amount is {}, must be non-negative",
                appearance.amount
            ));
        }
    }
    CheckOutcome::from_violations(violations)
}

fn projectile_appearance_references(dataset: &Dataset) -> CheckOutcome {
    let projectiles: BTreeSet<&str> = dataset
        .projectiles()
        .iter()
        .map(|projectile| projectile.name.as_str())
        .collect();
    let levels = level_keys(dataset);

    let mut violations = Vec::new();
    for appearance in dataset.projectile_appearances() {
        if !projectiles.contains(appearance.projectile_name.as_str()) {
            violations.push(Violation::Unresolved {
                child: "projectile appearance",
                parent: "projectile",
                key: appearance.projectile_name.clone(),
            });
        }
        if !levels.contains(&appearance.location()) {
            violations.push(Violation::Unresolved {
                child: "projectile appearance",
                parent: "level",
                key: location_key(&appearance.level_zone, &appearance.level_stage),
            });
        }
    }
    CheckOutcome::from_violations(violations)
}

fn every_projectile_appears(dataset: &Dataset) -> CheckOutcome {
    let appearing: BTreeSet<&str> = dataset
        .projectile_appearances()
        .iter()
        .map(|appearance| appearance.projectile_name.as_str())
        .collect();

    CheckOutcome::from_violations(
        dataset
            .projectiles()
            .iter()
            .filter(|projectile| !appearing.contains(projectile.name.as_str()))
            .map(|projectile| Violation::Domain {
                entity: "projectile",
                key: projectile.name.clone(),
                problem: "never appears in any level".into(),
            })
            .collect(),
    )
}

// ── Cross-table parity ────────────────────────────────────────────────────────

/// A projectile linked to an enemy must occur in exactly the same set of
/// distinct `(zone, stage)` locations as that enemy — both directions.
fn projectile_location_parity(dataset: &Dataset) -> CheckOutcome {
    let mut violations = Vec::new();

    for projectile in dataset.projectiles() {
        let Some(link) = projectile.enemy_name_en.as_deref() else {
            continue; // unlinked projectiles are exempt
        };

        let enemy_locations: BTreeSet<(&str, &str)> = dataset
            .enemy_appearances()
            .iter()
            .filter(|appearance| appearance.enemy_name_en == link)
            .map(|appearance| appearance.location())
            .collect();
        let projectile_locations: BTreeSet<(&str, &str)> = dataset
            .projectile_appearances()
            .iter()
            .filter(|appearance| appearance.projectile_name == projectile.name)
            .map(|appearance| appearance.location())
            .collect();

        for (zone, stage) in enemy_locations.difference(&projectile_locations) {
            violations.push(Violation::LocationParity {
                projectile: projectile.name.clone(),
                zone: (*zone).to_owned(),
                stage: (*stage).to_owned(),
                present: "enemy",
                absent: "projectile",
            });
        }
        for (zone, stage) in projectile_locations.difference(&enemy_locations) {
            violations.push(Violation::LocationParity {
                projectile: projectile.name.clone(),
                zone: (*zone).to_owned(),
                stage: (*stage).to_owned(),
                present: "projectile",
                absent: "enemy",
            });
        }
    }

    CheckOutcome::from_violations(violations)
}

// ── tests ─────────────────────────────────────────────────────────────────────

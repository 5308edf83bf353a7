//! The immutable dataset snapshot the engine validates.
//!
//! A [`Dataset`] is built once per run — by the loader adapter in
//! production, by [`DatasetBuilder`] in tests — and only ever read after
//! that. Shape problems found while decoding raw rows travel *inside*
//! the snapshot as [`ShapeIssue`]s, so every check stays a pure function
//! of the dataset and a garbage row can never abort a run.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::entities::{Enemy, EnemyAppearance, Level, Projectile, ProjectileAppearance};

/// Identifies one of the five source tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Table {
    Enemies,
    Levels,
    EnemyAppearances,
    Projectiles,
    ProjectileAppearances,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Matches the on-disk file stems so messages point at real files.
        match self {
            Self::Enemies => write!(f, "enemies"),
            Self::Levels => write!(f, "levels"),
            Self::EnemyAppearances => write!(f, "enemy_level"),
            Self::Projectiles => write!(f, "projectiles"),
            Self::ProjectileAppearances => write!(f, "projectile_level"),
        }
    }
}

/// A structural problem recorded while decoding one raw row.
///
/// `row` is the zero-based index of the record in its source table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeIssue {
    pub table: Table,
    pub row: usize,
    pub problem: String,
}

/// One immutable snapshot of the whole relational dataset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    enemies: Vec<Enemy>,
    levels: Vec<Level>,
    enemy_appearances: Vec<EnemyAppearance>,
    projectiles: Vec<Projectile>,
    projectile_appearances: Vec<ProjectileAppearance>,
    shape_issues: Vec<ShapeIssue>,
}

impl Dataset {
    /// Assemble a snapshot from fully-decoded tables.
    ///
    /// This is the loader-facing constructor; tests usually prefer
    /// [`Dataset::builder`].
    pub fn new(
        enemies: Vec<Enemy>,
        levels: Vec<Level>,
        enemy_appearances: Vec<EnemyAppearance>,
        projectiles: Vec<Projectile>,
        projectile_appearances: Vec<ProjectileAppearance>,
        shape_issues: Vec<ShapeIssue>,
    ) -> Self {
        Self {
            enemies,
            levels,
            enemy_appearances,
            projectiles,
            projectile_appearances,
            shape_issues,
        }
    }

    pub fn builder() -> DatasetBuilder {
        DatasetBuilder::default()
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn enemy_appearances(&self) -> &[EnemyAppearance] {
        &self.enemy_appearances
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn projectile_appearances(&self) -> &[ProjectileAppearance] {
        &self.projectile_appearances
    }

    pub fn shape_issues(&self) -> &[ShapeIssue] {
        &self.shape_issues
    }

    /// Total typed rows across all five tables.
    pub fn row_count(&self) -> usize {
        self.enemies.len()
            + self.levels.len()
            + self.enemy_appearances.len()
            + self.projectiles.len()
            + self.projectile_appearances.len()
    }
}

/// Incremental construction of a [`Dataset`], one record at a time.
///
/// Consuming builder in the style of the rest of the codebase:
/// `Dataset::builder().enemy(..).level(..).build()`.
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    dataset: Dataset,
}

impl DatasetBuilder {
    pub fn enemy(mut self, enemy: Enemy) -> Self {
        self.dataset.enemies.push(enemy);
        self
    }

    pub fn level(mut self, level: Level) -> Self {
        self.dataset.levels.push(level);
        self
    }

    pub fn enemy_appearance(mut self, appearance: EnemyAppearance) -> Self {
        self.dataset.enemy_appearances.push(appearance);
        self
    }

    pub fn projectile(mut self, projectile: Projectile) -> Self {
        self.dataset.projectiles.push(projectile);
        self
    }

    pub fn projectile_appearance(mut self, appearance: ProjectileAppearance) -> Self {
        self.dataset.projectile_appearances.push(appearance);
        self
    }

    pub fn shape_issue(mut self, issue: ShapeIssue) -> Self {
        self.dataset.shape_issues.push(issue);
        self
    }

    pub fn build(self) -> Dataset {
        self.dataset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil;

    #[test]
    fn row_count_sums_all_tables() {
        let dataset = Dataset::builder()
            .enemy(testutil::enemy("walker", false))
            .level(testutil::level("desert", "1-1"))
            .enemy_appearance(testutil::appearance("walker", "desert", "1-1", 1))
            .build();
        assert_eq!(dataset.row_count(), 3);
    }

    #[test]
    fn builder_preserves_insertion_order() {
        let dataset = Dataset::builder()
            .enemy(testutil::enemy("b", false))
            .enemy(testutil::enemy("a", false))
            .build();
        assert_eq!(dataset.enemies()[0].name_en, "b");
        assert_eq!(dataset.enemies()[1].name_en, "a");
    }

    #[test]
    fn snapshot_equality_is_structural() {
        assert_eq!(testutil::valid_dataset(), testutil::valid_dataset());
    }
}

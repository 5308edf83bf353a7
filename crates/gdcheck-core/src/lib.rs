//! Gdcheck Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the gdcheck
//! data-integrity checker, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          gdcheck-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (ValidationService)            │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │       (Driven: DatasetSource)           │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    gdcheck-adapters (Infrastructure)    │
//! │  (JsonDatasetSource, MemoryDataset...)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Dataset, Check catalog, Engine)       │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use gdcheck_core::{domain::Dataset, engine::Engine};
//!
//! // 1. Build (or load) an immutable dataset snapshot
//! let dataset = Dataset::builder().build();
//!
//! // 2. Run every check in the catalog against it
//! let report = Engine::run(&dataset);
//!
//! for entry in report.entries() {
//!     println!("{}: {}", entry.name, entry.outcome.is_pass());
//! }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// The validation engine itself
pub mod engine;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{ValidationService, ports::DatasetSource};
    pub use crate::domain::{
        CATALOG, Check, CheckOutcome, CheckScope, Dataset, DatasetBuilder, Enemy, EnemyAppearance,
        Level, Projectile, ProjectileAppearance, ShapeIssue, Table, Violation,
    };
    pub use crate::engine::{Engine, Report, ReportEntry};
    pub use crate::error::{ErrorCategory, GdcheckError, GdcheckResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
pub(crate) mod testutil {
    //! Shared fixtures for unit tests across the crate.

    use crate::domain::{
        Dataset, Enemy, EnemyAppearance, Level, Projectile, ProjectileAppearance,
    };

    pub const ZONES: [&str; 7] = [
        "overworld",
        "grasslands",
        "desert",
        "waterworld",
        "forest",
        "caverns",
        "skylands",
    ];

    pub fn enemy(name: &str, boss: bool) -> Enemy {
        Enemy {
            name_en: name.to_owned(),
            name_jp: format!("{name}-jp"),
            stompable: !boss,
            flammable: false,
            starrable: true,
            boss,
            kill_condition: if boss { 3 } else { 0 },
        }
    }

    pub fn level(zone: &str, stage: &str) -> Level {
        Level {
            zone: zone.to_owned(),
            stage: stage.to_owned(),
            stars: 3,
            coins: 40,
            question_blocks: 5,
            money_bags: 1,
        }
    }

    pub fn appearance(enemy: &str, zone: &str, stage: &str, amount: i64) -> EnemyAppearance {
        EnemyAppearance {
            enemy_name_en: enemy.to_owned(),
            level_zone: zone.to_owned(),
            level_stage: stage.to_owned(),
            amount,
        }
    }

    pub fn projectile(name: &str, enemy: Option<&str>) -> Projectile {
        Projectile {
            name: name.to_owned(),
            enemy_name_en: enemy.map(str::to_owned),
            starrable: false,
        }
    }

    pub fn projectile_appearance(
        name: &str,
        zone: &str,
        stage: &str,
        amount: i64,
    ) -> ProjectileAppearance {
        ProjectileAppearance {
            projectile_name: name.to_owned(),
            level_zone: zone.to_owned(),
            level_stage: stage.to_owned(),
            amount,
        }
    }

    /// A dataset that satisfies every invariant in the catalog:
    /// 7 distinct zones, 9 bosses each appearing exactly once, every
    /// enemy and projectile placed, and projectile/enemy location parity.
    pub fn valid_dataset() -> Dataset {
        valid_dataset_builder().build()
    }

    /// The builder behind [`valid_dataset`], for tests that break one
    /// invariant on top of an otherwise green dataset.
    pub fn valid_dataset_builder() -> crate::domain::DatasetBuilder {
        let mut b = Dataset::builder();

        for zone in ZONES {
            b = b.level(level(zone, "1-1")).level(level(zone, "1-2"));
        }

        for i in 0..9 {
            let name = format!("boss_{i}");
            b = b
                .enemy(enemy(&name, true))
                .enemy_appearance(appearance(&name, ZONES[i % 7], "1-2", 1));
        }

        b = b
            .enemy(enemy("walker", false))
            .enemy_appearance(appearance("walker", "overworld", "1-1", 4))
            .enemy_appearance(appearance("walker", "desert", "1-1", 2));

        b = b
            .enemy(enemy("flame_spitter", false))
            .enemy_appearance(appearance("flame_spitter", "caverns", "1-1", 3));

        // Linked projectile mirrors its enemy's locations exactly.
        b = b
            .projectile(projectile("fireball", Some("flame_spitter")))
            .projectile_appearance(projectile_appearance("fireball", "caverns", "1-1", 6));

        // Unlinked projectile only needs at least one appearance.
        b = b
            .projectile(projectile("falling_rock", None))
            .projectile_appearance(projectile_appearance("falling_rock", "skylands", "1-1", 8));

        b
    }
}

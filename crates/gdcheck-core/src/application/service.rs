//! Validation Service - main application orchestrator.
//!
//! This service coordinates the whole run:
//! 1. Load the dataset snapshot through the [`DatasetSource`] port
//! 2. Run the constraint catalog through the engine
//! 3. Hand the ordered report back to the caller
//!
//! A load failure is the only way a run ends without a report; once the
//! engine starts, it always completes.

use tracing::{info, instrument};

use crate::{
    application::ports::DatasetSource,
    engine::{Engine, Report},
    error::GdcheckResult,
};

/// Main validation service.
pub struct ValidationService {
    source: Box<dyn DatasetSource>,
}

impl ValidationService {
    /// Create a new validation service with the given dataset source.
    pub fn new(source: Box<dyn DatasetSource>) -> Self {
        Self { source }
    }

    /// Load the snapshot once and validate it against the full catalog.
    #[instrument(skip_all)]
    pub fn validate(&self) -> GdcheckResult<Report> {
        let dataset = self.source.load()?;
        info!(
            enemies = dataset.enemies().len(),
            levels = dataset.levels().len(),
            enemy_appearances = dataset.enemy_appearances().len(),
            projectiles = dataset.projectiles().len(),
            projectile_appearances = dataset.projectile_appearances().len(),
            shape_issues = dataset.shape_issues().len(),
            "dataset loaded"
        );

        let report = Engine::run(&dataset);
        info!(
            failed = report.failure_count(),
            total = report.len(),
            "validation finished"
        );
        Ok(report)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::domain::Dataset;
    use crate::testutil;

    struct FixedSource(Dataset);

    impl DatasetSource for FixedSource {
        fn load(&self) -> GdcheckResult<Dataset> {
            Ok(self.0.clone())
        }
    }

    struct BrokenSource;

    impl DatasetSource for BrokenSource {
        fn load(&self) -> GdcheckResult<Dataset> {
            Err(ApplicationError::SourceMissing {
                path: "missing/enemies.json".into(),
            }
            .into())
        }
    }

    #[test]
    fn validate_returns_full_report() {
        let service = ValidationService::new(Box::new(FixedSource(testutil::valid_dataset())));
        let report = service.validate().unwrap();
        assert!(report.passed());
        assert_eq!(report.len(), crate::domain::CATALOG.len());
    }

    #[test]
    fn load_failure_propagates_before_any_checks_run() {
        let service = ValidationService::new(Box::new(BrokenSource));
        let err = service.validate().unwrap_err();
        assert!(err.to_string().contains("enemies.json"));
    }
}

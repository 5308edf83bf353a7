//! The validation engine.
//!
//! One synchronous pass: every catalog entry is evaluated against the
//! same immutable snapshot and folded into an ordered [`Report`]. A
//! misbehaving check (a panic inside its body) is caught and demoted to
//! a `Fail` for that check alone — the run always completes and the
//! report always covers the whole catalog.

use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, instrument, warn};

use crate::domain::{CATALOG, Check, CheckOutcome, CheckScope, Dataset, Violation};

/// One row of the report: a check identity plus its outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportEntry {
    pub name: &'static str,
    pub scope: CheckScope,
    pub outcome: CheckOutcome,
}

/// The ordered result of one full validation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    entries: Vec<ReportEntry>,
}

impl Report {
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `true` when every check passed.
    pub fn passed(&self) -> bool {
        self.entries.iter().all(|entry| entry.outcome.is_pass())
    }

    pub fn failure_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| !entry.outcome.is_pass())
            .count()
    }

    /// The failed entries, in catalog order.
    pub fn failures(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries
            .iter()
            .filter(|entry| !entry.outcome.is_pass())
    }
}

/// Stateless executor for the constraint catalog.
pub struct Engine;

impl Engine {
    /// Run the full built-in catalog against one snapshot.
    pub fn run(dataset: &Dataset) -> Report {
        Self::run_with(dataset, CATALOG)
    }

    /// Run an explicit catalog; report order is catalog order.
    #[instrument(skip_all, fields(checks = catalog.len(), rows = dataset.row_count()))]
    pub fn run_with(dataset: &Dataset, catalog: &[Check]) -> Report {
        let entries = catalog
            .iter()
            .map(|check| {
                let outcome = Self::evaluate_isolated(check, dataset);
                debug!(
                    check = check.name,
                    passed = outcome.is_pass(),
                    violations = outcome.violations().len(),
                    "check evaluated"
                );
                ReportEntry {
                    name: check.name,
                    scope: check.scope,
                    outcome,
                }
            })
            .collect();

        Report { entries }
    }

    /// Evaluate one check, converting a panic inside its body into a
    /// `Fail` so later checks still run.
    fn evaluate_isolated(check: &Check, dataset: &Dataset) -> CheckOutcome {
        panic::catch_unwind(AssertUnwindSafe(|| check.evaluate(dataset))).unwrap_or_else(
            |payload| {
                let message = panic_message(&*payload);
                warn!(check = check.name, message, "check panicked; reported as failure");
                CheckOutcome::Fail(vec![Violation::Internal(message)])
            },
        )
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "check panicked".to_owned()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil;

    #[test]
    fn report_covers_the_whole_catalog_in_order() {
        let report = Engine::run(&testutil::valid_dataset());
        assert_eq!(report.len(), CATALOG.len());
        let names: Vec<&str> = report.entries().iter().map(|entry| entry.name).collect();
        let expected: Vec<&str> = CATALOG.iter().map(|check| check.name).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn valid_dataset_produces_all_green_report() {
        let report = Engine::run(&testutil::valid_dataset());
        assert!(report.passed());
        assert_eq!(report.failure_count(), 0);
    }

    #[test]
    fn identical_runs_produce_identical_reports() {
        let dataset = testutil::valid_dataset_builder()
            .enemy(testutil::enemy("stray", false))
            .build();
        let first = Engine::run(&dataset);
        let second = Engine::run(&dataset);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_dataset_still_yields_a_complete_report() {
        // Nothing to validate is not a crash: aggregate and placement
        // checks fail, the rest pass, and every entry is present.
        let report = Engine::run(&crate::domain::Dataset::builder().build());
        assert_eq!(report.len(), CATALOG.len());
        assert!(!report.passed());
        let failed: Vec<&str> = report.failures().map(|entry| entry.name).collect();
        assert!(failed.contains(&"boss-count"));
        assert!(failed.contains(&"zone-count"));
    }

    #[test]
    fn panicking_check_is_isolated() {
        fn explodes(_dataset: &crate::domain::Dataset) -> crate::domain::CheckOutcome {
            panic!("boom");
        }
        fn fine(_dataset: &crate::domain::Dataset) -> crate::domain::CheckOutcome {
            crate::domain::CheckOutcome::Pass
        }

        let catalog = [
            Check::for_tests("explodes", explodes),
            Check::for_tests("fine", fine),
        ];
        let report = Engine::run_with(&testutil::valid_dataset(), &catalog);

        assert_eq!(report.len(), 2);
        let first = &report.entries()[0];
        assert!(!first.outcome.is_pass());
        assert!(first.outcome.violations()[0].to_string().contains("boom"));
        assert!(report.entries()[1].outcome.is_pass());
    }

    #[test]
    fn failures_iterator_yields_only_failed_entries() {
        let dataset = testutil::valid_dataset_builder()
            .enemy(testutil::enemy("stray", false))
            .build();
        let report = Engine::run(&dataset);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(
            report.failures().map(|entry| entry.name).collect::<Vec<_>>(),
            vec!["every-enemy-appears"]
        );
    }
}

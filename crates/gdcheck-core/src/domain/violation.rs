//! Violation taxonomy for failed checks.
//!
//! Every failed check reports one or more [`Violation`]s. Each variant
//! carries enough identifying context (key values, row indices) to
//! locate the offending record in the source tables; the `Display`
//! output is the human-readable diagnostic the reporter prints.

use thiserror::Error;

use super::dataset::Table;

/// A single constraint violation found by one check.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Violation {
    /// A raw record was missing a required field or had a field of the
    /// wrong type.
    #[error("{table} row {row}: {problem}")]
    Shape {
        table: Table,
        row: usize,
        problem: String,
    },

    /// Two records of the same entity share a declared unique key.
    #[error("duplicate {entity} key '{key}'")]
    Duplicate { entity: &'static str, key: String },

    /// A field value falls outside its allowed domain.
    #[error("{entity} '{key}': {problem}")]
    Domain {
        entity: &'static str,
        key: String,
        problem: String,
    },

    /// A foreign-key-shaped field did not resolve to a parent record.
    #[error("{child} references missing {parent} '{key}'")]
    Unresolved {
        child: &'static str,
        parent: &'static str,
        key: String,
    },

    /// A computed count diverged from its fixed expected constant.
    #[error("{what}: found {found}, expected {expected}")]
    CountMismatch {
        what: &'static str,
        found: i64,
        expected: i64,
    },

    /// A linked projectile's location set disagrees with its enemy's.
    #[error(
        "projectile '{projectile}': location {zone}/{stage} appears on the \
         {present} side but not the {absent} side"
    )]
    LocationParity {
        projectile: String,
        zone: String,
        stage: String,
        present: &'static str,
        absent: &'static str,
    },

    /// The check itself blew up; converted from a caught panic so the
    /// run can continue.
    #[error("internal error while evaluating check: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_violation_names_table_and_row() {
        let v = Violation::Shape {
            table: Table::Levels,
            row: 4,
            problem: "missing field `stage`".into(),
        };
        let msg = v.to_string();
        assert!(msg.contains("levels"));
        assert!(msg.contains("row 4"));
        assert!(msg.contains("`stage`"));
    }

    #[test]
    fn duplicate_violation_names_key() {
        let v = Violation::Duplicate {
            entity: "enemy",
            key: "walker".into(),
        };
        assert_eq!(v.to_string(), "duplicate enemy key 'walker'");
    }

    #[test]
    fn domain_violation_carries_problem_text() {
        let v = Violation::Domain {
            entity: "enemy",
            key: "Walker".into(),
            problem: "name_en must be lowercase".into(),
        };
        assert!(v.to_string().contains("lowercase"));
    }
}

//! JSON dataset loading.
//!
//! [`JsonDatasetSource`] reads the five table files from one directory
//! and decodes them into a [`Dataset`] snapshot. Decoding is deliberately
//! lenient at the record level: a row that is missing a field, carries a
//! wrongly-typed field, or is not an object at all is dropped from the
//! typed table and recorded as a [`ShapeIssue`] inside the snapshot, so
//! the structural checks can report it. Only an unobtainable or
//! unparseable *document* aborts the load.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument};

use gdcheck_core::{
    application::{ApplicationError, DatasetSource},
    domain::{Dataset, ShapeIssue, Table},
    error::GdcheckResult,
};

/// File names of the five dataset tables, relative to the dataset root.
pub const ENEMIES_FILE: &str = "enemies.json";
pub const LEVELS_FILE: &str = "levels.json";
pub const ENEMY_APPEARANCES_FILE: &str = "enemy_level.json";
pub const PROJECTILES_FILE: &str = "projectiles.json";
pub const PROJECTILE_APPEARANCES_FILE: &str = "projectile_level.json";

/// Loads a [`Dataset`] from a directory of JSON table files.
#[derive(Debug, Clone)]
pub struct JsonDatasetSource {
    root: PathBuf,
}

impl JsonDatasetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read and parse one table document into a raw JSON value.
    fn read_table(&self, file: &str) -> GdcheckResult<Value> {
        let path = self.root.join(file);
        if !path.exists() {
            return Err(ApplicationError::SourceMissing { path }.into());
        }
        let text = fs::read_to_string(&path).map_err(|e| ApplicationError::SourceUnreadable {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        let value =
            serde_json::from_str(&text).map_err(|e| ApplicationError::SourceUnparseable {
                path: path.clone(),
                reason: e.to_string(),
            })?;
        debug!(path = %path.display(), "table document parsed");
        Ok(value)
    }
}

impl DatasetSource for JsonDatasetSource {
    #[instrument(skip_all, fields(root = %self.root.display()))]
    fn load(&self) -> GdcheckResult<Dataset> {
        let mut issues = Vec::new();

        let enemies = decode_rows(
            Table::Enemies,
            self.read_table(ENEMIES_FILE)?,
            &mut issues,
        );
        let levels = decode_rows(Table::Levels, self.read_table(LEVELS_FILE)?, &mut issues);
        let enemy_appearances = decode_rows(
            Table::EnemyAppearances,
            self.read_table(ENEMY_APPEARANCES_FILE)?,
            &mut issues,
        );
        let projectiles = decode_rows(
            Table::Projectiles,
            self.read_table(PROJECTILES_FILE)?,
            &mut issues,
        );
        let projectile_appearances = decode_rows(
            Table::ProjectileAppearances,
            self.read_table(PROJECTILE_APPEARANCES_FILE)?,
            &mut issues,
        );

        Ok(Dataset::new(
            enemies,
            levels,
            enemy_appearances,
            projectiles,
            projectile_appearances,
            issues,
        ))
    }
}

/// Decode an array of raw rows into typed records, recording a
/// [`ShapeIssue`] for every row serde rejects.
fn decode_rows<T: DeserializeOwned>(
    table: Table,
    document: Value,
    issues: &mut Vec<ShapeIssue>,
) -> Vec<T> {
    let Value::Array(rows) = document else {
        issues.push(ShapeIssue {
            table,
            row: 0,
            problem: "expected a JSON array of records".into(),
        });
        return Vec::new();
    };

    rows.into_iter()
        .enumerate()
        .filter_map(|(row, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                issues.push(ShapeIssue {
                    table,
                    row,
                    problem: e.to_string(),
                });
                None
            }
        })
        .collect()
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use gdcheck_core::error::{ErrorCategory, GdcheckError};
    use std::fs;
    use tempfile::TempDir;

    fn write_tables(dir: &TempDir, tables: &[(&str, &str)]) {
        // Any table not named defaults to an empty array so loads succeed.
        for file in [
            ENEMIES_FILE,
            LEVELS_FILE,
            ENEMY_APPEARANCES_FILE,
            PROJECTILES_FILE,
            PROJECTILE_APPEARANCES_FILE,
        ] {
            let content = tables
                .iter()
                .find(|(name, _)| *name == file)
                .map_or("[]", |(_, content)| content);
            fs::write(dir.path().join(file), content).unwrap();
        }
    }

    #[test]
    fn loads_well_formed_tables() {
        let dir = TempDir::new().unwrap();
        write_tables(
            &dir,
            &[
                (
                    ENEMIES_FILE,
                    r#"[{
                        "name_en": "walker", "name_jp": "ウォーカー",
                        "stompable": true, "flammable": false,
                        "starrable": true, "boss": false, "kill_condition": 0
                    }]"#,
                ),
                (
                    LEVELS_FILE,
                    r#"[{
                        "zone": "overworld", "stage": "1-1",
                        "stars": 3, "coins": 12,
                        "question_blocks": 2, "money_bags": 0
                    }]"#,
                ),
            ],
        );

        let dataset = JsonDatasetSource::new(dir.path()).load().unwrap();
        assert_eq!(dataset.enemies().len(), 1);
        assert_eq!(dataset.enemies()[0].name_en, "walker");
        assert_eq!(dataset.levels().len(), 1);
        assert!(dataset.shape_issues().is_empty());
    }

    #[test]
    fn missing_table_file_is_a_not_found_error() {
        let dir = TempDir::new().unwrap();
        write_tables(&dir, &[]);
        fs::remove_file(dir.path().join(PROJECTILES_FILE)).unwrap();

        let err = JsonDatasetSource::new(dir.path()).load().unwrap_err();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.to_string().contains("projectiles.json"));
    }

    #[test]
    fn broken_json_document_aborts_the_load() {
        let dir = TempDir::new().unwrap();
        write_tables(&dir, &[(LEVELS_FILE, "[{not json")]);

        let err = JsonDatasetSource::new(dir.path()).load().unwrap_err();
        assert!(matches!(
            err,
            GdcheckError::Application(ApplicationError::SourceUnparseable { .. })
        ));
    }

    #[test]
    fn malformed_record_becomes_a_shape_issue() {
        let dir = TempDir::new().unwrap();
        write_tables(
            &dir,
            &[(
                ENEMIES_FILE,
                // First row fine, second row missing almost everything.
                r#"[
                    {
                        "name_en": "walker", "name_jp": "ウォーカー",
                        "stompable": true, "flammable": false,
                        "starrable": true, "boss": false, "kill_condition": 0
                    },
                    {"name_en": "ghost"}
                ]"#,
            )],
        );

        let dataset = JsonDatasetSource::new(dir.path()).load().unwrap();
        assert_eq!(dataset.enemies().len(), 1);
        assert_eq!(dataset.shape_issues().len(), 1);
        let issue = &dataset.shape_issues()[0];
        assert_eq!(issue.table, Table::Enemies);
        assert_eq!(issue.row, 1);
        assert!(issue.problem.contains("missing field"));
    }

    #[test]
    fn wrongly_typed_field_becomes_a_shape_issue() {
        let dir = TempDir::new().unwrap();
        write_tables(
            &dir,
            &[(
                ENEMY_APPEARANCES_FILE,
                r#"[{
                    "enemy_name_en": "walker", "level_zone": "overworld",
                    "level_stage": "1-1", "amount": "three"
                }]"#,
            )],
        );

        let dataset = JsonDatasetSource::new(dir.path()).load().unwrap();
        assert!(dataset.enemy_appearances().is_empty());
        assert_eq!(dataset.shape_issues()[0].table, Table::EnemyAppearances);
    }

    #[test]
    fn non_array_document_becomes_a_shape_issue() {
        let dir = TempDir::new().unwrap();
        write_tables(&dir, &[(PROJECTILES_FILE, r#"{"name": "fireball"}"#)]);

        let dataset = JsonDatasetSource::new(dir.path()).load().unwrap();
        assert!(dataset.projectiles().is_empty());
        assert_eq!(dataset.shape_issues().len(), 1);
        assert!(dataset.shape_issues()[0].problem.contains("array"));
    }

    #[test]
    fn absent_projectile_link_loads_as_none() {
        let dir = TempDir::new().unwrap();
        write_tables(
            &dir,
            &[(
                PROJECTILES_FILE,
                r#"[{"name": "falling_rock", "starrable": false}]"#,
            )],
        );

        let dataset = JsonDatasetSource::new(dir.path()).load().unwrap();
        assert_eq!(dataset.projectiles()[0].enemy_name_en, None);
    }
}

//! In-memory dataset source, the testing twin of the JSON loader.

use gdcheck_core::{application::DatasetSource, domain::Dataset, error::GdcheckResult};

/// Hands out clones of a pre-built snapshot.
#[derive(Debug, Clone, Default)]
pub struct MemoryDatasetSource {
    dataset: Dataset,
}

impl MemoryDatasetSource {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }
}

impl DatasetSource for MemoryDatasetSource {
    fn load(&self) -> GdcheckResult<Dataset> {
        Ok(self.dataset.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gdcheck_core::application::ValidationService;
    use gdcheck_core::domain::{CATALOG, Enemy};

    #[test]
    fn empty_source_loads_an_empty_snapshot() {
        let dataset = MemoryDatasetSource::default().load().unwrap();
        assert_eq!(dataset.row_count(), 0);
    }

    #[test]
    fn drives_the_validation_service() {
        let dataset = Dataset::builder()
            .enemy(Enemy {
                name_en: "walker".into(),
                name_jp: "ウォーカー".into(),
                stompable: true,
                flammable: false,
                starrable: true,
                boss: false,
                kill_condition: 0,
            })
            .build();
        let service = ValidationService::new(Box::new(MemoryDatasetSource::new(dataset)));
        let report = service.validate().unwrap();
        assert_eq!(report.len(), CATALOG.len());
        // walker never appears anywhere, so the run reports failures.
        assert!(!report.passed());
    }
}

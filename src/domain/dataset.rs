// Dataset families and region resolution
use super::metric::MetricRow;
use super::region::Region;
use std::collections::HashMap;
use std::sync::Arc;

pub type Dataset = Arc<[MetricRow]>;

/// Every dataset backing one widget: the all-regions default plus optional
/// overrides keyed by exact region.
#[derive(Debug, Clone)]
pub struct DatasetFamily {
    default: Dataset,
    overrides: HashMap<Region, Dataset>,
}

impl DatasetFamily {
    pub fn new(default: Vec<MetricRow>) -> Self {
        Self {
            default: default.into(),
            overrides: HashMap::new(),
        }
    }

    pub fn with_override(mut self, region: Region, rows: Vec<MetricRow>) -> Self {
        self.overrides.insert(region, rows.into());
        self
    }

    pub fn default_dataset(&self) -> &Dataset {
        &self.default
    }

    pub fn has_override(&self, region: Region) -> bool {
        self.overrides.contains_key(&region)
    }

    /// The override for exactly `region`, or the default. There is no
    /// hierarchy between regions and this never fails.
    pub fn resolve(&self, region: Region) -> &Dataset {
        self.overrides.get(&region).unwrap_or(&self.default)
    }
}

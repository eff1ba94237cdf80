use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use crate::record::{MetaRecord, MetaSourceInfo};
use crate::traits::MetadataProvider;

/// Provider with canned results. `records: None` behaves like an unreachable
/// provider.
pub struct FakeProvider {
    pub id_str: String,
    pub records: Option<Vec<MetaRecord>>,
    active: AtomicBool,
}

impl FakeProvider {
    pub fn new(id: &str, records: Option<Vec<MetaRecord>>) -> Self {
        Self {
            id_str: id.to_string(),
            records,
            active: AtomicBool::new(true),
        }
    }
}

#[async_trait]
impl MetadataProvider for FakeProvider {
    fn id(&self) -> &str {
        &self.id_str
    }

    fn name(&self) -> &str {
        &self.id_str
    }

    fn source_info(&self) -> MetaSourceInfo {
        MetaSourceInfo {
            id: self.id_str.clone(),
            description: format!("{} (fake)", self.id_str),
            link: String::new(),
        }
    }

    fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    fn set_active(&self, active: bool) {
        self.active.store(active, Ordering::Relaxed);
    }

    async fn search(
        &self,
        _query: &str,
        _generic_cover: &str,
        _locale: &str,
    ) -> Option<Vec<MetaRecord>> {
        if !self.is_active() {
            return Some(vec![]);
        }
        self.records.clone()
    }
}

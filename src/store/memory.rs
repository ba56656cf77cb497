use std::collections::HashMap;

use crate::store::SourceData;

/// In-memory source backend, used by tests and `KnowledgeBase::in_memory`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    sources: HashMap<String, HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(
        mut self,
        name: &str,
        entries: impl IntoIterator<Item = (&'static str, &'static str)>,
    ) -> Self {
        self.sources.insert(
            name.to_string(),
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
        self
    }
}

impl SourceData for MemoryStore {
    fn load(&self, name: &str) -> HashMap<String, String> {
        self.sources.get(name).cloned().unwrap_or_default()
    }
}

use serde::{Deserialize, Serialize};

use crate::domain::VerseRecord;

/// A curated, named grouping of verses with descriptive metadata.
///
/// `verse_count` is always derived from the verse list at read time; it is
/// never stored independently, so it cannot go stale. `verses` is `None` when
/// the caller asked for metadata only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub verse_count: usize,
    pub verses: Option<Vec<VerseRecord>>,
    /// Slugs of curated sibling topics, filtered to ones that exist.
    pub related: Vec<String>,
}

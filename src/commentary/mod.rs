//! Commentary store and priority resolver.
//!
//! Each commentary source is a flat mapping from composite verse keys
//! (`{book}-{chapter}-{verse}`) to annotation text, loaded lazily on first use
//! and cached for the process lifetime. Resolution walks the configured
//! sources in ascending priority order and returns the first hit with its
//! attribution; a miss across all sources is an expected outcome, not an
//! error.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use html_escape::decode_html_entities;
use serde::{Deserialize, Serialize};

use crate::domain::{verse_key, VerseCommentary};
use crate::store::SourceData;

/// One configured commentary source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpec {
    /// Backing data name, e.g. "ellicott" for `ellicott.json`.
    pub name: String,
    /// Display title used in attribution.
    pub title: String,
    pub author: String,
    /// Rank in the resolution order (lower = preferred).
    pub priority: u8,
}

impl SourceSpec {
    /// The default source table: Ellicott, then JFB, then Matthew Henry.
    pub fn defaults() -> Vec<SourceSpec> {
        vec![
            SourceSpec {
                name: "ellicott".into(),
                title: "Ellicott\u{2019}s Commentary for English Readers".into(),
                author: "Charles John Ellicott (1819\u{2013}1905)".into(),
                priority: 1,
            },
            SourceSpec {
                name: "jfb".into(),
                title: "Jamieson-Fausset-Brown Bible Commentary".into(),
                author: "Robert Jamieson, A. R. Fausset, David Brown".into(),
                priority: 2,
            },
            SourceSpec {
                name: "mhcc".into(),
                title: "Matthew Henry\u{2019}s Concise Commentary".into(),
                author: "Matthew Henry (1662\u{2013}1714)".into(),
                priority: 3,
            },
        ]
    }
}

type Entries = Arc<HashMap<String, String>>;

/// Lazily-loaded, per-source commentary cache with a fixed resolution order.
pub struct CommentaryStore {
    backend: Box<dyn SourceData>,
    sources: Vec<SourceSpec>,
    cache: Mutex<HashMap<String, Entries>>,
}

impl CommentaryStore {
    /// The source order is fixed here, ascending by priority; ties keep the
    /// configured order.
    pub fn new(backend: Box<dyn SourceData>, mut sources: Vec<SourceSpec>) -> Self {
        sources.sort_by_key(|s| s.priority);
        Self {
            backend,
            sources,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn sources(&self) -> &[SourceSpec] {
        &self.sources
    }

    /// Fetch a source's entries, loading and caching on first access.
    ///
    /// HTML entities in the backing text are decoded here, once, at load time.
    fn entries(&self, name: &str) -> Entries {
        // A poisoned lock only means another caller panicked mid-insert; the
        // cached mappings themselves are immutable and still valid.
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(entries) = cache.get(name) {
            return entries.clone();
        }

        let loaded: HashMap<String, String> = self
            .backend
            .load(name)
            .into_iter()
            .map(|(key, text)| (key, decode_html_entities(&text).into_owned()))
            .collect();
        let entries = Arc::new(loaded);
        cache.insert(name.to_string(), entries.clone());
        entries
    }

    /// Resolve the best available commentary for a verse.
    ///
    /// Sources are consulted in ascending priority order; the first one
    /// containing the key wins, deterministically, regardless of which sources
    /// have been loaded before. `None` means no configured source covers the
    /// verse.
    pub fn resolve(&self, book_slug: &str, chapter: u32, verse: u32) -> Option<VerseCommentary> {
        let key = verse_key(book_slug, chapter, verse);
        for spec in &self.sources {
            if let Some(text) = self.entries(&spec.name).get(&key) {
                return Some(VerseCommentary {
                    text: text.clone(),
                    source: spec.title.clone(),
                    author: spec.author.clone(),
                    priority: spec.priority,
                });
            }
        }
        None
    }

    /// All of one source's entries for a single chapter, keyed by verse number.
    pub fn entries_for_chapter(
        &self,
        source: &str,
        book_slug: &str,
        chapter: u32,
    ) -> BTreeMap<u32, String> {
        let prefix = format!("{}-{}-", book_slug, chapter);
        self.entries(source)
            .iter()
            .filter_map(|(key, text)| {
                let verse: u32 = key.strip_prefix(&prefix)?.parse().ok()?;
                Some((verse, text.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn store_with(sources: Vec<SourceSpec>, backend: MemoryStore) -> CommentaryStore {
        CommentaryStore::new(Box::new(backend), sources)
    }

    #[test]
    fn test_lowest_priority_source_wins() {
        let backend = MemoryStore::new()
            .with_source("ellicott", [("john-3-16", "ellicott text")])
            .with_source("jfb", [("john-3-16", "jfb text")]);
        let store = store_with(SourceSpec::defaults(), backend);

        let hit = store.resolve("john", 3, 16).unwrap();
        assert_eq!(hit.text, "ellicott text");
        assert_eq!(hit.priority, 1);
        assert!(hit.source.starts_with("Ellicott"));
    }

    #[test]
    fn test_priority_order_ignores_configured_order() {
        // Declare jfb first but with the higher priority number.
        let sources = vec![
            SourceSpec {
                name: "jfb".into(),
                title: "JFB".into(),
                author: "Jamieson".into(),
                priority: 2,
            },
            SourceSpec {
                name: "ellicott".into(),
                title: "Ellicott".into(),
                author: "Ellicott".into(),
                priority: 1,
            },
        ];
        let backend = MemoryStore::new()
            .with_source("ellicott", [("romans-8-28", "from ellicott")])
            .with_source("jfb", [("romans-8-28", "from jfb")]);
        let store = store_with(sources, backend);

        assert_eq!(store.resolve("romans", 8, 28).unwrap().text, "from ellicott");
    }

    #[test]
    fn test_falls_through_to_next_source() {
        let backend = MemoryStore::new()
            .with_source("ellicott", [("john-3-16", "ellicott text")])
            .with_source("mhcc", [("psalms-23-1", "mhcc text")]);
        let store = store_with(SourceSpec::defaults(), backend);

        let hit = store.resolve("psalms", 23, 1).unwrap();
        assert_eq!(hit.text, "mhcc text");
        assert_eq!(hit.priority, 3);
    }

    #[test]
    fn test_miss_everywhere_is_none() {
        let store = store_with(SourceSpec::defaults(), MemoryStore::new());
        assert!(store.resolve("obadiah", 1, 1).is_none());
    }

    #[test]
    fn test_resolution_is_deterministic_across_calls() {
        let backend = MemoryStore::new()
            .with_source("ellicott", [("john-3-16", "a")])
            .with_source("jfb", [("john-3-16", "b")]);
        let store = store_with(SourceSpec::defaults(), backend);

        // Warm the lower-ranked source first; the winner must not change.
        store.entries("jfb");
        let first = store.resolve("john", 3, 16).unwrap();
        let second = store.resolve("john", 3, 16).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.text, "a");
    }

    #[test]
    fn test_html_entities_decoded_at_load() {
        let backend =
            MemoryStore::new().with_source("ellicott", [("john-3-16", "God&#8217;s love &amp; grace")]);
        let store = store_with(SourceSpec::defaults(), backend);

        let hit = store.resolve("john", 3, 16).unwrap();
        assert_eq!(hit.text, "God\u{2019}s love & grace");
    }

    #[test]
    fn test_entries_for_chapter() {
        let backend = MemoryStore::new().with_source(
            "mhcc",
            [
                ("psalms-23-1", "v1"),
                ("psalms-23-4", "v4"),
                ("psalms-24-1", "other chapter"),
                ("psalms-23-bad", "unparseable verse"),
            ],
        );
        let store = store_with(SourceSpec::defaults(), backend);

        let chapter = store.entries_for_chapter("mhcc", "psalms", 23);
        assert_eq!(chapter.len(), 2);
        assert_eq!(chapter.get(&1).map(String::as_str), Some("v1"));
        assert_eq!(chapter.get(&4).map(String::as_str), Some("v4"));
    }
}

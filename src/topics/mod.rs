//! Topic aggregation over the verse catalog.
//!
//! Topics are curated data: a name, a description, an ordered list of verse
//! keys into the catalog, and hand-picked related topics. The index validates
//! the curated references once at build time; lookups after that are pure.

use tracing::debug;

use crate::catalog::VerseCatalog;
use crate::domain::{parse_verse_key, Topic, VerseRecord};

/// Curated topic definition, as authored in the static data.
#[derive(Debug, Clone)]
pub struct TopicDef {
    pub slug: String,
    pub name: String,
    pub description: String,
    /// Composite verse keys (`{book}-{chapter}-{verse}`) into the catalog.
    pub verse_keys: Vec<String>,
    pub related: Vec<String>,
}

/// Validated topic set with ordered lookup.
#[derive(Debug, Clone, Default)]
pub struct TopicIndex {
    topics: Vec<TopicDef>,
}

impl TopicIndex {
    /// Build the index, dropping curated references that do not resolve.
    ///
    /// Invalid related-topic slugs and verse keys missing from the catalog
    /// are a data-quality issue, not a runtime error: they are dropped with a
    /// debug log and the rest of the topic stays usable.
    pub fn new(mut defs: Vec<TopicDef>, catalog: &VerseCatalog) -> Self {
        let known: Vec<String> = defs.iter().map(|d| d.slug.clone()).collect();

        for def in &mut defs {
            def.related.retain(|slug| {
                let keep = *slug != def.slug && known.contains(slug);
                if !keep {
                    debug!(topic = %def.slug, related = %slug, "dropping unknown related topic");
                }
                keep
            });
            def.verse_keys.retain(|key| {
                let keep = resolve_key(catalog, key).is_some();
                if !keep {
                    debug!(topic = %def.slug, key = %key, "dropping unresolvable verse key");
                }
                keep
            });
        }

        Self { topics: defs }
    }

    /// Topic summaries (no verse materialization), in declared order.
    pub fn all(&self) -> Vec<Topic> {
        self.topics.iter().map(metadata).collect()
    }

    /// Look up one topic.
    ///
    /// With `include_verses` the full verse records are materialized from the
    /// catalog in curated order; without it only metadata and the derived
    /// verse count are returned.
    pub fn get(&self, slug: &str, include_verses: bool, catalog: &VerseCatalog) -> Option<Topic> {
        let def = self.topics.iter().find(|d| d.slug == slug)?;
        let mut topic = metadata(def);
        if include_verses {
            let verses: Vec<VerseRecord> = def
                .verse_keys
                .iter()
                .filter_map(|key| resolve_key(catalog, key).cloned())
                .collect();
            // Derived at read time, never stored.
            topic.verse_count = verses.len();
            topic.verses = Some(verses);
        }
        Some(topic)
    }
}

fn metadata(def: &TopicDef) -> Topic {
    Topic {
        slug: def.slug.clone(),
        name: def.name.clone(),
        description: def.description.clone(),
        verse_count: def.verse_keys.len(),
        verses: None,
        related: def.related.clone(),
    }
}

fn resolve_key<'a>(catalog: &'a VerseCatalog, key: &str) -> Option<&'a VerseRecord> {
    let (book_slug, chapter, verse) = parse_verse_key(key)?;
    catalog.find_by_key(book_slug, chapter, verse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VerseCollection;
    use crate::domain::VerseSpan;

    fn verse(slug: &str, chapter: u32, start: u32, theme: &str) -> VerseRecord {
        VerseRecord {
            reference: format!("{} {}:{}", slug, chapter, start),
            book: slug.to_string(),
            book_slug: slug.to_string(),
            chapter,
            span: VerseSpan::Single(start),
            text: String::new(),
            theme: theme.to_string(),
            theme_slug: theme.to_lowercase(),
        }
    }

    fn catalog() -> VerseCatalog {
        VerseCatalog::new(vec![VerseCollection::new(
            "all",
            "All",
            vec![
                verse("psalms", 46, 1, "Refuge"),
                verse("john", 14, 27, "Peace"),
                verse("isaiah", 26, 3, "Peace"),
            ],
        )])
    }

    fn defs() -> Vec<TopicDef> {
        vec![
            TopicDef {
                slug: "peace".into(),
                name: "Peace".into(),
                description: "Verses about peace.".into(),
                verse_keys: vec!["john-14-27".into(), "isaiah-26-3".into()],
                related: vec!["refuge".into(), "no-such-topic".into()],
            },
            TopicDef {
                slug: "refuge".into(),
                name: "Refuge".into(),
                description: "Verses about refuge.".into(),
                verse_keys: vec!["psalms-46-1".into(), "psalms-999-1".into()],
                related: vec!["peace".into()],
            },
        ]
    }

    #[test]
    fn test_metadata_only_lookup() {
        let catalog = catalog();
        let index = TopicIndex::new(defs(), &catalog);

        let topic = index.get("peace", false, &catalog).unwrap();
        assert_eq!(topic.name, "Peace");
        assert_eq!(topic.verse_count, 2);
        assert!(topic.verses.is_none());
    }

    #[test]
    fn test_full_lookup_materializes_in_curated_order() {
        let catalog = catalog();
        let index = TopicIndex::new(defs(), &catalog);

        let topic = index.get("peace", true, &catalog).unwrap();
        let verses = topic.verses.unwrap();
        assert_eq!(verses.len(), topic.verse_count);
        assert_eq!(verses[0].book_slug, "john");
        assert_eq!(verses[1].book_slug, "isaiah");
    }

    #[test]
    fn test_unknown_slug() {
        let catalog = catalog();
        let index = TopicIndex::new(defs(), &catalog);
        assert!(index.get("hope", true, &catalog).is_none());
    }

    #[test]
    fn test_invalid_related_topics_dropped() {
        let catalog = catalog();
        let index = TopicIndex::new(defs(), &catalog);

        let topic = index.get("peace", false, &catalog).unwrap();
        assert_eq!(topic.related, ["refuge"]);
    }

    #[test]
    fn test_dangling_verse_keys_dropped_so_counts_agree() {
        let catalog = catalog();
        let index = TopicIndex::new(defs(), &catalog);

        let meta = index.get("refuge", false, &catalog).unwrap();
        let full = index.get("refuge", true, &catalog).unwrap();
        assert_eq!(meta.verse_count, 1);
        assert_eq!(full.verse_count, full.verses.as_ref().unwrap().len());
        assert_eq!(meta.verse_count, full.verse_count);
    }

    #[test]
    fn test_all_lists_summaries_in_declared_order() {
        let catalog = catalog();
        let index = TopicIndex::new(defs(), &catalog);

        let all = index.all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].slug, "peace");
        assert_eq!(all[1].slug, "refuge");
        assert!(all.iter().all(|t| t.verses.is_none()));
    }
}

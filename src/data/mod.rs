//! Built-in curated datasets.
//!
//! Verse collections, topics, the daily rotation list, and book outlines are
//! authored in source, defined once here; only commentary sources are
//! file-backed. All text is KJV.

mod collections;
mod daily;
mod outlines;
mod topics;

pub use collections::builtin_collections;
pub use daily::daily_rotation;
pub use outlines::builtin_outlines;
pub use topics::builtin_topics;

use crate::domain::{VerseRecord, VerseSpan};

/// Shorthand constructor used by the dataset modules.
fn v(
    reference: &str,
    book: &str,
    book_slug: &str,
    chapter: u32,
    start: u32,
    end: Option<u32>,
    text: &str,
    theme: &str,
    theme_slug: &str,
) -> VerseRecord {
    VerseRecord {
        reference: reference.to_string(),
        book: book.to_string(),
        book_slug: book_slug.to_string(),
        chapter,
        span: VerseSpan::new(start, end),
        text: text.to_string(),
        theme: theme.to_string(),
        theme_slug: theme_slug.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VerseCatalog;
    use crate::domain::parse_verse_key;

    #[test]
    fn test_collections_are_nonempty_with_unique_references() {
        for collection in builtin_collections() {
            assert!(!collection.is_empty(), "{} is empty", collection.slug);
            let mut refs: Vec<&str> = collection
                .verses()
                .iter()
                .map(|v| v.reference.as_str())
                .collect();
            let before = refs.len();
            refs.sort_unstable();
            refs.dedup();
            assert_eq!(refs.len(), before, "duplicate reference in {}", collection.slug);
        }
    }

    #[test]
    fn test_topic_verse_keys_resolve_against_builtin_catalog() {
        let catalog = VerseCatalog::new(builtin_collections());
        for def in builtin_topics() {
            for key in &def.verse_keys {
                let (book, chapter, verse) = parse_verse_key(key).expect("well-formed key");
                assert!(
                    catalog.find_by_key(book, chapter, verse).is_some(),
                    "topic {} references missing verse {}",
                    def.slug,
                    key
                );
            }
        }
    }

    #[test]
    fn test_topic_related_slugs_exist() {
        let defs = builtin_topics();
        let slugs: Vec<&str> = defs.iter().map(|d| d.slug.as_str()).collect();
        for def in &defs {
            for related in &def.related {
                assert!(slugs.contains(&related.as_str()));
            }
        }
    }

    #[test]
    fn test_daily_rotation_months_valid() {
        let daily = daily_rotation();
        assert!(!daily.is_empty());
        assert!(daily.iter().all(|d| (1..=12).contains(&d.month)));
    }

    #[test]
    fn test_outline_ranges_parse_and_do_not_overlap() {
        for outline in builtin_outlines() {
            for section in &outline.sections {
                assert!(section.range().is_some(), "bad range in {}", outline.book_slug);
            }
            assert!(crate::outline::report_overlaps(&outline.book_slug, &outline.sections)
                .is_empty());
        }
    }
}

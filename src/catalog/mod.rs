//! Verse catalog: named, immutable collections of verse records with
//! derived views (theme filters, uniqueness aggregations, testament splits).

use crate::canon::Testament;
use crate::domain::VerseRecord;

/// A curated, ordered list of verses ("anxiety verses", "strength verses").
///
/// The verse order is the authored order and every derived view preserves it.
#[derive(Debug, Clone)]
pub struct VerseCollection {
    pub slug: String,
    pub name: String,
    verses: Vec<VerseRecord>,
}

/// Derived per-collection statistics, recomputed on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionStats {
    pub verse_count: usize,
    /// Theme labels in first-seen order.
    pub themes: Vec<String>,
    pub book_count: usize,
    pub old_testament: usize,
    pub new_testament: usize,
}

impl VerseCollection {
    pub fn new(slug: &str, name: &str, verses: Vec<VerseRecord>) -> Self {
        Self {
            slug: slug.to_string(),
            name: name.to_string(),
            verses,
        }
    }

    pub fn verses(&self) -> &[VerseRecord] {
        &self.verses
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    /// Look up a verse by its starting location.
    pub fn get_by_key(&self, book_slug: &str, chapter: u32, verse: u32) -> Option<&VerseRecord> {
        self.verses.iter().find(|v| {
            v.book_slug == book_slug && v.chapter == chapter && v.span.start() == verse
        })
    }

    /// Verses tagged with a theme, in collection order.
    pub fn filter_by_theme(&self, theme_slug: &str) -> Vec<&VerseRecord> {
        self.verses
            .iter()
            .filter(|v| v.theme_slug == theme_slug)
            .collect()
    }

    /// Theme labels, each exactly once, in first-seen order.
    pub fn unique_themes(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for verse in &self.verses {
            if !seen.contains(&verse.theme) {
                seen.push(verse.theme.clone());
            }
        }
        seen
    }

    /// Book slugs, each exactly once, in first-seen order.
    pub fn unique_books(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for verse in &self.verses {
            if !seen.contains(&verse.book_slug) {
                seen.push(verse.book_slug.clone());
            }
        }
        seen
    }

    /// Split into Old and New Testament subsequences, both in collection
    /// order. Every verse lands in exactly one side.
    pub fn partition_by_testament(&self) -> (Vec<&VerseRecord>, Vec<&VerseRecord>) {
        self.verses
            .iter()
            .partition(|v| v.testament() == Testament::Old)
    }

    pub fn stats(&self) -> CollectionStats {
        let (old, new) = self.partition_by_testament();
        CollectionStats {
            verse_count: self.verses.len(),
            themes: self.unique_themes(),
            book_count: self.unique_books().len(),
            old_testament: old.len(),
            new_testament: new.len(),
        }
    }
}

/// All named collections, in declared order.
#[derive(Debug, Clone, Default)]
pub struct VerseCatalog {
    collections: Vec<VerseCollection>,
}

impl VerseCatalog {
    pub fn new(collections: Vec<VerseCollection>) -> Self {
        Self { collections }
    }

    pub fn collections(&self) -> &[VerseCollection] {
        &self.collections
    }

    pub fn collection(&self, slug: &str) -> Option<&VerseCollection> {
        self.collections.iter().find(|c| c.slug == slug)
    }

    /// First record matching the key across all collections, in declared
    /// collection order. The same verse may appear in several collections.
    pub fn find_by_key(&self, book_slug: &str, chapter: u32, verse: u32) -> Option<&VerseRecord> {
        self.collections
            .iter()
            .find_map(|c| c.get_by_key(book_slug, chapter, verse))
    }
}

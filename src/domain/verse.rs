use serde::{Deserialize, Serialize};

use crate::canon::Testament;

/// The verses of a chapter a record covers: one verse or a contiguous range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerseSpan {
    Single(u32),
    Range { start: u32, end: u32 },
}

impl VerseSpan {
    /// Build a span from a start verse and an optional end verse.
    ///
    /// An end that is absent or not past the start collapses to `Single`.
    pub fn new(start: u32, end: Option<u32>) -> Self {
        match end {
            Some(end) if end > start => VerseSpan::Range { start, end },
            _ => VerseSpan::Single(start),
        }
    }

    pub fn start(&self) -> u32 {
        match *self {
            VerseSpan::Single(v) => v,
            VerseSpan::Range { start, .. } => start,
        }
    }

    pub fn end(&self) -> u32 {
        match *self {
            VerseSpan::Single(v) => v,
            VerseSpan::Range { end, .. } => end,
        }
    }
}

/// One scripture reference with its text, location, and topical tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerseRecord {
    /// Display reference, e.g. "Philippians 4:6–7".
    pub reference: String,
    /// Display book name, e.g. "1 Peter".
    pub book: String,
    /// Canonical book slug, e.g. "1-peter".
    pub book_slug: String,
    pub chapter: u32,
    pub span: VerseSpan,
    /// Literal KJV text.
    pub text: String,
    /// Primary theme label, e.g. "Casting Care".
    pub theme: String,
    /// Normalized theme identifier, e.g. "casting-care".
    pub theme_slug: String,
}

impl VerseRecord {
    /// Composite key of the record's starting verse: `{book}-{chapter}-{verse}`.
    pub fn key(&self) -> String {
        verse_key(&self.book_slug, self.chapter, self.span.start())
    }

    pub fn testament(&self) -> Testament {
        Testament::of(&self.book_slug)
    }
}

/// Composite verse key shared by the commentary store and the topic index.
pub fn verse_key(book_slug: &str, chapter: u32, verse: u32) -> String {
    format!("{}-{}-{}", book_slug, chapter, verse)
}

/// Split a composite key back into `(book_slug, chapter, verse)`.
///
/// Book slugs may themselves contain hyphens ("1-peter"), so the chapter and
/// verse are taken from the end.
pub fn parse_verse_key(key: &str) -> Option<(&str, u32, u32)> {
    let mut parts = key.rsplitn(3, '-');
    let verse = parts.next()?.parse().ok()?;
    let chapter = parts.next()?.parse().ok()?;
    let book_slug = parts.next()?;
    if book_slug.is_empty() {
        return None;
    }
    Some((book_slug, chapter, verse))
}

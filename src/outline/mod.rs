//! Book outlines and chapter-range matching.
//!
//! Outline sections carry free-text chapter ranges as authored ("3", "3-7",
//! or the en dash variant "3–7"). Matching a chapter to its section is
//! first-match-wins over the declared order; if authored ranges overlap, the
//! earliest section silently wins. [`report_overlaps`] surfaces such data
//! inconsistencies at load time without changing match behavior.

use tracing::warn;

/// An inclusive chapter interval parsed from a range string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChapterRange {
    pub start: u32,
    pub end: u32,
}

impl ChapterRange {
    /// Parse a range string.
    ///
    /// The leading integer is the start; an integer after the first hyphen or
    /// en dash is the end; otherwise the range covers the single start
    /// chapter. Trailing text beyond those is ignored.
    pub fn parse(s: &str) -> Option<ChapterRange> {
        let s = s.trim();
        let start = leading_number(s)?;
        let end = s
            .find(['-', '\u{2013}'])
            .and_then(|i| {
                let rest = &s[i..];
                // Skip the dash itself; it may be multi-byte (en dash).
                let after = &rest[rest.chars().next()?.len_utf8()..];
                leading_number(after)
            })
            .unwrap_or(start);
        Some(ChapterRange { start, end })
    }

    pub fn contains(&self, chapter: u32) -> bool {
        self.start <= chapter && chapter <= self.end
    }

    pub fn overlaps(&self, other: &ChapterRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

fn leading_number(s: &str) -> Option<u32> {
    let digits: String = s.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// One titled section of a book outline.
#[derive(Debug, Clone)]
pub struct OutlineSection {
    pub title: String,
    /// Range text as authored, e.g. "12-36".
    pub chapters: String,
    pub description: String,
}

impl OutlineSection {
    pub fn new(title: &str, chapters: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            chapters: chapters.to_string(),
            description: description.to_string(),
        }
    }

    pub fn range(&self) -> Option<ChapterRange> {
        ChapterRange::parse(&self.chapters)
    }
}

/// The outline of one book.
#[derive(Debug, Clone)]
pub struct BookOutline {
    pub book_slug: String,
    pub book_name: String,
    pub sections: Vec<OutlineSection>,
}

impl BookOutline {
    /// First section whose range contains the chapter, in declared order.
    pub fn section_for_chapter(&self, chapter: u32) -> Option<&OutlineSection> {
        match_chapter_to_section(chapter, &self.sections)
    }
}

/// First-match-wins lookup of the section enclosing a chapter.
///
/// Sections with unparseable range text never match. No match means the
/// caller falls back to other data (book-level info).
pub fn match_chapter_to_section(
    chapter: u32,
    sections: &[OutlineSection],
) -> Option<&OutlineSection> {
    sections
        .iter()
        .find(|s| s.range().is_some_and(|r| r.contains(chapter)))
}

/// Report overlapping section ranges as index pairs, logging each one.
///
/// Purely diagnostic: runtime matching stays first-match-wins either way.
pub fn report_overlaps(book_slug: &str, sections: &[OutlineSection]) -> Vec<(usize, usize)> {
    let ranges: Vec<Option<ChapterRange>> = sections.iter().map(|s| s.range()).collect();
    let mut overlaps = Vec::new();
    for i in 0..sections.len() {
        for j in (i + 1)..sections.len() {
            if let (Some(a), Some(b)) = (ranges[i], ranges[j]) {
                if a.overlaps(&b) {
                    warn!(
                        book = book_slug,
                        first = %sections[i].chapters,
                        second = %sections[j].chapters,
                        "overlapping outline sections; first declared wins"
                    );
                    overlaps.push((i, j));
                }
            }
        }
    }
    overlaps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_chapter() {
        assert_eq!(ChapterRange::parse("9"), Some(ChapterRange { start: 9, end: 9 }));
    }

    #[test]
    fn test_parse_hyphen_range() {
        assert_eq!(ChapterRange::parse("3-7"), Some(ChapterRange { start: 3, end: 7 }));
        assert_eq!(ChapterRange::parse("12-36"), Some(ChapterRange { start: 12, end: 36 }));
    }

    #[test]
    fn test_parse_en_dash_range() {
        assert_eq!(
            ChapterRange::parse("3\u{2013}7"),
            Some(ChapterRange { start: 3, end: 7 })
        );
    }

    #[test]
    fn test_parse_dash_without_end_collapses() {
        assert_eq!(ChapterRange::parse("3-"), Some(ChapterRange { start: 3, end: 3 }));
    }

    #[test]
    fn test_parse_non_numeric() {
        assert_eq!(ChapterRange::parse("Prologue"), None);
        assert_eq!(ChapterRange::parse(""), None);
    }

    #[test]
    fn test_contains() {
        let range = ChapterRange { start: 3, end: 7 };
        assert!(range.contains(3));
        assert!(range.contains(5));
        assert!(range.contains(7));
        assert!(!range.contains(2));
        assert!(!range.contains(8));
    }

    #[test]
    fn test_single_chapter_matches_only_itself() {
        let sections = vec![OutlineSection::new("The Fall", "9", "")];
        assert!(match_chapter_to_section(9, &sections).is_some());
        assert!(match_chapter_to_section(8, &sections).is_none());
        assert!(match_chapter_to_section(10, &sections).is_none());
    }

    #[test]
    fn test_first_match_wins_over_overlap() {
        let sections = vec![
            OutlineSection::new("First", "1-5", ""),
            OutlineSection::new("Second", "3-7", ""),
        ];
        let hit = match_chapter_to_section(4, &sections).unwrap();
        assert_eq!(hit.title, "First");
    }

    #[test]
    fn test_no_match_returns_none() {
        let sections = vec![
            OutlineSection::new("First", "1-5", ""),
            OutlineSection::new("Second", "6-10", ""),
        ];
        assert!(match_chapter_to_section(11, &sections).is_none());
    }

    #[test]
    fn test_unparseable_range_never_matches() {
        let sections = vec![
            OutlineSection::new("Intro", "Prologue", ""),
            OutlineSection::new("Body", "1-50", ""),
        ];
        let hit = match_chapter_to_section(1, &sections).unwrap();
        assert_eq!(hit.title, "Body");
    }

    #[test]
    fn test_report_overlaps_finds_pair_without_changing_match() {
        let sections = vec![
            OutlineSection::new("First", "1-5", ""),
            OutlineSection::new("Second", "3-7", ""),
            OutlineSection::new("Third", "8-10", ""),
        ];
        assert_eq!(report_overlaps("genesis", &sections), vec![(0, 1)]);
        assert_eq!(match_chapter_to_section(4, &sections).unwrap().title, "First");
    }

    #[test]
    fn test_report_overlaps_clean_outline() {
        let sections = vec![
            OutlineSection::new("First", "1-11", ""),
            OutlineSection::new("Second", "12-36", ""),
            OutlineSection::new("Third", "37-50", ""),
        ];
        assert!(report_overlaps("genesis", &sections).is_empty());
    }
}

//! Canonical book membership.
//!
//! The Old Testament slug set is defined here exactly once; every testament
//! partition in the crate goes through [`Testament::of`].

/// Slugs of the 39 Old Testament books, in canonical order.
pub const OLD_TESTAMENT_BOOKS: [&str; 39] = [
    "genesis",
    "exodus",
    "leviticus",
    "numbers",
    "deuteronomy",
    "joshua",
    "judges",
    "ruth",
    "1-samuel",
    "2-samuel",
    "1-kings",
    "2-kings",
    "1-chronicles",
    "2-chronicles",
    "ezra",
    "nehemiah",
    "esther",
    "job",
    "psalms",
    "proverbs",
    "ecclesiastes",
    "song-of-solomon",
    "isaiah",
    "jeremiah",
    "lamentations",
    "ezekiel",
    "daniel",
    "hosea",
    "joel",
    "amos",
    "obadiah",
    "jonah",
    "micah",
    "nahum",
    "habakkuk",
    "zephaniah",
    "haggai",
    "zechariah",
    "malachi",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Testament {
    Old,
    New,
}

impl Testament {
    /// Classify a book slug.
    ///
    /// Closed world: any slug not in [`OLD_TESTAMENT_BOOKS`] is treated as New
    /// Testament, including unknown slugs. There is no "unknown" category.
    pub fn of(book_slug: &str) -> Testament {
        if OLD_TESTAMENT_BOOKS.contains(&book_slug) {
            Testament::Old
        } else {
            Testament::New
        }
    }
}

pub fn is_old_testament(book_slug: &str) -> bool {
    Testament::of(book_slug) == Testament::Old
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_count() {
        assert_eq!(OLD_TESTAMENT_BOOKS.len(), 39);
    }

    #[test]
    fn test_old_testament_books() {
        assert_eq!(Testament::of("genesis"), Testament::Old);
        assert_eq!(Testament::of("psalms"), Testament::Old);
        assert_eq!(Testament::of("malachi"), Testament::Old);
        assert_eq!(Testament::of("2-chronicles"), Testament::Old);
    }

    #[test]
    fn test_new_testament_books() {
        assert_eq!(Testament::of("matthew"), Testament::New);
        assert_eq!(Testament::of("revelation"), Testament::New);
        assert_eq!(Testament::of("1-peter"), Testament::New);
    }

    #[test]
    fn test_unknown_slug_is_new_testament() {
        // Closed-world assumption: everything outside the OT set is NT.
        assert_eq!(Testament::of("not-a-book"), Testament::New);
        assert_eq!(Testament::of(""), Testament::New);
    }
}

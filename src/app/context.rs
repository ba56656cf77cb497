use chrono::NaiveDate;

use crate::app::Result;
use crate::catalog::VerseCatalog;
use crate::commentary::CommentaryStore;
use crate::config::Config;
use crate::data;
use crate::domain::{Topic, VerseCommentary};
use crate::outline::{report_overlaps, BookOutline, OutlineSection};
use crate::rotation::{select_for_date, DailyVerse};
use crate::store::{JsonDirStore, MemoryStore, SourceData};
use crate::topics::TopicIndex;

/// The process-wide, read-only knowledge base.
///
/// Built once from config plus the built-in datasets; every operation after
/// construction is a pure lookup over immutable data (commentary sources are
/// lazily loaded and cached inside [`CommentaryStore`]).
pub struct KnowledgeBase {
    pub catalog: VerseCatalog,
    pub commentary: CommentaryStore,
    pub topics: TopicIndex,
    daily: Vec<DailyVerse>,
    outlines: Vec<BookOutline>,
}

impl KnowledgeBase {
    /// Build from config, with commentary sources read from the data dir.
    pub fn new(config: Config) -> Result<Self> {
        let data_dir = config.data_dir()?;
        let backend = JsonDirStore::new(data_dir);
        Ok(Self::with_backend(config, Box::new(backend)))
    }

    /// Build with no file-backed commentary; every commentary lookup misses.
    /// Used by tests and callers that only need the in-source datasets.
    pub fn in_memory() -> Self {
        Self::with_backend(Config::default(), Box::new(MemoryStore::new()))
    }

    pub fn with_backend(config: Config, backend: Box<dyn SourceData>) -> Self {
        let catalog = VerseCatalog::new(data::builtin_collections());
        let commentary = CommentaryStore::new(backend, config.sources);
        let topics = TopicIndex::new(data::builtin_topics(), &catalog);
        let outlines = data::builtin_outlines();

        // Diagnostic only; matching stays first-declared-wins regardless.
        for outline in &outlines {
            report_overlaps(&outline.book_slug, &outline.sections);
        }

        Self {
            catalog,
            commentary,
            topics,
            daily: data::daily_rotation(),
            outlines,
        }
    }

    /// Best available commentary for a verse, or `None` when no source
    /// covers it.
    pub fn resolve_commentary(
        &self,
        book_slug: &str,
        chapter: u32,
        verse: u32,
    ) -> Option<VerseCommentary> {
        self.commentary.resolve(book_slug, chapter, verse)
    }

    pub fn topic(&self, slug: &str, include_verses: bool) -> Option<Topic> {
        self.topics.get(slug, include_verses, &self.catalog)
    }

    pub fn verse_of_the_day(&self, date: NaiveDate) -> Option<&DailyVerse> {
        select_for_date(date, &self.daily)
    }

    pub fn outlines(&self) -> &[BookOutline] {
        &self.outlines
    }

    pub fn outline(&self, book_slug: &str) -> Option<&BookOutline> {
        self.outlines.iter().find(|o| o.book_slug == book_slug)
    }

    /// The outline section enclosing a chapter of a book.
    pub fn section_for_chapter(&self, book_slug: &str, chapter: u32) -> Option<&OutlineSection> {
        self.outline(book_slug)?.section_for_chapter(chapter)
    }
}

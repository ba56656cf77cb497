//! # Concord
//!
//! A read-only scripture reference knowledge base: curated verse collections,
//! layered commentary resolution, topic aggregation, book outline matching,
//! and a deterministic verse-of-the-day rotation.
//!
//! ## Architecture
//!
//! ```text
//! SourceData → CommentaryStore ┐
//! builtin data → VerseCatalog  ├→ KnowledgeBase → consumers (CLI, pages)
//!                TopicIndex    ┘
//! ```
//!
//! Everything is loaded once (commentary sources lazily, on first access) and
//! immutable for the life of the process; all lookups are pure and
//! synchronous. Absence is an expected outcome everywhere: lookups return
//! `Option`, never an error, and a missing or malformed commentary source
//! degrades to "not found" for its keys instead of failing the process.
//!
//! ## Modules
//!
//! - [`app`]: [`KnowledgeBase`](app::KnowledgeBase) context and error types
//! - [`canon`]: the Old Testament book set, defined once
//! - [`catalog`]: named verse collections with derived views
//! - [`commentary`]: lazy per-source cache and priority resolver
//! - [`data`]: built-in curated datasets
//! - [`outline`]: chapter-range parsing and section matching
//! - [`rotation`]: date-to-index verse-of-the-day selection
//! - [`topics`]: topic aggregation over the catalog

/// Knowledge base context and error handling.
pub mod app;

/// Canonical testament membership (the 39 OT book slugs).
pub mod canon;

/// Named verse collections: key lookup, theme filters, uniqueness
/// aggregations, testament partition.
pub mod catalog;

/// Command-line interface using clap.
///
/// A thin read-only inspection surface over the library:
/// - `commentary <book> <chapter> <verse>` - resolve commentary
/// - `collection <slug> [--theme] [--stats]` - show a verse collection
/// - `topic <slug> [--verses]` - show a topic
/// - `daily [--date]` - verse of the day
/// - `outline <book> [--chapter]` - book outline sections
pub mod cli;

/// Commentary store and resolver.
///
/// - [`SourceSpec`](commentary::SourceSpec): one configured source
/// - [`CommentaryStore`](commentary::CommentaryStore): lazy cache + fixed
///   priority resolution
pub mod commentary;

/// Configuration management.
///
/// Loads from `~/.config/concord/config.toml`: the commentary data directory
/// and the source table (name, title, author, priority).
pub mod config;

/// Built-in curated datasets: verse collections, topics, the daily rotation
/// list, and book outlines.
pub mod data;

/// Core domain models.
///
/// - [`VerseRecord`](domain::VerseRecord): one reference with text and theme
/// - [`VerseSpan`](domain::VerseSpan): single verse vs contiguous range
/// - [`VerseCommentary`](domain::VerseCommentary): resolved commentary with
///   attribution
/// - [`Topic`](domain::Topic): curated topic with derived verse count
pub mod domain;

/// Book outlines and chapter-range matching (first declared match wins).
pub mod outline;

/// Deterministic day-of-year rotation.
pub mod rotation;

/// Backing data access for named commentary sources.
///
/// - [`SourceData`](store::SourceData): trait defining the load contract
/// - [`JsonDirStore`](store::JsonDirStore): JSON-file-per-source backend
/// - [`MemoryStore`](store::MemoryStore): in-memory backend for tests
pub mod store;

/// Topic aggregation over the verse catalog.
pub mod topics;

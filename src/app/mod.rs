pub mod context;
pub mod error;

pub use context::KnowledgeBase;
pub use error::{ConcordError, Result};

pub mod commentary;
pub mod topic;
pub mod verse;

pub use commentary::VerseCommentary;
pub use topic::Topic;
pub use verse::{parse_verse_key, verse_key, VerseRecord, VerseSpan};

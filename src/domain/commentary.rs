use serde::{Deserialize, Serialize};

/// A resolved commentary entry with its attribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseCommentary {
    pub text: String,
    /// Source title, e.g. "Ellicott's Commentary for English Readers".
    pub source: String,
    pub author: String,
    /// Priority rank of the source that matched (lower = preferred).
    pub priority: u8,
}

pub mod json;
pub mod memory;

use std::collections::HashMap;

pub use json::JsonDirStore;
pub use memory::MemoryStore;

/// Access to the backing data of named sources.
///
/// Contract: given a source name, return its full entry mapping, or an empty
/// mapping if the source is unavailable. Loading never fails upward; a missing
/// or malformed source degrades to "not found" for every one of its keys.
pub trait SourceData: Send + Sync {
    fn load(&self, name: &str) -> HashMap<String, String>;
}

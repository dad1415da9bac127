//! Storage layer for the todo collection.
//!
//! The collection is always read and written as a whole: there are no
//! incremental updates. Two implementations exist:
//!
//! - `FileStore` - a single JSON file on disk (default)
//! - `MemoryStore` - in-memory storage for tests

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::Result;
use crate::models::Todo;

/// Trait for stores that persist the full todo collection.
pub trait TodoStore: Send + Sync {
    /// Load the whole collection. A store that was never written to loads
    /// as an empty collection.
    fn load(&self) -> Result<Vec<Todo>>;

    /// Persist the whole collection, replacing any previous contents.
    fn save(&self, todos: &[Todo]) -> Result<()>;

    /// Get the storage location description (for display purposes).
    fn location(&self) -> String;
}

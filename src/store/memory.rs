//! In-memory storage, used by tests as a stand-in for the file store.

use std::sync::Mutex;

use crate::Result;
use crate::models::Todo;

use super::TodoStore;

/// Holds the collection in a mutex-guarded `Vec`, with the same
/// whole-collection load/save contract as the file store.
#[derive(Default)]
pub struct MemoryStore {
    todos: Mutex<Vec<Todo>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TodoStore for MemoryStore {
    fn load(&self) -> Result<Vec<Todo>> {
        Ok(self.todos.lock().unwrap_or_else(|p| p.into_inner()).clone())
    }

    fn save(&self, todos: &[Todo]) -> Result<()> {
        *self.todos.lock().unwrap_or_else(|p| p.into_inner()) = todos.to_vec();
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

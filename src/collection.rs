//! Operations over the in-memory todo collection.
//!
//! Every operation works on the full collection loaded from the store and
//! leaves persistence to the caller. All scans are linear; the collection
//! is expected to stay small.

use chrono::Utc;

use crate::models::{CreateTodo, PriorityCounts, Stats, Todo, UpdateTodo};
use crate::{Error, Result};

/// Next id for a new record: one past the highest id currently in use.
///
/// Derived from the live collection rather than a stored counter, so ids
/// stay unique across the collection even after delete-then-create cycles.
pub fn next_id(todos: &[Todo]) -> u64 {
    todos.iter().map(|t| t.id).max().unwrap_or(0) + 1
}

/// Create a new todo and append it to the collection.
///
/// Fails without touching the collection when the text is missing or empty.
pub fn create(todos: &mut Vec<Todo>, request: CreateTodo) -> Result<Todo> {
    let text = match request.text {
        Some(text) if !text.is_empty() => text,
        _ => return Err(Error::InvalidInput("Todo text is required".to_string())),
    };

    let todo = Todo::new(next_id(todos), text, request.priority);
    todos.push(todo.clone());
    Ok(todo)
}

/// Find a todo by id.
pub fn find(todos: &[Todo], id: u64) -> Option<&Todo> {
    todos.iter().find(|t| t.id == id)
}

/// Apply a partial update to the todo with the given id.
///
/// Absent fields keep their stored values; `updated_at` is set
/// unconditionally on success.
pub fn update(todos: &mut [Todo], id: u64, changes: UpdateTodo) -> Result<Todo> {
    let todo = todos
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(Error::NotFound(id))?;

    if let Some(text) = changes.text {
        todo.text = text;
    }
    if let Some(completed) = changes.completed {
        todo.completed = completed;
    }
    if let Some(priority) = changes.priority {
        todo.priority = priority;
    }
    todo.updated_at = Some(Utc::now());

    Ok(todo.clone())
}

/// Remove the todo with the given id, reporting whether anything was
/// removed. Removing an id that does not exist is not an error.
pub fn remove(todos: &mut Vec<Todo>, id: u64) -> bool {
    let before = todos.len();
    todos.retain(|t| t.id != id);
    todos.len() != before
}

/// Flip the completion flag of the todo with the given id.
pub fn toggle(todos: &mut [Todo], id: u64) -> Result<Todo> {
    let todo = todos
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(Error::NotFound(id))?;

    todo.completed = !todo.completed;
    todo.updated_at = Some(Utc::now());

    Ok(todo.clone())
}

/// Aggregate counts over the collection.
pub fn stats(todos: &[Todo]) -> Stats {
    let total = todos.len();
    let completed = todos.iter().filter(|t| t.completed).count();

    let mut priority_counts = PriorityCounts::default();
    for todo in todos {
        match todo.priority.as_str() {
            "high" => priority_counts.high += 1,
            "medium" => priority_counts.medium += 1,
            "low" => priority_counts.low += 1,
            _ => {}
        }
    }

    Stats {
        total,
        completed,
        pending: total - completed,
        priority_counts,
    }
}

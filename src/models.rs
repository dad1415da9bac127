//! Data models for logbook entities.
//!
//! This module defines the core data structures:
//! - `Todo` - a single task item with text, completion flag, and priority
//! - `CreateTodo` / `UpdateTodo` - request payloads for the mutation routes
//! - `Stats` - aggregate counts over the whole collection

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Priority assigned when a todo is created without one.
pub const DEFAULT_PRIORITY: &str = "medium";

/// A single task item tracked by logbook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier within the collection
    pub id: u64,

    /// Task text
    pub text: String,

    /// Completion flag
    pub completed: bool,

    /// Priority label ("high", "medium", or "low" by convention; arbitrary
    /// values are stored as-is)
    pub priority: String,

    /// Creation timestamp, set once
    pub created_at: DateTime<Utc>,

    /// Last mutation timestamp, absent until the first update or toggle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Todo {
    /// Create a new todo with the given id and text.
    pub fn new(id: u64, text: String, priority: Option<String>) -> Self {
        Self {
            id,
            text,
            completed: false,
            priority: priority.unwrap_or_else(|| DEFAULT_PRIORITY.to_string()),
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

/// Request body for `POST /api/todos`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTodo {
    /// Task text (required, must be non-empty)
    pub text: Option<String>,

    /// Priority label, defaults to "medium" when omitted
    pub priority: Option<String>,
}

/// Request body for `PUT /api/todos/:id`.
///
/// Absent fields leave the stored values unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodo {
    pub text: Option<String>,
    pub completed: Option<bool>,
    pub priority: Option<String>,
}

/// Aggregate statistics over the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub priority_counts: PriorityCounts,
}

/// Record counts per known priority value. Records carrying any other
/// priority fall into no bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriorityCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

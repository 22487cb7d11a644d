//! Free-text board filtering.
//!
//! # Responsibility
//! - Derive a filtered todo view from a query string.
//! - Keep result shaping inside core so every UI filters identically.
//!
//! # Invariants
//! - A blank query returns the input list unchanged in count and order.
//! - Matching is case-insensitive substring over the configured fields; the
//!   term is matched as typed, whitespace included.
//! - Results are recomputed per call; nothing is cached.

use crate::model::todo::Todo;

/// Todo fields a query can match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Description,
}

/// Fields consulted when the caller does not configure any.
pub const DEFAULT_SEARCH_FIELDS: [SearchField; 2] = [SearchField::Title, SearchField::Description];

/// Search options for board filtering.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// User query text; whitespace-only text means no filtering.
    pub text: String,
    /// Fields to match against, in no particular order.
    pub fields: Vec<SearchField>,
}

impl SearchQuery {
    /// Creates a query over the default title + description fields.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fields: DEFAULT_SEARCH_FIELDS.to_vec(),
        }
    }
}

/// Filters todos by case-insensitive substring match.
///
/// Returns a full copy in input order for blank queries; otherwise keeps the
/// todos where any configured field contains the query as typed, surrounding
/// whitespace included. A `None` description never matches.
pub fn filter_todos(todos: &[Todo], query: &SearchQuery) -> Vec<Todo> {
    if query.text.trim().is_empty() {
        return todos.to_vec();
    }
    let needle = query.text.to_lowercase();

    todos
        .iter()
        .filter(|todo| {
            query.fields.iter().any(|field| {
                field_value(todo, *field)
                    .map(|value| value.to_lowercase().contains(&needle))
                    .unwrap_or(false)
            })
        })
        .cloned()
        .collect()
}

fn field_value(todo: &Todo, field: SearchField) -> Option<&str> {
    match field {
        SearchField::Title => Some(todo.title.as_str()),
        SearchField::Description => todo.description.as_deref(),
    }
}

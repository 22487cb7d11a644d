//! Core use-case services.
//!
//! # Responsibility
//! - Provide the pure todo list transformations used by the store.
//! - Keep UI layers decoupled from record construction details.

pub mod todo_service;

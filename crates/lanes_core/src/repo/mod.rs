//! Persistence layer abstractions and implementations.
//!
//! # Responsibility
//! - Define the board persistence contract used by the store.
//! - Isolate key-value storage details from state orchestration.
//!
//! # Invariants
//! - Board state is persisted as one JSON array under one storage key.
//! - Repository APIs return typed errors; swallowing happens in the store.

pub mod board_repo;

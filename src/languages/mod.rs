//! Languages and their spaced repetition review queues
//!
//! This module provides:
//! - Language and word CRUD (one review queue per language)
//! - The in-memory word chain rebuilt from persisted forward links
//! - Guess evaluation and relocation scheduling
//! - Atomic write-back of mutated chains

pub mod chain;
pub mod models;
pub mod scheduler;
pub mod storage;

pub use chain::{ChainError, ChainWord, WordChain};
pub use models::*;
pub use scheduler::{apply_guess, GuessOutcome};
pub use storage::{LanguageStorage, LanguageStorageError};

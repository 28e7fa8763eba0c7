//! Data models for languages and their words

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A language is a user-owned collection of words drilled as one review queue
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    /// Id of the word currently first in the review queue.
    /// `None` only while the language has no words.
    pub head: Option<Uuid>,
    /// Aggregate score, incremented once per correct guess
    #[serde(default)]
    pub score: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Language {
    pub fn new(user_id: Uuid, name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            name,
            head: None,
            score: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A word pair inside a language's review queue
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub id: Uuid,
    pub language_id: Uuid,
    /// Prompt text shown to the user
    pub original: String,
    /// Expected answer
    pub translation: String,
    /// Review confidence weight; doubles on success, resets to 1 on a miss.
    /// Also the distance the word is pushed back after being answered.
    #[serde(default = "default_memory_value")]
    pub memory_value: i32,
    #[serde(default)]
    pub correct_count: i32,
    #[serde(default)]
    pub incorrect_count: i32,
    /// Id of the word after this one; `None` marks the tail
    pub next: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

fn default_memory_value() -> i32 {
    1
}

impl Word {
    pub fn new(language_id: Uuid, original: String, translation: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            language_id,
            original,
            translation,
            memory_value: default_memory_value(),
            correct_count: 0,
            incorrect_count: 0,
            next: None,
            created_at: Utc::now(),
        }
    }
}

/// Header fields written back when a mutated chain is persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageUpdate {
    pub head: Option<Uuid>,
    pub score: i32,
}

/// Per-word fields written back when a mutated chain is persisted,
/// produced in chain order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordUpdate {
    pub id: Uuid,
    pub memory_value: i32,
    pub correct_count: i32,
    pub incorrect_count: i32,
    pub next: Option<Uuid>,
}

/// The word due next, without its answer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadWord {
    pub language_id: Uuid,
    pub next_word: String,
    pub memory_value: i32,
    pub language_score: i32,
}

//! Storage operations for languages and their words
//!
//! Each language lives in one JSON document:
//! ```text
//! <data-dir>/languages/
//! └── {language-id}.json   # header + every word row
//! ```
//! Header and rows share a document because a guess rewrites the head
//! pointer and every row's forward link as one unit. The writer stages the
//! new document to a temp file and renames it over the old one, so the
//! chain on disk is always either the previous state or the next one.

use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::chain::{ChainError, WordChain};
use super::models::{HeadWord, Language, LanguageUpdate, Word, WordUpdate};
use super::scheduler::{apply_guess, GuessOutcome};

#[derive(Error, Debug)]
pub enum LanguageStorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Stored chain is corrupt: {0}")]
    Chain(#[from] ChainError),

    #[error("Language not found: {0}")]
    LanguageNotFound(Uuid),

    #[error("Language {0} has no words to review")]
    EmptyLanguage(Uuid),

    #[error("Guess must not be empty")]
    InvalidGuess,
}

pub type Result<T> = std::result::Result<T, LanguageStorageError>;

/// One language's persisted document: header plus its word rows
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LanguageDocument {
    language: Language,
    words: Vec<Word>,
}

/// Storage manager for language operations
pub struct LanguageStorage {
    /// Directory holding one document per language
    languages_dir: PathBuf,
}

impl LanguageStorage {
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        let languages_dir = data_dir.join("languages");
        fs::create_dir_all(&languages_dir)?;

        Ok(Self { languages_dir })
    }

    /// Get the default data directory
    pub fn default_data_dir() -> Option<PathBuf> {
        dirs::data_local_dir().map(|p| p.join("wordchain"))
    }

    fn language_path(&self, language_id: Uuid) -> PathBuf {
        self.languages_dir.join(format!("{}.json", language_id))
    }

    fn load_document(&self, language_id: Uuid) -> Result<LanguageDocument> {
        let path = self.language_path(language_id);
        if !path.exists() {
            return Err(LanguageStorageError::LanguageNotFound(language_id));
        }

        let content = fs::read_to_string(&path)?;
        let document: LanguageDocument = serde_json::from_str(&content)?;
        Ok(document)
    }

    /// Replace a language's document on disk in one step
    fn save_document(&self, document: &LanguageDocument) -> Result<()> {
        let path = self.language_path(document.language.id);
        let tmp_path = path.with_extension("json.tmp");

        let content = serde_json::to_string_pretty(document)?;
        fs::write(&tmp_path, content)?;
        fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    // ==================== Language Operations ====================

    /// List a user's languages, sorted by name
    pub fn list_languages(&self, user_id: Uuid) -> Result<Vec<Language>> {
        let mut languages = Vec::new();

        for entry in fs::read_dir(&self.languages_dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.extension().map_or(false, |ext| ext == "json") {
                let content = fs::read_to_string(&path)?;
                match serde_json::from_str::<LanguageDocument>(&content) {
                    Ok(document) => {
                        if document.language.user_id == user_id {
                            languages.push(document.language);
                        }
                    }
                    Err(e) => {
                        log::warn!("Failed to load language from {:?}: {}", path, e);
                    }
                }
            }
        }

        languages.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(languages)
    }

    pub fn get_language(&self, language_id: Uuid) -> Result<Language> {
        Ok(self.load_document(language_id)?.language)
    }

    /// The unordered word rows belonging to a language
    pub fn get_words(&self, language_id: Uuid) -> Result<Vec<Word>> {
        Ok(self.load_document(language_id)?.words)
    }

    pub fn create_language(&self, user_id: Uuid, name: String) -> Result<Language> {
        let language = Language::new(user_id, name);
        let document = LanguageDocument {
            language: language.clone(),
            words: Vec::new(),
        };
        self.save_document(&document)?;

        log::info!("Created language '{}' ({})", language.name, language.id);
        Ok(language)
    }

    pub fn delete_language(&self, language_id: Uuid) -> Result<()> {
        let path = self.language_path(language_id);
        if !path.exists() {
            return Err(LanguageStorageError::LanguageNotFound(language_id));
        }

        fs::remove_file(&path)?;
        log::info!("Deleted language {}", language_id);
        Ok(())
    }

    // ==================== Word Operations ====================

    /// Append a word at the tail of the persisted chain.
    ///
    /// Links the previous tail's `next` to the new row, or sets the header's
    /// `head` when the language was empty. New words start at memory value 1
    /// with zeroed counters.
    pub fn add_word(
        &self,
        language_id: Uuid,
        original: String,
        translation: String,
    ) -> Result<Word> {
        let mut document = self.load_document(language_id)?;
        let word = Word::new(language_id, original, translation);

        if document.language.head.is_none() {
            document.language.head = Some(word.id);
        } else if let Some(tail) = document.words.iter_mut().find(|w| w.next.is_none()) {
            tail.next = Some(word.id);
        }

        document.words.push(word.clone());
        document.language.updated_at = Utc::now();
        self.save_document(&document)?;

        log::info!("Added word '{}' to language {}", word.original, language_id);
        Ok(word)
    }

    /// The word due next, without revealing its translation
    pub fn head_word(&self, language_id: Uuid) -> Result<HeadWord> {
        let document = self.load_document(language_id)?;
        let head_id = document
            .language
            .head
            .ok_or(LanguageStorageError::EmptyLanguage(language_id))?;

        let word = document
            .words
            .iter()
            .find(|w| w.id == head_id)
            .ok_or(ChainError::MissingHead(head_id))?;

        Ok(HeadWord {
            language_id,
            next_word: word.original.clone(),
            memory_value: word.memory_value,
            language_score: document.language.score,
        })
    }

    // ==================== Review Operations ====================

    /// Answer the word at the head of a language's chain.
    ///
    /// Validates the guess, rebuilds the chain from the stored rows, applies
    /// the guess, and commits the relocated chain. The caller gets back the
    /// answer, the verdict, and the next prompt.
    pub fn submit_guess(&self, language_id: Uuid, guess: &str) -> Result<GuessOutcome> {
        if guess.trim().is_empty() {
            return Err(LanguageStorageError::InvalidGuess);
        }

        let document = self.load_document(language_id)?;
        if document.language.head.is_none() {
            return Err(LanguageStorageError::EmptyLanguage(language_id));
        }

        let mut chain = WordChain::from_rows(&document.language, document.words)?;
        let outcome = apply_guess(&mut chain, guess)
            .ok_or(LanguageStorageError::EmptyLanguage(language_id))?;

        let (header, words) = chain.to_updates();
        self.commit(language_id, header, &words)?;

        log::info!(
            "Guess on language {}: {}",
            language_id,
            if outcome.is_correct { "correct" } else { "incorrect" }
        );
        Ok(outcome)
    }

    /// Write a mutated chain back: the header's head pointer and score, and
    /// every word's memory value, counters, and forward link, as one unit.
    pub fn commit(
        &self,
        language_id: Uuid,
        header: LanguageUpdate,
        words: &[WordUpdate],
    ) -> Result<()> {
        let mut document = self.load_document(language_id)?;

        document.language.head = header.head;
        document.language.score = header.score;
        document.language.updated_at = Utc::now();

        for update in words {
            if let Some(word) = document.words.iter_mut().find(|w| w.id == update.id) {
                word.memory_value = update.memory_value;
                word.correct_count = update.correct_count;
                word.incorrect_count = update.incorrect_count;
                word.next = update.next;
            }
        }

        self.save_document(&document)
    }
}

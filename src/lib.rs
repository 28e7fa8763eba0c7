//! Vocabulary drilling with spaced repetition
//!
//! Users own languages (ordered collections of word pairs) and answer
//! recall quizzes against them. Review order is a singly-linked chain over
//! persisted rows: a word's position encodes how soon it comes up again,
//! and answering a word relocates it by its updated memory value.

pub mod languages;

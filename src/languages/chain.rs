//! The in-memory review queue for one language
//!
//! Words are persisted as unordered rows carrying forward links; the queue
//! order only exists once those links are followed. `WordChain` rebuilds
//! that order fresh for every operation, is mutated at most once, and is
//! serialized straight back to row updates. Nodes live in an arena keyed by
//! word id with explicit next-id links, so there is no owning pointer chain
//! to walk off of.

use std::collections::{HashMap, HashSet};

use thiserror::Error;
use uuid::Uuid;

use super::models::{Language, LanguageUpdate, Word, WordUpdate};

/// Corrupted persisted state: the stored links do not describe a single
/// `None`-terminated chain over the supplied rows.
#[derive(Error, Debug)]
pub enum ChainError {
    #[error("Head word {0} is not among the language's rows")]
    MissingHead(Uuid),

    #[error("Word {from} links to {to}, which is not among the language's rows")]
    BrokenLink { from: Uuid, to: Uuid },

    #[error("Word {from} links back to {to}, which is already in the chain")]
    CircularLink { from: Uuid, to: Uuid },

    #[error("{0} word(s) are not reachable from the head")]
    UnlinkedWords(usize),
}

/// Payload of one chain node: the word's review-relevant fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainWord {
    pub id: Uuid,
    pub original: String,
    pub translation: String,
    pub memory_value: i32,
    pub correct_count: i32,
    pub incorrect_count: i32,
}

impl From<Word> for ChainWord {
    fn from(word: Word) -> Self {
        Self {
            id: word.id,
            original: word.original,
            translation: word.translation,
            memory_value: word.memory_value,
            correct_count: word.correct_count,
            incorrect_count: word.incorrect_count,
        }
    }
}

#[derive(Debug, Clone)]
struct ChainNode {
    word: ChainWord,
    next: Option<Uuid>,
}

/// A language's words in review order
#[derive(Debug, Clone)]
pub struct WordChain {
    language_id: Uuid,
    score: i32,
    head: Option<Uuid>,
    nodes: HashMap<Uuid, ChainNode>,
}

impl WordChain {
    /// Rebuild the chain from a header and its unordered word rows.
    ///
    /// Follows `next` links from the stored head until the tail. Every row
    /// must be visited exactly once; anything else is surfaced as a
    /// `ChainError` rather than dropped or looped over.
    pub fn from_rows(language: &Language, words: Vec<Word>) -> Result<Self, ChainError> {
        let all_ids: HashSet<Uuid> = words.iter().map(|w| w.id).collect();
        let mut rows: HashMap<Uuid, Word> = words.into_iter().map(|w| (w.id, w)).collect();

        let mut chain = Self {
            language_id: language.id,
            score: language.score,
            head: language.head,
            nodes: HashMap::with_capacity(rows.len()),
        };

        let Some(head_id) = language.head else {
            if rows.is_empty() {
                return Ok(chain);
            }
            return Err(ChainError::UnlinkedWords(rows.len()));
        };

        let mut prev: Option<Uuid> = None;
        let mut cursor = Some(head_id);

        while let Some(id) = cursor {
            let word = match rows.remove(&id) {
                Some(word) => word,
                None => {
                    return Err(match prev {
                        None => ChainError::MissingHead(id),
                        Some(from) if all_ids.contains(&id) => {
                            ChainError::CircularLink { from, to: id }
                        }
                        Some(from) => ChainError::BrokenLink { from, to: id },
                    });
                }
            };

            let next = word.next;
            chain.nodes.insert(
                id,
                ChainNode {
                    word: ChainWord::from(word),
                    next,
                },
            );
            prev = Some(id);
            cursor = next;
        }

        if !rows.is_empty() {
            return Err(ChainError::UnlinkedWords(rows.len()));
        }

        Ok(chain)
    }

    pub fn language_id(&self) -> Uuid {
        self.language_id
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn add_score(&mut self, points: i32) {
        self.score += points;
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The word currently due for review
    pub fn head(&self) -> Option<&ChainWord> {
        self.nodes.get(&self.head?).map(|node| &node.word)
    }

    pub fn head_mut(&mut self) -> Option<&mut ChainWord> {
        let head_id = self.head?;
        self.nodes.get_mut(&head_id).map(|node| &mut node.word)
    }

    /// Id of the node at `index`, walking from the head
    fn id_at(&self, index: usize) -> Option<Uuid> {
        let mut cursor = self.head;
        let mut count = 0;
        while let Some(id) = cursor {
            if count == index {
                return Some(id);
            }
            cursor = self.nodes.get(&id)?.next;
            count += 1;
        }
        None
    }

    fn tail_id(&self) -> Option<Uuid> {
        let mut cursor = self.head?;
        while let Some(next) = self.nodes.get(&cursor)?.next {
            cursor = next;
        }
        Some(cursor)
    }

    /// Make `word` the new first node
    pub fn push_front(&mut self, word: ChainWord) {
        let id = word.id;
        self.nodes.insert(id, ChainNode { word, next: self.head });
        self.head = Some(id);
    }

    /// Append `word` after the current tail; becomes the head when empty
    pub fn push_back(&mut self, word: ChainWord) {
        match self.tail_id() {
            Some(tail) => {
                let id = word.id;
                self.nodes.insert(id, ChainNode { word, next: None });
                if let Some(node) = self.nodes.get_mut(&tail) {
                    node.next = Some(id);
                }
            }
            None => self.push_front(word),
        }
    }

    /// Splice `word` in so it ends up at `index`.
    ///
    /// When no predecessor exists (`index` is 0, or the walk runs off the
    /// end) the word goes to the tail instead. The fallback caps a
    /// relocation at "end of chain" rather than failing.
    pub fn insert_at(&mut self, index: usize, word: ChainWord) {
        if index == 0 {
            return self.push_back(word);
        }
        let Some(before) = self.id_at(index - 1) else {
            return self.push_back(word);
        };

        let id = word.id;
        let next = self.nodes.get(&before).and_then(|node| node.next);
        self.nodes.insert(id, ChainNode { word, next });
        if let Some(node) = self.nodes.get_mut(&before) {
            node.next = Some(id);
        }
    }

    /// Drop the first node; the second node, if any, becomes the head
    pub fn remove_head(&mut self) -> Option<ChainWord> {
        let head_id = self.head?;
        let node = self.nodes.remove(&head_id)?;
        self.head = node.next;
        Some(node.word)
    }

    /// Drop the last node; a single-node chain becomes empty
    pub fn remove_tail(&mut self) -> Option<ChainWord> {
        let mut prev: Option<Uuid> = None;
        let mut cursor = self.head?;
        while let Some(next) = self.nodes.get(&cursor)?.next {
            prev = Some(cursor);
            cursor = next;
        }

        let node = self.nodes.remove(&cursor)?;
        match prev {
            Some(before) => {
                if let Some(node) = self.nodes.get_mut(&before) {
                    node.next = None;
                }
            }
            None => self.head = None,
        }
        Some(node.word)
    }

    /// Remove the node at `index`, with the same predecessor-walk and
    /// tail fallback as `insert_at`
    pub fn remove_at(&mut self, index: usize) -> Option<ChainWord> {
        if index == 0 {
            return self.remove_tail();
        }
        let Some(before) = self.id_at(index - 1) else {
            return self.remove_tail();
        };

        let target = self.nodes.get(&before)?.next?;
        let node = self.nodes.remove(&target)?;
        if let Some(before_node) = self.nodes.get_mut(&before) {
            before_node.next = node.next;
        }
        Some(node.word)
    }

    /// Take the word just answered and bury it `distance` positions into
    /// the future. The head is removed first, so the re-insert walks the
    /// shortened chain: `distance`, not `distance + 1`.
    pub fn shift_head_by(&mut self, distance: usize) {
        if let Some(word) = self.remove_head() {
            self.insert_at(distance, word);
        }
    }

    /// Forward traversal, head to tail
    pub fn iter(&self) -> ChainIter<'_> {
        ChainIter {
            chain: self,
            cursor: self.head,
        }
    }

    /// Materialize the chain for the persistence writer: the header update
    /// plus one row update per node, in chain order
    pub fn to_updates(&self) -> (LanguageUpdate, Vec<WordUpdate>) {
        let words = self
            .iter_nodes()
            .map(|node| WordUpdate {
                id: node.word.id,
                memory_value: node.word.memory_value,
                correct_count: node.word.correct_count,
                incorrect_count: node.word.incorrect_count,
                next: node.next,
            })
            .collect();

        (
            LanguageUpdate {
                head: self.head,
                score: self.score,
            },
            words,
        )
    }

    fn iter_nodes(&self) -> impl Iterator<Item = &ChainNode> {
        let mut cursor = self.head;
        std::iter::from_fn(move || {
            let node = self.nodes.get(&cursor?)?;
            cursor = node.next;
            Some(node)
        })
    }
}

pub struct ChainIter<'a> {
    chain: &'a WordChain,
    cursor: Option<Uuid>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a ChainWord;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.chain.nodes.get(&self.cursor?)?;
        self.cursor = node.next;
        Some(&node.word)
    }
}

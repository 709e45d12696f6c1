//! # Vocabulary Types

use crate::types::CorpusHashMap;

/// `{ String -> T }` map.
///
/// ## Style Hints
/// Instance names should prefer `word_map`, or `word_token_map`.
pub type WordTokenMap<T> = CorpusHashMap<String, T>;

/// `[T] -> String` list; the index of a word is its token.
///
/// ## Style Hints
/// Instance names should prefer `words`, or `token_words`.
pub type TokenWordList = Vec<String>;

//! # Word ``{ String <-> T }`` Index Vocabulary

use crate::errors::{CorpusError, CorpusResult};
use crate::types::{TokenType, hash_map_new};
use crate::vocab::vocab_types::{TokenWordList, WordTokenMap};

/// Bidirectional word vocabulary as a `{ String -> T }` map plus the
/// inverse `[T] -> String` word list.
///
/// Indices are assigned densely in insertion order; the two containers are
/// kept in lockstep by [`WordVocab::add_word`], and are never separately
/// mutable. The vocabulary only grows; no index is ever reassigned.
#[derive(Debug, Clone, PartialEq)]
pub struct WordVocab<T: TokenType> {
    /// Map of ``{ String -> T }``.
    word_map: WordTokenMap<T>,

    /// The ordered word list; the position of a word is its token.
    words: TokenWordList,
}

impl<T: TokenType> Default for WordVocab<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TokenType> WordVocab<T> {
    /// Create a new empty vocabulary.
    pub fn new() -> Self {
        Self {
            word_map: hash_map_new(),
            words: TokenWordList::new(),
        }
    }

    /// Add a word to the vocabulary, if not already present.
    ///
    /// Idempotent: adding an existing word returns its index with no
    /// mutation. A new word is appended to the word list and assigned
    /// the next sequential index.
    ///
    /// ## Arguments
    /// * `word` - The word to add.
    ///
    /// ## Returns
    /// The index of the word, or [`CorpusError::VocabOverflow`] when the
    /// next index does not fit in `T`.
    pub fn add_word(
        &mut self,
        word: &str,
    ) -> CorpusResult<T> {
        if let Some(&token) = self.word_map.get(word) {
            return Ok(token);
        }

        let size = self.words.len();
        let token = T::from_usize(size).ok_or(CorpusError::VocabOverflow { size })?;

        self.words.push(word.to_string());
        self.word_map.insert(word.to_string(), token);

        Ok(token)
    }

    /// Return the associated token for the word, if any.
    pub fn lookup_token(
        &self,
        word: &str,
    ) -> Option<T> {
        self.word_map.get(word).copied()
    }

    /// Return the associated word for the token, if any.
    pub fn lookup_word(
        &self,
        token: T,
    ) -> Option<&str> {
        self.words.get(token.to_usize()?).map(String::as_str)
    }

    /// The number of distinct words in the vocabulary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The ordered word list, read-only.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_word_idempotent() {
        type T = u32;

        let mut vocab = WordVocab::<T>::new();

        assert!(vocab.is_empty());

        let first = vocab.add_word("apple").unwrap();
        let again = vocab.add_word("apple").unwrap();

        assert_eq!(first, 0);
        assert_eq!(again, first);
        assert_eq!(vocab.len(), 1);

        assert_eq!(vocab.add_word("banana").unwrap(), 1);
        assert_eq!(vocab.len(), 2);
    }

    #[test]
    fn test_lookup_round_trip() {
        type T = u32;

        let mut vocab = WordVocab::<T>::new();
        for word in ["apple", "banana", "pear"] {
            vocab.add_word(word).unwrap();
        }

        for token in 0..vocab.len() as T {
            let word = vocab.lookup_word(token).unwrap().to_string();
            assert_eq!(vocab.add_word(&word).unwrap(), token);
            assert_eq!(vocab.lookup_token(&word), Some(token));
        }

        assert_eq!(vocab.lookup_token("durian"), None);
        assert_eq!(vocab.lookup_word(17), None);
        assert_eq!(vocab.words(), &["apple", "banana", "pear"]);
    }

    #[test]
    fn test_vocab_overflow() {
        type T = u8;

        let mut vocab = WordVocab::<T>::new();
        for i in 0..=T::MAX as usize {
            vocab.add_word(&format!("w{i}")).unwrap();
        }
        assert_eq!(vocab.len(), 256);

        // Existing words still resolve; only new words overflow.
        assert_eq!(vocab.add_word("w0").unwrap(), 0);
        assert!(matches!(
            vocab.add_word("one-too-many"),
            Err(CorpusError::VocabOverflow { size: 256 })
        ));
    }
}

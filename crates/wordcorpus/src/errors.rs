//! # Error Types

use std::path::PathBuf;

/// Errors from wordcorpus operations.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    /// A required corpus split file is missing.
    #[error("missing corpus split: {}", path.display())]
    MissingSplit {
        /// The path that was checked.
        path: PathBuf,
    },

    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// A word was encoded without first being added to the vocabulary.
    #[error("word not present in vocabulary: {word:?}")]
    WordNotIndexed {
        /// The word that had no index.
        word: String,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for wordcorpus operations.
pub type CorpusResult<T> = core::result::Result<T, CorpusError>;

//! # Corpus Loading
//!
//! This module loads a corpus directory of three text splits
//! (`train.txt`, `valid.txt`, `test.txt`) into a shared [`WordVocab`]
//! and one flat encoded token sequence per split.
//!
//! Splits are loaded in train, valid, test order. The order is observable:
//! indices are assigned globally in insertion order, so the train split's
//! novel words receive the lowest indices.
pub mod io;

use std::path::Path;

use crate::errors::CorpusResult;
use crate::types::TokenType;
use crate::vocab::WordVocab;

#[doc(inline)]
pub use io::{encode_split_words, load_split_path, read_split_words};

/// The literal end-of-sequence marker, appended to every line.
///
/// Indexed like any other word.
pub const EOS_WORD: &str = "<eos>";

/// The training split file name.
pub const TRAIN_FILE: &str = "train.txt";

/// The validation split file name.
pub const VALID_FILE: &str = "valid.txt";

/// The test split file name.
pub const TEST_FILE: &str = "test.txt";

/// A loaded corpus: the shared vocabulary plus one encoded split per file.
///
/// Each split is the flat concatenation, in file order, of every line's
/// word indices followed by the [`EOS_WORD`] index.
#[derive(Debug, Clone)]
pub struct Corpus<T: TokenType> {
    /// The shared vocabulary; the union of the words of all three splits.
    pub vocab: WordVocab<T>,

    /// The encoded `train.txt` split.
    pub train: Vec<T>,

    /// The encoded `valid.txt` split.
    pub valid: Vec<T>,

    /// The encoded `test.txt` split.
    pub test: Vec<T>,
}

impl<T: TokenType> Corpus<T> {
    /// Load a corpus directory.
    ///
    /// Expects `train.txt`, `valid.txt`, and `test.txt` under `dir`;
    /// loads them in that order against a single shared vocabulary.
    ///
    /// ## Arguments
    /// * `dir` - the corpus directory.
    ///
    /// ## Returns
    /// The populated [`Corpus`]; fails with
    /// [`CorpusError::MissingSplit`](crate::errors::CorpusError::MissingSplit)
    /// before any processing of a split whose file is absent.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> CorpusResult<Self> {
        let dir = dir.as_ref();

        let mut vocab = WordVocab::new();

        let train = load_split_path(dir.join(TRAIN_FILE), &mut vocab)?;
        let valid = load_split_path(dir.join(VALID_FILE), &mut vocab)?;
        let test = load_split_path(dir.join(TEST_FILE), &mut vocab)?;

        log::info!(
            "loaded corpus {}: vocab={} train={} valid={} test={}",
            dir.display(),
            vocab.len(),
            train.len(),
            valid.len(),
            test.len(),
        );

        Ok(Self {
            vocab,
            train,
            valid,
            test,
        })
    }
}

//! # `wordcorpus` Word-Level Corpus Encoder
//!
//! This crate builds a word vocabulary from raw text corpora, and encodes
//! each corpus split into a flat sequence of integer token indices for
//! downstream language-model training.
//!
//! See:
//! * [`vocab`] for the bidirectional `{ word <-> index }` vocabulary.
//! * [`corpus`] to load and encode train/valid/test corpus directories.
//!
//! ## Loading a Corpus
//!
//! ```rust,ignore
//! use wordcorpus::corpus::Corpus;
//!
//! type T = u32;
//!
//! let corpus: Corpus<T> = Corpus::load_dir("data/wikitext-2")?;
//!
//! println!("vocab size: {}", corpus.vocab.len());
//! println!("train tokens: {}", corpus.train.len());
//! ```
//!
//! ## Crate Features
//!
//! #### feature: ``ahash``
//!
//! This swaps all `HashMap` implementations for ``ahash``; which is a
//! performance win on many/(most?) modern CPUs.
//!
//! This is done by the ``types::CorpusHashMap`` type alias machinery.
#![warn(missing_docs, unused)]

pub mod corpus;
pub mod errors;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use corpus::{Corpus, EOS_WORD};
#[doc(inline)]
pub use errors::{CorpusError, CorpusResult};
#[doc(inline)]
pub use vocab::WordVocab;

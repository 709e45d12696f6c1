//! # Vocabulary
//!
//! This module provides the word vocabulary.
//!
//! The primary type is [`WordVocab`], a bidirectional `{ String <-> T }`
//! index which assigns each distinct word a dense integer index in
//! insertion order.
pub mod vocab_types;
pub mod word_vocab;

#[doc(inline)]
pub use vocab_types::{TokenWordList, WordTokenMap};
#[doc(inline)]
pub use word_vocab::WordVocab;

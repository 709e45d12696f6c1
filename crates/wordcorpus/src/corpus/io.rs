//! # Split File IO
//!
//! Two-pass split loading: pass 1 extends the vocabulary from every word
//! of the file; pass 2 re-reads the file and resolves every word against
//! the now-fixed indices.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    corpus::EOS_WORD,
    errors::{CorpusError, CorpusResult},
    types::TokenType,
    vocab::WordVocab,
};

/// Load one split file against a shared vocabulary.
///
/// The file is streamed twice: once to extend the vocabulary
/// ([`read_split_words`]), once to encode ([`encode_split_words`]).
///
/// ## Arguments
/// * `path` - the path to the split file.
/// * `vocab` - the vocabulary to extend.
///
/// ## Returns
/// The flat encoded split, or [`CorpusError::MissingSplit`] when the file
/// does not exist; checked before any processing begins.
pub fn load_split_path<T, P>(
    path: P,
    vocab: &mut WordVocab<T>,
) -> CorpusResult<Vec<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    // try_exists: a permission failure is an Io error, not a missing split.
    if !path.try_exists()? {
        return Err(CorpusError::MissingSplit {
            path: path.to_path_buf(),
        });
    }

    log::debug!("reading split: {}", path.display());

    let reader = BufReader::new(File::open(path)?);
    read_split_words(reader, vocab)?;

    let reader = BufReader::new(File::open(path)?);
    let ids = encode_split_words(reader, vocab)?;

    log::debug!(
        "encoded split {}: {} tokens, vocab now {}",
        path.display(),
        ids.len(),
        vocab.len(),
    );

    Ok(ids)
}

/// Pass 1: extend a [`WordVocab`] from a split [`BufRead`] stream.
///
/// Every line is split on whitespace and terminated with [`EOS_WORD`];
/// empty lines contribute only the marker.
///
/// ## Arguments
/// * `reader` - the line reader.
/// * `vocab` - the vocabulary to extend.
pub fn read_split_words<T, R>(
    reader: R,
    vocab: &mut WordVocab<T>,
) -> CorpusResult<()>
where
    T: TokenType,
    R: BufRead,
{
    for line in reader.lines() {
        let line = line?;
        for word in line_words(&line) {
            vocab.add_word(word)?;
        }
    }
    Ok(())
}

/// Pass 2: encode a split [`BufRead`] stream against a populated
/// [`WordVocab`].
///
/// Uses the same tokenization rule as [`read_split_words`]; every word
/// must already be indexed.
///
/// ## Arguments
/// * `reader` - the line reader.
/// * `vocab` - the populated vocabulary.
///
/// ## Returns
/// The flat concatenation of every line's indices, in file order, or
/// [`CorpusError::WordNotIndexed`] when a word has no index.
pub fn encode_split_words<T, R>(
    reader: R,
    vocab: &WordVocab<T>,
) -> CorpusResult<Vec<T>>
where
    T: TokenType,
    R: BufRead,
{
    let mut ids = Vec::new();
    for line in reader.lines() {
        let line = line?;
        for word in line_words(&line) {
            let token = vocab
                .lookup_token(word)
                .ok_or_else(|| CorpusError::WordNotIndexed {
                    word: word.to_string(),
                })?;
            ids.push(token);
        }
    }
    Ok(ids)
}

/// The per-line tokenization rule: whitespace words, then [`EOS_WORD`].
fn line_words(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace().chain(core::iter::once(EOS_WORD))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_then_encode() {
        type T = u32;

        let text = "the cat sat\nthe dog\n";

        let mut vocab = WordVocab::<T>::new();
        read_split_words(text.as_bytes(), &mut vocab).unwrap();

        // the=0 cat=1 sat=2 <eos>=3 dog=4
        assert_eq!(vocab.len(), 5);
        assert_eq!(vocab.lookup_token(EOS_WORD), Some(3));

        let ids = encode_split_words(text.as_bytes(), &vocab).unwrap();
        assert_eq!(ids, vec![0, 1, 2, 3, 0, 4, 3]);
    }

    #[test]
    fn test_blank_lines_encode_to_eos() {
        type T = u32;

        let text = "\n\n";

        let mut vocab = WordVocab::<T>::new();
        read_split_words(text.as_bytes(), &mut vocab).unwrap();
        let ids = encode_split_words(text.as_bytes(), &vocab).unwrap();

        assert_eq!(vocab.words(), &[EOS_WORD]);
        assert_eq!(ids, vec![0, 0]);
    }

    #[test]
    fn test_empty_split() {
        type T = u32;

        let dir = tempdir::TempDir::new("split_test").unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "").unwrap();

        let mut vocab = WordVocab::<T>::new();
        let ids = load_split_path(&path, &mut vocab).unwrap();

        // No lines at all: no words, not even <eos>.
        assert_eq!(ids, Vec::<T>::new());
        assert!(vocab.is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        type T = u32;

        let mut vocab = WordVocab::<T>::new();

        let err = read_split_words(&[0xff, 0xfe][..], &mut vocab).unwrap_err();
        assert!(matches!(err, CorpusError::Io(_)));
        assert!(vocab.is_empty());

        let err = encode_split_words(&[0xff, 0xfe][..], &vocab).unwrap_err();
        assert!(matches!(err, CorpusError::Io(_)));
    }

    #[test]
    fn test_encode_unknown_word() {
        type T = u32;

        let mut vocab = WordVocab::<T>::new();
        vocab.add_word(EOS_WORD).unwrap();

        let err = encode_split_words("mystery\n".as_bytes(), &vocab).unwrap_err();
        assert!(matches!(
            err,
            CorpusError::WordNotIndexed { word } if word == "mystery"
        ));
    }

    #[test]
    fn test_missing_split_path() {
        type T = u32;

        let dir = tempdir::TempDir::new("split_test").unwrap();
        let path = dir.path().join("nope.txt");

        let mut vocab = WordVocab::<T>::new();
        let err = load_split_path(&path, &mut vocab).unwrap_err();

        assert!(matches!(err, CorpusError::MissingSplit { path: p } if p == path));
        assert!(vocab.is_empty());
    }
}

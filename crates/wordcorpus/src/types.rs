//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

/// A type that can be used as a token index in a word vocabulary.
///
/// These are constrained to be unsigned primitive integers;
/// such that the max index in a vocabulary is less than `T::max()`.
pub trait TokenType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> TokenType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type CorpusHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> CorpusHashMap<K, V> {
            CorpusHashMap::new()
        }
    } else {
        /// Type Alias for hash maps in this crate.
        pub type CorpusHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> CorpusHashMap<K, V> {
            CorpusHashMap::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use core::marker::PhantomData;

    use super::*;

    #[test]
    fn test_common_token_types() {
        struct IsToken<T: TokenType>(PhantomData<T>);

        let _: IsToken<u16>;
        let _: IsToken<u32>;
        let _: IsToken<u64>;
        let _: IsToken<usize>;
    }
}

#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Deterministically maps an arbitrary list of user-chosen words (a custom
//! seed phrase) to a valid BIP-39 mnemonic: each input word is hashed with
//! SHA-256 (optionally salted with a passphrase) into an 11-bit index and
//! resolved through the canonical 2048-word dictionary.
//!
//! This crate is the mapping core only. It does not validate BIP-39
//! checksums, derive seeds or keys from the result, or draw randomness
//! anywhere; its one security property is "reproducible from input,
//! non-trivial to invert without the dictionary and hash".

pub mod converter;
pub mod dictionary;
pub mod error;

pub use converter::{
    convert, count_words, hash_index, index_to_pattern, normalize, validate_passphrase,
    validate_word_count, Conversion,
};
pub use dictionary::{Dictionary, DICTIONARY_SIZE, PATTERN_BITS};
pub use error::{ConverterError, Result};

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

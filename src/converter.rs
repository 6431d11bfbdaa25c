//! The deterministic mapping pipeline: normalize raw input, hash each word
//! into an 11-bit index, resolve it through the dictionary.

use crate::dictionary::Dictionary;
use crate::error::{ConverterError, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Splits raw text into lower-cased, purely alphabetic tokens.
///
/// Tokens are separated by Unicode whitespace (newlines included). A token
/// containing any non-alphabetic character is discarded whole; "alphabetic"
/// is Rust's `char::is_alphabetic`, the Unicode `Alphabetic` property.
/// Order and duplicates are preserved.
pub fn normalize(raw_text: &str) -> Vec<String> {
    raw_text
        .split_whitespace()
        .filter(|token| token.chars().all(char::is_alphabetic))
        .map(|token| token.to_lowercase())
        .collect()
}

/// Live word count for the current input, as the front end shows on every
/// text change.
pub fn count_words(raw_text: &str) -> usize {
    normalize(raw_text).len()
}

/// A convertible phrase has exactly 12 or 24 words.
pub fn validate_word_count(words: &[String]) -> Result<()> {
    match words.len() {
        12 | 24 => Ok(()),
        n => Err(ConverterError::InvalidWordCount(n)),
    }
}

/// Resolves the effective passphrase for a conversion.
///
/// With the toggle off the raw value is ignored entirely. With it on, the
/// value is trimmed and must not contain a space or newline anywhere; an
/// empty passphrase is allowed.
pub fn validate_passphrase(enabled: bool, raw_passphrase: &str) -> Result<String> {
    if !enabled {
        return Ok(String::new());
    }

    let trimmed = raw_passphrase.trim();
    if trimmed.contains(' ') || trimmed.contains('\n') {
        return Err(ConverterError::PassphraseWhitespace);
    }

    Ok(trimmed.to_string())
}

/// SHA-256 of `word + passphrase` reduced to an 11-bit index.
///
/// The passphrase is appended with no separator, so `("ab", "c")` and
/// `("a", "bc")` hash identically. That collision is a documented property
/// of the mapping; inserting a separator would remap every existing phrase.
pub fn hash_index(word: &str, passphrase: &str) -> u16 {
    let mut hasher = Sha256::new();
    hasher.update(word.as_bytes());
    hasher.update(passphrase.as_bytes());
    let digest = hasher.finalize();

    // digest mod 2048 == the low 11 bits, i.e. the tail of the last two bytes
    (u16::from(digest[30]) << 8 | u16::from(digest[31])) & 0x07ff
}

/// Renders an index as exactly 11 binary digits, most significant bit first.
pub fn index_to_pattern(index: u16) -> String {
    format!("{:011b}", index)
}

/// Converts a raw custom seed phrase into a BIP-39 mnemonic.
///
/// Pipeline: normalize, gate on word count, gate on passphrase, then hash
/// and resolve each word in order. The word count is checked before the
/// passphrase, matching the order the front end reports errors in.
pub fn convert(
    dictionary: &Dictionary,
    raw_text: &str,
    passphrase_enabled: bool,
    raw_passphrase: &str,
) -> Result<Conversion> {
    let original = normalize(raw_text);
    validate_word_count(&original)?;
    let passphrase = validate_passphrase(passphrase_enabled, raw_passphrase)?;

    let mut mapped = Vec::with_capacity(original.len());
    for word in &original {
        let pattern = index_to_pattern(hash_index(word, &passphrase));
        mapped.push(dictionary.resolve(&pattern)?.to_string());
    }

    Ok(Conversion { original, mapped })
}

/// Result of a successful conversion: the normalized input words and the
/// BIP-39 words they map to, index-aligned.
///
/// Both sequences are seed material, so the memory is zeroed on drop and
/// `Debug` output is redacted.
#[derive(Clone, Serialize, Zeroize, ZeroizeOnDrop)]
pub struct Conversion {
    original: Vec<String>,
    mapped: Vec<String>,
}

impl Conversion {

    /// The normalized input words, in input order.
    pub fn original(&self) -> &[String] {
        &self.original
    }

    /// The mapped BIP-39 words, aligned with `original`.
    pub fn mapped(&self) -> &[String] {
        &self.mapped
    }

    /// The normalized input joined into a phrase.
    pub fn original_phrase(&self) -> String {
        self.original.join(" ")
    }

    /// The mapped mnemonic joined into a phrase.
    pub fn mapped_phrase(&self) -> String {
        self.mapped.join(" ")
    }

    /// Number of words in either sequence.
    pub fn word_count(&self) -> usize {
        self.original.len()
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mapped_phrase())
    }
}

impl fmt::Debug for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Conversion")
            .field("word_count", &self.word_count())
            .field("original", &"<REDACTED>")
            .field("mapped", &"<REDACTED>")
            .finish()
    }
}

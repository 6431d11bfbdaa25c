//! The canonical BIP-39 dictionary: an immutable bijection between the 2048
//! eleven-bit patterns and the 2048 English wordlist entries.

use crate::error::{ConverterError, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Number of entries a well-formed dictionary holds.
pub const DICTIONARY_SIZE: usize = 2048;

/// Length of a binary lookup pattern.
pub const PATTERN_BITS: usize = 11;

/// One row of the tabular dictionary source.
#[derive(Debug, Clone, Deserialize)]
struct DictionaryEntry {
    binary: String,
    word: String,
}

/// Lookup table from an 11-bit binary pattern to its BIP-39 word.
///
/// Built once from a CSV source with `binary` and `word` columns and never
/// mutated afterwards, so it can be shared freely across readers.
#[derive(Debug, Clone)]
pub struct Dictionary {
    by_pattern: HashMap<String, String>,
}

impl Dictionary {

    /// Builds a dictionary from any CSV reader with `binary,word` headers.
    ///
    /// Both fields are trimmed. Fails unless the source holds exactly 2048
    /// rows of distinct 11-bit patterns mapped to distinct words.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut by_pattern = HashMap::with_capacity(DICTIONARY_SIZE);
        let mut words = HashSet::with_capacity(DICTIONARY_SIZE);

        for record in csv_reader.deserialize() {
            let entry: DictionaryEntry = record?;
            let pattern = entry.binary.trim().to_string();
            let word = entry.word.trim().to_string();

            if pattern.len() != PATTERN_BITS || !pattern.chars().all(|c| c == '0' || c == '1') {
                return Err(ConverterError::InvalidPattern(pattern));
            }
            if !words.insert(word.clone()) {
                return Err(ConverterError::DuplicateWord(word));
            }
            if by_pattern.insert(pattern.clone(), word).is_some() {
                return Err(ConverterError::DuplicatePattern(pattern));
            }
        }

        // 2048 distinct valid patterns necessarily cover every 11-bit value
        if by_pattern.len() != DICTIONARY_SIZE {
            return Err(ConverterError::InvalidDictionarySize(by_pattern.len()));
        }

        Ok(Dictionary { by_pattern })
    }

    /// Builds a dictionary from in-memory CSV content.
    pub fn from_csv_str(content: &str) -> Result<Self> {
        Self::from_csv_reader(content.as_bytes())
    }

    /// Builds a dictionary from a CSV file on disk.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_csv_reader(File::open(path)?)
    }

    /// Resolves an 11-bit pattern to its word.
    ///
    /// Total for every pattern the converter can produce; an unknown or
    /// malformed pattern signals an internal invariant violation, not user
    /// input to validate.
    pub fn resolve(&self, pattern: &str) -> Result<&str> {
        self.by_pattern
            .get(pattern)
            .map(String::as_str)
            .ok_or_else(|| ConverterError::PatternNotFound(pattern.to_string()))
    }

    /// Whether `word` appears anywhere in the dictionary.
    pub fn contains_word(&self, word: &str) -> bool {
        self.by_pattern.values().any(|w| w == word)
    }

    /// Number of loaded entries.
    pub fn len(&self) -> usize {
        self.by_pattern.len()
    }

    /// True when no entries are loaded.
    pub fn is_empty(&self) -> bool {
        self.by_pattern.is_empty()
    }
}

static BUNDLED: Lazy<Option<Dictionary>> =
    Lazy::new(|| Dictionary::from_csv_str(include_str!("../data/dictionary.csv")).ok());

impl Dictionary {

    /// The dictionary shipped with the crate, built on first use.
    pub fn bundled() -> Result<&'static Dictionary> {
        BUNDLED
            .as_ref()
            .ok_or(ConverterError::InvalidDictionarySize(0))
    }
}

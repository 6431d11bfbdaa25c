use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, ConverterError>;

/// All failure modes of dictionary loading and seed phrase conversion.
#[derive(Error, Debug)]
pub enum ConverterError {

    #[error("Dictionary has {0} entries, expected 2048")]
    InvalidDictionarySize(usize),

    #[error("Invalid binary pattern '{0}' - must be 11 characters of '0'/'1'")]
    InvalidPattern(String),

    #[error("Duplicate binary pattern '{0}' in dictionary")]
    DuplicatePattern(String),

    #[error("Duplicate word '{0}' in dictionary")]
    DuplicateWord(String),

    #[error("Pattern '{0}' not found in dictionary")]
    PatternNotFound(String),

    #[error("Invalid word count: {0}. Seed phrase must contain exactly 12 or 24 words")]
    InvalidWordCount(usize),

    #[error("Passphrase can't have any spaces or newlines")]
    PassphraseWhitespace,

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Bip39Error {
    #[error("secure random source unavailable: {0}")]
    InsufficientRandomness(String),

    /// Bit count (entropy bits, or 11 × word count for a phrase) outside the supported set.
    #[error("{bits} bits does not match a 128, 160, 192, 224 or 256-bit entropy length")]
    InvalidLength { bits: usize },

    #[error("word {position} ({word:?}) is not in the wordlist")]
    UnknownWord { position: usize, word: String },

    #[error("mnemonic checksum mismatch")]
    ChecksumMismatch,

    #[error("mnemonic is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
}

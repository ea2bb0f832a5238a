use crate::{Bip39Error, Result};
use rand::{CryptoRng, RngCore, rngs::OsRng};
use std::fmt;

/// The entropy sizes BIP-39 defines. Each maps to a fixed word count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EntropyLength {
    Bits128,
    Bits160,
    Bits192,
    Bits224,
    Bits256,
}

impl EntropyLength {
    pub const ALL: [EntropyLength; 5] = [
        EntropyLength::Bits128,
        EntropyLength::Bits160,
        EntropyLength::Bits192,
        EntropyLength::Bits224,
        EntropyLength::Bits256,
    ];

    pub fn from_bits(bits: usize) -> Result<Self> {
        match bits {
            128 => Ok(EntropyLength::Bits128),
            160 => Ok(EntropyLength::Bits160),
            192 => Ok(EntropyLength::Bits192),
            224 => Ok(EntropyLength::Bits224),
            256 => Ok(EntropyLength::Bits256),
            _ => Err(Bip39Error::InvalidLength { bits }),
        }
    }

    pub fn from_byte_len(len: usize) -> Result<Self> {
        let bits = len.saturating_mul(8);
        Self::from_bits(bits)
    }

    /// A phrase of `words` words carries `11 * words` bits: ENT + ENT/32 checksum bits.
    pub fn from_word_count(words: usize) -> Result<Self> {
        let total = words.saturating_mul(11);
        if total % 33 != 0 {
            return Err(Bip39Error::InvalidLength { bits: total });
        }
        Self::from_bits(total / 33 * 32).map_err(|_| Bip39Error::InvalidLength { bits: total })
    }

    pub const fn bits(self) -> usize {
        match self {
            EntropyLength::Bits128 => 128,
            EntropyLength::Bits160 => 160,
            EntropyLength::Bits192 => 192,
            EntropyLength::Bits224 => 224,
            EntropyLength::Bits256 => 256,
        }
    }

    pub const fn bytes(self) -> usize {
        self.bits() / 8
    }

    pub const fn checksum_bits(self) -> usize {
        self.bits() / 32
    }

    pub const fn word_count(self) -> usize {
        (self.bits() + self.checksum_bits()) / 11
    }
}

/// Raw entropy of one of the supported lengths.
#[derive(Clone, PartialEq, Eq)]
pub struct Entropy {
    bytes: Vec<u8>,
    length: EntropyLength,
}

impl Entropy {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        let length = EntropyLength::from_byte_len(bytes.len())?;
        Ok(Entropy { bytes, length })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn length(&self) -> EntropyLength {
        self.length
    }
}

impl AsRef<[u8]> for Entropy {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

// Entropy is key material; keep it out of logs and panic messages.
impl fmt::Debug for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entropy")
            .field("bits", &self.length.bits())
            .finish_non_exhaustive()
    }
}

/// Draws entropy from a cryptographically secure RNG supplied by the caller.
pub struct EntropySource<R> {
    rng: R,
}

impl EntropySource<OsRng> {
    /// Entropy straight from the operating system.
    pub fn os() -> Self {
        EntropySource { rng: OsRng }
    }
}

impl Default for EntropySource<OsRng> {
    fn default() -> Self {
        Self::os()
    }
}

impl<R: RngCore + CryptoRng> EntropySource<R> {
    pub fn new(rng: R) -> Self {
        EntropySource { rng }
    }

    pub fn generate(&mut self, length: EntropyLength) -> Result<Entropy> {
        let mut bytes = vec![0u8; length.bytes()];
        self.rng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| Bip39Error::InsufficientRandomness(e.to_string()))?;
        Ok(Entropy { bytes, length })
    }

    /// Like [`generate`](Self::generate), but the size is checked before the RNG is touched.
    pub fn generate_bits(&mut self, bits: usize) -> Result<Entropy> {
        let length = EntropyLength::from_bits(bits)?;
        self.generate(length)
    }
}

use crate::{
    Bip39Error, Result,
    entropy::{Entropy, EntropyLength},
    seed::{self, Seed},
    wordlist,
};
use crypto_utils::hash::sha256;
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// A checksummed BIP-39 mnemonic, held as wordlist indices.
///
/// Only [`Mnemonic::from_entropy`] and [`Mnemonic::parse`] construct one, so the
/// word count is always valid and the embedded checksum always matches.
#[derive(Clone, PartialEq, Eq)]
pub struct Mnemonic {
    indices: Vec<u16>,
    length: EntropyLength,
}

/// Packs a big-endian bit stream into 11-bit word indices.
struct WordPacker {
    acc: u32,
    pending: u32,
    indices: Vec<u16>,
}

impl WordPacker {
    fn with_capacity(words: usize) -> Self {
        WordPacker {
            acc: 0,
            pending: 0,
            indices: Vec::with_capacity(words),
        }
    }

    /// Append the low `count` bits of `value` (count <= 8).
    fn push(&mut self, value: u8, count: u32) {
        self.acc = (self.acc << count) | u32::from(value);
        self.pending += count;
        if self.pending >= 11 {
            self.pending -= 11;
            self.indices.push(((self.acc >> self.pending) & 0x7ff) as u16);
            self.acc &= (1 << self.pending) - 1;
        }
    }
}

/// Unpacks word indices back into `ENT || CS` bytes; the trailing checksum
/// bits are left-aligned in the last byte.
fn unpack(indices: &[u16]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(indices.len() * 11 / 8 + 1);
    let mut acc: u32 = 0;
    let mut pending: u32 = 0;
    for &index in indices {
        acc = (acc << 11) | u32::from(index);
        pending += 11;
        while pending >= 8 {
            pending -= 8;
            bytes.push((acc >> pending) as u8);
            acc &= (1 << pending) - 1;
        }
    }
    if pending > 0 {
        bytes.push((acc << (8 - pending)) as u8);
    }
    bytes
}

/// First `ENT/32` bits of SHA-256(entropy), left-aligned in one byte.
fn checksum(entropy: &[u8], length: EntropyLength) -> u8 {
    let mask = 0xffu8 << (8 - length.checksum_bits());
    sha256(entropy)[0] & mask
}

impl Mnemonic {
    pub fn from_entropy(entropy: &Entropy) -> Self {
        let length = entropy.length();
        let cs_bits = length.checksum_bits() as u32;

        let mut packer = WordPacker::with_capacity(length.word_count());
        for &byte in entropy.as_bytes() {
            packer.push(byte, 8);
        }
        packer.push(checksum(entropy.as_bytes(), length) >> (8 - cs_bits), cs_bits);
        debug_assert_eq!(packer.pending, 0);
        debug_assert_eq!(packer.indices.len(), length.word_count());

        Mnemonic {
            indices: packer.indices,
            length,
        }
    }

    /// Parse and validate a phrase.
    ///
    /// The phrase is NFKD-normalized and split on any whitespace, so extra
    /// spaces, tabs or newlines between words are accepted.
    pub fn parse(phrase: &str) -> Result<Self> {
        let normalized: String = phrase.nfkd().collect();
        let words: Vec<&str> = normalized.split_whitespace().collect();
        let length = EntropyLength::from_word_count(words.len())?;

        let indices = words
            .iter()
            .enumerate()
            .map(|(position, &word)| {
                wordlist::index_of(word).ok_or_else(|| Bip39Error::UnknownWord {
                    position,
                    word: word.to_owned(),
                })
            })
            .collect::<Result<Vec<u16>>>()?;

        let bytes = unpack(&indices);
        let (entropy, embedded) = bytes.split_at(length.bytes());
        if checksum(entropy, length) != embedded[0] {
            return Err(Bip39Error::ChecksumMismatch);
        }

        Ok(Mnemonic { indices, length })
    }

    /// Parse raw bytes, e.g. a phrase read from a file or an OS argument.
    pub fn from_utf8(bytes: &[u8]) -> Result<Self> {
        Self::parse(std::str::from_utf8(bytes)?)
    }

    pub fn to_entropy(&self) -> Entropy {
        let mut bytes = unpack(&self.indices);
        bytes.truncate(self.length.bytes());
        Entropy::from_bytes(bytes).expect("mnemonic word count implies a valid entropy length")
    }

    pub fn entropy_length(&self) -> EntropyLength {
        self.length
    }

    pub fn word_count(&self) -> usize {
        self.indices.len()
    }

    pub fn words(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.indices.iter().map(|&i| wordlist::word(i))
    }

    /// Stretch into a BIP-39 seed with the given passphrase ("" for none).
    pub fn to_seed(&self, passphrase: &str) -> Seed {
        seed::derive(&self.to_string(), passphrase)
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(word)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mnemonic")
            .field("words", &self.indices.len())
            .finish_non_exhaustive()
    }
}

impl std::str::FromStr for Mnemonic {
    type Err = Bip39Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Encode entropy as a mnemonic.
pub fn encode(entropy: &Entropy) -> Mnemonic {
    Mnemonic::from_entropy(entropy)
}

/// Validate a phrase and recover the entropy it encodes.
pub fn decode(phrase: &str) -> Result<Entropy> {
    Ok(Mnemonic::parse(phrase)?.to_entropy())
}

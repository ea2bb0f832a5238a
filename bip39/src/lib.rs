//! BIP-39 mnemonic sentences: entropy generation, the checksummed word
//! encoding over the English wordlist, and PBKDF2 seed stretching.

pub mod entropy;
pub mod error;
pub mod mnemonic;
pub mod seed;
pub mod wordlist;

pub use entropy::{Entropy, EntropyLength, EntropySource};
pub use error::Bip39Error;
pub use mnemonic::{Mnemonic, decode, encode};
pub use seed::Seed;

pub type Result<T> = std::result::Result<T, Bip39Error>;

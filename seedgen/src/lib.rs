//! End-to-end BIP-39 → BIP-32 derivation: entropy, mnemonic, seed, master
//! key pair, plus the console and JSON-file outputs of the `seedgen` tool.

pub mod cli;
pub mod error;
pub mod identifier;
pub mod output;
pub mod pipeline;

pub use error::{OutputError, PipelineError};
pub use identifier::{IdentifierGenerator, UuidGenerator};
pub use pipeline::{DerivationPipeline, DerivationResult};

pub type Result<T> = std::result::Result<T, PipelineError>;

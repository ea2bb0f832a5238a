use bip32::Bip32Error;
use bip39::Bip39Error;
use std::{io, path::PathBuf};
use thiserror::Error;

/// A failed derivation. No partial result is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Mnemonic(#[from] Bip39Error),

    #[error(transparent)]
    KeyTree(#[from] Bip32Error),
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create output folder {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to serialize result: {0}")]
    Json(#[from] serde_json::Error),

    #[error("result name {0:?} cannot be used as a file name")]
    InvalidName(String),
}

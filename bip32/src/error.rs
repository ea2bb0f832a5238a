use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Bip32Error {
    /// IL of the master HMAC was zero or not below the curve order.
    #[error("seed produced an invalid master key")]
    InvalidMasterKey,
    #[error("seed must be 16 to 64 bytes, got {0}")]
    InvalidLength(usize),
}

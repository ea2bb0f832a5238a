pub mod error;
pub mod extended_key;

pub use error::Bip32Error;
pub use extended_key::{ExtendedPrivKey, ExtendedPubKey, Network};

pub type Result<T> = std::result::Result<T, Bip32Error>;

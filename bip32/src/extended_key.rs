use crate::{Bip32Error, Result};
use crypto_utils::{base58::base58_check_encode, hmac::hmac_sha512};
use secp256k1::{PublicKey, Secp256k1, SecretKey, Signing};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

/// HMAC key for master node generation.
const MASTER_HMAC_KEY: &[u8] = b"Bitcoin seed";

// Version bytes for serialization
const VERSION_MAINNET_PRIVATE: [u8; 4] = [0x04, 0x88, 0xAD, 0xE4];
const VERSION_MAINNET_PUBLIC: [u8; 4] = [0x04, 0x88, 0xB2, 0x1E];
const VERSION_TESTNET_PRIVATE: [u8; 4] = [0x04, 0x35, 0x83, 0x94];
const VERSION_TESTNET_PUBLIC: [u8; 4] = [0x04, 0x35, 0x87, 0xCF];

/// Master extended private key: secp256k1 scalar plus chain code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtendedPrivKey {
    pub chain_code: [u8; 32],
    pub private_key: SecretKey,
}

/// Master extended public key: compressed point plus chain code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtendedPubKey {
    pub chain_code: [u8; 32],
    pub public_key: PublicKey,
}

/// Split `I = HMAC-SHA512("Bitcoin seed", seed)` into (IL, IR).
/// IL must parse as a scalar in [1, n-1]; there is no retry at the master level.
fn master_from_hmac(i: &[u8; 64]) -> Result<ExtendedPrivKey> {
    let (il, ir) = i.split_at(32);
    let private_key = SecretKey::from_slice(il).map_err(|_| Bip32Error::InvalidMasterKey)?;
    let mut chain_code = [0u8; 32];
    chain_code.copy_from_slice(ir);
    Ok(ExtendedPrivKey {
        chain_code,
        private_key,
    })
}

/// 78-byte BIP-32 payload of a depth-0 node, Base58Check encoded.
fn encode_master(version: [u8; 4], chain_code: &[u8; 32], key_data: &[u8; 33]) -> String {
    // version (4) | depth (1) | parent_fp (4) | child_index (4) | chain_code (32) | key_data (33)
    let mut payload = Vec::with_capacity(78);
    payload.extend(&version);
    payload.push(0u8);
    payload.extend(&[0u8; 4]);
    payload.extend(&0u32.to_be_bytes());
    payload.extend(chain_code);
    payload.extend(key_data);
    base58_check_encode(&payload)
}

impl ExtendedPrivKey {
    /// Master extended private key from a seed
    pub fn new_master(seed: &[u8]) -> Result<Self> {
        let len = seed.len();
        if !(16..=64).contains(&len) {
            return Err(Bip32Error::InvalidLength(len));
        }
        master_from_hmac(&hmac_sha512(MASTER_HMAC_KEY, seed))
    }

    /// Public counterpart: `G * k`, chain code carried over unchanged.
    pub fn to_extended_pub<C: Signing>(&self, secp: &Secp256k1<C>) -> ExtendedPubKey {
        ExtendedPubKey {
            chain_code: self.chain_code,
            public_key: PublicKey::from_secret_key(secp, &self.private_key),
        }
    }

    /// Raw 32-byte big-endian scalar.
    pub fn key_bytes(&self) -> [u8; 32] {
        self.private_key.secret_bytes()
    }

    /// Serialize this xprv into a Base58Check string
    pub fn to_base58(&self, network: Network) -> String {
        let version = match network {
            Network::Mainnet => VERSION_MAINNET_PRIVATE,
            Network::Testnet => VERSION_TESTNET_PRIVATE,
        };
        let mut key_data = [0u8; 33];
        key_data[1..].copy_from_slice(&self.key_bytes());
        encode_master(version, &self.chain_code, &key_data)
    }
}

impl ExtendedPubKey {
    /// SEC1 compressed point: parity prefix (0x02/0x03) followed by X.
    pub fn key_bytes(&self) -> [u8; 33] {
        self.public_key.serialize()
    }

    /// Serialize to Base58Check (xpub)
    pub fn to_base58(&self, network: Network) -> String {
        let version = match network {
            Network::Mainnet => VERSION_MAINNET_PUBLIC,
            Network::Testnet => VERSION_TESTNET_PUBLIC,
        };
        encode_master(version, &self.chain_code, &self.key_bytes())
    }
}

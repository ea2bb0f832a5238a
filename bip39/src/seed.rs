//! Seed = PBKDF2-HMAC-SHA512(password = NFKD(mnemonic), salt = "mnemonic" + NFKD(passphrase), 2048 rounds, 64 bytes)

use crypto_utils::kdf::pbkdf2_hmac_sha512;
use std::fmt;
use unicode_normalization::UnicodeNormalization;

pub const PBKDF2_ROUNDS: u32 = 2048;

const SALT_PREFIX: &str = "mnemonic";

/// 64-byte BIP-39 seed.
#[derive(Clone, PartialEq, Eq)]
pub struct Seed([u8; 64]);

impl Seed {
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(..)")
    }
}

/// Stretch a mnemonic phrase into a seed.
///
/// The phrase is used as given, apart from NFKD; it is neither checked
/// against the wordlist nor respaced. [`Mnemonic::parse`](crate::Mnemonic::parse)
/// does both, and [`Mnemonic::to_seed`](crate::Mnemonic::to_seed) stretches the
/// canonical text.
pub fn derive(phrase: &str, passphrase: &str) -> Seed {
    let password: String = phrase.nfkd().collect();
    let salt: String = SALT_PREFIX.chars().chain(passphrase.nfkd()).collect();
    Seed(pbkdf2_hmac_sha512(
        password.as_bytes(),
        salt.as_bytes(),
        PBKDF2_ROUNDS,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mnemonic;

    const ABANDON_ABOUT: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn hex_seed(m: &str, p: &str) -> String {
        derive(m, p).to_hex()
    }

    #[test]
    fn abandon_about_empty_passphrase() {
        assert_eq!(
            hex_seed(ABANDON_ABOUT, ""),
            "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4"
        );
    }

    // BIP-39 reference vectors, passphrase "TREZOR"
    #[test]
    fn bip39_vector1_trezor() {
        assert_eq!(
            hex_seed(ABANDON_ABOUT, "TREZOR"),
            "c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e53495531f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04"
        );
    }

    #[test]
    fn bip39_vector2_trezor() {
        let m = "legal winner thank year wave sausage worth useful legal winner thank yellow";
        assert_eq!(
            hex_seed(m, "TREZOR"),
            "2e8905819b8723fe2c1d161860e5ee1830318dbf49a83bd451cfb8440c28bd6fa457fe1296106559a3c80937a1c1069be3a3a5bd381ee6260e8d9739fce1f607"
        );
    }

    #[test]
    fn bip39_vector3_trezor() {
        let m = "letter advice cage absurd amount doctor acoustic avoid letter advice cage above";
        assert_eq!(
            hex_seed(m, "TREZOR"),
            "d71de856f81a8acc65e6fc851a38d4d7ec216fd0796d0a6827a3ad6ed5511a30fa280f12eb2e47ed2ac03b5c462a0358d18d69fe4f985ec81778c1b370b652a8"
        );
    }

    #[test]
    fn mnemonic_to_seed_matches_text() {
        let mnemonic = Mnemonic::parse(ABANDON_ABOUT).unwrap();
        assert_eq!(mnemonic.to_seed(""), derive(ABANDON_ABOUT, ""));
    }

    #[test]
    fn password_is_the_text_as_given() {
        let spaced = ABANDON_ABOUT.replacen(' ', "  ", 1);
        let expected = pbkdf2_hmac_sha512(spaced.as_bytes(), b"mnemonicTREZOR", PBKDF2_ROUNDS);
        assert_eq!(derive(&spaced, "TREZOR").as_bytes(), &expected);
        assert_ne!(derive(&spaced, "TREZOR"), derive(ABANDON_ABOUT, "TREZOR"));
    }

    #[test]
    fn phrase_is_nfkd_normalized() {
        // U+FB01 (fi ligature) decomposes to "fi".
        let expected = pbkdf2_hmac_sha512(b"fig", b"mnemonic", PBKDF2_ROUNDS);
        assert_eq!(derive("\u{fb01}g", "").as_bytes(), &expected);
    }

    #[test]
    fn canonical_mnemonic_ignores_input_spacing() {
        let messy = "  abandon   abandon abandon\tabandon\nabandon abandon abandon abandon abandon abandon abandon about  ";
        let mnemonic = Mnemonic::parse(messy).unwrap();
        assert_eq!(mnemonic.to_seed(""), derive(ABANDON_ABOUT, ""));
    }

    #[test]
    fn passphrase_is_nfkd_normalized() {
        // Precomposed U+00E9 and "e" + combining acute must stretch identically.
        assert_eq!(derive(ABANDON_ABOUT, "caf\u{e9}"), derive(ABANDON_ABOUT, "cafe\u{301}"));
        assert_ne!(derive(ABANDON_ABOUT, "cafe"), derive(ABANDON_ABOUT, "caf\u{e9}"));
    }

    #[test]
    fn deterministic() {
        let a = derive(ABANDON_ABOUT, "");
        let b = derive(ABANDON_ABOUT, "");
        assert_eq!(a.as_bytes(), b.as_bytes());
        assert_eq!(a.to_hex().len(), 128);
    }
}

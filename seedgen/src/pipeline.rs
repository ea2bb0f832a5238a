use crate::{
    Result,
    identifier::{IdentifierGenerator, UuidGenerator},
};
use bip32::{ExtendedPrivKey, Network};
use bip39::{EntropyLength, EntropySource, Mnemonic};
use rand::{CryptoRng, RngCore, rngs::OsRng};
use secp256k1::{All, Secp256k1};
use serde::Serialize;
use tracing::{debug, info};

/// Size of freshly generated entropy (24 words).
pub const GENERATED_ENTROPY: EntropyLength = EntropyLength::Bits256;

/// Passphrase used for every seed the pipeline derives.
const SEED_PASSPHRASE: &str = "";

/// One derivation, hex-encoded. The JSON form carries only the first five fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivationResult {
    pub name: String,
    pub mnemonic: String,
    pub seed: String,
    pub master_key: String,
    pub public_key: String,
    /// Base58Check master extended private key.
    #[serde(skip)]
    pub xprv: String,
    /// Base58Check master extended public key.
    #[serde(skip)]
    pub xpub: String,
}

/// entropy → mnemonic → seed → master private key → master public key.
pub struct DerivationPipeline<R = OsRng, G = UuidGenerator> {
    entropy: EntropySource<R>,
    ids: G,
    network: Network,
    secp: Secp256k1<All>,
}

impl DerivationPipeline {
    /// OS randomness and UUID names.
    pub fn new(network: Network) -> Self {
        Self::with_parts(EntropySource::os(), UuidGenerator, network)
    }
}

impl<R, G> DerivationPipeline<R, G>
where
    R: RngCore + CryptoRng,
    G: IdentifierGenerator,
{
    pub fn with_parts(entropy: EntropySource<R>, ids: G, network: Network) -> Self {
        DerivationPipeline {
            entropy,
            ids,
            network,
            secp: Secp256k1::new(),
        }
    }

    /// Derive one result. A supplied phrase must pass wordlist and checksum
    /// validation; without one, 256 bits of fresh entropy are drawn. An empty
    /// label counts as no label.
    pub fn run(&mut self, label: Option<&str>, mnemonic: Option<&str>) -> Result<DerivationResult> {
        let mnemonic = mnemonic.map(Mnemonic::parse).transpose()?;
        self.run_with(label, mnemonic)
    }

    /// Same as [`run`](Self::run) for a phrase that was already parsed.
    pub fn run_with(
        &mut self,
        label: Option<&str>,
        mnemonic: Option<Mnemonic>,
    ) -> Result<DerivationResult> {
        let mnemonic = match mnemonic {
            Some(mnemonic) => {
                debug!(words = mnemonic.word_count(), "using supplied mnemonic");
                mnemonic
            }
            None => Mnemonic::from_entropy(&self.entropy.generate(GENERATED_ENTROPY)?),
        };

        let seed = mnemonic.to_seed(SEED_PASSPHRASE);
        let master = ExtendedPrivKey::new_master(seed.as_bytes())?;
        let public = master.to_extended_pub(&self.secp);

        let name = match label {
            Some(label) if !label.is_empty() => label.to_owned(),
            _ => self.ids.next_id(),
        };
        info!(%name, words = mnemonic.word_count(), "derived master key pair");

        Ok(DerivationResult {
            name,
            mnemonic: mnemonic.to_string(),
            seed: seed.to_hex(),
            master_key: hex::encode(master.key_bytes()),
            public_key: hex::encode(public.key_bytes()),
            xprv: master.to_base58(self.network),
            xpub: public.to_base58(self.network),
        })
    }

    /// `count` independent runs, each on fresh entropy with a generated name.
    ///
    /// Errors are yielded, not swallowed; whether to stop at the first one is
    /// up to the caller.
    pub fn run_batch(&mut self, count: usize) -> impl Iterator<Item = Result<DerivationResult>> + '_ {
        (0..count).map(move |_| self.run(None, None))
    }
}

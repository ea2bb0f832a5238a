use crate::{
    output::{save_to_file, write_console},
    pipeline::{DerivationPipeline, DerivationResult},
};
use anyhow::Context;
use bip32::Network;
use bip39::Mnemonic;
use clap::{Parser, ValueEnum};
use std::{ffi::OsString, io::Write, path::PathBuf};

/// Generate BIP-39 seed phrases, or parse an existing one, and derive the
/// BIP-32 master key pair.
#[derive(Debug, Parser)]
#[command(name = "seedgen", version, about)]
pub struct Cli {
    /// Override the generated UUID name with an explicit name.
    #[arg(short, long)]
    pub name: Option<String>,

    /// Use this mnemonic instead of generating one.
    #[arg(short, long)]
    pub mnemonic: Option<OsString>,

    /// Generate a batch of N mnemonics (0 = single run).
    #[arg(
        short,
        long = "batch-mode",
        value_name = "N",
        default_value_t = 0,
        conflicts_with_all = ["name", "mnemonic"]
    )]
    pub batch: usize,

    /// Disable console output.
    #[arg(short = 'c', long)]
    pub disable_console_output: bool,

    /// Disable file output.
    #[arg(short = 'f', long)]
    pub disable_file_output: bool,

    /// Folder for the `<name>.json` files.
    #[arg(short, long, default_value = ".")]
    pub output_folder: PathBuf,

    /// Version bytes for the extended key serialization.
    #[arg(long, value_enum, default_value_t = NetworkArg::Mainnet)]
    pub network: NetworkArg,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum NetworkArg {
    Mainnet,
    Testnet,
}

impl From<NetworkArg> for Network {
    fn from(arg: NetworkArg) -> Self {
        match arg {
            NetworkArg::Mainnet => Network::Mainnet,
            NetworkArg::Testnet => Network::Testnet,
        }
    }
}

impl Cli {
    /// Derive, echo and persist as the flags say. The first failure aborts
    /// the remaining work; results already emitted stay emitted.
    ///
    /// Returns the number of results produced.
    pub fn execute<W: Write>(&self, mut out: W) -> anyhow::Result<usize> {
        let mut pipeline = DerivationPipeline::new(self.network.into());

        if self.batch > 0 {
            let mut produced = 0;
            for result in pipeline.run_batch(self.batch) {
                let result = result
                    .with_context(|| format!("derivation {} of {}", produced + 1, self.batch))?;
                self.emit(&result, &mut out)?;
                produced += 1;
            }
            return Ok(produced);
        }

        let mnemonic = self
            .mnemonic
            .as_deref()
            .map(|phrase| Mnemonic::from_utf8(phrase.as_encoded_bytes()))
            .transpose()
            .context("invalid mnemonic")?;
        let result = pipeline.run_with(self.name.as_deref(), mnemonic)?;
        self.emit(&result, &mut out)?;
        Ok(1)
    }

    fn emit<W: Write>(&self, result: &DerivationResult, out: &mut W) -> anyhow::Result<()> {
        if !self.disable_console_output {
            write_console(result, &mut *out).context("failed to write console output")?;
        }
        if !self.disable_file_output {
            save_to_file(result, &self.output_folder)?;
        }
        Ok(())
    }
}

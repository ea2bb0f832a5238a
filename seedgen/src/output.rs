use crate::{OutputError, pipeline::DerivationResult};
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Print a result as labeled lines.
pub fn write_console<W: Write>(result: &DerivationResult, mut out: W) -> io::Result<()> {
    writeln!(out, "Name: {}", result.name)?;
    writeln!(out, "Mnemonic: {}", result.mnemonic)?;
    writeln!(out, "Seed: {}", result.seed)?;
    writeln!(out, "Master private key: {}", result.master_key)?;
    writeln!(out, "Master public key: {}", result.public_key)?;
    writeln!(out, "Master extended private key: {}", result.xprv)?;
    writeln!(out, "Master extended public key: {}", result.xpub)?;
    out.flush()
}

/// The name becomes a file name, so it must stay a single path component.
fn validate_name(name: &str) -> Result<(), OutputError> {
    let bad = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);
    if bad {
        return Err(OutputError::InvalidName(name.to_owned()));
    }
    Ok(())
}

/// Write `<dir>/<name>.json`, creating `dir` if needed and replacing any
/// earlier file of the same name.
pub fn save_to_file(result: &DerivationResult, dir: &Path) -> Result<PathBuf, OutputError> {
    validate_name(&result.name)?;

    if !dir.is_dir() {
        debug!(dir = %dir.display(), "creating output folder");
        std::fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let path = dir.join(format!("{}.json", result.name));
    let json = serde_json::to_vec(result)?;
    write_secure(&path, &json).map_err(|source| OutputError::Write {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), "saved result");
    Ok(path)
}

// The file holds a mnemonic and private key. `mode` only applies on
// creation, so an existing file is narrowed before it is truncated.
#[cfg(unix)]
fn write_secure(path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .mode(0o600)
        .open(path)?;
    file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
    file.set_len(0)?;
    file.write_all(contents.as_ref())
}

#[cfg(not(unix))]
fn write_secure(path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()> {
    std::fs::write(path, contents)
}

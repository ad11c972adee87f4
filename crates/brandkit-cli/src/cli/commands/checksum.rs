//! Checksum command: print SHA-256 digests, or verify files.

use anyhow::{bail, Result};
use brandkit_core::checksum::{self, Manifest};
use std::path::{Path, PathBuf};

/// Without options prints `<hex>  <path>` per file. `expected` checks every
/// file against one digest; `manifest` checks each file against its entry.
pub fn run_checksum(
    paths: &[PathBuf],
    expected: Option<&str>,
    manifest: Option<&Path>,
    root: Option<&Path>,
) -> Result<()> {
    if let Some(manifest_path) = manifest {
        return verify_with_manifest(paths, &Manifest::load(manifest_path)?, root);
    }

    for path in paths {
        let digest = checksum::sha256_path(path)?;
        println!("{}  {}", digest, path.display());
        if let Some(expected) = expected {
            checksum::ensure_sha256(path, expected)?;
        }
    }
    Ok(())
}

fn verify_with_manifest(paths: &[PathBuf], manifest: &Manifest, root: Option<&Path>) -> Result<()> {
    let mut failed = 0usize;
    for path in paths {
        match manifest.verify_file(path, root) {
            Ok(()) => println!("{}: OK", path.display()),
            Err(e) => {
                failed += 1;
                println!("{}: FAILED", path.display());
                eprintln!("Error: checksum verification failed for {}: {}", path.display(), e);
            }
        }
    }
    if failed > 0 {
        bail!("{} of {} files failed verification", failed, paths.len());
    }
    Ok(())
}

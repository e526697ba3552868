use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};

mod config_file;
mod session_slots;

pub const STORE_DIR: &str = ".market-console";

/// The console's on-disk state directory: `config.json` (connection settings)
/// and `session.json` (token and cached profile slots).
pub struct LocalStore {
    root: PathBuf,

    // Serializes read-modify-write cycles on session.json within this process.
    slots_lock: Mutex<()>,
}

impl LocalStore {
    pub fn default_dir(base: &Path) -> PathBuf {
        base.join(STORE_DIR)
    }

    pub fn open(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(anyhow!(
                "No state directory found at {} (run `market-console remote set --url ...`)",
                root.display()
            ));
        }
        Ok(Self::at(root))
    }

    /// Opens the state directory, creating it when missing.
    pub fn open_or_init(root: &Path) -> Result<Self> {
        if !root.exists() {
            fs::create_dir_all(root)
                .with_context(|| format!("create state dir {}", root.display()))?;
            tracing::debug!(dir = %root.display(), "initialized console state dir");
        }
        Self::open(root)
    }

    fn at(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            slots_lock: Mutex::new(()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/store/local_store_tests.rs"]
mod tests;

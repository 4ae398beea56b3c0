//! # Ledger File Store
//!
//! Loads and saves the ledger aggregate as pretty-printed JSON. The
//! whole aggregate serializes through `serde`, so a file is a complete,
//! restorable snapshot.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use mintpress_ledger::Ledger;

/// A ledger snapshot on disk.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    /// A store backed by `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The backing path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a snapshot exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read and deserialize the ledger.
    pub fn load(&self) -> Result<Ledger> {
        let bytes = fs::read(&self.path)
            .with_context(|| format!("reading ledger file {}", self.path.display()))?;
        let ledger = serde_json::from_slice(&bytes)
            .with_context(|| format!("parsing ledger file {}", self.path.display()))?;
        Ok(ledger)
    }

    /// Serialize and write the ledger.
    pub fn save(&self, ledger: &Ledger) -> Result<()> {
        let json = serde_json::to_vec_pretty(ledger).context("serializing ledger")?;
        fs::write(&self.path, json)
            .with_context(|| format!("writing ledger file {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    use mintpress_core::{AccountId, Timestamp};
    use mintpress_ledger::LedgerConfig;

    fn sample_ledger() -> Ledger {
        Ledger::new(LedgerConfig {
            name: "Test".to_string(),
            symbol: "TST".to_string(),
            base_uri: "https://example.com/".to_string(),
            issuer: AccountId::new("issuer").unwrap(),
            pool_account: AccountId::new("pool").unwrap(),
            tribute_series: BTreeSet::from([2]),
            activated_at: Timestamp::parse("2026-01-01T00:00:00Z").unwrap(),
        })
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = LedgerStore::new(dir.path().join("ledger.json"));
        assert!(!store.exists());

        let mut ledger = sample_ledger();
        let issuer = AccountId::new("issuer").unwrap();
        ledger
            .mint(
                &issuer,
                AccountId::new("bob").unwrap(),
                1,
                1,
                500,
                "memo",
                "1.json",
                Timestamp::parse("2026-01-02T00:00:00Z").unwrap(),
            )
            .unwrap();

        store.save(&ledger).unwrap();
        assert!(store.exists());

        let restored = store.load().unwrap();
        assert_eq!(restored.total_supply(), 1);
        assert_eq!(restored.name(), "Test");
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = LedgerStore::new(dir.path().join("absent.json"));
        assert!(store.load().is_err());
    }
}

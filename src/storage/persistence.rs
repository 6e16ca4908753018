//! Registry persistence layer
//!
//! Provides JSON snapshot save/load for a ledger registry.

use crate::ledger::Registry;
use std::fs;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Storage configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub registry_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".ledger_data"),
            registry_file: "registry.json".to_string(),
        }
    }
}

/// Registry storage manager
pub struct Storage {
    config: StorageConfig,
}

impl Storage {
    /// Create a new storage manager
    pub fn new(config: StorageConfig) -> Result<Self, StorageError> {
        fs::create_dir_all(&config.data_dir)?;
        Ok(Self { config })
    }

    /// Create with default configuration
    pub fn with_defaults() -> Result<Self, StorageError> {
        Self::new(StorageConfig::default())
    }

    /// Get the registry file path
    fn registry_path(&self) -> PathBuf {
        self.config.data_dir.join(&self.config.registry_file)
    }

    /// Save the registry to disk
    pub fn save(&self, registry: &Registry) -> Result<(), StorageError> {
        let path = self.registry_path();

        // Write to temporary file first
        let temp_path = self.config.data_dir.join("registry.tmp");
        let file = fs::File::create(&temp_path)?;
        let writer = BufWriter::new(file);

        serde_json::to_writer_pretty(writer, registry)?;

        // Atomic rename
        fs::rename(&temp_path, &path)?;

        log::info!("Registry saved: {} ledgers to {:?}", registry.count(), path);

        Ok(())
    }

    /// Load the registry from disk
    pub fn load(&self) -> Result<Registry, StorageError> {
        let path = self.registry_path();

        if !path.exists() {
            return Err(StorageError::InvalidData(
                "Registry file not found".to_string(),
            ));
        }

        let file = fs::File::open(&path)?;
        let reader = BufReader::new(file);

        let registry: Registry = serde_json::from_reader(reader)?;

        log::info!("Registry loaded: {} ledgers from {:?}", registry.count(), path);

        Ok(registry)
    }

    /// Check if a saved registry exists
    pub fn exists(&self) -> bool {
        self.registry_path().exists()
    }

    /// Delete the saved registry
    pub fn delete(&self) -> Result<(), StorageError> {
        let path = self.registry_path();
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// Save a registry to a specific file path
pub fn save_to_file(registry: &Registry, path: &Path) -> Result<(), StorageError> {
    let file = fs::File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, registry)?;
    Ok(())
}

/// Load a registry from a specific file path
pub fn load_from_file(path: &Path) -> Result<Registry, StorageError> {
    let file = fs::File::open(path)?;
    let reader = BufReader::new(file);
    let registry: Registry = serde_json::from_reader(reader)?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Address;

    fn addr(byte: u8) -> Address {
        Address::new([byte; 20])
    }

    fn populated_registry() -> (Registry, Address) {
        let mut registry = Registry::new();
        let id = registry
            .deploy(
                "Test Token".to_string(),
                "TST".to_string(),
                18,
                1_000_000,
                addr(0xD0),
            )
            .unwrap();
        registry.transfer(id, addr(0xD0), addr(0xB0), 2_500).unwrap();
        registry.approve(id, addr(0xD0), addr(0xA0), 9_000).unwrap();
        (registry, id)
    }

    #[test]
    fn test_save_load_registry() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = StorageConfig {
            data_dir: temp_dir.path().to_path_buf(),
            ..Default::default()
        };

        let storage = Storage::new(config).unwrap();
        let (registry, id) = populated_registry();

        storage.save(&registry).unwrap();
        assert!(storage.exists());

        let loaded = storage.load().unwrap();
        assert_eq!(loaded.count(), 1);
        assert_eq!(loaded.balance_of(id, addr(0xD0)).unwrap(), 997_500);
        assert_eq!(loaded.balance_of(id, addr(0xB0)).unwrap(), 2_500);
        assert_eq!(loaded.allowance(id, addr(0xD0), addr(0xA0)).unwrap(), 9_000);

        let ledger = loaded.get(id).unwrap();
        assert_eq!(ledger.symbol(), "TST");
        assert_eq!(ledger.total_supply(), 1_000_000);
    }

    #[test]
    fn test_load_missing_registry_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = StorageConfig {
            data_dir: temp_dir.path().to_path_buf(),
            ..Default::default()
        };

        let storage = Storage::new(config).unwrap();
        assert!(!storage.exists());
        assert!(matches!(
            storage.load(),
            Err(StorageError::InvalidData(_))
        ));
    }

    #[test]
    fn test_delete() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = StorageConfig {
            data_dir: temp_dir.path().to_path_buf(),
            ..Default::default()
        };

        let storage = Storage::new(config).unwrap();
        let (registry, _) = populated_registry();

        storage.save(&registry).unwrap();
        assert!(storage.exists());

        storage.delete().unwrap();
        assert!(!storage.exists());
    }

    #[test]
    fn test_save_load_specific_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("snapshot.json");
        let (registry, id) = populated_registry();

        save_to_file(&registry, &path).unwrap();
        let loaded = load_from_file(&path).unwrap();

        assert_eq!(loaded.balance_of(id, addr(0xB0)).unwrap(), 2_500);
    }
}

//! Save manager for the progression record
//!
//! One record, one file. Writes happen on quit, on returning to the main menu
//! and on defeat; reads happen when a session starts and when the main menu is
//! shown. Reading never fails from the caller's point of view:
//! `load_or_default` swaps any problem for the default record.

use super::types::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub struct SaveManager {
    save_file: PathBuf,
}

impl SaveManager {
    /// Creates a manager for the given save file path.
    ///
    /// The parent directory is created if it doesn't exist; failing to create
    /// it is only logged, the error resurfaces on the first save.
    pub fn new(save_file: impl AsRef<Path>) -> Self {
        let save_file = save_file.as_ref().to_path_buf();

        if let Some(dir) = save_file.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                if let Err(e) = fs::create_dir_all(dir) {
                    warn!(dir = %dir.display(), error = %e, "could not create save directory");
                }
            }
        }

        SaveManager { save_file }
    }

    pub fn path(&self) -> &Path {
        &self.save_file
    }

    /// Writes the record, stamping it with the current local time.
    pub fn save_game(&self, record: &SaveRecord) -> Result<PathBuf, SaveError> {
        let stamped = SaveRecord {
            saved_at: Some(chrono::Local::now().to_rfc3339()),
            ..record.clone()
        };

        let json = serde_json::to_string_pretty(&stamped)?;
        fs::write(&self.save_file, json)?;

        info!(
            path = %self.save_file.display(),
            fish = stamped.fish,
            health = stamped.health,
            "game saved"
        );

        Ok(self.save_file.clone())
    }

    /// Reads and validates the record.
    pub fn load_game(&self) -> Result<SaveRecord, SaveError> {
        if !self.save_file.exists() {
            return Err(SaveError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Save file not found: {}", self.save_file.display()),
            )));
        }

        let json = fs::read_to_string(&self.save_file)?;
        if json.trim().is_empty() {
            return Err(SaveError::CorruptedData("empty save file".to_string()));
        }

        let record: SaveRecord = serde_json::from_str(&json)?;
        Ok(record.sanitized())
    }

    /// Reads the record or returns the defaults (0 fish, no upgrades, full health).
    pub fn load_or_default(&self) -> SaveRecord {
        match self.load_game() {
            Ok(record) => record,
            Err(SaveError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %self.save_file.display(), "no save yet, starting fresh");
                SaveRecord::default()
            }
            Err(e) => {
                warn!(path = %self.save_file.display(), error = %e, "save unreadable, using defaults");
                SaveRecord::default()
            }
        }
    }

    /// Saves and logs instead of failing; used at the end of a session.
    pub fn save_or_warn(&self, record: &SaveRecord) {
        if let Err(e) = self.save_game(record) {
            warn!(path = %self.save_file.display(), error = %e, "failed to save game");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager_in(dir: &tempfile::TempDir) -> SaveManager {
        SaveManager::new(dir.path().join("nested").join("save.json"))
    }

    #[test]
    fn test_round_trip_preserves_progress() {
        let dir = tempfile::tempdir().expect("tempdir");
        let manager = manager_in(&dir);
        let record = SaveRecord {
            fish: 17,
            upgrades: Upgrades {
                speed: 2,
                jump: 1,
                double_jump: 1,
            },
            health: 60,
            saved_at: None,
        };

        manager.save_game(&record).expect("save");
        let loaded = manager.load_game().expect("load");

        assert_eq!(loaded.fish, record.fish);
        assert_eq!(loaded.upgrades, record.upgrades);
        assert_eq!(loaded.health, record.health);
        assert!(loaded.saved_at.is_some());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let manager = manager_in(&dir);

        assert!(manager.load_game().is_err());
        assert_eq!(manager.load_or_default(), SaveRecord::default());
    }

    #[test]
    fn test_corrupt_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let manager = manager_in(&dir);

        for garbage in ["", "{{{", r#"{"fish": -3}"#, r#"{"fish": "lots"}"#, "[1, 2, 3]"] {
            fs::write(manager.path(), garbage).expect("write");
            let record = manager.load_or_default();
            assert_eq!(record.fish, 0, "input {:?}", garbage);
            assert_eq!(record.upgrades, Upgrades::default());
            assert_eq!(record.health, MAX_HEALTH);
        }
    }

    #[test]
    fn test_defeat_snapshot_loads_at_full_health() {
        let dir = tempfile::tempdir().expect("tempdir");
        let manager = manager_in(&dir);
        let record = SaveRecord {
            fish: 5,
            health: 0,
            ..Default::default()
        };

        manager.save_game(&record).expect("save");
        let loaded = manager.load_or_default();
        assert_eq!(loaded.fish, 5);
        assert_eq!(loaded.health, MAX_HEALTH);
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let manager = manager_in(&dir);

        assert!(dir.path().join("nested").exists());
        manager.save_or_warn(&SaveRecord::default());
        assert!(manager.path().exists());
    }
}

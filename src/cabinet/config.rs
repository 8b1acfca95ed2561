use crate::error::{CabinetError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Per-domain store capacities, stored in the data directory's config.json.
/// Capacities bound the live record count; snapshot loads truncate to them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Capacities {
    #[serde(default = "default_contacts")]
    pub contacts: usize,
    #[serde(default = "default_accounts")]
    pub accounts: usize,
    #[serde(default = "default_patients")]
    pub patients: usize,
    #[serde(default = "default_doctors")]
    pub doctors: usize,
    #[serde(default = "default_appointments")]
    pub appointments: usize,
    #[serde(default = "default_medicines")]
    pub medicines: usize,
    #[serde(default = "default_books")]
    pub books: usize,
    #[serde(default = "default_borrowers")]
    pub borrowers: usize,
    #[serde(default = "default_users")]
    pub users: usize,
    #[serde(default = "default_students")]
    pub students: usize,
}

fn default_contacts() -> usize {
    crate::model::contact::DEFAULT_CAPACITY
}

fn default_accounts() -> usize {
    crate::model::account::DEFAULT_CAPACITY
}

fn default_patients() -> usize {
    crate::model::patient::DEFAULT_CAPACITY
}

fn default_doctors() -> usize {
    crate::model::doctor::DEFAULT_CAPACITY
}

fn default_appointments() -> usize {
    crate::model::appointment::DEFAULT_CAPACITY
}

fn default_medicines() -> usize {
    crate::model::medicine::DEFAULT_CAPACITY
}

fn default_books() -> usize {
    crate::model::book::DEFAULT_CAPACITY
}

fn default_borrowers() -> usize {
    crate::model::borrower::DEFAULT_CAPACITY
}

fn default_users() -> usize {
    crate::model::user::DEFAULT_CAPACITY
}

fn default_students() -> usize {
    crate::model::student::DEFAULT_CAPACITY
}

impl Default for Capacities {
    fn default() -> Self {
        Self {
            contacts: default_contacts(),
            accounts: default_accounts(),
            patients: default_patients(),
            doctors: default_doctors(),
            appointments: default_appointments(),
            medicines: default_medicines(),
            books: default_books(),
            borrowers: default_borrowers(),
            users: default_users(),
            students: default_students(),
        }
    }
}

/// Configuration for cabinet, stored alongside the snapshot files.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CabinetConfig {
    #[serde(default)]
    pub capacities: Capacities,
}

impl CabinetConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CabinetError::Io)?;
        let config: CabinetConfig =
            serde_json::from_str(&content).map_err(CabinetError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CabinetError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CabinetError::Serialization)?;
        fs::write(config_path, content).map_err(CabinetError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn defaults_match_the_domain_constants() {
        let capacities = Capacities::default();
        assert_eq!(capacities.contacts, 100);
        assert_eq!(capacities.doctors, 20);
        assert_eq!(capacities.appointments, 200);
        assert_eq!(capacities.borrowers, 50);
        assert_eq!(capacities.users, 20);
    }

    #[test]
    fn load_missing_config_is_defaults() {
        let temp_dir = env::temp_dir().join("cabinet_test_config_missing");
        let _ = fs::remove_dir_all(&temp_dir);

        let config = CabinetConfig::load(&temp_dir).unwrap();
        assert_eq!(config, CabinetConfig::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp_dir = env::temp_dir().join("cabinet_test_config_save");
        let _ = fs::remove_dir_all(&temp_dir);
        fs::create_dir_all(&temp_dir).unwrap();

        let mut config = CabinetConfig::default();
        config.capacities.books = 500;
        config.save(&temp_dir).unwrap();

        let loaded = CabinetConfig::load(&temp_dir).unwrap();
        assert_eq!(loaded.capacities.books, 500);
        assert_eq!(loaded.capacities.users, 20);

        let _ = fs::remove_dir_all(&temp_dir);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config: CabinetConfig =
            serde_json::from_str(r#"{"capacities": {"students": 7}}"#).unwrap();
        assert_eq!(config.capacities.students, 7);
        assert_eq!(config.capacities.contacts, 100);
    }
}

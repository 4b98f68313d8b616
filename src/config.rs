use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_BACKUP_DB_PATH: &str = "backup_db";

/// Which account store the binary wires into the payment service.
///
/// `Backup` selects the persistent store. Any other configured value falls
/// back to the primary in-memory store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataStoreType {
    #[default]
    Primary,
    Backup,
}

impl fmt::Display for DataStoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => f.write_str("Primary"),
            Self::Backup => f.write_str("Backup"),
        }
    }
}

impl FromStr for DataStoreType {
    type Err = Infallible;

    /// Only the exact value `Backup` selects the backup store.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Backup" => Ok(Self::Backup),
            _ => Ok(Self::Primary),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub data_store_type: DataStoreType,
    pub backup_db_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_store_type: DataStoreType::default(),
            backup_db_path: PathBuf::from(DEFAULT_BACKUP_DB_PATH),
        }
    }
}

impl AppConfig {
    /// Reads `DATA_STORE_TYPE` and `BACKUP_DB_PATH` from the environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            data_store_type: lookup("DATA_STORE_TYPE")
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.data_store_type),
            backup_db_path: lookup("BACKUP_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.backup_db_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_only_backup_selects_backup() {
        assert_eq!("Backup".parse::<DataStoreType>().unwrap(), DataStoreType::Backup);
        assert_eq!(" Backup ".parse::<DataStoreType>().unwrap(), DataStoreType::Backup);
        assert_eq!("backup".parse::<DataStoreType>().unwrap(), DataStoreType::Primary);
        assert_eq!("".parse::<DataStoreType>().unwrap(), DataStoreType::Primary);
    }

    #[test]
    fn test_unknown_store_type_is_primary_not_error() {
        let parsed: Result<DataStoreType, Infallible> = "Tertiary".parse();
        assert_eq!(parsed, Ok(DataStoreType::Primary));
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_from_lookup_reads_values() {
        let env: HashMap<&str, &str> = [
            ("DATA_STORE_TYPE", "Backup"),
            ("BACKUP_DB_PATH", "/tmp/accounts"),
        ]
        .into_iter()
        .collect();

        let config = AppConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.data_store_type, DataStoreType::Backup);
        assert_eq!(config.backup_db_path, PathBuf::from("/tmp/accounts"));
    }
}

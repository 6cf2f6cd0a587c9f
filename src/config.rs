//! Runtime settings for equity runs.

use std::path::PathBuf;
use std::sync::Arc;

use crate::core::EquityError;
use crate::table::{self, HandRankTable};

/// Where the rank table file is looked for by default.
pub const DEFAULT_TABLE_PATH: &str = "HandRanks.dat";
/// Default number of monte carlo trials.
pub const DEFAULT_TRIALS: usize = 100_000;

/// Environment variable holding the rank table path.
pub const TABLE_PATH_VAR: &str = "HAND_RANKS_PATH";
/// Environment variable holding the worker count.
pub const WORKERS_VAR: &str = "EQUITY_WORKERS";
/// Environment variable holding the default trial count.
pub const TRIALS_VAR: &str = "EQUITY_TRIALS";

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquityConfig {
    /// Path of a `HandRanks.dat` style table.
    pub table_path: PathBuf,
    /// Threads used by parallel simulation. Never zero.
    pub workers: usize,
    /// Monte carlo trials when the caller doesn't say. Zero means an
    /// exhaustive run.
    pub trials: usize,
}

impl Default for EquityConfig {
    fn default() -> Self {
        Self {
            table_path: PathBuf::from(DEFAULT_TABLE_PATH),
            workers: num_cpus::get(),
            trials: DEFAULT_TRIALS,
        }
    }
}

impl EquityConfig {
    /// Read settings from the process environment. Unset variables keep
    /// their defaults.
    pub fn from_env() -> Result<Self, EquityError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings from any key value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, EquityError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(path) = lookup(TABLE_PATH_VAR) {
            config.table_path = PathBuf::from(path);
        }
        if let Some(workers) = lookup(WORKERS_VAR) {
            config.workers = parse_count(WORKERS_VAR, &workers)?;
            if config.workers == 0 {
                return Err(EquityError::InvalidConfig(format!(
                    "{} must be at least 1",
                    WORKERS_VAR
                )));
            }
        }
        if let Some(trials) = lookup(TRIALS_VAR) {
            config.trials = parse_count(TRIALS_VAR, &trials)?;
        }
        Ok(config)
    }

    /// Load the table named by `table_path`.
    pub fn open_table(&self) -> Result<HandRankTable, EquityError> {
        HandRankTable::open(&self.table_path)
    }

    /// Load the table and make it the process wide one.
    pub fn install_table(&self) -> Result<Arc<HandRankTable>, EquityError> {
        Ok(table::install_global(Arc::new(self.open_table()?)))
    }
}

fn parse_count(key: &str, value: &str) -> Result<usize, EquityError> {
    value
        .trim()
        .parse()
        .map_err(|_| EquityError::InvalidConfig(format!("{} is not a count: {:?}", key, value)))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = EquityConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(EquityConfig::default(), config);
        assert_eq!(PathBuf::from("HandRanks.dat"), config.table_path);
        assert!(config.workers >= 1);
        assert_eq!(100_000, config.trials);
    }

    #[test]
    fn test_overrides() {
        let config = EquityConfig::from_lookup(lookup(&[
            ("HAND_RANKS_PATH", "/tmp/ranks.dat"),
            ("EQUITY_WORKERS", "3"),
            ("EQUITY_TRIALS", " 0 "),
        ]))
        .unwrap();
        assert_eq!(PathBuf::from("/tmp/ranks.dat"), config.table_path);
        assert_eq!(3, config.workers);
        assert_eq!(0, config.trials);
    }

    #[test]
    fn test_bad_values() {
        assert!(matches!(
            EquityConfig::from_lookup(lookup(&[("EQUITY_WORKERS", "0")])),
            Err(EquityError::InvalidConfig(_))
        ));
        assert!(matches!(
            EquityConfig::from_lookup(lookup(&[("EQUITY_WORKERS", "many")])),
            Err(EquityError::InvalidConfig(_))
        ));
        assert!(matches!(
            EquityConfig::from_lookup(lookup(&[("EQUITY_TRIALS", "-5")])),
            Err(EquityError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_missing_table() {
        let config = EquityConfig {
            table_path: PathBuf::from("/definitely/not/here.dat"),
            ..EquityConfig::default()
        };
        assert!(matches!(config.open_table(), Err(EquityError::Io(_))));
        assert!(config.install_table().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json() {
        let config = EquityConfig {
            table_path: PathBuf::from("ranks.dat"),
            workers: 2,
            trials: 10,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(config, serde_json::from_str::<EquityConfig>(&json).unwrap());
    }
}

//! JSON configuration loading and the typed records behind each sheet

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Output filename used when neither the CLI flag nor the config names one.
pub const DEFAULT_OUTPUT: &str = "output.xlsx";

/// Top-level configuration: one list of records per sheet.
///
/// Every field carries a serde default so a sparse config file still loads;
/// missing record fields fall back to empty strings and zeros the same way
/// the sheets would render them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output_filename: Option<String>,
    pub buildings: Vec<Building>,
    pub units: Vec<Unit>,
    pub tenants: Vec<Tenant>,
    pub rents_paid: Vec<RentPayment>,
    pub expenses: Vec<Expense>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Building {
    pub name: String,
    pub units: u32,
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Unit {
    pub unit_no: String,
    pub building: String,
    #[serde(rename = "type")]
    pub unit_type: String,
    pub rent: f64,
    pub status: String,
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tenant {
    pub unit_no: String,
    pub name: String,
    pub id: String,
    pub mobile: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub rent: f64,
    pub email: String,
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RentPayment {
    pub unit_no: String,
    pub month: String,
    pub year: u16,
    pub amount: f64,
    pub date: Option<String>,
    pub method: String,
    pub status: String,
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Expense {
    pub building: String,
    pub date: Option<String>,
    #[serde(rename = "type")]
    pub expense_type: String,
    pub amount: f64,
    pub category: String,
    pub notes: String,
}

impl Config {
    /// Resolve the output path: CLI flag wins, then `output_filename` from
    /// the config, then [`DEFAULT_OUTPUT`].
    pub fn resolve_output_path(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.output_filename.as_ref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }
}

/// Load and deserialize the configuration file.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| Error::ConfigInvalid {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_valid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{
                "output_filename": "test.xlsx",
                "buildings": [{"name": "عمارة أ", "units": 5, "notes": "test"}],
                "units": [],
                "tenants": [],
                "rents_paid": [],
                "expenses": []
            }"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(
            config,
            Config {
                output_filename: Some("test.xlsx".to_string()),
                buildings: vec![Building {
                    name: "عمارة أ".to_string(),
                    units: 5,
                    notes: "test".to_string(),
                }],
                ..Config::default()
            }
        );
    }

    #[test]
    fn test_load_applies_field_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"units": [{"unit_no": "101"}]}"#).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.units.len(), 1);
        assert_eq!(config.units[0].unit_no, "101");
        assert_eq!(config.units[0].rent, 0.0);
        assert_eq!(config.units[0].status, "");
    }

    #[test]
    fn test_load_nonexistent_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nonexistent.json");

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
        assert!(err.to_string().contains("nonexistent.json"));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("invalid.json");
        fs::write(&path, "{ invalid json }").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
    }

    #[test]
    fn test_resolve_output_path_precedence() {
        let config = Config {
            output_filename: Some("from_config.xlsx".to_string()),
            ..Config::default()
        };

        assert_eq!(
            config.resolve_output_path(Some(PathBuf::from("from_flag.xlsx"))),
            PathBuf::from("from_flag.xlsx")
        );
        assert_eq!(
            config.resolve_output_path(None),
            PathBuf::from("from_config.xlsx")
        );
        assert_eq!(
            Config::default().resolve_output_path(None),
            PathBuf::from(DEFAULT_OUTPUT)
        );
    }
}

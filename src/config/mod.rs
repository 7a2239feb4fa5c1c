pub mod models;

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::config::models::{
    ConfigItem, FileLoggingConfigItem, PlanDateConfigItem, SlotScanOrderConfigItem,
    WorkWindowConfigItem,
};
use crate::core::types::{SlotScanOrder, TimeRange};
use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ConfigKey {
    WorkWindow,
    SlotScanOrder,
    PlanDate,
    FileLoggingEnabled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    pub work_window: WorkWindowConfigItem,
    pub slot_scan_order: SlotScanOrderConfigItem,
    #[serde(default)]
    pub plan_date: PlanDateConfigItem,
    #[serde(default)]
    pub file_logging_enabled: FileLoggingConfigItem,
}

/// `(key, description, value)` as shown in the config table.
pub type ConfigRow = (String, String, String);

#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    data: ConfigFile,
    last_change: Option<ConfigRow>,
}

impl Config {
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Error::Parse(format!(
                "Configuration file '{}' not found.",
                path.display()
            )));
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| Error::Parse(format!("Failed to read {}: {}", path.display(), e)))?;
        let data: ConfigFile = serde_json::from_str(&text)
            .map_err(|e| Error::Parse(format!("Invalid JSON in '{}': {}", path.display(), e)))?;
        Ok(Self {
            path,
            data,
            last_change: None,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn work_window(&self) -> &TimeRange {
        self.data.work_window.get_value()
    }
    pub fn slot_scan_order(&self) -> SlotScanOrder {
        *self.data.slot_scan_order.get_value()
    }
    pub fn plan_date(&self) -> Option<NaiveDate> {
        *self.data.plan_date.get_value()
    }
    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled.get_value().0
    }

    fn row_for(&self, key: ConfigKey) -> ConfigRow {
        let (description, value) = match key {
            ConfigKey::WorkWindow => (
                self.data.work_window.description(),
                self.work_window().to_string(),
            ),
            ConfigKey::SlotScanOrder => (
                self.data.slot_scan_order.description(),
                self.slot_scan_order().to_string(),
            ),
            ConfigKey::PlanDate => (
                self.data.plan_date.description(),
                self.plan_date()
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
            ConfigKey::FileLoggingEnabled => (
                self.data.file_logging_enabled.description(),
                self.data.file_logging_enabled.get_value().to_string(),
            ),
        };
        (key.to_string(), description.to_string(), value)
    }

    pub fn rows(&self) -> Vec<ConfigRow> {
        ConfigKey::iter().map(|key| self.row_for(key)).collect()
    }

    /// Validate, persist, then apply one setting. Memory only changes once the
    /// file has been written.
    pub fn set_key(&mut self, key: ConfigKey, new_value: &str) -> Result<()> {
        let (_, _, old) = self.row_for(key);
        let mut next = self.data.clone();
        match key {
            ConfigKey::WorkWindow => next.work_window.set_value(new_value)?,
            ConfigKey::SlotScanOrder => next.slot_scan_order.set_value(new_value)?,
            ConfigKey::PlanDate => next.plan_date.set_value(new_value)?,
            ConfigKey::FileLoggingEnabled => next.file_logging_enabled.set_value(new_value)?,
        }
        Self::write_file(&self.path, &next)?;
        self.data = next;

        let (_, _, new) = self.row_for(key);
        self.last_change = Some((key.to_string(), old, new));
        Ok(())
    }

    pub fn set(&mut self, key_str: &str, new_value: &str) -> Result<()> {
        let key = ConfigKey::from_str(key_str.trim()).map_err(|_| {
            Error::Parse(format!(
                "Unknown configuration key '{}'. Valid keys: {}",
                key_str,
                valid_csv::<ConfigKey>()
            ))
        })?;
        self.set_key(key, new_value)
    }

    /// `(key, old, new)` of the last successful change, cleared on read.
    pub fn take_last_change(&mut self) -> Option<ConfigRow> {
        self.last_change.take()
    }

    fn write_file(path: &Path, data: &ConfigFile) -> Result<()> {
        let json = serde_json::to_string_pretty(data)?;
        fs::write(path, json)
            .map_err(|e| Error::config(format!("Failed to write {}: {}", path.display(), e)))
    }
}

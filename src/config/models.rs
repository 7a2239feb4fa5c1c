use crate::core::types::{Bool, Date, SlotScanOrder, TimeRange};
use crate::errors::Error;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One `{ "value": ..., "description": ... }` entry of the config file.
pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn set_value(&mut self, new_value: &str) -> Result<(), Error>;
    fn description(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkWindowConfigItem {
    pub value: TimeRange,
    pub description: String,
}
impl ConfigItem<TimeRange> for WorkWindowConfigItem {
    fn get_value(&self) -> &TimeRange {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        self.value = TimeRange::try_from_str(new_value)?;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotScanOrderConfigItem {
    pub value: SlotScanOrder,
    pub description: String,
}
impl ConfigItem<SlotScanOrder> for SlotScanOrderConfigItem {
    fn get_value(&self) -> &SlotScanOrder {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        self.value = SlotScanOrder::try_from(new_value)?;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanDateConfigItem {
    pub value: Option<NaiveDate>,
    pub description: String,
}

impl Default for PlanDateConfigItem {
    fn default() -> Self {
        Self {
            value: None,
            description: "Day to plan; empty means today.".into(),
        }
    }
}

impl ConfigItem<Option<NaiveDate>> for PlanDateConfigItem {
    fn get_value(&self) -> &Option<NaiveDate> {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        let trimmed = new_value.trim();
        if trimmed.is_empty() || trimmed == "-" {
            self.value = None;
            return Ok(());
        }
        self.value = Some(Date::try_from_str(trimmed)?.0);
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLoggingConfigItem {
    pub value: Bool,
    pub description: String,
}

impl Default for FileLoggingConfigItem {
    fn default() -> Self {
        Self {
            value: Bool(true),
            description: "Enable writing log messages to file.".into(),
        }
    }
}

impl ConfigItem<Bool> for FileLoggingConfigItem {
    fn get_value(&self) -> &Bool {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        self.value = Bool::try_from_str(new_value)?;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

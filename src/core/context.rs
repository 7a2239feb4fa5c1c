use crate::config::Config;
use crate::core::models::{BusySlot, Task};
use crate::core::repository::Repository;

use crate::errors::Result;
use crate::logging::Logger;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

/// Session state for one run of the shell. The scheduler itself is stateless;
/// it only ever reads from here.
#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub busy: Repository<BusySlot>,
    pub tasks: Repository<Task>,
    pub logger: Logger,
    pub startup_displayed: bool,
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppContext {
    pub fn new_with_paths(config_path: PathBuf, logs_dir: PathBuf) -> Result<Self> {
        let config = Config::load_from(&config_path)?;

        let logger = Logger::new();
        logger.set_log_dir(&logs_dir);
        logger.set_file_logging_enabled(config.file_logging_enabled());

        Ok(Self {
            config,
            busy: Repository::new(),
            tasks: Repository::new(),
            logger,
            startup_displayed: false,
            config_path,
            logs_dir,
        })
    }

    /// The day being planned: the configured date, else today.
    pub fn plan_date(&self) -> NaiveDate {
        self.config
            .plan_date()
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

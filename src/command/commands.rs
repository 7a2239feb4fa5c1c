use crate::command::command_parser::CommandParser;
use crate::command::policies::flag_policy::{FlagDecision, FlagPolicy};
use crate::config::ConfigKey;
use crate::core::context::AppContext;
use crate::core::models::{BusySlot, Task};
use crate::core::types::{Date, GlobalCommand, Hours, TimeRange};
use crate::errors::{Error, Result, require_parse};
use crate::extensions::enums::valid_csv;
use crate::logging::LogTarget;
use crate::scheduler::ScheduleManager;
use crate::ui::display_manager::DisplayManager;
use strum::IntoEnumIterator;

pub struct CommandCore<'a> {
    pub args: &'a [String],
    pub flag_policy: FlagPolicy,
}
impl<'a> CommandCore<'a> {
    pub fn new(args: &'a [String], flag_policy: FlagPolicy) -> Self {
        Self { args, flag_policy }
    }
}

mod sealed {
    use super::CommandCore;

    pub trait Sealed<'a> {
        fn core(&self) -> &CommandCore<'a>;
    }
}

pub trait Command<'a>: sealed::Sealed<'a> {
    fn usage(&self) -> String;
    fn perform(&self, ctx: &mut AppContext) -> Result<()>;

    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        let core = self.core();
        match core.flag_policy.evaluate(core.args) {
            FlagDecision::ShortCircuitUsage => {
                ctx.logger.info(self.usage(), LogTarget::ConsoleOnly);
                Ok(())
            }
            FlagDecision::Continue => self.perform(ctx),
            FlagDecision::Error(e) => Err(e),
        }
    }
}

pub type CommandDyn<'a> = Box<dyn Command<'a> + 'a>;

const DELETE_KEYWORD: &str = "del";

fn parse_id(raw: Option<&String>, usage: &str) -> Result<i32> {
    let raw = require_parse(raw, format!("Expected an id.\n{usage}"))?;
    raw.parse::<i32>()
        .map_err(|_| Error::Parse(format!("Invalid id: '{raw}'. Expected a whole number.")))
}

fn is_delete(args: &[String]) -> bool {
    args.first()
        .is_some_and(|a| a.eq_ignore_ascii_case(DELETE_KEYWORD))
}

macro_rules! impl_sealed {
    ($($ty:ident),* $(,)?) => {
        $(
            impl<'a> sealed::Sealed<'a> for $ty<'a> {
                fn core(&self) -> &CommandCore<'a> {
                    &self.core
                }
            }
        )*
    };
}

impl_sealed!(
    BusyCommand,
    TaskCommand,
    FreeCommand,
    ScheduleCommand,
    ClearCommand,
    ConfigCommand,
    HelpCommand,
);

// ==========
// busy
// ==========

pub struct BusyCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> BusyCommand<'a> {
    pub fn new(args: &'a [String]) -> Self {
        Self {
            core: CommandCore::new(args, FlagPolicy::standard(&[0, 1])),
        }
    }

    fn add(&self, ctx: &mut AppContext) -> Result<()> {
        // `9AM - 10AM` arrives as three tokens
        let raw = self.core.args.join("");
        let range = TimeRange::try_from_str(&raw)?;
        let stored = ctx.busy.insert(BusySlot::new(range));
        ctx.logger.info(
            format!("Added busy slot with id {}: {}", stored.id, stored),
            LogTarget::ConsoleAndFile,
        );
        Ok(())
    }

    fn delete(&self, ctx: &mut AppContext) -> Result<()> {
        let id = parse_id(self.core.args.get(1), &self.usage())?;
        ctx.busy.delete(id)?;
        ctx.logger.info(
            format!("Deleted busy slot with id {}.", id),
            LogTarget::ConsoleAndFile,
        );
        Ok(())
    }
}

impl<'a> Command<'a> for BusyCommand<'a> {
    fn usage(&self) -> String {
        [
            "Usage: busy                # List busy slots",
            "Usage: busy <start>-<end>  # Add a busy slot, e.g. busy 9AM-10:30AM",
            "Usage: busy del <id>       # Remove a busy slot",
            "Times without AM/PM read as AM at the start and PM at the end (1-2 is 1:00AM-2:00PM).",
            "Use a leading zero or an hour above 12 for 24-hour times (13:00-14:00).",
        ]
        .join("\n")
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        if self.core.args.is_empty() {
            DisplayManager::new().display_busy_slots(&ctx.busy);
            return Ok(());
        }
        if is_delete(self.core.args) {
            return self.delete(ctx);
        }
        self.add(ctx)
    }
}

// ==========
// task
// ==========

pub struct TaskCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> TaskCommand<'a> {
    pub fn new(args: &'a [String]) -> Self {
        Self {
            core: CommandCore::new(args, FlagPolicy::standard(&[0, 1])),
        }
    }

    fn add(&self, ctx: &mut AppContext) -> Result<()> {
        let args = self.core.args;
        if args.len() != 3 {
            return Err(Error::Parse(format!(
                "Expected <name> <hours> <deadline>, got {} argument(s). Quote names with spaces.\n{}",
                args.len(),
                self.usage()
            )));
        }
        let Hours(hours) = Hours::try_from_str(&args[1])?;
        let deadline = Date::try_from_str(&args[2])?;
        let task = Task::try_new(args[0].as_str(), hours, deadline)?;

        let stored = ctx.tasks.insert(task);
        ctx.logger.info(
            format!("Added task with id {}: {}", stored.id, stored),
            LogTarget::ConsoleAndFile,
        );
        Ok(())
    }

    fn delete(&self, ctx: &mut AppContext) -> Result<()> {
        let id = parse_id(self.core.args.get(1), &self.usage())?;
        ctx.tasks.delete(id)?;
        ctx.logger.info(
            format!("Deleted task with id {}.", id),
            LogTarget::ConsoleAndFile,
        );
        Ok(())
    }
}

impl<'a> Command<'a> for TaskCommand<'a> {
    fn usage(&self) -> String {
        [
            "Usage: task                            # List tasks",
            "Usage: task <name> <hours> <deadline>  # Add a task, e.g. task \"Write report\" 1.5 2025-03-01",
            "Usage: task del <id>                   # Remove a task",
        ]
        .join("\n")
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        if self.core.args.is_empty() {
            DisplayManager::new().display_tasks(&ctx.tasks);
            return Ok(());
        }
        if is_delete(self.core.args) {
            return self.delete(ctx);
        }
        self.add(ctx)
    }
}

// ==========
// free
// ==========

pub struct FreeCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> FreeCommand<'a> {
    pub fn new(args: &'a [String]) -> Self {
        Self {
            core: CommandCore::new(args, FlagPolicy::standard(&[0])),
        }
    }
}

impl<'a> Command<'a> for FreeCommand<'a> {
    fn usage(&self) -> String {
        "Usage: free      # Show free time in the working window".into()
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let manager = ScheduleManager::new(ctx);
        let free = manager.free_slots();
        DisplayManager::new().display_free_slots(manager.date(), &free);
        Ok(())
    }
}

// ==========
// schedule
// ==========

pub struct ScheduleCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> ScheduleCommand<'a> {
    pub fn new(args: &'a [String]) -> Self {
        Self {
            core: CommandCore::new(args, FlagPolicy::standard(&[0])),
        }
    }
}

impl<'a> Command<'a> for ScheduleCommand<'a> {
    fn usage(&self) -> String {
        "Usage: schedule  # Place tasks into free time, earliest deadline first".into()
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let outcome = ScheduleManager::new(ctx).compute_schedule()?;
        DisplayManager::new().display_schedule(&outcome);
        Ok(())
    }
}

// ==========
// clear
// ==========

pub struct ClearCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> ClearCommand<'a> {
    pub fn new(args: &'a [String]) -> Self {
        Self {
            core: CommandCore::new(args, FlagPolicy::standard(&[0])),
        }
    }
}

impl<'a> Command<'a> for ClearCommand<'a> {
    fn usage(&self) -> String {
        "Usage: clear     # Remove all busy slots and tasks".into()
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let (busy, tasks) = (ctx.busy.len(), ctx.tasks.len());
        ctx.busy.clear();
        ctx.tasks.clear();
        ctx.logger.info(
            format!("Cleared {busy} busy slot(s) and {tasks} task(s)."),
            LogTarget::ConsoleAndFile,
        );
        Ok(())
    }
}

// ==========
// config
// ==========

pub struct ConfigCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> ConfigCommand<'a> {
    pub fn new(args: &'a [String]) -> Self {
        Self {
            core: CommandCore::new(args, FlagPolicy::standard(&[0])),
        }
    }

    fn update(&self, ctx: &mut AppContext) -> Result<()> {
        let key = &self.core.args[0];
        let value = require_parse(
            (self.core.args.len() > 1).then(|| self.core.args[1..].join(" ")),
            format!("Expected a value for '{key}'.\n{}", self.usage()),
        )?;

        ctx.config.set(key, &value)?;
        ctx.logger
            .set_file_logging_enabled(ctx.config.file_logging_enabled());

        if let Some((key, old, new)) = ctx.config.take_last_change() {
            ctx.logger.info(
                format!("Config {key} changed: {old} -> {new}"),
                LogTarget::ConsoleAndFile,
            );
        }
        Ok(())
    }
}

impl<'a> Command<'a> for ConfigCommand<'a> {
    fn usage(&self) -> String {
        format!(
            "Usage: config                # Show configuration\nUsage: config <KEY> <value>  # Change a setting ({})",
            valid_csv::<ConfigKey>()
        )
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        if self.core.args.is_empty() {
            DisplayManager::new().display_config(&ctx.config);
            return Ok(());
        }
        self.update(ctx)
    }
}

// ==========
// help
// ==========

pub struct HelpCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> HelpCommand<'a> {
    pub fn new(args: &'a [String]) -> Self {
        Self {
            core: CommandCore::new(args, FlagPolicy::standard(&[0])),
        }
    }
}

impl<'a> Command<'a> for HelpCommand<'a> {
    fn usage(&self) -> String {
        "Usage: help      # List commands".into()
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let parser = CommandParser::new();
        let mut sections = Vec::new();
        for command in GlobalCommand::iter() {
            let cmd = parser.parse(command.as_ref(), &[])?;
            sections.push(cmd.usage());
        }
        sections.push("Usage: exit      # Leave the shell".into());
        ctx.logger
            .info(sections.join("\n"), LogTarget::ConsoleOnly);
        Ok(())
    }
}

use crate::command::commands::{
    BusyCommand, ClearCommand, CommandDyn, ConfigCommand, FreeCommand, HelpCommand,
    ScheduleCommand, TaskCommand,
};
use crate::core::types::GlobalCommand;
use crate::errors::Result;

#[derive(Debug, Default, Clone)]
pub struct CommandParser;

impl CommandParser {
    pub fn new() -> Self {
        Self
    }

    /// Resolve the first token of a line to a command bound to `args`.
    pub fn parse<'a>(&self, command: &str, args: &'a [String]) -> Result<CommandDyn<'a>> {
        let cmd: CommandDyn<'a> = match GlobalCommand::try_from(command)? {
            GlobalCommand::Busy => Box::new(BusyCommand::new(args)),
            GlobalCommand::Task => Box::new(TaskCommand::new(args)),
            GlobalCommand::Free => Box::new(FreeCommand::new(args)),
            GlobalCommand::Schedule => Box::new(ScheduleCommand::new(args)),
            GlobalCommand::Clear => Box::new(ClearCommand::new(args)),
            GlobalCommand::Config => Box::new(ConfigCommand::new(args)),
            GlobalCommand::Help => Box::new(HelpCommand::new(args)),
        };
        Ok(cmd)
    }
}

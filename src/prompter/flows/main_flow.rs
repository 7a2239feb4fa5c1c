use std::io::{self, Write};

use crate::command::command_parser::CommandParser;
use crate::command::commands::CommandDyn;
use crate::core::context::AppContext;
use crate::errors::Result;
use crate::extensions::string::SplitQuoted;
use crate::logging::{LogTarget, Logger};
use crate::prompter::models::{Flow, FlowCtrl};
use crate::ui::ansi::STYLE_RESET;
use crate::ui::chrome::UiChrome;

pub struct MainFlow<'a> {
    ctx: &'a mut AppContext,
    command_parser: CommandParser,
    logger: Logger,
}

impl<'a> MainFlow<'a> {
    pub fn new(ctx: &'a mut AppContext) -> Self {
        let logger = ctx.logger.clone();
        Self {
            ctx,
            command_parser: CommandParser::new(),
            logger,
        }
    }
}

impl<'a> Flow for MainFlow<'a> {
    fn render(&mut self) -> Result<()> {
        self.print_startup();
        self.print_prompt();
        Ok(())
    }

    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl> {
        self.prepare_output_space();
        let line = input.trim();
        if let Some(ctrl) = self.handle_non_command(line) {
            return Ok(ctrl);
        }

        let mut tokens = line.split_quoted();
        if tokens.is_empty() {
            return Ok(FlowCtrl::Continue);
        }
        let raw_command = tokens.remove(0);

        let cmd = match self.resolve_command(&raw_command, &tokens) {
            Some(cmd) => cmd,
            None => return Ok(FlowCtrl::Continue),
        };

        self.log_command_run(line);

        self.execute_command(&raw_command, cmd);

        Ok(FlowCtrl::Continue)
    }
}

impl<'a> MainFlow<'a> {
    fn print_startup(&mut self) {
        if self.ctx.startup_displayed {
            return;
        }
        UiChrome::new().print_banner();
        println!();
        println!("Type 'help' for commands, '<command> -h' for usage, 'exit' to quit.");
        println!();
        println!("Config path: {}", self.ctx.config_path.display());
        println!("Logs path: {}", self.ctx.logs_dir.display());
        println!(
            "Planning {} within {}",
            self.ctx.plan_date().format("%Y-%m-%d"),
            self.ctx.config.work_window()
        );
        println!();
        self.ctx.startup_displayed = true;
    }

    fn print_prompt(&self) {
        UiChrome::new().print_prompt("> ");
    }

    fn prepare_output_space(&self) {
        UiChrome::new().print_prompt_bottom_padding();
        println!();
        print!("{STYLE_RESET}");
        let _ = io::stdout().flush();
    }

    fn handle_non_command(&self, line: &str) -> Option<FlowCtrl> {
        if line.is_empty() {
            return Some(FlowCtrl::Continue);
        }
        if line.eq_ignore_ascii_case("exit") {
            return Some(FlowCtrl::Finish);
        }
        None
    }

    fn resolve_command<'b>(&self, raw_command: &str, args: &'b [String]) -> Option<CommandDyn<'b>> {
        match self.command_parser.parse(raw_command, args) {
            Ok(cmd) => Some(cmd),
            Err(err) => {
                self.logger.error(
                    format!("Command resolution failed for '{raw_command}'. {err}"),
                    LogTarget::ConsoleAndFile,
                );
                None
            }
        }
    }

    fn log_command_run(&self, line: &str) {
        self.logger
            .info(format!("Command run: {}", line), LogTarget::FileOnly);
    }

    fn execute_command(&mut self, raw_command: &str, cmd: CommandDyn<'_>) {
        if let Err(err) = cmd.execute(self.ctx) {
            self.handle_command_error(raw_command, err.to_string());
        }
    }

    /// Usage text goes to the console only; the log gets the first line.
    fn handle_command_error(&self, raw_command: &str, err_text: String) {
        if let Some(usage_error) = self.format_usage_error(raw_command, &err_text) {
            self.logger
                .error(usage_error.console_msg, LogTarget::ConsoleOnly);
            self.logger.error(usage_error.file_msg, LogTarget::FileOnly);
            return;
        }

        self.logger.error(
            format!("Command execution failed for '{raw_command}'. {err_text}"),
            LogTarget::ConsoleAndFile,
        );
    }

    fn format_usage_error(&self, raw_command: &str, err_text: &str) -> Option<UsageErrorMessage> {
        let (head, tail) = err_text.split_once("\nUsage:")?;
        let console_msg =
            format!("Command execution failed for '{raw_command}'. {head}\nUsage:{tail}");
        let file_msg = format!(
            "Command execution failed for '{raw_command}'. {}",
            head.trim()
        );
        Some(UsageErrorMessage {
            console_msg,
            file_msg,
        })
    }
}

struct UsageErrorMessage {
    console_msg: String,
    file_msg: String,
}

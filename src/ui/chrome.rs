use crate::ui::ansi::{
    CLEAR_LINE_REST, CURSOR_UP_ONE, FG_LIGHT_GRAY, PROMPT_STYLE, STYLE_BOLD, STYLE_ITALIC,
    STYLE_RESET,
};
use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

const BANNER_INNER_WIDTH: usize = 50;

/// Screen-level helpers (banner, prompt line).
#[derive(Debug, Default, Clone)]
pub struct UiChrome {
    util: WidthUtil,
}

impl UiChrome {
    pub fn new() -> Self {
        Self {
            util: WidthUtil::default(),
        }
    }

    /// Boxed title, centered in the terminal.
    pub fn banner_lines(&self) -> Vec<String> {
        let version = env!("CARGO_PKG_VERSION");
        let title = format!(
            "{STYLE_BOLD}S M A R T S C H E D{STYLE_RESET} {FG_LIGHT_GRAY}(v{version}){STYLE_RESET}"
        );
        let subtitle = format!("{STYLE_ITALIC}Free time in, schedule out{STYLE_RESET}");
        let blank = " ".repeat(BANNER_INNER_WIDTH);
        let indent = " ".repeat(self.util.center_pad(BANNER_INNER_WIDTH + 2));

        [
            format!("╭{}╮", "─".repeat(BANNER_INNER_WIDTH)),
            format!("│{blank}│"),
            format!("│{}│", self.center_in_box(&title, BANNER_INNER_WIDTH)),
            format!("│{}│", self.center_in_box(&subtitle, BANNER_INNER_WIDTH)),
            format!("│{blank}│"),
            format!("╰{}╯", "─".repeat(BANNER_INNER_WIDTH)),
        ]
        .into_iter()
        .map(|line| format!("{indent}{line}"))
        .collect()
    }

    pub fn print_banner(&self) {
        for line in self.banner_lines() {
            println!("{line}");
        }
    }

    pub fn print_prompt(&self, prompt: &str) {
        self.print_prompt_padding_line();
        print!("{PROMPT_STYLE}{prompt}{CLEAR_LINE_REST}{STYLE_RESET}\n");
        print!("{PROMPT_STYLE}{CLEAR_LINE_REST}{STYLE_RESET}");
        let column = self.util.visible_width(prompt) + 1;
        print!("{CURSOR_UP_ONE}\x1B[{column}G{PROMPT_STYLE}");
        let _ = io::stdout().flush();
    }

    pub fn print_prompt_bottom_padding(&self) {
        self.print_prompt_padding_line();
        let _ = io::stdout().flush();
    }

    fn print_prompt_padding_line(&self) {
        print!("{PROMPT_STYLE}{CLEAR_LINE_REST}{STYLE_RESET}\n");
    }

    pub(crate) fn center_in_box(&self, content: &str, width: usize) -> String {
        let content_width = self.util.visible_width(content);
        if content_width >= width {
            return content.to_string();
        }
        let left = (width - content_width) / 2;
        let right = width - content_width - left;
        format!("{}{}{}", " ".repeat(left), content, " ".repeat(right))
    }
}

use terminal_size::{Width, terminal_size};

use crate::ui::ascii::ESC_BYTE;

const DEFAULT_TERMINAL_WIDTH: usize = 80;

#[derive(Debug, Default, Clone)]
pub struct WidthUtil;

impl WidthUtil {
    /// Drops `ESC [ ... <letter>` sequences. Works on chars so multi-byte
    /// task names survive intact.
    fn strip_ansi(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        let mut chars = s.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch == ESC_BYTE as char && chars.peek() == Some(&'[') {
                chars.next();
                for c in chars.by_ref() {
                    if c.is_ascii_alphabetic() {
                        break;
                    }
                }
                continue;
            }
            out.push(ch);
        }
        out
    }

    pub fn visible_width(&self, s: &str) -> usize {
        Self::strip_ansi(s).chars().count()
    }

    #[cfg(test)]
    pub(crate) fn strip_ansi_for_test(s: &str) -> String {
        Self::strip_ansi(s)
    }

    pub fn pad_visible(&self, s: &str, width: usize) -> String {
        let w = self.visible_width(s);
        let mut out = String::with_capacity(s.len() + width.saturating_sub(w));
        out.push_str(s);
        out.extend(std::iter::repeat_n(' ', width.saturating_sub(w)));
        out
    }

    /// Best-effort terminal width (defaults to 80 when not a tty).
    pub fn terminal_width(&self) -> usize {
        terminal_size()
            .map(|(Width(w), _)| w as usize)
            .unwrap_or(DEFAULT_TERMINAL_WIDTH)
    }

    /// Left padding to center a box of `content_width` inside the terminal.
    pub fn center_pad(&self, content_width: usize) -> usize {
        self.terminal_width().saturating_sub(content_width) / 2
    }
}

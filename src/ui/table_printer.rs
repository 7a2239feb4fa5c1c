use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

const COLUMN_GAP: &str = " | ";

/// Column widths for one table plus the width of its horizontal rules.
struct Layout {
    columns: Vec<usize>,
    rule: usize,
}

/// Plain-text tables: upper-cased title between rules, `|`-separated
/// columns padded by visible (ANSI-stripped) width.
#[derive(Debug, Default, Clone)]
pub struct TablePrinter {
    util: WidthUtil,
}

impl TablePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Natural width of the table, used to line several tables up.
    pub fn compute_table_width<T: AsRef<str>>(&self, headers: &[&str], rows: &[Vec<T>]) -> usize {
        self.layout(headers, rows, 0).rule
    }

    pub fn print_table<T: AsRef<str>>(
        &self,
        title: &str,
        headers: &[&str],
        rows: &[Vec<T>],
        empty_message: Option<&str>,
        min_width: Option<usize>,
    ) {
        let _ = self.render_table(
            title,
            headers,
            rows,
            empty_message,
            min_width,
            &mut io::stdout(),
        );
    }

    /// `empty_message` replaces the header and rows when there are no rows;
    /// without one an empty table still prints its header.
    pub fn render_table<T: AsRef<str>, W: Write + ?Sized>(
        &self,
        title: &str,
        headers: &[&str],
        rows: &[Vec<T>],
        empty_message: Option<&str>,
        min_width: Option<usize>,
        out: &mut W,
    ) -> io::Result<()> {
        let layout = self.layout(headers, rows, min_width.unwrap_or(0));

        if let Some(msg) = empty_message.filter(|_| rows.is_empty()) {
            let rule = layout
                .rule
                .max(self.util.visible_width(title))
                .max(self.util.visible_width(msg));
            self.title_block(out, title, rule)?;
            writeln!(out, "{msg}")?;
            return self.rule(out, rule);
        }

        self.title_block(out, title, layout.rule)?;
        writeln!(out, "{}", self.line(headers, &layout.columns))?;
        self.rule(out, layout.rule)?;
        for row in rows {
            writeln!(out, "{}", self.line(row.as_slice(), &layout.columns))?;
        }
        self.rule(out, layout.rule)
    }

    fn layout<T: AsRef<str>>(
        &self,
        headers: &[&str],
        rows: &[Vec<T>],
        min_width: usize,
    ) -> Layout {
        let columns: Vec<usize> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                rows.iter()
                    .filter_map(|r| r.get(i))
                    .map(|cell| self.util.visible_width(cell.as_ref()))
                    .fold(self.util.visible_width(h), usize::max)
            })
            .collect();
        let natural = columns.iter().sum::<usize>()
            + columns.len().saturating_sub(1) * COLUMN_GAP.len();
        Layout {
            rule: natural.max(min_width),
            columns,
        }
    }

    fn line<T: AsRef<str>>(&self, cells: &[T], columns: &[usize]) -> String {
        cells
            .iter()
            .zip(columns)
            .map(|(cell, &w)| self.util.pad_visible(cell.as_ref(), w))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP)
    }

    fn title_block<W: Write + ?Sized>(
        &self,
        out: &mut W,
        title: &str,
        width: usize,
    ) -> io::Result<()> {
        self.rule(out, width)?;
        writeln!(out, "{}", title.to_uppercase())?;
        self.rule(out, width)
    }

    fn rule<W: Write + ?Sized>(&self, out: &mut W, width: usize) -> io::Result<()> {
        writeln!(out, "{}", "-".repeat(width.max(1)))
    }
}

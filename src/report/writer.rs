//! Plain-text section writer for job sheets.

/// Separator between row cells.
const CELL_SEPARATOR: &str = " | ";

/// Writer for `[SECTION]`-style text reports.
pub struct SheetWriter {
    /// Output buffer.
    buffer: String,
    /// Whether the current section has any content line yet.
    section_open: bool,
}

impl Default for SheetWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetWriter {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            section_open: false,
        }
    }

    /// Get the generated text.
    pub fn output(&self) -> &str {
        &self.buffer
    }

    /// Take the generated text.
    pub fn take_output(self) -> String {
        self.buffer
    }

    /// Write a line as is.
    pub fn write_raw(&mut self, content: &str) {
        self.buffer.push_str(content);
        self.buffer.push('\n');
    }

    /// Start a section, separated from the previous one by a blank line.
    pub fn section(&mut self, name: &str) {
        if self.section_open {
            self.write_raw("");
        }
        self.write_raw(&format!("[{}]", name));
        self.section_open = true;
    }

    /// Write a comment line.
    pub fn write_comment(&mut self, comment: &str) {
        self.write_raw(&format!("; {}", comment));
    }

    /// Write `label: value`, skipping blank values.
    pub fn field(&mut self, label: &str, value: impl std::fmt::Display) {
        let value = value.to_string();
        if value.trim().is_empty() {
            return;
        }
        self.write_raw(&format!("{}: {}", label, value.trim()));
    }

    /// Write a numbered row of cells; blank cells are dropped.
    pub fn row(&mut self, number: usize, cells: &[String]) {
        let cells: Vec<&str> = cells
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .collect();
        self.write_raw(&format!("{}. {}", number, cells.join(CELL_SEPARATOR)));
    }

    /// Write an indented detail line under a row.
    pub fn detail(&mut self, content: &str) {
        self.write_raw(&format!("   {}", content));
    }
}

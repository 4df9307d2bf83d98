//! Append-only, indentation-aware text sink.

use super::Indent;
use crate::{Error, Result};

/// Line-oriented buffer that one output artifact is rendered into.
///
/// Text accumulates on a pending line until [`TextBuffer::new_line`] is
/// requested. Indentation is injected lazily, right before the first text of
/// a line is written, so changing the indentation level mid-line has no
/// effect on that line and blank lines never carry trailing whitespace.
///
/// # Example
///
/// ```
/// use cornerstone_codegen::builder::{Indent, TextBuffer};
///
/// let mut buffer = TextBuffer::new(Indent::FOUR_SPACES);
/// buffer.write_line("struct Foo").write_line("{").indent();
/// buffer.write("int32 A, ").write("int32 B, ");
/// buffer.trim_chars(2).unwrap().new_line();
/// buffer.dedent().unwrap().write_line("};");
///
/// assert_eq!(buffer.build(), "struct Foo\n{\n    int32 A, int32 B\n};\n");
/// ```
#[derive(Debug, Clone)]
pub struct TextBuffer {
    indent: Indent,
    indent_level: usize,
    lines: Vec<String>,
    pending: String,
    line_started: bool,
}

impl TextBuffer {
    /// Create an empty buffer using the given indentation style.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent,
            indent_level: 0,
            lines: Vec::new(),
            pending: String::new(),
            line_started: false,
        }
    }

    /// Append raw text to the pending line.
    pub fn write(&mut self, s: &str) -> &mut Self {
        if s.is_empty() {
            return self;
        }
        if !self.line_started {
            for _ in 0..self.indent_level {
                self.pending.push_str(self.indent.as_str());
            }
            self.line_started = true;
        }
        self.pending.push_str(s);
        self
    }

    /// Append text and terminate the line.
    pub fn write_line(&mut self, s: &str) -> &mut Self {
        self.write(s).new_line()
    }

    /// Terminate the pending line (an empty one becomes a blank line).
    pub fn new_line(&mut self) -> &mut Self {
        self.lines.push(std::mem::take(&mut self.pending));
        self.line_started = false;
        self
    }

    /// Increase indentation level.
    pub fn indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(&mut self) -> Result<&mut Self> {
        self.indent_level = self
            .indent_level
            .checked_sub(1)
            .ok_or(Error::IndentUnderflow)?;
        Ok(self)
    }

    /// Drop the most recently completed line, returning it.
    ///
    /// The pending line is left untouched.
    pub fn remove_last_line(&mut self) -> Option<String> {
        self.lines.pop()
    }

    /// Drop the last `n` characters of the pending line.
    pub fn trim_chars(&mut self, n: usize) -> Result<&mut Self> {
        let available = self.pending.chars().count();
        if n > available {
            return Err(Error::TrimOverflow {
                requested: n,
                available,
            });
        }
        for _ in 0..n {
            self.pending.pop();
        }
        Ok(self)
    }

    /// The most recently completed line.
    pub fn last_line(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    /// Whether the most recently completed line is blank.
    pub fn last_line_is_blank(&self) -> bool {
        self.last_line().is_some_and(str::is_empty)
    }

    /// Whether text has been written since the last line break.
    pub fn has_pending(&self) -> bool {
        self.line_started
    }

    /// Whether nothing at all has been written.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.pending.is_empty()
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Render the buffer verbatim: every completed line followed by a line
    /// break, then whatever is still pending.
    pub fn build(&self) -> String {
        let capacity = self.lines.iter().map(|l| l.len() + 1).sum::<usize>() + self.pending.len();
        let mut out = String::with_capacity(capacity);
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str(&self.pending);
        out
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new(Indent::default())
    }
}

//! Textual drawing output.
//!
//! Every [`Shape`](crate::shape::Shape) draws itself into a [`Drawing`], an
//! ordered list of text lines. Drawings are collected by the
//! [`Scene`](crate::scene::Scene) and written out in one pass.
//!
//! # Example
//!
//! ```
//! # use figures_core::draw::Drawing;
//! let mut drawing = Drawing::new();
//! drawing.push_line("Drawing polygon with points:");
//!
//! let mut tail = Drawing::new();
//! tail.push_line("(1, 1) with color black");
//! drawing.append(tail);
//!
//! assert_eq!(drawing.len(), 2);
//! assert_eq!(
//!     drawing.to_string(),
//!     "Drawing polygon with points:\n(1, 1) with color black\n"
//! );
//! ```

use std::{fmt, io};

/// Text lines produced by drawing one or more shapes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Drawing {
    lines: Vec<String>,
}

impl Drawing {
    /// Creates a new empty drawing
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a drawing holding a single line.
    pub fn single(line: impl Into<String>) -> Self {
        let mut drawing = Self::new();
        drawing.push_line(line);
        drawing
    }

    /// Appends a line to the drawing.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Appends all lines of `other` after the lines of this drawing.
    pub fn append(&mut self, other: Drawing) {
        self.lines.extend(other.lines);
    }

    /// Returns the lines in drawing order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Writes every line, each followed by a newline, to `writer`.
    ///
    /// # Errors
    ///
    /// Returns any I/O error reported by the writer.
    pub fn write_to(&self, writer: &mut impl io::Write) -> io::Result<()> {
        for line in &self.lines {
            writeln!(writer, "{line}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Drawing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

use std::io::BufRead;

use tracing::{debug, trace};

use crate::error::ParseError;
use crate::grammar::{Line, classify};
use crate::reader::LineReader;
use crate::section::{Property, Section};
use crate::util::maybe_strip_quotes;

/// Knobs for a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    remove_quotes: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            remove_quotes: true,
        }
    }

    /// Strip one pair of wrapping `"` or `'` from property and section values. On by default.
    #[must_use]
    pub const fn remove_quotes(mut self, enabled: bool) -> Self {
        self.remove_quotes = enabled;
        self
    }

    #[must_use]
    pub const fn removes_quotes(&self) -> bool {
        self.remove_quotes
    }
}

/// Represents an on-going parse of one stream.
#[derive(Debug)]
pub struct Parser<R> {
    reader: LineReader<R>,
    options: ParseOptions,
    /// Line on which the next logical line starts.
    line_number: usize,
    /// The current section is always the last one.
    sections: Vec<Section>,
}

impl<R: BufRead> Parser<R> {
    #[must_use]
    pub fn new(reader: R, options: ParseOptions) -> Self {
        Self {
            reader: LineReader::new(reader),
            options,
            line_number: 1,
            sections: Vec::with_capacity(8),
        }
    }

    /// Drain the stream and return its sections in source order.
    ///
    /// # Errors
    ///
    /// The first [`ParseError`] met aborts the parse; nothing read up to that point is returned.
    pub fn into_sections(mut self) -> Result<Vec<Section>, ParseError> {
        loop {
            let line = self.reader.read_logical_line()?;

            if line.is_end_of_input() {
                break;
            }

            match classify(&line.text) {
                Line::Blank | Line::Comment => {}
                Line::Section { name, value } => self.push_section(name, value),
                Line::Property { name, value } => self.push_property(name, value),
                Line::Violation => {
                    return Err(ParseError::GrammarViolation {
                        line_number: self.line_number,
                        text: line.text.clone(),
                    });
                }
            }

            self.line_number += line.physical_lines;
        }

        debug!(
            sections = self.sections.len(),
            lines = self.reader.lines_consumed(),
            "parsed configuration"
        );

        Ok(self.sections)
    }

    fn push_section(&mut self, name: &str, value: &str) {
        let value = maybe_strip_quotes(value, self.options.remove_quotes);
        trace!(line = self.line_number, name, value, "section");

        self.sections
            .push(Section::new(name, value, self.line_number));
    }

    fn push_property(&mut self, name: &str, value: &str) {
        let value = maybe_strip_quotes(value, self.options.remove_quotes);
        trace!(line = self.line_number, name, value, "property");

        let property = Property::new(name, value, self.line_number);

        if let Some(section) = self.sections.last_mut() {
            section.push(property);
        } else {
            let mut root = Section::root();
            root.push(property);
            self.sections.push(root);
        }
    }
}

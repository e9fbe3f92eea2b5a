use std::io::BufRead;

use crate::error::ParseError;

/// One parseable record, possibly assembled from several physical lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogicalLine {
    pub text: String,
    /// Physical lines consumed to build `text`. Zero means the stream was already exhausted.
    pub physical_lines: usize,
}

impl LogicalLine {
    #[must_use]
    pub fn is_end_of_input(&self) -> bool {
        self.physical_lines == 0 && self.text.is_empty()
    }
}

/// Splits a character stream into logical lines, flattening trailing-backslash continuations.
#[derive(Debug)]
pub struct LineReader<R> {
    inner: R,
    buffer: String,
    /// Physical lines read so far, across all logical lines.
    consumed: usize,
}

impl<R: BufRead> LineReader<R> {
    #[must_use]
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buffer: String::with_capacity(256),
            consumed: 0,
        }
    }

    /// Read the next logical line.
    ///
    /// Every physical line is trimmed on both ends before a trailing `\` is looked for, so the
    /// whitespace in front of the marker survives while indentation of the continued line does
    /// not: `"a \"` followed by `"  b"` reads as `"a b"`.
    ///
    /// # Errors
    ///
    /// [`ParseError::StreamFault`] if the stream cannot be read, and
    /// [`ParseError::UnexpectedEndOfInput`] if a continuation marker sits on the last line.
    pub fn read_logical_line(&mut self) -> Result<LogicalLine, ParseError> {
        let mut line = LogicalLine::default();

        loop {
            self.buffer.clear();

            if self.inner.read_line(&mut self.buffer)? == 0 {
                // Only reachable mid-line when the previous physical line asked to continue.
                if line.physical_lines > 0 {
                    return Err(ParseError::UnexpectedEndOfInput {
                        line_number: self.consumed,
                    });
                }

                return Ok(line);
            }

            self.consumed += 1;
            line.physical_lines += 1;

            let current = self.buffer.trim();

            if let Some(s) = current.strip_suffix('\\') {
                line.text.push_str(s);
                continue;
            }

            line.text.push_str(current);
            return Ok(line);
        }
    }

    /// Physical lines consumed so far.
    #[must_use]
    pub fn lines_consumed(&self) -> usize {
        self.consumed
    }
}

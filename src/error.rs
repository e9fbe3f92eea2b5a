use std::io;

use thiserror::Error;

/// A fault that aborts a parse.
///
/// No partial model is ever returned alongside one of these; the caller is expected to attach the
/// identity of the source (a path, usually) before reporting it.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The underlying stream could not be read. Invalid UTF-8 lands here too.
    #[error("failed to read configuration stream")]
    StreamFault {
        #[source]
        source: io::Error,
    },

    /// A line continuation (`\`) was requested on the last line of the stream.
    #[error("unexpected end of input after line continuation on line {line_number}")]
    UnexpectedEndOfInput { line_number: usize },

    /// A logical line is neither a section header nor a property assignment.
    #[error("syntax error on line {line_number}: {text:?}")]
    GrammarViolation { line_number: usize, text: String },
}

impl ParseError {
    /// The 1-based source line the fault refers to, if any.
    #[must_use]
    pub fn line_number(&self) -> Option<usize> {
        match *self {
            Self::StreamFault { .. } => None,
            Self::UnexpectedEndOfInput { line_number }
            | Self::GrammarViolation { line_number, .. } => Some(line_number),
        }
    }
}

impl From<io::Error> for ParseError {
    fn from(source: io::Error) -> Self {
        Self::StreamFault { source }
    }
}

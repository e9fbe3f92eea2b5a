#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    clippy::pedantic
)]

//! Parser for the INI-style dialect used by daemon configuration files.
//!
//! ```text
//! # comments start with '#'
//! verbose = true
//!
//! [dbus]
//! connection-id = "de.titnc.pi.wirectrl"
//!
//! [gpio = 0-17]
//! name = AV-Receiver
//! description = a value that goes on \
//!               over several lines
//! ```
//!
//! Properties that come before the first header land in an unnamed root section. Section and
//! property order is kept exactly as written and duplicates are never folded together; deciding
//! what a repeated name means is up to whoever decodes the [`File`].

mod error;
mod grammar;
mod merge;
mod parser;
mod reader;
mod section;
mod util;

use std::io::{BufReader, Cursor, Read};

pub use error::ParseError;
pub use grammar::{Line, classify};
pub use merge::merge;
pub use parser::{ParseOptions, Parser};
pub use reader::{LineReader, LogicalLine};
pub use section::{Property, Section};
pub use util::strip_quotes;

/// The sections of one parsed stream, or of several merged ones.
///
/// A `File` is a snapshot: there is no way to change it once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct File {
    sections: Vec<Section>,
}

impl File {
    /// Parse a whole stream with the default [`ParseOptions`].
    ///
    /// # Errors
    ///
    /// See [`ParseError`].
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ParseError> {
        Self::from_reader_with(reader, ParseOptions::default())
    }

    /// Parse a whole stream.
    ///
    /// # Errors
    ///
    /// See [`ParseError`].
    pub fn from_reader_with<R: Read>(reader: R, options: ParseOptions) -> Result<Self, ParseError> {
        let sections = Parser::new(BufReader::new(reader), options).into_sections()?;
        Ok(Self { sections })
    }

    /// # Errors
    ///
    /// See [`ParseError`]. A `&str` cannot fail to read, so this is never a stream fault.
    pub fn parse_str(text: &str) -> Result<Self, ParseError> {
        Self::parse_str_with(text, ParseOptions::default())
    }

    /// # Errors
    ///
    /// See [`ParseError`].
    pub fn parse_str_with(text: &str, options: ParseOptions) -> Result<Self, ParseError> {
        let sections = Parser::new(Cursor::new(text), options).into_sections()?;
        Ok(Self { sections })
    }

    /// Shorthand for [`merge()`].
    #[must_use]
    pub fn merge(files: &[File]) -> File {
        merge::merge(files)
    }

    pub(crate) fn from_sections(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// All sections in source order. The root section, when there is one, comes first.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn root(&self) -> Option<&Section> {
        self.sections.first().filter(|s| s.is_root())
    }

    /// Every section called `name`, in order.
    pub fn sections_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Section> + 'a {
        self.sections.iter().filter(move |s| s.name() == name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

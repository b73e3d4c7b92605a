use std::fmt;
use std::io;

use thiserror::Error;

/// The part of a TFM file that a truncated read was trying to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Preamble,
    Header,
    CharInfo,
    Widths,
    Heights,
    Depths,
    ItalicCorrections,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Preamble => "preamble",
            Section::Header => "header",
            Section::CharInfo => "char info table",
            Section::Widths => "width table",
            Section::Heights => "height table",
            Section::Depths => "depth table",
            Section::ItalicCorrections => "italic correction table",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum TFMError {
    #[error("font not found: {0}")]
    NotFound(String),
    #[error("TFM file ends inside the {section}: {missing} of {expected} bytes missing")]
    Truncated {
        section: Section,
        expected: u64,
        missing: u64,
    },
    #[error("error reading TFM file: {0}")]
    Io(#[from] io::Error),
}

//! Reading TeX font metric (TFM) files.
//!
//! Only the parts of the file needed for glyph dimensions are decoded: the
//! checksum and design size from the header, the char info words, and the
//! width, height, depth and italic correction tables. The lig/kern program,
//! kerns, extensible recipes and font parameters are skipped.

pub use self::char_info::{CharInfoWord, CharTag};
pub use self::fixnum::{fixnum_to_f64, FixWord};

/// The four dimensions of a single character, in the font's design units
/// (usually points).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharMetric {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub italic_correction: f64,
}

impl CharMetric {
    pub fn zero() -> CharMetric {
        CharMetric {
            width: 0.0,
            height: 0.0,
            depth: 0.0,
            italic_correction: 0.0,
        }
    }
}

/// A loaded TFM file. The tables hold raw fix words exactly as they appear
/// in the file; they are only converted when queried.
#[derive(Debug, PartialEq)]
pub struct TFMFile {
    first_char: u16,
    last_char: u16,

    checksum: u32,
    design_size: u32,

    char_infos: Vec<u32>,
    widths: Vec<u32>,
    heights: Vec<u32>,
    depths: Vec<u32>,
    italic_corrections: Vec<u32>,
}

mod accessors;
mod char_info;
mod file_reader;
mod fixnum;
mod read_tfm;

#[cfg(test)]
pub(crate) mod test_data;

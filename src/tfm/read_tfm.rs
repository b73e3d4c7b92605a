use std::fs;
use std::io;
use std::path::Path;

use log::{debug, trace, warn};

use crate::error::{Section, TFMError};
use crate::paths::FontSource;
use crate::tfm::file_reader::TeXFileReader;
use crate::tfm::TFMFile;

// The fixed part at the start of the file: twelve 16-bit lengths.
const PREAMBLE_BYTES: u64 = 24;
// Checksum and design size, the only header words we look at.
const HEADER_WORDS_READ: u16 = 2;

impl TFMFile {
    pub fn new<T: io::Read + io::Seek>(reader: T) -> Result<TFMFile, TFMError> {
        let mut file_reader = TeXFileReader::new(reader);

        let stream_len = file_reader.stream_len()?;
        if stream_len < PREAMBLE_BYTES {
            return Err(TFMError::Truncated {
                section: Section::Preamble,
                expected: PREAMBLE_BYTES,
                missing: PREAMBLE_BYTES - stream_len,
            });
        }

        file_reader.seek_to(0)?;
        let file_length = file_reader.read_16bit_int()?;
        let header_length = file_reader.read_16bit_int()?;
        let first_char = file_reader.read_16bit_int()?;
        let last_char = file_reader.read_16bit_int()?;
        let num_widths = file_reader.read_16bit_int()?;
        let num_heights = file_reader.read_16bit_int()?;
        let num_depths = file_reader.read_16bit_int()?;
        let num_italic_corrections = file_reader.read_16bit_int()?;

        // The lig/kern, kern, extensible recipe and font parameter counts
        // aren't needed for the tables we load, but they do count towards
        // the file length.
        let num_lig_kerns = file_reader.read_16bit_int()?;
        let num_kerns = file_reader.read_16bit_int()?;
        let num_ext_recipes = file_reader.read_16bit_int()?;
        let num_params = file_reader.read_16bit_int()?;

        let num_chars = if last_char >= first_char {
            (last_char - first_char) as usize + 1
        } else {
            0
        };

        let declared_words: u64 = 6
            + u64::from(header_length)
            + num_chars as u64
            + [
                num_widths,
                num_heights,
                num_depths,
                num_italic_corrections,
                num_lig_kerns,
                num_kerns,
                num_ext_recipes,
                num_params,
            ]
            .iter()
            .map(|&n| u64::from(n))
            .sum::<u64>();
        if declared_words != u64::from(file_length) {
            warn!(
                "TFM file length is {} words but its tables add up to {}",
                file_length, declared_words
            );
        }
        if u64::from(file_length) * 4 != stream_len {
            warn!(
                "TFM file length is {} words but the stream has {} bytes",
                file_length, stream_len
            );
        }
        if header_length < HEADER_WORDS_READ {
            warn!(
                "TFM header is only {} words long, reading checksum and \
                 design size anyway",
                header_length
            );
        }

        let missing_before = file_reader.missing_bytes();
        let checksum = file_reader.read_32bit_int()?;
        let design_size = file_reader.read_32bit_int()?;
        let missing = file_reader.missing_bytes() - missing_before;
        if missing > 0 {
            return Err(TFMError::Truncated {
                section: Section::Header,
                expected: 8,
                missing,
            });
        }

        // The header can be longer than the two words we read, so always
        // move to the char info table explicitly.
        file_reader.seek_to(PREAMBLE_BYTES + u64::from(header_length) * 4)?;

        let char_infos =
            read_table(&mut file_reader, Section::CharInfo, num_chars)?;
        let widths =
            read_table(&mut file_reader, Section::Widths, num_widths.into())?;
        let heights =
            read_table(&mut file_reader, Section::Heights, num_heights.into())?;
        let depths =
            read_table(&mut file_reader, Section::Depths, num_depths.into())?;
        let italic_corrections = read_table(
            &mut file_reader,
            Section::ItalicCorrections,
            num_italic_corrections.into(),
        )?;

        debug!(
            "Loaded TFM file: chars {}..={}, {} widths, {} heights, {} \
             depths, {} italic corrections",
            first_char,
            last_char,
            widths.len(),
            heights.len(),
            depths.len(),
            italic_corrections.len()
        );

        Ok(TFMFile {
            first_char,
            last_char,

            checksum,
            design_size,

            char_infos,
            widths,
            heights,
            depths,
            italic_corrections,
        })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<TFMFile, TFMError> {
        TFMFile::new(io::Cursor::new(bytes))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<TFMFile, TFMError> {
        let path = path.as_ref();
        debug!("Reading TFM file {}", path.display());
        let file = fs::File::open(path)?;
        TFMFile::new(io::BufReader::new(file))
    }

    /// Looks up a font by name (like "cmr10") and loads its metrics.
    pub fn from_name<S: FontSource>(
        source: &S,
        font_name: &str,
    ) -> Result<TFMFile, TFMError> {
        match source.open_tfm(font_name)? {
            Some(stream) => TFMFile::new(stream),
            None => Err(TFMError::NotFound(font_name.to_string())),
        }
    }
}

fn read_table<T: io::Read + io::Seek>(
    file_reader: &mut TeXFileReader<T>,
    section: Section,
    count: usize,
) -> Result<Vec<u32>, TFMError> {
    trace!("Reading {} words of the {}", count, section);

    let missing_before = file_reader.missing_bytes();
    let mut words = Vec::new();
    file_reader.read_words(&mut words, count)?;

    let missing = file_reader.missing_bytes() - missing_before;
    if missing > 0 {
        return Err(TFMError::Truncated {
            section,
            expected: count as u64 * 4,
            missing,
        });
    }

    Ok(words)
}

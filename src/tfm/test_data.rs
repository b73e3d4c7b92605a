// A one character font with an 18 word header and seven font parameters.
#[rustfmt::skip]
pub static BASIC_TFM: [u8; 160] = [
    // File length (in words)
    0x00, 0x28,
    // Header length (in words)
    0x00, 0x12,
    // First character ('a')
    0x00, 0x61,
    // Last character ('a')
    0x00, 0x61,
    // Number of widths
    0x00, 0x02,
    // Number of heights
    0x00, 0x02,
    // Number of depths
    0x00, 0x02,
    // Number of italic corrections
    0x00, 0x02,
    // Number of lig/kern program steps
    0x00, 0x00,
    // Number of kerns
    0x00, 0x00,
    // Number of extensible character recipes
    0x00, 0x00,
    // Number of font params
    0x00, 0x07,

    // Header: checksum, design size (10pt), coding scheme "testing",
    // identifier "hi parc", seven bit safe flag and face byte
    0xAB, 0xCD, 0xEF, 0xAB,
    0b0000_0000, 0b1010_0000, 0b0000_0000, 0b0000_0000,
    0x07, 0x74, 0x65, 0x73, 0x74, 0x69, 0x6E, 0x67, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x07, 0x68, 0x69, 0x20, 0x70, 0x61, 0x72, 0x63, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0b1000_0000, 0x00, 0x00, 0xab,

    // 'a': every index is 1
    0b0000_0001, 0b0001_0001, 0b0000_0100, 0b0000_0000,

    // Widths: 0, 3.5
    0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000,
    0b0000_0000, 0b0011_1000, 0b0000_0000, 0b0000_0000,

    // Heights: 0, 5.5
    0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000,
    0b0000_0000, 0b0101_1000, 0b0000_0000, 0b0000_0000,

    // Depths: 0, 0.5
    0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000,
    0b0000_0000, 0b0000_1000, 0b0000_0000, 0b0000_0000,

    // Italic corrections: 0, 0.25
    0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000,
    0b0000_0000, 0b0000_0100, 0b0000_0000, 0b0000_0000,

    // Font params, which are never read
    0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000,
    0b0000_0000, 0b0100_0000, 0b0000_0000, 0b0000_0000,
    0b0000_0000, 0b0001_0000, 0b0000_0000, 0b0000_0000,
    0b0000_0000, 0b0010_0000, 0b0000_0000, 0b0000_0000,
    0b0000_0000, 0b0101_1000, 0b0000_0000, 0b0000_0000,
    0b0000_0000, 0b0100_0000, 0b0000_0000, 0b0000_0000,
    0b0000_0000, 0b0001_0000, 0b0000_0000, 0b0000_0000,
];

/// Encodes small synthetic TFM files. The char info count in the file comes
/// from `first_char` and `last_char`, but only the words in `char_infos` are
/// written, so the two can be made to disagree on purpose.
#[derive(Debug, Clone)]
pub struct TFMBuilder {
    pub first_char: u16,
    pub last_char: u16,
    pub checksum: u32,
    pub design_size: u32,
    // Header words after the checksum and design size.
    pub extra_header_words: Vec<u32>,
    pub char_infos: Vec<u32>,
    pub widths: Vec<u32>,
    pub heights: Vec<u32>,
    pub depths: Vec<u32>,
    pub italic_corrections: Vec<u32>,
}

impl Default for TFMBuilder {
    fn default() -> Self {
        TFMBuilder {
            first_char: 1,
            last_char: 0,
            checksum: 0x1234_5678,
            design_size: 0x00A0_0000,
            extra_header_words: Vec::new(),
            char_infos: Vec::new(),
            widths: Vec::new(),
            heights: Vec::new(),
            depths: Vec::new(),
            italic_corrections: Vec::new(),
        }
    }
}

impl TFMBuilder {
    /// A font with a single character whose every index is 0, pointing at
    /// one-entry tables that all hold `value`.
    pub fn single_char(chr: u16, value: u32) -> Self {
        TFMBuilder {
            first_char: chr,
            last_char: chr,
            char_infos: vec![0],
            widths: vec![value],
            heights: vec![value],
            depths: vec![value],
            italic_corrections: vec![value],
            ..TFMBuilder::default()
        }
    }

    pub fn build(&self) -> Vec<u8> {
        let header_length = 2 + self.extra_header_words.len();
        let file_length = 6
            + header_length
            + self.char_infos.len()
            + self.widths.len()
            + self.heights.len()
            + self.depths.len()
            + self.italic_corrections.len();

        let mut bytes = Vec::new();
        for &half in &[
            file_length,
            header_length,
            self.first_char as usize,
            self.last_char as usize,
            self.widths.len(),
            self.heights.len(),
            self.depths.len(),
            self.italic_corrections.len(),
            0,
            0,
            0,
            0,
        ] {
            bytes.extend_from_slice(&(half as u16).to_be_bytes());
        }

        let header = [self.checksum, self.design_size];
        let words = header
            .iter()
            .chain(&self.extra_header_words)
            .chain(&self.char_infos)
            .chain(&self.widths)
            .chain(&self.heights)
            .chain(&self.depths)
            .chain(&self.italic_corrections);
        for word in words {
            bytes.extend_from_slice(&word.to_be_bytes());
        }

        bytes
    }
}

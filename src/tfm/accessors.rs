use log::warn;

use crate::tfm::{fixnum_to_f64, CharInfoWord, CharMetric, FixWord, TFMFile};

// Converts a raw table word and scales it by the design size. Indices past
// the end of the table come from a broken file and give 0.
fn scaled_entry(table: &[u32], index: usize, design_size: f64) -> f64 {
    match table.get(index) {
        Some(&word) => fixnum_to_f64(word as FixWord) * design_size,
        None => {
            warn!(
                "Char info index {} is outside of a {} entry table",
                index,
                table.len()
            );
            0.0
        }
    }
}

impl TFMFile {
    /// The design size of the font, usually in points.
    pub fn design_size(&self) -> f64 {
        fixnum_to_f64(self.design_size as FixWord)
    }

    pub fn checksum(&self) -> u32 {
        self.checksum
    }

    pub fn first_char(&self) -> u16 {
        self.first_char
    }

    pub fn last_char(&self) -> u16 {
        self.last_char
    }

    /// Returns the unpacked char info word for `chr`, or None if the font
    /// doesn't have that character.
    pub fn char_info(&self, chr: i32) -> Option<CharInfoWord> {
        if chr < i32::from(self.first_char) || chr > i32::from(self.last_char)
        {
            return None;
        }

        let char_info_index = (chr - i32::from(self.first_char)) as usize;
        self.char_infos
            .get(char_info_index)
            .map(|&word| CharInfoWord::from_word(word))
    }

    pub fn has_char(&self, chr: i32) -> bool {
        self.char_info(chr).is_some()
    }

    pub fn width(&self, chr: i32) -> f64 {
        self.char_info(chr).map_or(0.0, |info| {
            scaled_entry(&self.widths, info.width_index, self.design_size())
        })
    }

    pub fn height(&self, chr: i32) -> f64 {
        self.char_info(chr).map_or(0.0, |info| {
            scaled_entry(&self.heights, info.height_index, self.design_size())
        })
    }

    pub fn depth(&self, chr: i32) -> f64 {
        self.char_info(chr).map_or(0.0, |info| {
            scaled_entry(&self.depths, info.depth_index, self.design_size())
        })
    }

    pub fn italic_correction(&self, chr: i32) -> f64 {
        self.char_info(chr).map_or(0.0, |info| {
            scaled_entry(
                &self.italic_corrections,
                info.italic_correction_index,
                self.design_size(),
            )
        })
    }

    /// All four dimensions of `chr` at once. Characters that aren't in the
    /// font are all zeros.
    pub fn metric(&self, chr: i32) -> CharMetric {
        CharMetric {
            width: self.width(chr),
            height: self.height(chr),
            depth: self.depth(chr),
            italic_correction: self.italic_correction(chr),
        }
    }
}

// The char info word for each character is 4 bytes:
//
// byte 1   | byte 2    | byte 3    | byte 4
// xxxxxxxx | xxxx xxxx | xxxxxx xx | xxxxxxxx
// width    | height    | italic    | remainder
//          |      depth|        tag|

const WIDTH_SHIFT: u32 = 24;
const WIDTH_MASK: u32 = 0xFF;
const HEIGHT_SHIFT: u32 = 20;
const HEIGHT_MASK: u32 = 0x0F;
const DEPTH_SHIFT: u32 = 16;
const DEPTH_MASK: u32 = 0x0F;
const ITALIC_SHIFT: u32 = 10;
const ITALIC_MASK: u32 = 0x3F;
const TAG_SHIFT: u32 = 8;
const TAG_MASK: u32 = 0x03;
const REMAINDER_MASK: u32 = 0xFF;

/// What the remainder byte of a char info word refers to. Only decoded so
/// the record is complete; nothing here follows the references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharTag {
    Vanilla,
    LigKern,
    CharList,
    Extensible,
}

/// An unpacked char info word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharInfoWord {
    pub width_index: usize,
    pub height_index: usize,
    pub depth_index: usize,
    pub italic_correction_index: usize,
    pub tag: CharTag,
    pub remainder: u8,
}

impl CharInfoWord {
    pub fn from_word(word: u32) -> CharInfoWord {
        let tag = match (word >> TAG_SHIFT) & TAG_MASK {
            0 => CharTag::Vanilla,
            1 => CharTag::LigKern,
            2 => CharTag::CharList,
            _ => CharTag::Extensible,
        };

        CharInfoWord {
            width_index: ((word >> WIDTH_SHIFT) & WIDTH_MASK) as usize,
            height_index: ((word >> HEIGHT_SHIFT) & HEIGHT_MASK) as usize,
            depth_index: ((word >> DEPTH_SHIFT) & DEPTH_MASK) as usize,
            italic_correction_index: ((word >> ITALIC_SHIFT) & ITALIC_MASK)
                as usize,
            tag,
            remainder: (word & REMAINDER_MASK) as u8,
        }
    }
}

/// A TFM "fix word": a signed 32-bit number with 20 fractional bits.
pub type FixWord = i32;

const FIXNUM_SCALE: f64 = (1 << 20) as f64;

/// Converts a fix word to a real number. The division by a power of two is
/// exact, so the same word always produces the same f64.
pub fn fixnum_to_f64(fix: FixWord) -> f64 {
    f64::from(fix) / FIXNUM_SCALE
}

/// A font loaded at a particular size, like `\font\big=cmr10 at 20pt`.
#[derive(Clone, PartialEq, Debug)]
pub struct Font {
    pub font_name: String,
    /// The size the font is used at, in the same units as its design size.
    pub scale: f64,
}

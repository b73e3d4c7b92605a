use crate::error::TFMError;
use crate::font::Font;
use crate::paths::FontSource;
use crate::tfm::{CharMetric, TFMFile};

/// The metrics of a font at the size it's being used at. Every dimension
/// from the TFM file is rescaled from the design size to the font's scale.
#[derive(Debug)]
pub struct FontMetrics {
    tfm_file: TFMFile,
    scale: f64,
}

impl FontMetrics {
    pub fn from_font<S: FontSource>(
        source: &S,
        font: &Font,
    ) -> Result<Self, TFMError> {
        let tfm_file = TFMFile::from_name(source, &font.font_name)?;

        Ok(FontMetrics {
            tfm_file,
            scale: font.scale,
        })
    }

    /// Uses the font at its design size.
    pub fn at_design_size(tfm_file: TFMFile) -> Self {
        let scale = tfm_file.design_size();
        FontMetrics { tfm_file, scale }
    }

    pub fn tfm_file(&self) -> &TFMFile {
        &self.tfm_file
    }

    pub fn get_design_size(&self) -> f64 {
        self.tfm_file.design_size()
    }

    pub fn get_scale(&self) -> f64 {
        self.scale
    }

    pub fn get_checksum(&self) -> u32 {
        self.tfm_file.checksum()
    }

    fn scale_dimen(&self, dimen: f64) -> f64 {
        let design_size = self.tfm_file.design_size();
        if design_size == 0.0 {
            0.0
        } else {
            dimen * self.scale / design_size
        }
    }

    pub fn get_width(&self, chr: i32) -> f64 {
        self.scale_dimen(self.tfm_file.width(chr))
    }

    pub fn get_height(&self, chr: i32) -> f64 {
        self.scale_dimen(self.tfm_file.height(chr))
    }

    pub fn get_depth(&self, chr: i32) -> f64 {
        self.scale_dimen(self.tfm_file.depth(chr))
    }

    pub fn get_italic_correction(&self, chr: i32) -> f64 {
        self.scale_dimen(self.tfm_file.italic_correction(chr))
    }

    pub fn get_metric(&self, chr: i32) -> CharMetric {
        CharMetric {
            width: self.get_width(chr),
            height: self.get_height(chr),
            depth: self.get_depth(chr),
            italic_correction: self.get_italic_correction(chr),
        }
    }
}

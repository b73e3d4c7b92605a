#![deny(clippy::all)]

//! Glyph dimensions from TeX font metric (TFM) files.
//!
//! ```no_run
//! use tfm_metrics::{SearchPath, TFMFile};
//!
//! let font = TFMFile::from_name(&SearchPath::from_env(), "cmr10")?;
//! println!("'a' is {}pt wide", font.width('a' as i32));
//! # Ok::<(), tfm_metrics::TFMError>(())
//! ```

#[cfg(feature = "kpathsea")]
#[macro_use]
extern crate lazy_static;

pub mod error;
pub mod font;
pub mod font_metrics;
pub mod paths;
pub mod tfm;

pub use crate::error::{Section, TFMError};
pub use crate::font::Font;
pub use crate::font_metrics::FontMetrics;
#[cfg(feature = "kpathsea")]
pub use crate::paths::Kpathsea;
pub use crate::paths::{FontSource, SearchPath};
pub use crate::tfm::{CharInfoWord, CharMetric, CharTag, TFMFile};

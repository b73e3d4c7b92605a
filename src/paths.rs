//! Finding TFM files by font name.
use std::collections::HashMap;
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

use log::{debug, trace};

/// The environment variable `SearchPath::from_env` reads, in the platform's
/// path list syntax.
pub const FONT_PATH_VAR: &str = "TFMFONTS";

/// Something that can turn a font name (like "cmr10") into the bytes of its
/// TFM file.
pub trait FontSource {
    type Stream: io::Read + io::Seek;

    /// Returns Ok(None) if the font couldn't be found.
    fn open_tfm(&self, font_name: &str) -> io::Result<Option<Self::Stream>>;
}

pub fn tfm_file_name(font_name: &str) -> String {
    format!("{}.tfm", font_name)
}

/// Looks for fonts in an ordered list of directories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    pub fn new<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        SearchPath {
            dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_env() -> Self {
        match env::var_os(FONT_PATH_VAR) {
            Some(paths) => SearchPath::new(env::split_paths(&paths)),
            None => SearchPath::default(),
        }
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    pub fn find_file(&self, font_name: &str) -> Option<PathBuf> {
        let file_name = tfm_file_name(font_name);
        self.dirs
            .iter()
            .map(|dir| dir.join(&file_name))
            .find(|path| {
                trace!("Looking for {} at {}", font_name, path.display());
                path.is_file()
            })
    }
}

impl FontSource for SearchPath {
    type Stream = io::BufReader<fs::File>;

    fn open_tfm(&self, font_name: &str) -> io::Result<Option<Self::Stream>> {
        match self.find_file(font_name) {
            Some(path) => {
                debug!("Found {} at {}", font_name, path.display());
                Ok(Some(io::BufReader::new(fs::File::open(path)?)))
            }
            None => Ok(None),
        }
    }
}

/// Fonts held in memory, keyed by font name.
impl FontSource for HashMap<String, Vec<u8>> {
    type Stream = io::Cursor<Vec<u8>>;

    fn open_tfm(&self, font_name: &str) -> io::Result<Option<Self::Stream>> {
        Ok(self.get(font_name).map(|bytes| io::Cursor::new(bytes.clone())))
    }
}

#[cfg(feature = "kpathsea")]
pub use self::kpse::Kpathsea;

#[cfg(feature = "kpathsea")]
mod kpse {
    use std::fs;
    use std::io;
    use std::sync::Mutex;

    use log::{debug, warn};

    use super::{tfm_file_name, FontSource};

    lazy_static! {
        // We store a single shared reference to the kpathsea library so that
        // we don't have to spend the cost of initializing Kpathsea multiple
        // times. Since the kpathsea library isn't thread-safe, the mutex
        // makes sure only one thread is using it at a time. This stores None
        // before the library has been initialized.
        static ref SHARED_KPATHS: Mutex<Option<kpathsea::Kpaths>> =
            Mutex::new(None);
    }

    /// Finds fonts through the system's kpathsea configuration, the way TeX
    /// itself does.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct Kpathsea;

    impl Kpathsea {
        /// Given a font name (like "cmr10"), returns a path to its TFM file
        /// if it can be found.
        pub fn find_file(&self, font_name: &str) -> Option<String> {
            let file_name = tfm_file_name(font_name);
            let mut maybe_kpse = match SHARED_KPATHS.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };

            if let Some(ref kpse) = *maybe_kpse {
                kpse.find_file(&file_name)
            } else {
                match kpathsea::Kpaths::new() {
                    Ok(kpse) => {
                        let result = kpse.find_file(&file_name);
                        *maybe_kpse = Some(kpse);
                        result
                    }
                    // If we can't initialize kpathsea successfully, just say
                    // we couldn't find the font.
                    Err(_) => {
                        warn!("Couldn't initialize kpathsea");
                        None
                    }
                }
            }
        }
    }

    impl FontSource for Kpathsea {
        type Stream = io::BufReader<fs::File>;

        fn open_tfm(
            &self,
            font_name: &str,
        ) -> io::Result<Option<Self::Stream>> {
            match self.find_file(font_name) {
                Some(path) => {
                    debug!("kpathsea found {} at {}", font_name, path);
                    Ok(Some(io::BufReader::new(fs::File::open(path)?)))
                }
                None => Ok(None),
            }
        }
    }
}

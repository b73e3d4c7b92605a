use std::env;
use std::path::Path;

use log::debug;

#[cfg(feature = "kpathsea")]
use tfm_metrics::Kpathsea;
use tfm_metrics::{SearchPath, TFMError, TFMFile};

fn load(font: &str) -> Result<TFMFile, TFMError> {
    if Path::new(font).is_file() {
        return TFMFile::from_path(font);
    }

    let search_path = SearchPath::from_env();
    debug!("Searching for {} in {:?}", font, search_path.dirs());
    match TFMFile::from_name(&search_path, font) {
        #[cfg(feature = "kpathsea")]
        Err(TFMError::NotFound(_)) => TFMFile::from_name(&Kpathsea, font),
        result => result,
    }
}

fn main() -> Result<(), TFMError> {
    env_logger::init();

    let mut args = env::args().skip(1).collect::<Vec<String>>();

    if args.len() != 1 {
        panic!("Invalid number of arguments: {}", args.len());
    }

    let font = args.remove(0);
    let tfm = load(&font)?;

    println!("design size: {}pt", tfm.design_size());
    println!("checksum: {:#010x}", tfm.checksum());
    for chr in i32::from(tfm.first_char())..=i32::from(tfm.last_char()) {
        let metric = tfm.metric(chr);
        println!(
            "{:3} wd {:.5} ht {:.5} dp {:.5} ic {:.5}",
            chr,
            metric.width,
            metric.height,
            metric.depth,
            metric.italic_correction
        );
    }

    Ok(())
}

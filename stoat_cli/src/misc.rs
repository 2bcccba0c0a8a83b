use std::{fs::File, io::BufReader, path::Path};

use stoat_lib::{context::Context, types::err};
use xz2::read::XzDecoder;

pub fn load_ssat(context: &mut Context, path: &Path) -> Result<(), err::BuildError> {
    let file = match File::open(path) {
        Err(e) => {
            eprintln!("c could not open {}: {e}", path.display());
            std::process::exit(1);
        }
        Ok(f) => f,
    };

    match path.extension() {
        Some(extension) if extension == "xz" => {
            context.read_ssat(BufReader::new(XzDecoder::new(&file)))
        }
        _ => context.read_ssat(BufReader::new(&file)),
    }
}

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use flate2::read::MultiGzDecoder;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Opens `path` for line reading, decompressing gzip (and bgzip) input on the fly.
pub fn open_input(path: &Path) -> anyhow::Result<Box<dyn BufRead>> {
    let mut reader = BufReader::new(File::open(path)?);
    if is_gzipped(reader.fill_buf()?) {
        log::debug!("reading {} as gzip", path.display());
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(reader))))
    } else {
        Ok(Box::new(reader))
    }
}

fn is_gzipped(bytes: &[u8]) -> bool {
    bytes.len() >= 2 && bytes[..2] == GZIP_MAGIC
}

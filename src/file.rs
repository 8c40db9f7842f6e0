//! Reading numerals from files and other input
//!
//! Input is line-oriented: one hexadecimal numeral per line, surrounding whitespace ignored, blank
//! lines skipped.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use memmap::Mmap;
use hexdec_par_ser::numeral::lines;

use crate::convert::hex_bytes_to_decimal;
use crate::error::{Result, ResultExt, ErrorKind};

/// Convert every numeral in a block of line-oriented input
///
/// Stops at the first invalid numeral.
pub fn convert_lines(input: &[u8]) -> Result<Vec<String>> {
    let mut out = Vec::new();
    for (i, numeral) in lines(input)?.into_iter().enumerate() {
        debug!("numeral {}: {} hex digits", i, numeral.len());
        out.push(hex_bytes_to_decimal(numeral)?);
    }
    Ok(out)
}

/// Convert every numeral in the file at `path`
///
/// The file is memory mapped rather than read into memory.
pub fn convert_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).chain_err(|| ErrorKind::ReadInput(path.to_owned()))?;
    let len = file.metadata().chain_err(|| ErrorKind::ReadInput(path.to_owned()))?.len();
    // zero-length maps are rejected by the os
    if len == 0 {
        warn!("{} is empty", path.display());
        return Ok(Vec::new());
    }
    // The unsafety comes from the file changing under us, which we don't guard against.
    let map = unsafe { Mmap::map(&file) }.chain_err(|| ErrorKind::ReadInput(path.to_owned()))?;
    info!("mapped {} ({} bytes)", path.display(), len);
    convert_lines(&map[..])
}

/// Convert every numeral read from `reader` (e.g. stdin)
pub fn convert_reader<R: Read>(mut reader: R) -> Result<Vec<String>> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;
    convert_lines(&input)
}

use std::io::{self, Read};

use log::debug;

/// Number of possible symbols (one per byte value).
pub const N_SYMBOLS: usize = 256;

/// Count of occurrences for every byte value.
pub type FreqTable = [u32; N_SYMBOLS];

const READ_CHUNK: usize = 64 * 1024;

/// Reads `source` to the end and returns a frequency count of the input data, along
/// with the number of bytes scanned. The source is left fully consumed.
pub fn freqs<R: Read>(source: &mut R) -> io::Result<(FreqTable, u64)> {
    let mut freqs = [0_u32; N_SYMBOLS];
    let mut scanned = 0_u64;
    let mut buf = vec![0_u8; READ_CHUNK];

    loop {
        let size = match source.read(&mut buf) {
            Ok(0) => break,
            Ok(size) => size,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        buf[..size].iter().for_each(|&el| freqs[el as usize] += 1);
        scanned += size as u64;
    }
    debug!("Scanned {} bytes for symbol frequencies", scanned);
    Ok((freqs, scanned))
}

/// Number of symbols that occur at least once.
pub fn distinct(freqs: &FreqTable) -> usize {
    freqs.iter().filter(|&&f| f > 0).count()
}

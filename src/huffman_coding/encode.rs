use std::io::{self, Read, Write};

use log::{debug, trace};

use super::code_table::CodeTable;
use crate::bitstream::bitpacker::BitPacker;
use crate::error::{HuffError, Result};

const CHUNK_SIZE: usize = 64 * 1024;

/// Huffman encode everything readable from `input` with `codes` and write the packed
/// bitstream to `output`. The last byte is padded with zero bits. Returns the number
/// of bytes written.
pub fn encode<R: Read, W: Write>(input: &mut R, codes: &CodeTable, output: &mut W) -> Result<u64> {
    let mut bp = BitPacker::new(CHUNK_SIZE);
    let mut buf = vec![0_u8; CHUNK_SIZE];
    let mut written = 0_u64;

    loop {
        let size = match input.read(&mut buf) {
            Ok(0) => break,
            Ok(size) => size,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        for &sym in &buf[..size] {
            // The table was built from a scan of this same input
            let code = codes.get(sym).ok_or(HuffError::UnknownSymbol(sym))?;
            bp.out_code(code);
        }
        // Drain the full bytes, the partial byte stays queued in the packer
        output.write_all(&bp.output)?;
        written += bp.output.len() as u64;
        bp.output.clear();
    }

    bp.flush();
    trace!("Padded the last byte with {} bits", (8 - bp.last_bits) % 8);
    output.write_all(&bp.output)?;
    written += bp.output.len() as u64;

    debug!("Encoded bitstream is {} bytes", written);
    Ok(written)
}

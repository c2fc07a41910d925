//! The container layout shared by compress and decompress.
//!
//! | field        | size           | meaning                                   |
//! |--------------|----------------|-------------------------------------------|
//! | symbol_count | 2 bytes        | distinct symbols present (0: empty input) |
//! | records      | 5 bytes each   | 1 byte symbol, 4 byte frequency           |
//! | bitstream    | rest of stream | huffman payload, zero padded              |
//!
//! Integers are stored in the native byte order of the machine. Records are written
//! in ascending symbol order.

use std::io::{Read, Write};

use log::{debug, info};

use crate::bitstream::bitreader::BitReader;
use crate::error::{HuffError, Result};
use crate::tools::freq_count::{FreqTable, N_SYMBOLS};

/// Size of the symbol count field
pub const COUNT_SIZE: u64 = 2;
/// Size of one (symbol, frequency) record
pub const RECORD_SIZE: u64 = 5;

/// Decoded container header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub freqs: FreqTable,
    /// Sum of all frequencies: the number of symbols to decode
    pub n_symbols: u64,
    /// Bytes taken by the count field and the records
    pub size: u64,
}

/// Write the symbol count and one record per present symbol. Returns the bytes written.
/// An empty table writes nothing at all.
pub fn write_header<W: Write>(freqs: &FreqTable, output: &mut W) -> Result<u64> {
    let len = freqs.iter().filter(|&&f| f > 0).count() as u16;
    if len == 0 {
        return Ok(0);
    }
    output.write_all(&len.to_ne_bytes())?;
    for (sym, &freq) in freqs.iter().enumerate().filter(|(_, &f)| f > 0) {
        output.write_all(&[sym as u8])?;
        output.write_all(&freq.to_ne_bytes())?;
    }
    let size = COUNT_SIZE + RECORD_SIZE * len as u64;
    debug!("Wrote header for {} symbols ({} bytes)", len, size);
    Ok(size)
}

/// Read the header. Returns None if the stream is too short to hold the symbol count,
/// which stands for an empty input.
pub fn read_header<R: Read>(br: &mut BitReader<R>) -> Result<Option<Header>> {
    let len = match br.bytes(COUNT_SIZE as usize)? {
        Some(b) => u16::from_ne_bytes([b[0], b[1]]),
        None => {
            info!("No symbol count found, treating input as empty.");
            return Ok(None);
        }
    };

    let mut freqs = [0_u32; N_SYMBOLS];
    let mut seen = [false; N_SYMBOLS];
    let mut n_symbols = 0_u64;
    for found in 0..len {
        let record = br
            .bytes(RECORD_SIZE as usize)?
            .ok_or(HuffError::TruncatedContainer {
                declared: len,
                found,
            })?;
        let sym = record[0];
        if seen[sym as usize] {
            return Err(HuffError::DuplicateSymbol(sym));
        }
        seen[sym as usize] = true;
        let freq = u32::from_ne_bytes([record[1], record[2], record[3], record[4]]);
        freqs[sym as usize] = freq;
        n_symbols += freq as u64;
    }

    let size = COUNT_SIZE + RECORD_SIZE * len as u64;
    debug!(
        "Read header for {} symbols ({} bytes), {} symbols to decode",
        len, size, n_symbols
    );
    Ok(Some(Header {
        freqs,
        n_symbols,
        size,
    }))
}

#[cfg(test)]
mod test {
    use super::*;

    fn table(entries: &[(u8, u32)]) -> FreqTable {
        let mut f = [0_u32; N_SYMBOLS];
        entries.iter().for_each(|&(s, c)| f[s as usize] = c);
        f
    }

    #[test]
    fn layout_is_count_then_records() {
        let mut out = vec![];
        let size = write_header(&table(&[(b'b', 1), (b'a', 3)]), &mut out).unwrap();
        assert_eq!(size, 12);
        let mut expected = 2_u16.to_ne_bytes().to_vec();
        expected.push(b'a');
        expected.extend(3_u32.to_ne_bytes());
        expected.push(b'b');
        expected.extend(1_u32.to_ne_bytes());
        assert_eq!(out, expected);
    }

    #[test]
    fn empty_table_writes_nothing() {
        let mut out = vec![];
        assert_eq!(write_header(&[0; N_SYMBOLS], &mut out).unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn header_comes_back() {
        let f = table(&[(0, 7), (b'x', 70_000), (255, 1)]);
        let mut out = vec![];
        write_header(&f, &mut out).unwrap();
        out.push(0xaa); // start of the bitstream
        let mut br = BitReader::new(out.as_slice());
        let header = read_header(&mut br).unwrap().unwrap();
        assert_eq!(header.freqs, f);
        assert_eq!(header.n_symbols, 70_008);
        assert_eq!(header.size, 17);
        assert_eq!(br.byte().unwrap(), Some(0xaa));
    }

    #[test]
    fn short_count_is_empty() {
        let one: &[u8] = &[1];
        assert!(read_header(&mut BitReader::new(one)).unwrap().is_none());
        let none: &[u8] = &[];
        assert!(read_header(&mut BitReader::new(none)).unwrap().is_none());
    }

    #[test]
    fn truncated_records() {
        let mut out = vec![];
        write_header(&table(&[(1, 1), (2, 2), (3, 3)]), &mut out).unwrap();
        out.truncate(2 + 5 + 3);
        let res = read_header(&mut BitReader::new(out.as_slice()));
        assert!(matches!(
            res,
            Err(HuffError::TruncatedContainer {
                declared: 3,
                found: 1
            })
        ));
    }

    #[test]
    fn duplicate_record() {
        let mut out = 2_u16.to_ne_bytes().to_vec();
        for _ in 0..2 {
            out.push(9);
            out.extend(4_u32.to_ne_bytes());
        }
        let res = read_header(&mut BitReader::new(out.as_slice()));
        assert!(matches!(res, Err(HuffError::DuplicateSymbol(9))));
    }
}

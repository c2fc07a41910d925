use std::io::{Read, Write};

use log::{info, warn};

use super::container::read_header;
use crate::bitstream::bitreader::BitReader;
use crate::error::Result;
use crate::huffman_coding::code_table::CodeTable;
use crate::huffman_coding::decode::decode;
use crate::huffman_coding::tree::build_tree;
use crate::tools::report::DecompressReport;

/// Decompress a container read from `input` into `output`.
///
/// A stream too short to hold the symbol count decodes to nothing. A bitstream that
/// ends before all symbols are decoded gives a short output, with a warning.
/// With `print_stats` the report also lists every code.
pub fn decompress<R: Read, W: Write>(
    input: R,
    output: &mut W,
    print_stats: bool,
) -> Result<DecompressReport> {
    let mut br = BitReader::new(input);

    let header = match read_header(&mut br)? {
        Some(header) => header,
        None => {
            output.flush()?;
            return Ok(DecompressReport::default());
        }
    };
    let mut report = DecompressReport {
        table_bytes: header.size,
        ..Default::default()
    };

    // Rebuild exactly the tree the compressor used.
    let tree = match build_tree(&header.freqs) {
        Some(tree) => tree,
        None => {
            output.flush()?;
            return Ok(report);
        }
    };

    let stats = decode(&tree, header.n_symbols, &mut br, output)?;
    output.flush()?;
    report.bitstream_bytes = stats.bytes_read;
    report.output_bytes = stats.bytes_written;

    if stats.bytes_written < header.n_symbols {
        warn!(
            "Decoded {} of {} symbols, the bitstream is truncated",
            stats.bytes_written, header.n_symbols
        );
    } else {
        info!("Decompressed {} bytes", stats.bytes_written);
    }
    if print_stats {
        report.codes = CodeTable::from_tree(&tree).sorted();
    }
    Ok(report)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::compression::compress::compress;
    use crate::error::HuffError;
    use std::io::Cursor;

    fn pack(data: &[u8]) -> Vec<u8> {
        let mut out = vec![];
        compress(&mut Cursor::new(data), &mut out, false).unwrap();
        out
    }

    fn unpack(container: &[u8]) -> (Vec<u8>, DecompressReport) {
        let mut out = vec![];
        let report = decompress(container, &mut out, true).unwrap();
        (out, report)
    }

    #[test]
    fn aaab_round_trip() {
        let (out, report) = unpack(&pack(b"aaab"));
        assert_eq!(out, b"aaab");
        assert_eq!(report.table_bytes, 12);
        assert_eq!(report.bitstream_bytes, 1);
        assert_eq!(report.output_bytes, 4);
        assert_eq!(report.codes.len(), 2);
    }

    #[test]
    fn empty_and_short_containers() {
        let cases: [&[u8]; 2] = [&[], &[0x01]];
        for container in cases {
            let (out, report) = unpack(container);
            assert!(out.is_empty());
            assert_eq!(report, DecompressReport::default());
        }
    }

    #[test]
    fn zero_symbol_count() {
        let (out, report) = unpack(&0_u16.to_ne_bytes());
        assert!(out.is_empty());
        assert_eq!(report.table_bytes, 2);
    }

    #[test]
    fn single_symbol_ignores_bit_values() {
        let mut container = pack(&[b'k'; 12]);
        // 7 header bytes, 12 bits of payload. Flip every payload bit: only the
        // length of the bitstream matters.
        assert_eq!(container.len(), 9);
        container[7..].iter_mut().for_each(|b| *b = !*b);
        let (out, _) = unpack(&container);
        assert_eq!(out, vec![b'k'; 12]);
    }

    #[test]
    fn truncated_bitstream_gives_short_output() {
        let data: Vec<u8> = b"the quick brown fox jumps over the lazy dog".repeat(20);
        let mut container = pack(&data);
        container.truncate(container.len() - 10);
        let (out, report) = unpack(&container);
        assert!(out.len() < data.len());
        assert_eq!(out, data[..out.len()]);
        assert_eq!(report.output_bytes, out.len() as u64);
    }

    #[test]
    fn truncated_symbol_table_is_an_error() {
        let container = pack(b"abcdef");
        let mut out = vec![];
        let res = decompress(&container[..20], &mut out, false);
        assert!(matches!(
            res,
            Err(HuffError::TruncatedContainer {
                declared: 6,
                found: 3
            })
        ));
    }
}

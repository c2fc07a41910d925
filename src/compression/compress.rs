use std::io::{Read, Seek, SeekFrom, Write};

use log::{debug, info};

use super::container::write_header;
use crate::error::Result;
use crate::huffman_coding::code_table::CodeTable;
use crate::huffman_coding::encode::encode;
use crate::huffman_coding::tree::build_tree;
use crate::tools::freq_count::{distinct, freqs};
use crate::tools::report::CompressReport;

/*
    The input is read twice: once to count the symbol frequencies, then again
    (after seeking back to where we started) to encode it. Nothing is written to
    the output until the first pass is done.
*/

/// Compress everything readable from `input` into `output`. An empty input writes
/// nothing. With `print_stats` the report also lists every code.
pub fn compress<R: Read + Seek, W: Write>(
    input: &mut R,
    output: &mut W,
    print_stats: bool,
) -> Result<CompressReport> {
    let start = input.stream_position()?;
    let (freqs, scanned) = freqs(input)?;
    info!(
        "Read {} bytes holding {} distinct symbols",
        scanned,
        distinct(&freqs)
    );

    let mut report = CompressReport {
        input_bytes: scanned,
        ..Default::default()
    };

    // No symbols, no tree, no output.
    let tree = match build_tree(&freqs) {
        Some(tree) => tree,
        None => {
            output.flush()?;
            return Ok(report);
        }
    };
    report.table_bytes = write_header(&freqs, output)?;

    // The tree is only needed to get the codes.
    let codes = CodeTable::from_tree(&tree);
    drop(tree);
    debug!("Built {} huffman codes", codes.len());

    input.seek(SeekFrom::Start(start))?;
    report.bitstream_bytes = encode(input, &codes, output)?;
    output.flush()?;

    info!(
        "Compressed {} bytes to {} bytes",
        report.input_bytes,
        report.table_bytes + report.bitstream_bytes
    );
    if print_stats {
        report.codes = codes.sorted();
    }
    Ok(report)
}

use std::io::{BufWriter, Read, Write};

use log::{debug, warn};

use super::tree::{Node, NodeData};
use crate::bitstream::bitreader::BitReader;
use crate::error::Result;

/// Byte counts from one decode call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DecodeStats {
    /// Bitstream bytes read (a partially used last byte counts). Bytes after the one
    /// holding the last symbol are neither read nor counted.
    pub bytes_read: u64,
    /// Decoded bytes written
    pub bytes_written: u64,
}

/// Decode `n_symbols` symbols from the bitstream behind `br` by walking `tree`, writing
/// the decoded bytes to `output`.
///
/// Reading stops as soon as the last symbol is produced, even in the middle of a byte.
/// If the bitstream ends early we stop there and report the shorter output.
///
/// A tree that is a single leaf never branches: every bit read, whatever its value,
/// stands for one more copy of that symbol.
pub fn decode<R: Read, W: Write>(
    tree: &Node,
    mut n_symbols: u64,
    br: &mut BitReader<R>,
    output: &mut W,
) -> Result<DecodeStats> {
    let start = br.bytes_read();
    let mut written = 0_u64;
    let mut out = BufWriter::new(output);
    let mut node = tree;

    while n_symbols > 0 {
        let bit = match br.bit()? {
            Some(bit) => bit,
            None => {
                warn!(
                    "Bitstream ended with {} symbols still expected at {}",
                    n_symbols,
                    br.loc()
                );
                break;
            }
        };
        if let NodeData::Kids(left, right) = &node.node_data {
            node = if bit { right.as_ref() } else { left.as_ref() };
        }
        if let NodeData::Leaf(sym) = node.node_data {
            out.write_all(&[sym])?;
            written += 1;
            n_symbols -= 1;
            node = tree;
        }
    }
    out.flush()?;

    let stats = DecodeStats {
        bytes_read: br.bytes_read() - start,
        bytes_written: written,
    };
    debug!(
        "Decoded {} bytes from {} bitstream bytes",
        stats.bytes_written, stats.bytes_read
    );
    Ok(stats)
}

//! The compression module drives the container codec.
//!
//! Compression happens in the following steps:
//! - Frequency count: one pass over the input counting every byte value.
//! - Huffman tree: built from the counts, with a fixed tie-break order so decompression can rebuild it.
//! - Code table: the root-to-leaf path of every symbol.
//! - Header: the symbol count and a (symbol, frequency) record per symbol.
//! - Encoding: a second pass over the input, writing each byte's code to a packed bitstream.
//!
//! Decompression reads the header back, rebuilds the same tree from the frequencies and walks it
//! bit by bit until the sum of the frequencies has been decoded.
//!

pub mod compress;
pub mod container;
pub mod decompress;

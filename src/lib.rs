//! Huffman compression of byte streams.
//!
//! Version 0.1.0
//!
//! Compresses any file with a single static huffman code built from its byte frequencies.
//! The compressed container holds the frequency table followed by the packed bitstream.
//! Decompression rebuilds the identical tree from the stored frequencies.
//!
//! Basic usage to compress a file is as follows:
//!
//! `$> huffpack -c test.txt test.huf`
//!
//! and to get it back, printing the code table as well:
//!
//! `$> huffpack -v -d test.huf test.txt`
//!
#![warn(rust_2018_idioms)]

pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

use std::io::Cursor;

pub use compression::compress::compress;
pub use compression::decompress::decompress;
pub use error::{HuffError, Result};

/// Compress an in-memory buffer into a new container.
pub fn compress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    compress(&mut Cursor::new(data), &mut out, false)?;
    Ok(out)
}

/// Decompress an in-memory container.
pub fn decompress_bytes(container: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    decompress(container, &mut out, false)?;
    Ok(out)
}

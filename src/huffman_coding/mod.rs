//! The huffman module builds the tree and codes, and turns bytes into a bitstream and back.
//!
//! A single code table covers the whole input. Codes come straight from the tree shape (left is
//! 0, right is 1), so the decoder only needs the frequency table to rebuild them.
//!

pub mod code_table;
pub mod decode;
pub mod encode;
pub mod tree;

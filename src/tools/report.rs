use std::fmt::{Display, Formatter};

use crate::huffman_coding::code_table::Code;

/// Diagnostics from one compress call. Printed as one number per line: input bytes,
/// header+table bytes, bitstream bytes. The code listing follows when it was requested.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CompressReport {
    pub input_bytes: u64,
    pub table_bytes: u64,
    pub bitstream_bytes: u64,
    /// (code, symbol) sorted by code string. Empty unless statistics were requested.
    pub codes: Vec<(Code, u8)>,
}

/// Diagnostics from one decompress call. Printed as one number per line: header+table
/// bytes, bitstream bytes read, bytes written. The code listing follows when requested.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DecompressReport {
    pub table_bytes: u64,
    pub bitstream_bytes: u64,
    pub output_bytes: u64,
    /// (code, symbol) sorted by code string. Empty unless statistics were requested.
    pub codes: Vec<(Code, u8)>,
}

fn write_codes(f: &mut Formatter<'_>, codes: &[(Code, u8)]) -> std::fmt::Result {
    codes
        .iter()
        .try_for_each(|(code, sym)| writeln!(f, "{} {}", code, sym))
}

impl Display for CompressReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.input_bytes)?;
        writeln!(f, "{}", self.table_bytes)?;
        writeln!(f, "{}", self.bitstream_bytes)?;
        write_codes(f, &self.codes)
    }
}

impl Display for DecompressReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.table_bytes)?;
        writeln!(f, "{}", self.bitstream_bytes)?;
        writeln!(f, "{}", self.output_bytes)?;
        write_codes(f, &self.codes)
    }
}

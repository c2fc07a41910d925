//! The bitstream module forms the bit level I/O subsystem.
//!
//! Both directions pack bits most significant bit first. The last byte of an encoded stream
//! is padded with zeros; the decoder never looks at the padding because it stops after the
//! expected number of symbols.
//!
pub mod bitpacker;
pub mod bitreader;

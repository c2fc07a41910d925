//! The tools module provides helper functions for huffpack.
//!
//! The tools are:
//! - cli: Command line interface.
//! - freq_count: Frequency count of the input.
//! - report: Diagnostics printed after each run.
//!
pub mod cli;
pub mod freq_count;
pub mod report;

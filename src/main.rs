//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::process::ExitCode;

use huffpack::tools::cli::{huffopts_init, HuffOpts, Mode};
use huffpack::{compress, decompress, Result};

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};
use tikv_jemallocator::Jemalloc;

#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

fn main() -> ExitCode {
    // Available log levels are Error, Warn, Info, Debug, Trace
    if TermLogger::init(
        LevelFilter::Warn,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("Unable to start the terminal logger");
    }

    // Bad arguments print the usage message and stop here, before any file is opened.
    let options = match huffopts_init() {
        Some(options) => options,
        None => return ExitCode::SUCCESS,
    };

    match run(&options) {
        Ok(()) => {
            info!("Done.\n");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}: {}", options.op_mode, e);
            ExitCode::FAILURE
        }
    }
}

/// Open both files and do what we were asked. The files are closed when they go out of
/// scope, whichever way we leave.
fn run(opts: &HuffOpts) -> Result<()> {
    let mut f_in = BufReader::new(File::open(&opts.input)?);
    let mut f_out = BufWriter::new(File::create(&opts.output)?);

    match opts.op_mode {
        Mode::Compress => {
            let report = compress(&mut f_in, &mut f_out, opts.print_stats)?;
            print!("{}", report);
        }
        Mode::Decompress => {
            let report = decompress(f_in, &mut f_out, opts.print_stats)?;
            print!("{}", report);
        }
    }
    Ok(())
}

use clap::{CommandFactory, ErrorKind, Parser};
use log::info;
use std::ffi::OsString;
use std::path::PathBuf;
use std::{fmt::Display, fmt::Formatter};

/// Compress or Decompress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Compress,
    Decompress,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Command Line Interpretation - uses external CLAP crate.
/// The argument shape is fixed: `[-v] -c|-d <input> <output>`, checked by parse_args
/// before clap sees the arguments.
#[derive(Parser, Debug)]
#[clap(
    name = "huffpack",
    about = "Static huffman compression of a single file",
    long_about = None,
    disable_help_flag = true)]
pub struct Args {
    /// Print every symbol's code, sorted by code
    #[clap(short = 'v')]
    verbose: bool,

    /// Compress the input file
    #[clap(short = 'c')]
    compress: bool,

    /// Decompress the input file
    #[clap(short = 'd')]
    decompress: bool,

    /// File to read
    #[clap(allow_hyphen_values = true)]
    input: PathBuf,

    /// File to write (created or truncated)
    #[clap(allow_hyphen_values = true)]
    output: PathBuf,
}

/// All user settable options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffOpts {
    /// Compress/Decompress
    pub op_mode: Mode,
    /// File to read for input
    pub input: PathBuf,
    /// File to write the output to
    pub output: PathBuf,
    /// Print the code table after the byte counts
    pub print_stats: bool,
}

impl From<Args> for HuffOpts {
    fn from(args: Args) -> Self {
        Self {
            op_mode: if args.decompress {
                Mode::Decompress
            } else {
                Mode::Compress
            },
            input: args.input,
            output: args.output,
            print_stats: args.verbose,
        }
    }
}

/// Parse an argument list (program name first). Only two shapes are accepted:
/// `-c|-d <input> <output>` and `-v -c|-d <input> <output>`.
pub fn parse_args<I, T>(args: I) -> Result<HuffOpts, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    // Program name plus 3 or 4 arguments
    if args.len() != 4 && args.len() != 5 {
        return Err(Args::command().error(
            ErrorKind::WrongNumberOfValues,
            "Wrong number of arguments!",
        ));
    }
    // The optional -v can only come first, and the mode always sits before the two files
    let mode = &args[args.len() - 3];
    if (args.len() == 5 && args[1] != "-v") || (mode != "-c" && mode != "-d") {
        return Err(Args::command().error(ErrorKind::InvalidValue, "Invalid arguments!"));
    }

    Args::try_parse_from(args).map(HuffOpts::from)
}

/// Read the command line. Returns None when the arguments were malformed; the usage
/// message has been printed by then and no file has been touched.
pub fn huffopts_init() -> Option<HuffOpts> {
    let opts = match parse_args(std::env::args_os()) {
        Ok(opts) => opts,
        Err(e) => {
            let _ = e.print();
            return None;
        }
    };

    // Below we log initialization status to the user
    info!("---- Huffpack Initialization Start ----");
    info!("Operational mode set to {}", opts.op_mode);
    info!("Getting input from the file {}", opts.input.display());
    info!("Sending output to the file {}", opts.output.display());
    if opts.print_stats {
        info!("Printing the code table")
    };
    info!("---- Huffpack Initialization End ----\n");
    Some(opts)
}

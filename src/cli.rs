use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::unified::DEFAULT_CONTEXT;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Original file
    pub old_file: PathBuf,

    /// Changed file
    pub new_file: PathBuf,

    /// Compare raw bytes instead of printing a unified diff
    #[arg(long)]
    pub binary: bool,

    /// Lines of context around each change
    #[arg(short = 'U', long = "unified", value_name = "N", default_value_t = DEFAULT_CONTEXT)]
    pub context: usize,

    /// Log progress to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Text,
    Binary,
}

#[derive(Debug)]
pub struct Options {
    pub mode: Mode,
    pub context: usize,
    pub log_level: LevelFilter,
}

pub fn build_options(args: &Args) -> Options {
    let mode = if args.binary { Mode::Binary } else { Mode::Text };
    let log_level = match args.verbose {
        0 => LevelFilter::Error,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    Options {
        mode,
        context: args.context,
        log_level,
    }
}

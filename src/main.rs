use std::io::{self, BufWriter};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use difftool::{build_options, run_difftool, Args};

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let opts = build_options(&args);

    // stderr only, so stdout carries nothing but the comparison report
    env_logger::Builder::new()
        .filter_level(opts.log_level)
        .format_timestamp(None)
        .format_target(false)
        .init();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let outcome = run_difftool(&args.old_file, &args.new_file, &opts, &mut out)?;

    Ok(outcome.into())
}

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use log::{info, warn};

use crate::cli::{Mode, Options};
use crate::error::ReadError;
use crate::report::Outcome;
use crate::unified::unified_diff;
use crate::utils::{display_name, file_bytes_equal, read_lines};

/// Compares `old` and `new` in the mode selected by `opts`, writing any
/// report to `out`.
pub fn run_difftool<W: Write>(old: &Path, new: &Path, opts: &Options, out: &mut W) -> Result<Outcome> {
    info!(
        "comparing {} and {} ({:?} mode)",
        old.display(),
        new.display(),
        opts.mode
    );

    let outcome = match opts.mode {
        Mode::Binary => compare_binary(old, new, out)?,
        Mode::Text => compare_text(old, new, opts.context, out)?,
    };
    out.flush()?;

    info!("outcome: {outcome:?}");
    Ok(outcome)
}

pub fn compare_binary<W: Write>(old: &Path, new: &Path, out: &mut W) -> Result<Outcome> {
    if file_bytes_equal(old, new)? {
        return Ok(Outcome::Identical);
    }
    writeln!(out, "Files {} {} differ", old.display(), new.display())?;
    Ok(Outcome::Differ)
}

pub fn compare_text<W: Write>(old: &Path, new: &Path, context: usize, out: &mut W) -> Result<Outcome> {
    // both reads happen before any decode error is reported
    let old_lines = decoded(read_lines(old))?;
    let new_lines = decoded(read_lines(new))?;

    let (old_lines, new_lines) = match (old_lines, new_lines) {
        (Some(a), Some(b)) => (a, b),
        (a, b) => {
            if a.is_none() {
                writeln!(out, "{} old file charmap decode error", old.display())?;
            }
            if b.is_none() {
                writeln!(out, "{} new file charmap decode error", new.display())?;
            }
            return Ok(Outcome::Undecodable);
        }
    };

    let old_name = display_name(old);
    let new_name = display_name(new);

    let mut differs = false;
    for line in unified_diff(&old_lines, &new_lines, &old_name, &new_name, context) {
        differs = true;
        out.write_all(line.as_bytes())?;
    }

    Ok(if differs {
        Outcome::Differ
    } else {
        Outcome::Identical
    })
}

/// `None` for undecodable input; I/O failures stay errors.
fn decoded(result: std::result::Result<Vec<String>, ReadError>) -> Result<Option<Vec<String>>> {
    match result {
        Ok(lines) => Ok(Some(lines)),
        Err(err) if err.is_decode() => {
            warn!("{err}");
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

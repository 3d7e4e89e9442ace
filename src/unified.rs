use std::iter;
use std::ops::Range;

use similar::{group_diff_ops, DiffOp, DiffTag};

use crate::matcher::SequenceMatcher;

pub const DEFAULT_CONTEXT: usize = 3;

/// A group of edit operations padded with unchanged context lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    pub ops: Vec<DiffOp>,
}

impl Hunk {
    pub fn old_range(&self) -> Range<usize> {
        let start = self.ops.first().map_or(0, |op| op.old_range().start);
        let end = self.ops.last().map_or(start, |op| op.old_range().end);
        start..end
    }

    pub fn new_range(&self) -> Range<usize> {
        let start = self.ops.first().map_or(0, |op| op.new_range().start);
        let end = self.ops.last().map_or(start, |op| op.new_range().end);
        start..end
    }

    pub fn header(&self) -> String {
        format!(
            "@@ -{} +{} @@\n",
            format_range(self.old_range()),
            format_range(self.new_range())
        )
    }
}

/// Splits `ops` into hunks with `context` lines around each change.
///
/// Changes separated by at most `2 * context` unchanged lines share a hunk.
/// Sequences without changes yield no hunks.
pub fn group_hunks(ops: Vec<DiffOp>, context: usize) -> Vec<Hunk> {
    group_diff_ops(ops, context)
        .into_iter()
        .map(|ops| Hunk { ops })
        .collect()
}

/// Renders a 0-based half-open range as a 1-based `start,len` pair.
///
/// Single lines drop the length; empty ranges point at the line before them.
pub fn format_range(range: Range<usize>) -> String {
    let len = range.len();
    let mut start = range.start + 1;
    if len == 1 {
        return start.to_string();
    }
    if len == 0 {
        start -= 1;
    }
    format!("{start},{len}")
}

/// Lazily formatted unified diff of two line sequences.
///
/// Yields nothing at all when the sequences are identical; otherwise the
/// `---`/`+++` header followed by every hunk. Lines keep their own
/// terminators.
pub fn unified_diff<'a>(
    old: &'a [String],
    new: &'a [String],
    old_name: &str,
    new_name: &str,
    context: usize,
) -> impl Iterator<Item = String> + 'a {
    let hunks = group_hunks(SequenceMatcher::new(old, new).diff_ops(), context);

    let header = if hunks.is_empty() {
        Vec::new()
    } else {
        vec![format!("--- {old_name}\n"), format!("+++ {new_name}\n")]
    };

    header
        .into_iter()
        .chain(hunks.into_iter().flat_map(move |hunk| hunk_lines(hunk, old, new)))
}

fn hunk_lines<'a>(
    hunk: Hunk,
    old: &'a [String],
    new: &'a [String],
) -> impl Iterator<Item = String> + 'a {
    iter::once(hunk.header()).chain(
        hunk.ops
            .into_iter()
            .flat_map(move |op| op_lines(op, old, new)),
    )
}

fn op_lines<'a>(op: DiffOp, old: &'a [String], new: &'a [String]) -> impl Iterator<Item = String> + 'a {
    let (tag, old_range, new_range) = op.as_tag_tuple();
    // insert ops carry an empty old range, so only their `+` side prints
    let (old_marker, added) = match tag {
        DiffTag::Equal => (' ', &new[..0]),
        DiffTag::Delete => ('-', &new[..0]),
        DiffTag::Insert | DiffTag::Replace => ('-', &new[new_range]),
    };

    old[old_range]
        .iter()
        .map(move |line| format!("{old_marker}{line}"))
        .chain(added.iter().map(|line| format!("+{line}")))
}

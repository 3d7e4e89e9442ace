//! Greedy longest-matching-block sequence matcher.
//!
//! The longest run of equal elements in the current range becomes an anchor,
//! then the ranges left and right of it are searched the same way. This does
//! not produce a minimal edit script, but it tends to line up "what a human
//! would expect" and reproduces the hunks of the classic unified diff tools
//! built on this approach.

use std::collections::HashMap;
use std::hash::Hash;

use log::trace;
use similar::DiffOp;

/// Sequences of at least this many elements get the popularity filter.
const AUTOJUNK_MIN_LEN: usize = 200;

/// A run of `size` equal elements at `a[old_index..]` and `b[new_index..]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Match {
    pub old_index: usize,
    pub new_index: usize,
    pub size: usize,
}

#[derive(Debug)]
pub struct SequenceMatcher<'a, T> {
    a: &'a [T],
    b: &'a [T],
    // element -> ascending positions in `b`, minus popular elements
    b2j: HashMap<&'a T, Vec<usize>>,
}

impl<'a, T: Eq + Hash> SequenceMatcher<'a, T> {
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        let mut b2j: HashMap<&'a T, Vec<usize>> = HashMap::new();
        for (j, elt) in b.iter().enumerate() {
            b2j.entry(elt).or_default().push(j);
        }

        if b.len() >= AUTOJUNK_MIN_LEN {
            let ntest = b.len() / 100 + 1;
            let before = b2j.len();
            b2j.retain(|_, positions| positions.len() <= ntest);
            trace!("autojunk dropped {} popular elements", before - b2j.len());
        }

        Self { a, b, b2j }
    }

    /// Longest block of equal elements in `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Among equally long blocks the one starting earliest in `a` wins, then
    /// the one starting earliest in `b`. Elements excluded from the index can
    /// still extend a block found through indexed ones.
    pub fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Match {
        let (mut besti, mut bestj, mut bestsize) = (alo, blo, 0);

        // j2len[j] = length of the longest match ending at a[i - 1] and b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut next: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next.insert(j, k);
                    if k > bestsize {
                        besti = i + 1 - k;
                        bestj = j + 1 - k;
                        bestsize = k;
                    }
                }
            }
            j2len = next;
        }

        while besti > alo && bestj > blo && self.a[besti - 1] == self.b[bestj - 1] {
            besti -= 1;
            bestj -= 1;
            bestsize += 1;
        }
        while besti + bestsize < ahi
            && bestj + bestsize < bhi
            && self.a[besti + bestsize] == self.b[bestj + bestsize]
        {
            bestsize += 1;
        }

        Match {
            old_index: besti,
            new_index: bestj,
            size: bestsize,
        }
    }

    /// All matching blocks in ascending order, adjacent blocks merged,
    /// terminated by the empty sentinel `(a.len(), b.len(), 0)`.
    pub fn matching_blocks(&self) -> Vec<Match> {
        let (la, lb) = (self.a.len(), self.b.len());

        let mut pending = vec![(0, la, 0, lb)];
        let mut blocks = Vec::new();
        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let m = self.find_longest_match(alo, ahi, blo, bhi);
            if m.size == 0 {
                continue;
            }
            blocks.push(m);
            if alo < m.old_index && blo < m.new_index {
                pending.push((alo, m.old_index, blo, m.new_index));
            }
            if m.old_index + m.size < ahi && m.new_index + m.size < bhi {
                pending.push((m.old_index + m.size, ahi, m.new_index + m.size, bhi));
            }
        }
        blocks.sort();

        let mut merged: Vec<Match> = Vec::with_capacity(blocks.len() + 1);
        for m in blocks {
            if let Some(last) = merged.last_mut() {
                if last.old_index + last.size == m.old_index
                    && last.new_index + last.size == m.new_index
                {
                    last.size += m.size;
                    continue;
                }
            }
            merged.push(m);
        }
        merged.push(Match {
            old_index: la,
            new_index: lb,
            size: 0,
        });

        trace!("{} matching blocks", merged.len() - 1);
        merged
    }

    /// Edit operations turning `a` into `b`, derived from the matching blocks.
    pub fn diff_ops(&self) -> Vec<DiffOp> {
        let (mut i, mut j) = (0, 0);
        let mut ops = Vec::new();

        for m in self.matching_blocks() {
            let old_len = m.old_index - i;
            let new_len = m.new_index - j;
            match (old_len > 0, new_len > 0) {
                (true, true) => ops.push(DiffOp::Replace {
                    old_index: i,
                    old_len,
                    new_index: j,
                    new_len,
                }),
                (true, false) => ops.push(DiffOp::Delete {
                    old_index: i,
                    old_len,
                    new_index: j,
                }),
                (false, true) => ops.push(DiffOp::Insert {
                    old_index: i,
                    new_index: j,
                    new_len,
                }),
                (false, false) => {}
            }

            i = m.old_index + m.size;
            j = m.new_index + m.size;
            if m.size > 0 {
                ops.push(DiffOp::Equal {
                    old_index: m.old_index,
                    new_index: m.new_index,
                    len: m.size,
                });
            }
        }
        ops
    }
}

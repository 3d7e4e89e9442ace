//
// lib.rs
// difftool
//
// Library entry that re-exports modules so the binary and the integration tests can reach argument parsing, the comparators and the unified diff machinery.
//
// Thales Matheus Mendonça Santos - October 2026
//
// Public crate interface: re-export modules used by the binary and tests.
pub mod cli;
pub mod diff;
pub mod error;
pub mod matcher;
pub mod report;
pub mod unified;
pub mod utils;

pub use cli::{build_options, Args, Mode, Options};
pub use diff::{compare_binary, compare_text, run_difftool};
pub use error::ReadError;
pub use matcher::{Match, SequenceMatcher};
pub use report::Outcome;
pub use unified::{group_hunks, unified_diff, Hunk};

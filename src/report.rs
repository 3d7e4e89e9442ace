use std::process::ExitCode;

/// How a comparison ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Identical,
    Differ,
    /// At least one input could not be decoded as text.
    Undecodable,
}

impl Outcome {
    /// Status reported to the shell. Differences and undecodable input both
    /// map to 1, like the UNIX tools this stands in for.
    pub fn code(self) -> u8 {
        match self {
            Outcome::Identical => 0,
            Outcome::Differ | Outcome::Undecodable => 1,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        ExitCode::from(outcome.code())
    }
}

use core::fmt;
use serde::{Deserialize, Serialize};

/// Session lifecycle. `Dealing` and `Scoring` are transient: the fourth
/// join deals immediately and the last card of a hand scores immediately,
/// so callers only ever observe the other four phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Joining,
    Dealing,
    Bidding,
    Tricking,
    Scoring,
    Finished,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Phase::Joining => "joining",
            Phase::Dealing => "dealing",
            Phase::Bidding => "bidding",
            Phase::Tricking => "tricking",
            Phase::Scoring => "scoring",
            Phase::Finished => "finished",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::Phase;

    #[test]
    fn display_uses_lowercase_labels() {
        assert_eq!(Phase::Joining.to_string(), "joining");
        assert_eq!(Phase::Finished.to_string(), "finished");
    }
}

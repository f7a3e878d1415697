use std::fmt;
use std::str::FromStr;

use crate::poll::PollError;

/// One of the fixed answers to "what hurts most without a spec?".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PollOption {
    Onboarding,
    Clarity,
    Misalignment,
    Ambiguity,
}

impl PollOption {
    /// Declared display order.
    pub const ALL: [PollOption; 4] = [
        PollOption::Onboarding,
        PollOption::Clarity,
        PollOption::Misalignment,
        PollOption::Ambiguity,
    ];

    pub fn id(self) -> &'static str {
        match self {
            PollOption::Onboarding => "onboarding",
            PollOption::Clarity => "clarity",
            PollOption::Misalignment => "misalignment",
            PollOption::Ambiguity => "ambiguity",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PollOption::Onboarding => "Developer Onboarding Time",
            PollOption::Clarity => "Feature Clarity",
            PollOption::Misalignment => "Cross-team Misalignment",
            PollOption::Ambiguity => "Bugs from Ambiguity",
        }
    }
}

impl FromStr for PollOption {
    type Err = PollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PollOption::ALL
            .into_iter()
            .find(|option| option.id() == s)
            .ok_or_else(|| PollError::UnknownOption(s.to_string()))
    }
}

impl fmt::Display for PollOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_declared_id() {
        for option in PollOption::ALL {
            assert_eq!(option.id().parse::<PollOption>().unwrap(), option);
        }
    }

    #[test]
    fn rejects_unknown_ids() {
        let err = "vibes".parse::<PollOption>().unwrap_err();
        assert!(matches!(err, PollError::UnknownOption(ref id) if id == "vibes"));
        assert!("Clarity".parse::<PollOption>().is_err());
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// How a person feels about one option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Attitude {
    /// Not answered or skipped.
    #[default]
    Unanswered = 0,
    /// Hard limit; refuse.
    HardLimit = 1,
    /// Undecided or open to negotiation.
    Undecided = 2,
    /// Acceptable.
    Accept = 3,
    /// Core need.
    Core = 4,
}

impl Attitude {
    pub const ALL: [Attitude; 5] = [
        Attitude::Unanswered,
        Attitude::HardLimit,
        Attitude::Undecided,
        Attitude::Accept,
        Attitude::Core,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Attitude::Unanswered => "unanswered",
            Attitude::HardLimit => "hard limit",
            Attitude::Undecided => "undecided",
            Attitude::Accept => "accept",
            Attitude::Core => "core need",
        }
    }

    pub fn is_answered(self) -> bool {
        self != Attitude::Unanswered
    }
}

impl TryFrom<u8> for Attitude {
    type Error = SessionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Attitude::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(SessionError::InvalidAttitude(value))
    }
}

impl From<Attitude> for u8 {
    fn from(attitude: Attitude) -> Self {
        attitude.code()
    }
}

impl fmt::Display for Attitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Attitude {
    type Err = String;

    /// Accepts the numeric code or a name such as `limit` or `core`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if let Ok(code) = lower.parse::<u8>() {
            return Attitude::try_from(code).map_err(|err| err.to_string());
        }
        match lower.as_str() {
            "unanswered" | "none" | "skip" => Ok(Attitude::Unanswered),
            "limit" | "hard-limit" | "no" => Ok(Attitude::HardLimit),
            "undecided" | "maybe" => Ok(Attitude::Undecided),
            "accept" | "yes" => Ok(Attitude::Accept),
            "core" => Ok(Attitude::Core),
            _ => Err(format!("unknown attitude: {s}")),
        }
    }
}

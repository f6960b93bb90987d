//! The six time-of-day phases and their fixed hour table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Minutes in a day, used to wrap the night phase across midnight.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A segment of the day with its own visual and physical preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Night,
    Dawn,
    Morning,
    Afternoon,
    Dusk,
    Evening,
}

impl Default for Phase {
    fn default() -> Self {
        Self::Morning
    }
}

impl Phase {
    /// All phases in cyclic order, starting from night.
    pub const ALL: [Phase; 6] = [
        Phase::Night,
        Phase::Dawn,
        Phase::Morning,
        Phase::Afternoon,
        Phase::Dusk,
        Phase::Evening,
    ];

    /// Resolve the phase active during the given hour of day (0-23).
    ///
    /// Hours outside the day are treated as night.
    pub const fn resolve(hour: u32) -> Self {
        match hour {
            5..=7 => Self::Dawn,
            8..=11 => Self::Morning,
            12..=16 => Self::Afternoon,
            17..=19 => Self::Dusk,
            20..=22 => Self::Evening,
            _ => Self::Night,
        }
    }

    /// The phase that follows this one.
    pub const fn successor(self) -> Self {
        match self {
            Self::Night => Self::Dawn,
            Self::Dawn => Self::Morning,
            Self::Morning => Self::Afternoon,
            Self::Afternoon => Self::Dusk,
            Self::Dusk => Self::Evening,
            Self::Evening => Self::Night,
        }
    }

    /// Minute of day at which this phase ends.
    pub const fn end_minute_of_day(self) -> u32 {
        match self {
            Self::Night => 5 * 60,
            Self::Dawn => 8 * 60,
            Self::Morning => 12 * 60,
            Self::Afternoon => 17 * 60,
            Self::Dusk => 20 * 60,
            Self::Evening => 23 * 60,
        }
    }

    /// Lowercase display name, as used in `##` poem headers.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Night => "night",
            Self::Dawn => "dawn",
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Dusk => "dusk",
            Self::Evening => "evening",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no phase.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown phase name: {0:?}")]
pub struct UnknownPhase(pub String);

impl FromStr for Phase {
    type Err = UnknownPhase;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|phase| phase.name() == lowered)
            .ok_or_else(|| UnknownPhase(s.to_string()))
    }
}

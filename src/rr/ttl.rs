use std::fmt;
use std::str::FromStr;

use crate::error::CompileError;

/// Cache validity duration in seconds, written in base 10 in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeToLive(u32);

impl TimeToLive {
    pub const MAX: TimeToLive = TimeToLive(u32::MAX);
    pub const ZERO: TimeToLive = TimeToLive(0u32);

    pub fn from_secs(secs: u32) -> Self {
        TimeToLive(secs)
    }

    pub fn as_secs(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TimeToLive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TimeToLive {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(TimeToLive).map_err(CompileError::InvalidTtl)
    }
}

impl From<u32> for TimeToLive {
    fn from(value: u32) -> Self {
        TimeToLive(value)
    }
}

impl From<TimeToLive> for u32 {
    fn from(value: TimeToLive) -> Self {
        value.0
    }
}

/// Absolute expiry timestamp ("time to die"), written in base 16 in the
/// input. Not a standard DNS field; it rides along in the encoded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeToDie(u64);

impl TimeToDie {
    pub const NEVER: TimeToDie = TimeToDie(0u64);

    pub fn at(timestamp: u64) -> Self {
        TimeToDie(timestamp)
    }

    pub fn timestamp(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimeToDie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

impl FromStr for TimeToDie {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        u64::from_str_radix(s, 16)
            .map(TimeToDie)
            .map_err(CompileError::InvalidTtd)
    }
}

impl From<u64> for TimeToDie {
    fn from(value: u64) -> Self {
        TimeToDie(value)
    }
}

impl From<TimeToDie> for u64 {
    fn from(value: TimeToDie) -> Self {
        value.0
    }
}

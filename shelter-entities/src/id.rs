use std::{fmt, num::ParseIntError, str::FromStr};

/// Session-wide unique identifier of a shelter.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ShelterId(u64);

impl ShelterId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn to_raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for ShelterId {
    fn from(from: u64) -> Self {
        Self(from)
    }
}

impl From<ShelterId> for u64 {
    fn from(from: ShelterId) -> Self {
        from.0
    }
}

impl FromStr for ShelterId {
    type Err = ParseIntError;
    fn from_str(s: &str) -> Result<ShelterId, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl fmt::Display for ShelterId {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

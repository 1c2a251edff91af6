//! Policy names and dispatch.

use std::fmt;
use std::str::FromStr;

use crate::common::{Error, Result};
use crate::simulator::{fifo, lru, optimal, Simulation};

/// The three replacement policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Policy {
    Fifo,
    Lru,
    Optimal,
}

impl Policy {
    /// Every policy in comparison order. Ties on fault count go to the
    /// earlier entry.
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Lru, Policy::Optimal];

    pub fn name(self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Optimal => "Optimal",
        }
    }

    /// Run this policy over `pages`.
    pub fn simulate<P>(self, pages: &[P], frames: usize, verbose: bool) -> Result<Simulation<P>>
    where
        P: Clone + PartialEq + fmt::Debug,
    {
        match self {
            Policy::Fifo => fifo(pages, frames, verbose),
            Policy::Lru => lru(pages, frames, verbose),
            Policy::Optimal => optimal(pages, frames, verbose),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a policy name, ignoring case.
impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "fifo" => Ok(Policy::Fifo),
            "lru" => Ok(Policy::Lru),
            "optimal" | "opt" => Ok(Policy::Optimal),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}

//! Queue configuration
//!
//! [`Polarity`] picks which extreme of the priority order a queue serves
//! first. [`QueueConfig`] bundles it with sizing hints so a queue can be
//! described by a plain value (and, with the `serde` feature, loaded from a
//! config file).
//!
//! ```rust
//! use heap_queue::{Polarity, QueueConfig};
//!
//! let polarity: Polarity = "MAX".parse().unwrap();
//! assert_eq!(polarity, Polarity::Max);
//!
//! let config = QueueConfig::default().with_polarity(polarity);
//! assert_eq!(config.capacity, 0);
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Which end of the priority order surfaces first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Polarity {
    /// The smallest priority is at the top
    #[default]
    Min,
    /// The largest priority is at the top
    Max,
}

impl Polarity {
    /// The opposite polarity
    pub fn reversed(self) -> Self {
        match self {
            Polarity::Min => Polarity::Max,
            Polarity::Max => Polarity::Min,
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarity::Min => write!(f, "min"),
            Polarity::Max => write!(f, "max"),
        }
    }
}

/// Error from parsing a [`Polarity`] out of a string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown polarity {0:?}, expected \"min\" or \"max\"")]
pub struct ParsePolarityError(String);

impl FromStr for Polarity {
    type Err = ParsePolarityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" => Ok(Polarity::Min),
            "max" => Ok(Polarity::Max),
            _ => Err(ParsePolarityError(s.to_owned())),
        }
    }
}

/// Construction-time settings for a [`PriorityQueue`](crate::queue::PriorityQueue)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QueueConfig {
    /// Which extreme is served first
    pub polarity: Polarity,
    /// Number of entries to reserve up front
    pub capacity: usize,
}

impl QueueConfig {
    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

impl From<Polarity> for QueueConfig {
    fn from(polarity: Polarity) -> Self {
        QueueConfig::default().with_polarity(polarity)
    }
}

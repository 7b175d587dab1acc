//! Network components - stations and the connections between them

use crate::Distance;

/// Station graph node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    /// Unique station name
    pub name: String,
}

impl Station {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Station graph edge (track segment)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    /// Physical distance between the two stations
    pub distance: Distance,
}

impl Connection {
    pub fn distance(&self) -> Distance {
        self.distance
    }
}

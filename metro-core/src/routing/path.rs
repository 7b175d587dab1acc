use itertools::Itertools;
use serde::Serialize;

use crate::Distance;

/// Ordered stations from origin to destination inclusive
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path {
    pub stations: Vec<String>,
    pub total_distance: Distance,
}

impl Path {
    pub fn origin(&self) -> &str {
        self.stations.first().map_or("", String::as_str)
    }

    pub fn destination(&self) -> &str {
        self.stations.last().map_or("", String::as_str)
    }

    /// Number of stations on the path
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Consecutive station pairs
    pub fn segments(&self) -> impl Iterator<Item = (&str, &str)> {
        self.stations
            .iter()
            .map(String::as_str)
            .tuple_windows()
    }
}

//! Shortest path combined with per-segment travel time predictions

use chrono::{Datelike, Local, Timelike};
use log::debug;
use serde::{Deserialize, Serialize};

use super::dijkstra::shortest_path;
use crate::model::MetroNetwork;
use crate::predict::{SegmentQuery, TravelTimeModel, validate_time_features};
use crate::{Distance, Error, Minutes};

/// Conditions a route is travelled under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelConditions {
    /// Hour of the day, 0-23
    pub hour: u8,
    /// Day of the week, 0 = Monday .. 6 = Sunday
    pub day_of_week: u8,
    pub rain: bool,
    /// Special event (concert, match) near the network
    pub event: bool,
}

impl TravelConditions {
    /// # Errors
    ///
    /// Returns `Error::InvalidConditions` if the hour or the day is out of range
    pub fn new(hour: u8, day_of_week: u8, rain: bool, event: bool) -> Result<Self, Error> {
        validate_time_features(hour, day_of_week)?;
        Ok(Self {
            hour,
            day_of_week,
            rain,
            event,
        })
    }

    /// Conditions at the current local hour and weekday
    pub fn now(rain: bool, event: bool) -> Self {
        let now = Local::now();
        // Both values are always in range
        Self {
            hour: now.hour() as u8,
            day_of_week: now.weekday().num_days_from_monday() as u8,
            rain,
            event,
        }
    }
}

/// Predicted travel time of one consecutive station pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentPrediction {
    pub from: String,
    pub to: String,
    pub distance: Distance,
    pub predicted_minutes: Minutes,
}

/// Shortest route between two stations with its predicted travel time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePrediction {
    pub path: Vec<String>,
    pub distance_total: Distance,
    pub predicted_time_total: Minutes,
    pub segments: Vec<SegmentPrediction>,
}

impl RoutePrediction {
    /// Stations between origin and destination
    pub fn intermediate_stations(&self) -> usize {
        self.path.len().saturating_sub(2)
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Finds the shortest route and predicts its travel time segment by segment
///
/// Each segment is predicted with its own distance and the query-level
/// conditions; the route total is the sum of the segment predictions.
///
/// # Errors
///
/// - `Error::NoPath` if the stations are not connected
/// - `Error::UnknownStation` if a station on the path was not seen by the model
/// - `Error::InvalidConditions` for out of range conditions
pub fn predict_route(
    network: &MetroNetwork,
    model: &TravelTimeModel,
    origin: &str,
    destination: &str,
    conditions: &TravelConditions,
) -> Result<RoutePrediction, Error> {
    validate_time_features(conditions.hour, conditions.day_of_week)?;

    let path = shortest_path(network, origin, destination)?;

    let segments = path
        .segments()
        .map(|(from, to)| -> Result<SegmentPrediction, Error> {
            let distance = network.distance_between(from, to).ok_or_else(|| Error::NoPath {
                origin: from.to_string(),
                destination: to.to_string(),
            })?;

            let predicted_minutes = model.predict(&SegmentQuery {
                origin: from,
                destination: to,
                distance,
                hour: conditions.hour,
                day_of_week: conditions.day_of_week,
                rain: conditions.rain,
                event: conditions.event,
            })?;

            Ok(SegmentPrediction {
                from: from.to_string(),
                to: to.to_string(),
                distance,
                predicted_minutes,
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    let predicted_time_total: Minutes = segments.iter().map(|s| s.predicted_minutes).sum();
    debug!(
        "Route {origin} -> {destination}: {} segments, {:.1} minutes",
        segments.len(),
        predicted_time_total
    );

    Ok(RoutePrediction {
        path: path.stations,
        distance_total: path.total_distance,
        predicted_time_total,
        segments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conditions_validate_ranges() {
        assert!(TravelConditions::new(23, 6, true, false).is_ok());
        assert!(matches!(
            TravelConditions::new(24, 0, false, false),
            Err(Error::InvalidConditions(_))
        ));
        assert!(matches!(
            TravelConditions::new(0, 7, false, false),
            Err(Error::InvalidConditions(_))
        ));
    }

    #[test]
    fn current_conditions_are_in_range() {
        let conditions = TravelConditions::now(true, false);
        assert!(conditions.hour < 24);
        assert!(conditions.day_of_week < 7);
        assert!(conditions.rain);
    }

    #[test]
    fn intermediate_station_count() {
        let prediction = RoutePrediction {
            path: vec!["A".into(), "B".into(), "C".into()],
            distance_total: 2.0,
            predicted_time_total: 0.2,
            segments: Vec::new(),
        };
        assert_eq!(prediction.intermediate_stations(), 1);

        let single = RoutePrediction {
            path: vec!["A".into()],
            ..prediction
        };
        assert_eq!(single.intermediate_stations(), 0);
    }
}

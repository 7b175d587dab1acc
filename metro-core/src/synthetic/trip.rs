use serde::{Deserialize, Serialize};

use crate::{Distance, Minutes};

/// Distance units travelled per minute
pub const BASE_SPEED: f64 = 20.0;
pub const PEAK_MULTIPLIER: f64 = 1.5;
pub const RAIN_MULTIPLIER: f64 = 1.3;
/// Bounds of the multiplicative noise, upper bound excluded
pub const NOISE_RANGE: (f64, f64) = (0.9, 1.1);

/// A simulated trip between two directly connected stations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
    pub origin: String,
    pub destination: String,
    pub distance: Distance,
    /// 0-23
    pub hour: u8,
    /// 0 = Monday .. 6 = Sunday
    pub day_of_week: u8,
    pub rain: bool,
    pub event: bool,
    /// Target of the predictor
    pub travel_time: Minutes,
}

/// Rush hours are 7-9 and 17-19 inclusive
pub fn is_peak_hour(hour: u8) -> bool {
    matches!(hour, 7..=9 | 17..=19)
}

pub fn peak_multiplier(hour: u8) -> f64 {
    if is_peak_hour(hour) { PEAK_MULTIPLIER } else { 1.0 }
}

pub fn rain_multiplier(rain: bool) -> f64 {
    if rain { RAIN_MULTIPLIER } else { 1.0 }
}

/// Travel time of the simulation. Events do not change the time.
pub fn simulated_travel_time(distance: Distance, hour: u8, rain: bool, noise: f64) -> Minutes {
    let base = distance / BASE_SPEED;
    base * peak_multiplier(hour) * rain_multiplier(rain) * noise
}

/// Smallest and largest time the simulation can produce for these inputs
pub fn travel_time_bounds(distance: Distance, hour: u8, rain: bool) -> (Minutes, Minutes) {
    (
        simulated_travel_time(distance, hour, rain, NOISE_RANGE.0),
        simulated_travel_time(distance, hour, rain, NOISE_RANGE.1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peak_hours() {
        let peaks: Vec<u8> = (0..24).filter(|&h| is_peak_hour(h)).collect();
        assert_eq!(peaks, vec![7, 8, 9, 17, 18, 19]);
    }

    #[test]
    fn evening_peak_in_rain_bounds() {
        let (min, max) = travel_time_bounds(2000.0, 18, true);
        assert!((min - 175.5).abs() < 1e-9);
        assert!((max - 214.5).abs() < 1e-9);
    }

    #[test]
    fn off_peak_dry_is_base_time() {
        assert!((simulated_travel_time(1000.0, 12, false, 1.0) - 50.0).abs() < 1e-12);
        assert!((simulated_travel_time(1000.0, 8, false, 1.0) - 75.0).abs() < 1e-12);
        assert!((simulated_travel_time(1000.0, 23, true, 1.0) - 65.0).abs() < 1e-12);
    }
}

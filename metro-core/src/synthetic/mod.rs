//! Simulated trips used to train the travel time predictor

mod generator;
mod trip;

pub use generator::generate_trips;
pub use trip::{
    BASE_SPEED, PEAK_MULTIPLIER, RAIN_MULTIPLIER, TripRecord, is_peak_hour, peak_multiplier,
    rain_multiplier, simulated_travel_time, travel_time_bounds,
};

use log::{debug, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::trip::{NOISE_RANGE, TripRecord, simulated_travel_time};
use crate::model::MetroNetwork;

const RAIN_PROBABILITY: f64 = 0.3;
const EVENT_PROBABILITY: f64 = 0.1;

/// Simulates `count` trips over single connections of the network
///
/// Each iteration picks a uniformly random station, a uniformly random
/// neighbor of it, and random conditions. Iterations whose origin has no
/// neighbor are skipped, so fewer than `count` records may be returned.
/// The output only depends on the network and `seed`.
pub fn generate_trips(network: &MetroNetwork, count: usize, seed: u64) -> Vec<TripRecord> {
    let stations: Vec<_> = network.graph.node_indices().collect();
    if stations.is_empty() {
        warn!("Cannot generate trips on an empty network");
        return Vec::new();
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut trips = Vec::with_capacity(count);
    let mut skipped = 0usize;

    for _ in 0..count {
        let origin = stations[rng.random_range(0..stations.len())];
        let neighbors = network.neighbor_nodes(origin);
        if neighbors.is_empty() {
            skipped += 1;
            continue;
        }
        let destination = neighbors[rng.random_range(0..neighbors.len())];

        let (Some(distance), Some(origin_name), Some(destination_name)) = (
            network.edge_distance(origin, destination),
            network.station_name(origin),
            network.station_name(destination),
        ) else {
            skipped += 1;
            continue;
        };

        let hour: u8 = rng.random_range(0..24);
        let rain = rng.random_bool(RAIN_PROBABILITY);
        let event = rng.random_bool(EVENT_PROBABILITY);
        let day_of_week: u8 = rng.random_range(0..7);
        let noise = rng.random_range(NOISE_RANGE.0..NOISE_RANGE.1);

        trips.push(TripRecord {
            origin: origin_name.to_string(),
            destination: destination_name.to_string(),
            distance,
            hour,
            day_of_week,
            rain,
            event,
            travel_time: simulated_travel_time(distance, hour, rain, noise),
        });
    }

    if skipped > 0 {
        debug!("Skipped {skipped} trips starting at isolated stations");
    }

    trips
}

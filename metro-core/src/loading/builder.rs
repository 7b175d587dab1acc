use log::info;

use super::config::MetroModelConfig;
use super::edges::RawConnection;
use super::network_builder::build_graph_with_policy;
use crate::predict::TravelTimeModel;
use crate::synthetic::generate_trips;
use crate::{Error, MetroModel};

/// Creates a metro model from an edge list
///
/// Builds the station graph, simulates `config.trip_count` trips over it and
/// fits the travel time predictor on them.
///
/// # Errors
///
/// Returns an error if the configuration or the edge list is invalid, or if
/// no trips could be generated
pub fn create_metro_model<I, C>(
    connections: I,
    config: &MetroModelConfig,
) -> Result<MetroModel, Error>
where
    I: IntoIterator<Item = C>,
    C: Into<RawConnection>,
{
    config.validate()?;

    info!("Building metro network");
    let network = build_graph_with_policy(connections, config.duplicate_policy)?;
    info!(
        "Network has {} stations and {} connections",
        network.station_count(),
        network.connection_count()
    );

    info!(
        "Generating {} synthetic trips (seed {})",
        config.trip_count, config.seed
    );
    let trips = generate_trips(&network, config.trip_count, config.seed);

    let predictor = TravelTimeModel::fit(network.stations(), &trips, &config.predictor)?;
    if let Some(evaluation) = predictor.evaluation() {
        info!(
            "Travel time model mean absolute error: {:.2} minutes",
            evaluation.mean_absolute_error
        );
    }

    info!("Metro model created successfully");
    Ok(MetroModel::new(network, predictor))
}

use super::network::MetroNetwork;
use crate::predict::TravelTimeModel;
use crate::routing::{Path, RoutePrediction, TravelConditions, predict_route, shortest_path};
use crate::Error;

/// Station graph together with the travel time predictor fitted on it
///
/// Immutable after construction, so it can be shared between threads.
#[derive(Debug, Clone)]
pub struct MetroModel {
    network: MetroNetwork,
    predictor: TravelTimeModel,
}

impl MetroModel {
    pub fn new(network: MetroNetwork, predictor: TravelTimeModel) -> Self {
        Self { network, predictor }
    }

    pub fn network(&self) -> &MetroNetwork {
        &self.network
    }

    pub fn predictor(&self) -> &TravelTimeModel {
        &self.predictor
    }

    pub fn station_count(&self) -> usize {
        self.network.station_count()
    }

    pub fn connection_count(&self) -> usize {
        self.network.connection_count()
    }

    /// # Errors
    ///
    /// Returns `Error::NoPath` if the stations are unknown or not connected
    pub fn shortest_path(&self, origin: &str, destination: &str) -> Result<Path, Error> {
        shortest_path(&self.network, origin, destination)
    }

    /// # Errors
    ///
    /// See [`predict_route`]
    pub fn predict_route(
        &self,
        origin: &str,
        destination: &str,
        conditions: &TravelConditions,
    ) -> Result<RoutePrediction, Error> {
        predict_route(
            &self.network,
            &self.predictor,
            origin,
            destination,
            conditions,
        )
    }
}

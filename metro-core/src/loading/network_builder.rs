use hashbrown::HashSet;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::edges::RawConnection;
use crate::model::{Connection, MetroNetwork};
use crate::{Distance, Error};

/// What to do when the same pair of stations is connected more than once
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Keep the distance of the last declaration
    #[default]
    LastWins,
    /// Fail the construction
    Reject,
}

/// Two-phase network construction: stations are declared first, then every
/// connection is validated against the declared set before the graph is built.
#[derive(Debug, Clone, Default)]
pub struct NetworkBuilder {
    stations: Vec<String>,
    declared: HashSet<String>,
    connections: Vec<RawConnection>,
    policy: DuplicatePolicy,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Declares a station. Declaring the same name twice has no effect.
    pub fn declare_station(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        if self.declared.insert(name.clone()) {
            self.stations.push(name);
        }
        self
    }

    pub fn add_connection(
        &mut self,
        origin: impl Into<String>,
        destination: impl Into<String>,
        distance: Distance,
    ) -> &mut Self {
        self.connections.push(RawConnection {
            origin: origin.into(),
            destination: destination.into(),
            distance,
        });
        self
    }

    /// Builds the network
    ///
    /// # Errors
    ///
    /// - `Error::InvalidData` if there are no connections or a declared station name is empty
    /// - `Error::InvalidConnection` for negative or non-finite distances and self loops
    /// - `Error::UnknownStation` if a connection references an undeclared station
    /// - `Error::DuplicateConnection` for repeated pairs under `DuplicatePolicy::Reject`
    pub fn build(&self) -> Result<MetroNetwork, Error> {
        if self.connections.is_empty() {
            return Err(Error::InvalidData(
                "Cannot build a network from an empty edge list".to_string(),
            ));
        }
        for connection in &self.connections {
            self.validate_connection(connection)?;
        }
        if self.stations.iter().any(String::is_empty) {
            return Err(Error::InvalidData(
                "Station names must not be empty".to_string(),
            ));
        }

        let mut network = MetroNetwork::with_capacity(self.stations.len(), self.connections.len());
        for name in &self.stations {
            network.insert_station(name);
        }

        for connection in &self.connections {
            let a = network.insert_station(&connection.origin);
            let b = network.insert_station(&connection.destination);
            let weight = Connection {
                distance: connection.distance,
            };

            match network.graph.find_edge(a, b) {
                None => {
                    network.graph.add_edge(a, b, weight);
                }
                Some(_) if self.policy == DuplicatePolicy::Reject => {
                    return Err(Error::DuplicateConnection(
                        connection.origin.clone(),
                        connection.destination.clone(),
                    ));
                }
                Some(edge) => {
                    let previous = network.graph[edge].distance;
                    if (previous - connection.distance).abs() > f64::EPSILON {
                        warn!(
                            "Connection {} - {} declared again with distance {} (was {previous}), keeping the last one",
                            connection.origin, connection.destination, connection.distance
                        );
                    }
                    network.graph[edge] = weight;
                }
            }
        }

        debug!(
            "Built network with {} stations and {} connections",
            network.station_count(),
            network.connection_count()
        );

        Ok(network)
    }

    fn validate_connection(&self, connection: &RawConnection) -> Result<(), Error> {
        let invalid = |reason: String| Error::InvalidConnection {
            origin: connection.origin.clone(),
            destination: connection.destination.clone(),
            reason,
        };

        if connection.origin.is_empty() || connection.destination.is_empty() {
            return Err(invalid("station name is empty".to_string()));
        }
        if connection.origin == connection.destination {
            return Err(invalid("connection joins a station to itself".to_string()));
        }
        if !connection.distance.is_finite() || connection.distance < 0.0 {
            return Err(invalid(format!(
                "distance must be a non-negative number, got {}",
                connection.distance
            )));
        }

        for name in [&connection.origin, &connection.destination] {
            if !self.declared.contains(name.as_str()) {
                return Err(Error::UnknownStation(name.clone()));
            }
        }

        Ok(())
    }
}

/// Builds an undirected station graph from an edge list
///
/// Stations are collected from the connection endpoints in the order they
/// are first referenced. Repeated pairs keep the last declared distance.
///
/// # Errors
///
/// See [`NetworkBuilder::build`]
pub fn build_graph<I, C>(connections: I) -> Result<MetroNetwork, Error>
where
    I: IntoIterator<Item = C>,
    C: Into<RawConnection>,
{
    build_graph_with_policy(connections, DuplicatePolicy::default())
}

/// Same as [`build_graph`] with an explicit duplicate policy
///
/// # Errors
///
/// See [`NetworkBuilder::build`]
pub fn build_graph_with_policy<I, C>(
    connections: I,
    policy: DuplicatePolicy,
) -> Result<MetroNetwork, Error>
where
    I: IntoIterator<Item = C>,
    C: Into<RawConnection>,
{
    let mut builder = NetworkBuilder::new().duplicate_policy(policy);
    for connection in connections {
        let connection: RawConnection = connection.into();
        builder
            .declare_station(connection.origin.as_str())
            .declare_station(connection.destination.as_str())
            .add_connection(connection.origin, connection.destination, connection.distance);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_undirected_graph() {
        let network = build_graph([("A", "B", 3.0), ("B", "C", 4.0)]).unwrap();
        assert_eq!(network.station_count(), 3);
        assert_eq!(network.connection_count(), 2);
        assert_eq!(network.stations().collect::<Vec<_>>(), vec!["A", "B", "C"]);
        assert_eq!(network.distance_between("C", "B"), Some(4.0));
    }

    #[test]
    fn rejects_empty_edge_list() {
        let edges: Vec<(&str, &str, f64)> = Vec::new();
        assert!(matches!(build_graph(edges), Err(Error::InvalidData(_))));
    }

    #[test]
    fn rejects_negative_and_nan_distances() {
        assert!(matches!(
            build_graph([("A", "B", -1.0)]),
            Err(Error::InvalidConnection { .. })
        ));
        assert!(matches!(
            build_graph([("A", "B", f64::NAN)]),
            Err(Error::InvalidConnection { .. })
        ));
        assert!(build_graph([("A", "B", 0.0)]).is_ok());
    }

    #[test]
    fn rejects_self_loops_and_empty_names() {
        assert!(matches!(
            build_graph([("A", "A", 1.0)]),
            Err(Error::InvalidConnection { .. })
        ));
        assert!(matches!(
            build_graph([("", "A", 1.0)]),
            Err(Error::InvalidConnection { .. })
        ));
    }

    #[test]
    fn duplicate_pair_keeps_last_distance() {
        let network = build_graph([("A", "B", 3.0), ("B", "A", 7.0)]).unwrap();
        assert_eq!(network.connection_count(), 1);
        assert_eq!(network.distance_between("A", "B"), Some(7.0));
    }

    #[test]
    fn duplicate_pair_rejected_on_request() {
        let result = build_graph_with_policy(
            [("A", "B", 3.0), ("B", "A", 7.0)],
            DuplicatePolicy::Reject,
        );
        assert!(matches!(result, Err(Error::DuplicateConnection(a, b)) if a == "B" && b == "A"));
    }

    #[test]
    fn undeclared_station_is_rejected() {
        let mut builder = NetworkBuilder::new();
        builder
            .declare_station("A")
            .add_connection("A", "B", 1.0);
        assert!(matches!(builder.build(), Err(Error::UnknownStation(name)) if name == "B"));
    }

    #[test]
    fn declared_isolated_station_is_kept() {
        let mut builder = NetworkBuilder::new();
        builder
            .declare_station("A")
            .declare_station("B")
            .declare_station("Island")
            .add_connection("A", "B", 1.0);
        let network = builder.build().unwrap();
        assert_eq!(network.station_count(), 3);
        assert!(network.neighbors("Island").unwrap().is_empty());
    }
}

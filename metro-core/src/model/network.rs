use hashbrown::HashMap;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use super::components::{Connection, Station};
use crate::{Distance, Error};

pub type MetroGraph = UnGraph<Station, Connection>;

/// Undirected station graph with a lookup table from station name to node
#[derive(Debug, Clone, Default)]
pub struct MetroNetwork {
    pub(crate) graph: MetroGraph,
    pub(crate) index: HashMap<String, NodeIndex>,
}

impl MetroNetwork {
    pub(crate) fn with_capacity(stations: usize, connections: usize) -> Self {
        Self {
            graph: MetroGraph::with_capacity(stations, connections),
            index: HashMap::with_capacity(stations),
        }
    }

    /// Returns the node of the station, inserting it if it is not known yet
    pub(crate) fn insert_station(&mut self, name: &str) -> NodeIndex {
        if let Some(&node) = self.index.get(name) {
            return node;
        }
        let node = self.graph.add_node(Station::new(name));
        self.index.insert(name.to_string(), node);
        node
    }

    pub fn graph(&self) -> &MetroGraph {
        &self.graph
    }

    pub fn station_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn connection_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains_station(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn station_index(&self, name: &str) -> Option<NodeIndex> {
        self.index.get(name).copied()
    }

    pub fn station_name(&self, node: NodeIndex) -> Option<&str> {
        self.graph.node_weight(node).map(|station| station.name.as_str())
    }

    /// Station names in the order they were first declared
    pub fn stations(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(|station| station.name.as_str())
    }

    /// Names of the stations directly connected to `name`
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownStation` if the station is not part of the network
    pub fn neighbors(&self, name: &str) -> Result<Vec<&str>, Error> {
        let node = self
            .station_index(name)
            .ok_or_else(|| Error::UnknownStation(name.to_string()))?;

        Ok(self
            .neighbor_nodes(node)
            .into_iter()
            .filter_map(|next| self.station_name(next))
            .collect())
    }

    /// Distance of the direct connection between two stations, if there is one
    pub fn distance_between(&self, a: &str, b: &str) -> Option<Distance> {
        let (a, b) = (self.station_index(a)?, self.station_index(b)?);
        self.edge_distance(a, b)
    }

    /// Adjacent nodes ordered by node index
    pub(crate) fn neighbor_nodes(&self, node: NodeIndex) -> Vec<NodeIndex> {
        let mut neighbors: Vec<NodeIndex> = self.graph.neighbors(node).collect();
        neighbors.sort_unstable();
        neighbors.dedup();
        neighbors
    }

    pub(crate) fn edge_distance(&self, a: NodeIndex, b: NodeIndex) -> Option<Distance> {
        self.graph
            .find_edge(a, b)
            .and_then(|edge| self.graph.edge_weight(edge))
            .map(Connection::distance)
    }

    /// Connections leaving `node` as (neighbor, distance) pairs
    pub(crate) fn connections(
        &self,
        node: NodeIndex,
    ) -> impl Iterator<Item = (NodeIndex, Distance)> + '_ {
        self.graph.edges(node).map(move |edge| {
            // Undirected edges may be stored in either orientation
            let next = if edge.source() == node {
                edge.target()
            } else {
                edge.source()
            };
            (next, edge.weight().distance)
        })
    }
}

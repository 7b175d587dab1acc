use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;
use hashbrown::HashMap;
use log::debug;
use petgraph::graph::NodeIndex;

use super::state::State;
use crate::model::MetroNetwork;
use crate::routing::Path;
use crate::{Distance, Error};

/// Distances and predecessors of every node settled by a Dijkstra run
#[derive(Debug, Clone)]
pub(crate) struct ShortestPathTree {
    start: NodeIndex,
    distances: HashMap<NodeIndex, Distance>,
    predecessors: HashMap<NodeIndex, NodeIndex>,
}

impl ShortestPathTree {
    pub(crate) fn distance_to(&self, node: NodeIndex) -> Option<Distance> {
        self.distances.get(&node).copied()
    }

    /// Nodes from the start to `target` inclusive, if `target` was reached
    pub(crate) fn path_to(&self, target: NodeIndex) -> Option<Vec<NodeIndex>> {
        if !self.distances.contains_key(&target) {
            return None;
        }

        // Follow predecessors backward from target to start
        let mut nodes = vec![target];
        let mut current = target;
        while current != self.start {
            current = *self.predecessors.get(&current)?;
            nodes.push(current);
        }
        nodes.reverse();
        Some(nodes)
    }
}

/// Dijkstra's algorithm over connection distances
///
/// Stops as soon as `target` is settled. Without a target the whole
/// component of `start` is explored.
pub(crate) fn dijkstra_tree(
    network: &MetroNetwork,
    start: NodeIndex,
    target: Option<NodeIndex>,
) -> ShortestPathTree {
    let node_count = network.station_count();
    let mut distances: HashMap<NodeIndex, Distance> = HashMap::with_capacity(node_count);
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::with_capacity(node_count);
    let mut settled = FixedBitSet::with_capacity(node_count);
    let mut heap = BinaryHeap::with_capacity(node_count);

    // Start node has distance 0
    heap.push(State {
        cost: 0.0,
        node: start,
    });
    distances.insert(start, 0.0);

    while let Some(State { cost, node }) = heap.pop() {
        // Stale heap entry, a shorter path was already settled
        if settled.put(node.index()) {
            continue;
        }

        if target == Some(node) {
            break;
        }

        for (next, distance) in network.connections(node) {
            if settled.contains(next.index()) {
                continue;
            }
            let next_cost = cost + distance;

            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    predecessors.insert(next, node);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        predecessors.insert(next, node);
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                    }
                }
            }
        }
    }

    // Tentative distances of unsettled nodes are not shortest paths
    distances.retain(|node, _| settled.contains(node.index()));

    ShortestPathTree {
        start,
        distances,
        predecessors,
    }
}

fn resolve_endpoints(
    network: &MetroNetwork,
    origin: &str,
    destination: &str,
) -> Result<(NodeIndex, NodeIndex), Error> {
    let no_path = || Error::NoPath {
        origin: origin.to_string(),
        destination: destination.to_string(),
    };

    let Some(start) = network.station_index(origin) else {
        debug!("Origin station '{origin}' is not part of the network");
        return Err(no_path());
    };
    let Some(end) = network.station_index(destination) else {
        debug!("Destination station '{destination}' is not part of the network");
        return Err(no_path());
    };

    Ok((start, end))
}

/// Finds the path with the minimum total distance between two stations
///
/// # Errors
///
/// Returns `Error::NoPath` if either station is unknown or the stations are
/// not connected
pub fn shortest_path(network: &MetroNetwork, origin: &str, destination: &str) -> Result<Path, Error> {
    let (start, end) = resolve_endpoints(network, origin, destination)?;
    let tree = dijkstra_tree(network, start, Some(end));

    let (Some(nodes), Some(total_distance)) = (tree.path_to(end), tree.distance_to(end)) else {
        debug!("Stations '{origin}' and '{destination}' are not connected");
        return Err(Error::NoPath {
            origin: origin.to_string(),
            destination: destination.to_string(),
        });
    };

    let stations = nodes
        .into_iter()
        .filter_map(|node| network.station_name(node).map(str::to_string))
        .collect();

    Ok(Path {
        stations,
        total_distance,
    })
}

/// Total distance of the shortest path between two stations
///
/// # Errors
///
/// Same as [`shortest_path`]
pub fn shortest_path_length(
    network: &MetroNetwork,
    origin: &str,
    destination: &str,
) -> Result<Distance, Error> {
    let (start, end) = resolve_endpoints(network, origin, destination)?;
    dijkstra_tree(network, start, Some(end))
        .distance_to(end)
        .ok_or_else(|| Error::NoPath {
            origin: origin.to_string(),
            destination: destination.to_string(),
        })
}

//! This module is responsible for reading edge lists, building the station
//! graph and assembling a fitted metro model.

mod builder;
mod config;
pub mod edges;
mod network_builder;
pub mod sample;

pub use builder::create_metro_model;
pub use config::MetroModelConfig;
pub use edges::{RawConnection, connections_from_reader, load_connections_csv};
pub use network_builder::{DuplicatePolicy, NetworkBuilder, build_graph, build_graph_with_policy};
pub use sample::medellin_metro_connections;

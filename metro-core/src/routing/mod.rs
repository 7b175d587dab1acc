//! Routing over the station graph: shortest paths and predicted travel times

pub mod dijkstra;
mod path;
pub mod predictive;

pub use dijkstra::{shortest_path, shortest_path_length};
pub use path::Path;
pub use predictive::{RoutePrediction, SegmentPrediction, TravelConditions, predict_route};

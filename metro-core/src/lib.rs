//! Core of the metro router: a station graph with shortest-path queries
//! and a travel time predictor trained on simulated trips.

pub mod error;
pub mod loading;
pub mod model;
pub mod predict;
pub mod prelude;
pub mod routing;
pub mod synthetic;

pub use error::Error;
pub use loading::{
    DuplicatePolicy, MetroModelConfig, NetworkBuilder, build_graph, create_metro_model,
};
pub use model::{Connection, MetroModel, MetroNetwork, Station};
pub use predict::{PredictorConfig, SegmentQuery, TravelTimeModel};
pub use routing::{
    Path, RoutePrediction, SegmentPrediction, TravelConditions, predict_route, shortest_path,
    shortest_path_length,
};
pub use synthetic::{TripRecord, generate_trips};

/// Distance between stations, in the unit of the edge list (meters in the sample data)
pub type Distance = f64;
/// Travel time in minutes
pub type Minutes = f64;
/// Index of a station inside the network graph
pub type StationIdx = petgraph::graph::NodeIndex;

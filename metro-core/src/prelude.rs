pub use crate::Error;

// Re-export key components
pub use crate::loading::{
    DuplicatePolicy, MetroModelConfig, NetworkBuilder, RawConnection, build_graph,
    build_graph_with_policy, connections_from_reader, create_metro_model, load_connections_csv,
    medellin_metro_connections,
};
pub use crate::model::{MetroModel, MetroNetwork};
pub use crate::predict::{ForestConfig, PredictorConfig, SegmentQuery, TravelTimeModel};
pub use crate::routing::{
    Path, RoutePrediction, SegmentPrediction, TravelConditions, predict_route, shortest_path,
    shortest_path_length,
};
pub use crate::synthetic::{TripRecord, generate_trips};

// Core scalar types
pub use crate::Distance; // meters in the sample data
pub use crate::Minutes;

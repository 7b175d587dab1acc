//! Travel time prediction: station encoding, feature scaling and a random
//! forest regressor fitted on simulated trips.

mod encoder;
mod evaluation;
pub mod forest;
mod model;
mod scaler;

pub use encoder::StationEncoder;
pub use evaluation::{Evaluation, mean_absolute_error, train_test_split};
pub use forest::{ForestConfig, RandomForest, RegressionTree};
pub use model::{FEATURE_COUNT, PredictorConfig, SegmentQuery, TravelTimeModel};
pub(crate) use model::validate_time_features;
pub use scaler::StandardScaler;

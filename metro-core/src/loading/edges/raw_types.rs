use serde::{Deserialize, Serialize};

use crate::Distance;

/// One row of an edge list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawConnection {
    pub origin: String,
    pub destination: String,
    pub distance: Distance,
}

impl<S: Into<String>> From<(S, S, Distance)> for RawConnection {
    fn from((origin, destination, distance): (S, S, Distance)) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            distance,
        }
    }
}

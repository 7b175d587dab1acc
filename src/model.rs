use metro_core::prelude::*;

use pyo3::prelude::*;
#[cfg(feature = "stubgen")]
use pyo3_stub_gen::derive::{gen_stub_pyclass, gen_stub_pyfunction, gen_stub_pymethods};

use crate::routing::{PyRoutePrediction, to_py_err};

/// MetroModel
///
/// A station graph together with a travel time predictor fitted on
/// simulated trips over it.
///
/// The model is immutable once created: queries never refit the predictor,
/// so a single model can serve any number of routing requests.
///
/// Example:
///
/// .. code-block:: python
///
///     model = create_metro_model(medellin_connections())
///     path, distance = model.shortest_path("Niquia", "Estadio")
///     prediction = model.predict_route("Niquia", "Estadio", hour=18, rain=True)
#[cfg_attr(feature = "stubgen", gen_stub_pyclass)]
#[pyclass(name = "MetroModel", frozen)]
pub struct PyMetroModel {
    pub(crate) model: MetroModel,
}

#[cfg_attr(feature = "stubgen", gen_stub_pymethods)]
#[pymethods]
impl PyMetroModel {
    pub fn station_count(&self) -> usize {
        self.model.station_count()
    }

    pub fn connection_count(&self) -> usize {
        self.model.connection_count()
    }

    /// Station names in declaration order
    pub fn stations(&self) -> Vec<String> {
        self.model
            .network()
            .stations()
            .map(str::to_string)
            .collect()
    }

    /// Mean absolute error (minutes) of the predictor on held out trips
    pub fn mean_absolute_error(&self) -> Option<f64> {
        self.model
            .predictor()
            .evaluation()
            .map(|evaluation| evaluation.mean_absolute_error)
    }

    /// Shortest path between two stations
    ///
    /// Returns
    /// -------
    /// tuple[list[str], float]
    ///     Stations from origin to destination and the total distance
    ///
    /// Raises
    /// ------
    /// NoPathError
    ///     If the stations are unknown or not connected
    pub fn shortest_path(&self, origin: &str, destination: &str) -> PyResult<(Vec<String>, f64)> {
        let path = self
            .model
            .shortest_path(origin, destination)
            .map_err(to_py_err)?;
        Ok((path.stations, path.total_distance))
    }

    /// Shortest route with predicted travel time per segment
    ///
    /// Parameters
    /// ----------
    /// origin : str
    /// destination : str
    /// hour : int, optional
    ///     Hour of the day (0-23). Defaults to the current local hour.
    /// day_of_week : int, optional
    ///     0 = Monday .. 6 = Sunday. Defaults to the current local weekday.
    /// rain : bool, default=False
    /// event : bool, default=False
    ///
    /// Raises
    /// ------
    /// NoPathError
    ///     If the stations are unknown or not connected
    /// ValueError
    ///     If hour or day_of_week are out of range
    #[pyo3(signature = (origin, destination, hour=None, day_of_week=None, rain=false, event=false))]
    pub fn predict_route(
        &self,
        origin: &str,
        destination: &str,
        hour: Option<u8>,
        day_of_week: Option<u8>,
        rain: bool,
        event: bool,
    ) -> PyResult<PyRoutePrediction> {
        let now = TravelConditions::now(rain, event);
        let conditions = TravelConditions::new(
            hour.unwrap_or(now.hour),
            day_of_week.unwrap_or(now.day_of_week),
            rain,
            event,
        )
        .map_err(to_py_err)?;

        let prediction = self
            .model
            .predict_route(origin, destination, &conditions)
            .map_err(to_py_err)?;

        Ok(PyRoutePrediction { inner: prediction })
    }

    fn __repr__(&self) -> String {
        format!(
            "MetroModel with {} stations and {} connections",
            self.model.station_count(),
            self.model.connection_count()
        )
    }

    fn __str__(&self) -> String {
        self.__repr__()
    }
}

/// Create a metro model from an edge list
///
/// This function:
/// 1. Builds the undirected station graph from the connections
/// 2. Simulates trips over single connections
/// 3. Fits the travel time predictor on the simulated trips
///
/// Parameters
/// ----------
/// connections : list[tuple[str, str, float]]
///     (origin, destination, distance) triples
/// trip_count : int, default=5000
///     Number of simulated trips used for training
/// seed : int, default=42
///     Seed of the trip simulation
/// n_trees : int, default=100
///     Number of trees of the random forest
/// reject_duplicates : bool, default=False
///     Fail if a pair of stations is connected twice instead of keeping
///     the last declared distance
///
/// Returns
/// -------
/// MetroModel
///
/// Raises
/// ------
/// RuntimeError
///     If the edge list is invalid or the model cannot be fitted
///
/// Notes
/// -----
/// The function releases the GIL while fitting the model.
#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction(name = "create_metro_model")]
#[pyo3(signature = (connections, trip_count = 5000, seed = 42, n_trees = 100, reject_duplicates = false))]
pub fn py_create_metro_model(
    py: Python<'_>,
    connections: Vec<(String, String, f64)>,
    trip_count: usize,
    seed: u64,
    n_trees: usize,
    reject_duplicates: bool,
) -> PyResult<PyMetroModel> {
    let config = MetroModelConfig {
        trip_count,
        seed,
        duplicate_policy: if reject_duplicates {
            DuplicatePolicy::Reject
        } else {
            DuplicatePolicy::LastWins
        },
        predictor: PredictorConfig {
            forest: ForestConfig {
                n_trees,
                ..ForestConfig::default()
            },
            ..PredictorConfig::default()
        },
    };

    py.detach(|| {
        let model = metro_core::create_metro_model(connections, &config).map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                "Failed to create metro model: {e}"
            ))
        })?;

        Ok(PyMetroModel { model })
    })
}

/// Connections of the sample Medellin metro network (distances are not real)
#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction(name = "medellin_connections")]
pub fn py_medellin_connections() -> Vec<(String, String, f64)> {
    medellin_metro_connections()
        .into_iter()
        .map(|(origin, destination, distance)| {
            (origin.to_string(), destination.to_string(), distance)
        })
        .collect()
}

use metro_core::prelude::*;

use pyo3::prelude::*;
#[cfg(feature = "stubgen")]
use pyo3_stub_gen::derive::{gen_stub_pyclass, gen_stub_pymethods};

use crate::{NoPathError, UnknownStationError};

/// Maps core errors to Python exceptions
pub(crate) fn to_py_err(error: Error) -> PyErr {
    match error {
        Error::NoPath { .. } => NoPathError::new_err(error.to_string()),
        Error::UnknownStation(_) => UnknownStationError::new_err(error.to_string()),
        other => PyErr::new::<pyo3::exceptions::PyValueError, _>(other.to_string()),
    }
}

/// Shortest route between two stations with its predicted travel time
#[cfg_attr(feature = "stubgen", gen_stub_pyclass)]
#[pyclass(name = "RoutePrediction", frozen)]
pub struct PyRoutePrediction {
    pub inner: RoutePrediction,
}

#[cfg_attr(feature = "stubgen", gen_stub_pymethods)]
#[pymethods]
impl PyRoutePrediction {
    /// Stations from origin to destination
    #[getter]
    pub fn path(&self) -> Vec<String> {
        self.inner.path.clone()
    }

    #[getter]
    pub fn distance_total(&self) -> f64 {
        self.inner.distance_total
    }

    /// Sum of the segment predictions in minutes
    #[getter]
    pub fn predicted_time_total(&self) -> f64 {
        self.inner.predicted_time_total
    }

    /// (from, to, predicted minutes) for every consecutive pair of the path
    #[getter]
    pub fn segments(&self) -> Vec<(String, String, f64)> {
        self.inner
            .segments
            .iter()
            .map(|segment| {
                (
                    segment.from.clone(),
                    segment.to.clone(),
                    segment.predicted_minutes,
                )
            })
            .collect()
    }

    #[getter]
    pub fn intermediate_stations(&self) -> usize {
        self.inner.intermediate_stations()
    }

    pub fn as_json(&self) -> PyResult<String> {
        self.inner.to_json().map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                "Failed to serialize RoutePrediction to JSON: {e}"
            ))
        })
    }

    fn __repr__(&self) -> PyResult<String> {
        self.as_json()
    }

    fn __str__(&self) -> String {
        format!(
            "{} | {} | {:.1} minutes",
            self.inner.path.join(" -> "),
            self.inner.distance_total,
            self.inner.predicted_time_total
        )
    }
}

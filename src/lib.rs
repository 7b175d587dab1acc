use pyo3::prelude::*;

use model::{PyMetroModel, py_create_metro_model, py_medellin_connections};
use routing::PyRoutePrediction;

pub mod model;
pub mod routing;

pyo3::create_exception!(
    metro,
    NoPathError,
    pyo3::exceptions::PyValueError,
    "Raised when two stations are not connected or a station is unknown."
);
pyo3::create_exception!(
    metro,
    UnknownStationError,
    pyo3::exceptions::PyValueError,
    "Raised when a station was not part of the network the model was fitted on."
);

/// A Python module implemented in Rust.
#[pymodule]
fn metro(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();

    m.add_class::<PyMetroModel>()?;
    m.add_class::<PyRoutePrediction>()?;
    m.add_function(wrap_pyfunction!(py_create_metro_model, m)?)?;
    m.add_function(wrap_pyfunction!(py_medellin_connections, m)?)?;

    m.add("NoPathError", m.py().get_type::<NoPathError>())?;
    m.add("UnknownStationError", m.py().get_type::<UnknownStationError>())?;
    Ok(())
}

#[cfg(feature = "stubgen")]
pyo3_stub_gen::define_stub_info_gatherer!(stub_info);

// Python bindings, built with `--features python`.
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::dispatch::read_package;
use crate::report::Summary;

fn summarize(code: &str, params: &[f64]) -> PyResult<Summary> {
    read_package(code, params)
        .and_then(|w| w.summary())
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Summary line for one sensor package, e.g. `workout_summary("RUN", [15000, 1, 75])`.
#[pyfunction]
fn workout_summary(code: &str, params: Vec<f64>) -> PyResult<String> {
    Ok(summarize(code, &params)?.message())
}

/// Same as `workout_summary`, but as a JSON object.
#[pyfunction]
fn workout_summary_json(code: &str, params: Vec<f64>) -> PyResult<String> {
    let summary = summarize(code, &params)?;
    serde_json::to_string(&summary).map_err(|e| PyValueError::new_err(e.to_string()))
}

#[pymodule]
fn workout_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(workout_summary, m)?)?;
    m.add_function(wrap_pyfunction!(workout_summary_json, m)?)?;
    Ok(())
}

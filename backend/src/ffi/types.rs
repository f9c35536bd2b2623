//! Type conversion utilities for FFI boundary

use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::models::Tally;

/// Convert a tally to a Python dict with `success` then `fail` keys
pub fn tally_to_py(py: Python<'_>, tally: &Tally) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new_bound(py);
    for (label, count) in tally.entries() {
        dict.set_item(label, count)?;
    }
    Ok(dict.unbind())
}

/// Outcomes copied into a Python list, or `float('nan')` when there are none
pub fn outcomes_to_py(py: Python<'_>, outcomes: Option<&[bool]>) -> PyObject {
    match outcomes {
        Some(outcomes) => outcomes.to_vec().into_py(py),
        None => f64::NAN.into_py(py),
    }
}

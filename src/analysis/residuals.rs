use crate::sim::{OutputTable, Sample};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Holds an observed tectonic subsidence (e.g., from backstripping a well)
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct Observation {
    /// Age (Ma)
    pub age: f64,

    /// Tectonic subsidence (m)
    pub subsidence: f64,

    /// Depth due to dynamic topography (m)
    pub dynamic_topography: f64,
}

impl Observation {
    /// Reads a JSON file containing an array of observations
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Vec<Self>, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let input = File::open(path).map_err(|_| "cannot open file")?;
        let buffered = BufReader::new(input);
        let observations = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        Ok(observations)
    }
}

/// Interpolates the subsidence of a curve at a given age
///
/// The samples must be sorted by decreasing time (i.e., increasing dimensionless time).
/// Ages outside the curve take the value of the nearest end.
pub fn interpolate(group: &[Sample], age: f64) -> Result<f64, StrError> {
    let first = group.first().ok_or("cannot interpolate an empty curve")?;
    if age >= first.time {
        return Ok(first.subsidence);
    }
    for pair in group.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if age >= b.time {
            let span = a.time - b.time;
            if span <= 0.0 {
                return Ok(b.subsidence);
            }
            let w = (a.time - age) / span;
            return Ok(a.subsidence + w * (b.subsidence - a.subsidence));
        }
    }
    match group.last() {
        Some(last) => Ok(last.subsidence),
        None => Err("cannot interpolate an empty curve"),
    }
}

/// Computes the residuals between observed and modelled subsidence (m)
///
/// ```text
/// residual = observed - dynamic_topography - model - offset
/// ```
///
/// The modelled subsidence of the (dimensional) curve is given in km.
pub fn residuals(group: &[Sample], observations: &[Observation], offset: f64) -> Result<Vec<f64>, StrError> {
    observations
        .iter()
        .map(|obs| {
            let model = interpolate(group, obs.age)? * 1000.0;
            Ok(obs.subsidence - obs.dynamic_topography - model - offset)
        })
        .collect()
}

/// Returns the absolute value of the mean residual
pub fn mean_residual(residuals: &[f64]) -> Result<f64, StrError> {
    if residuals.is_empty() {
        return Err("there are no residuals to average");
    }
    let mean = residuals.iter().sum::<f64>() / (residuals.len() as f64);
    Ok(f64::abs(mean))
}

/// Returns the absolute value of the mean residual of each curve in the table
pub fn mean_residuals(table: &OutputTable, observations: &[Observation], offset: f64) -> Result<Vec<f64>, StrError> {
    if !table.dimensional {
        return Err("the output table must be given in dimensional units");
    }
    table
        .groups()
        .iter()
        .map(|group| mean_residual(&residuals(group, observations, offset)?))
        .collect()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

use super::{mean_residuals, Observation};
use crate::base::{Parameters, SWEEP_COUNT_SLACK};
use crate::sim::run_simulation;
use crate::StrError;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Holds the range of onset times of the first rifting episode
///
/// The onsets run from `t_begin_max` down to (but excluding) `t_begin_min` in steps of
/// `t_begin_inc`, while the end of the first episode is kept fixed.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct OnsetSweep {
    /// Oldest onset (Ma)
    pub t_begin_max: f64,

    /// Youngest onset (Ma); excluded
    pub t_begin_min: f64,

    /// Decrement between onsets (Myr)
    pub t_begin_inc: f64,
}

/// Holds the mean residuals of an onset sweep
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct OnsetSweepResults {
    /// Onset times of the first episode (Ma)
    pub onsets: Vec<f64>,

    /// Durations of the first episode (Myr)
    pub durations: Vec<f64>,

    /// Stretching factors of the first episode
    pub betas: Vec<f64>,

    /// Absolute value of the mean residual (m); one row per onset and one column per beta
    pub residuals: Vec<Vec<f64>>,
}

impl OnsetSweep {
    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        for (name, value) in [
            ("t_begin_max", self.t_begin_max),
            ("t_begin_min", self.t_begin_min),
            ("t_begin_inc", self.t_begin_inc),
        ] {
            if !value.is_finite() {
                return Some(format!("{} = {:?} is incorrect; it must be finite", name, value));
            }
        }
        if self.t_begin_inc <= 0.0 {
            return Some(format!(
                "t_begin_inc = {:?} is incorrect; it must be > 0.0",
                self.t_begin_inc
            ));
        }
        if self.t_begin_max <= self.t_begin_min {
            return Some(format!(
                "t_begin_max = {:?} is incorrect; it must be > t_begin_min = {:?}",
                self.t_begin_max, self.t_begin_min
            ));
        }
        None // all good
    }

    /// Returns the onset times
    pub fn onsets(&self) -> Vec<f64> {
        let n = f64::ceil((self.t_begin_max - self.t_begin_min) / self.t_begin_inc - SWEEP_COUNT_SLACK) as usize;
        (0..n).map(|k| self.t_begin_max - (k as f64) * self.t_begin_inc).collect()
    }

    /// Runs one simulation per onset time (in parallel) and computes the mean residuals
    ///
    /// # Input
    ///
    /// * `parameters` -- the simulation parameters; the onset of the first episode is replaced
    /// * `observations` -- the observed tectonic subsidence
    /// * `offset` -- constant offset (m) subtracted from the residuals
    pub fn run(
        &self,
        parameters: &Parameters,
        observations: &[Observation],
        offset: f64,
    ) -> Result<OnsetSweepResults, StrError> {
        if let Some(msg) = self.validate() {
            println!("ERROR: {}", msg);
            return Err("cannot run onset sweep because onset_sweep.validate() failed");
        }
        if parameters.episodes.is_empty() {
            return Err("at least one rifting episode is required");
        }
        let onsets = self.onsets();
        let residuals = onsets
            .par_iter()
            .map(|t_begin| {
                let mut p = parameters.clone();
                p.episodes[0].t_begin = *t_begin;
                let table = run_simulation(&p)?;
                mean_residuals(&table, observations, offset)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let t_end = parameters.episodes[0].t_end;
        Ok(OnsetSweepResults {
            durations: onsets.iter().map(|t| t - t_end).collect(),
            onsets,
            betas: parameters.betas()?,
            residuals,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::OnsetSweep;
    use crate::analysis::Observation;
    use crate::base::SampleParams;

    #[test]
    fn onsets_works() {
        let sweep = OnsetSweep {
            t_begin_max: 170.0,
            t_begin_min: 150.0,
            t_begin_inc: 5.0,
        };
        assert_eq!(sweep.onsets(), vec![170.0, 165.0, 160.0, 155.0]);
        let sweep = OnsetSweep {
            t_begin_max: 170.0,
            t_begin_min: 151.0,
            t_begin_inc: 5.0,
        };
        assert_eq!(sweep.onsets(), vec![170.0, 165.0, 160.0, 155.0]);
    }

    #[test]
    fn validate_captures_errors() {
        let mut sweep = OnsetSweep {
            t_begin_max: f64::INFINITY,
            t_begin_min: 150.0,
            t_begin_inc: 5.0,
        };
        assert_eq!(
            sweep.validate(),
            Some("t_begin_max = inf is incorrect; it must be finite".to_string())
        );
        sweep.t_begin_max = 170.0;
        sweep.t_begin_inc = f64::NAN;
        assert_eq!(
            sweep.validate(),
            Some("t_begin_inc = NaN is incorrect; it must be finite".to_string())
        );
        sweep.t_begin_inc = 0.0;
        assert_eq!(
            sweep.validate(),
            Some("t_begin_inc = 0.0 is incorrect; it must be > 0.0".to_string())
        );
        sweep.t_begin_inc = 5.0;
        assert_eq!(sweep.validate(), None);
    }

    #[test]
    fn run_captures_errors() {
        let observations = [Observation {
            age: 120.0,
            subsidence: 1500.0,
            dynamic_topography: 0.0,
        }];
        let sweep = OnsetSweep {
            t_begin_max: 150.0,
            t_begin_min: 160.0,
            t_begin_inc: 5.0,
        };
        let p = SampleParams::single_rift();
        assert_eq!(
            sweep.run(&p, &observations, 0.0).err(),
            Some("cannot run onset sweep because onset_sweep.validate() failed")
        );

        // onsets younger than the end of rifting
        let sweep = OnsetSweep {
            t_begin_max: 110.0,
            t_begin_min: 90.0,
            t_begin_inc: 10.0,
        };
        assert_eq!(
            sweep.run(&p, &observations, 0.0).err(),
            Some("cannot allocate simulation because parameters.validate() failed")
        );
    }
}

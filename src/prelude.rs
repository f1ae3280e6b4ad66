//! Makes available common structures needed to run a simulation
//!
//! You may write `use riftsim::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::analysis::{mean_residuals, Observation, OnsetSweep, OnsetSweepResults};
pub use crate::base::{Loading, ParamFile, Parameters, Properties, SampleParams, StrainRegime};
pub use crate::base::{ParamCompaction, ParamEpisode, ParamOscillation, ParamSweep, DEFAULT_OUT_DIR, DEFAULT_TEST_DIR};
pub use crate::sim::{run_simulation, OutputTable, Row, Sample, Simulation};

/// Defines the directory where the simulation result files are saved
pub const DEFAULT_OUT_DIR: &str = "/tmp/riftsim/results";

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/riftsim/test";

/// Number of intervals of the (dimensionless) depth grid
pub const GRID_NDIV: usize = 20;

/// Number of nodes of the (dimensionless) depth grid
pub const GRID_NNODE: usize = GRID_NDIV + 1;

/// Dimensionless spacing of the depth grid
pub const GRID_DZ: f64 = 0.05;

/// Value written to files in place of a missing field (e.g., beta group separators)
pub const MISSING_VALUE: f64 = -999999.0;

/// Maximum number of fixed-point iterations for the sinusoidal strain-rate closure
pub const MAX_FIXED_POINT_ITERATIONS: usize = 100;

/// Tolerance on the dimensionless strain rate for the sinusoidal closure
pub const FIXED_POINT_TOLERANCE: f64 = 1e-6;

/// Maximum number of Newton-Raphson iterations for the compaction correction
pub const MAX_COMPACTION_ITERATIONS: usize = 30;

/// Tolerance on the compacted depth (km); i.e., 1 cm
pub const COMPACTION_TOLERANCE: f64 = 1e-5;

/// Lower limit of the physically valid lithospheric thickness (m)
pub const LITHOSPHERE_MIN_THICKNESS: f64 = 20.0e3;

/// Upper limit of the physically valid lithospheric thickness (m)
pub const LITHOSPHERE_MAX_THICKNESS: f64 = 200.0e3;

/// Slack used when counting the number of betas in a sweep
pub const SWEEP_COUNT_SLACK: f64 = 1e-9;

//! Implements the comparison of modelled and observed subsidence

mod onset_sweep;
mod residuals;
pub use crate::analysis::onset_sweep::*;
pub use crate::analysis::residuals::*;

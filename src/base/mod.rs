//! Implements the base structures for a rift subsidence simulation

mod constants;
mod enums;
mod param_file;
mod parameters;
mod properties;
mod sample_params;
pub use crate::base::constants::*;
pub use crate::base::enums::*;
pub use crate::base::param_file::*;
pub use crate::base::parameters::*;
pub use crate::base::properties::*;
pub use crate::base::sample_params::*;

//! Implements the thermal and subsidence simulation of a stretched lithosphere

mod compaction;
mod derived;
mod driver;
mod forcing;
mod isostasy;
mod output;
mod scaling;
mod subsidence;
mod temperature_grid;
mod thermal_solver;
pub use crate::sim::compaction::*;
pub use crate::sim::derived::*;
pub use crate::sim::driver::*;
pub use crate::sim::forcing::*;
pub use crate::sim::isostasy::*;
pub use crate::sim::output::*;
pub use crate::sim::scaling::*;
pub use crate::sim::subsidence::*;
pub use crate::sim::temperature_grid::*;
pub use crate::sim::thermal_solver::*;

use serde::{Deserialize, Serialize};

/// Holds the physical properties of the lithosphere, the asthenosphere, and the mid-ocean ridge reference column
///
/// Densities are given in g/cm³, temperatures in °C, and lengths in m.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct Properties {
    /// Density of the mantle at 0 °C
    pub rho_mantle: f64,

    /// Density of the continental crust
    pub rho_crust: f64,

    /// Density of sea water
    pub rho_water: f64,

    /// Temperature of the asthenosphere
    pub t_asthenosphere: f64,

    /// Thermal diffusivity (m²/s)
    pub diffusivity: f64,

    /// Volumetric thermal expansion coefficient (1/°C)
    pub expansion: f64,

    /// Decay timescale of the exponential strain rates (Myr)
    pub tau_strain: f64,

    /// Conversion factor of the dimensionless heat flow into mW/m²
    pub conductivity: f64,

    /// Thickness of the oceanic crust at the mid-ocean ridge
    pub ridge_crust: f64,

    /// Water depth at the mid-ocean ridge
    pub ridge_depth: f64,

    /// Number of seconds in a million years
    pub seconds_per_myr: f64,
}

impl Properties {
    /// Allocates a new instance with the standard values
    pub fn new() -> Self {
        Properties {
            rho_mantle: 3.35,
            rho_crust: 2.78,
            rho_water: 1.03,
            t_asthenosphere: 1333.0,
            diffusivity: 0.804e-6,
            expansion: 3.28e-5,
            tau_strain: 43.28,
            conductivity: 38.544,
            ridge_crust: 7.0e3,
            ridge_depth: 2.5e3,
            seconds_per_myr: 3.15e13,
        }
    }

    /// Returns the density of the asthenosphere ρa = ρm (1 - α Ta)
    pub fn rho_asthenosphere(&self) -> f64 {
        self.rho_mantle * (1.0 - self.expansion * self.t_asthenosphere)
    }
}

impl Default for Properties {
    fn default() -> Self {
        Properties::new()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

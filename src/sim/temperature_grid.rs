use crate::base::{GRID_DZ, GRID_NDIV, GRID_NNODE};

/// Holds the dimensionless temperature across the lithosphere
///
/// The layer is discretized by `GRID_NNODE` equally spaced nodes with `z = j·DZ`, where
/// node 0 lies at the base of the lithosphere (T = 1) and the last node lies at the
/// surface (T = 0). The boundary nodes are never modified.
///
/// Two buffers are used alternately: each step reads the current buffer, writes the other
/// one, and then swaps them.
#[derive(Clone, Debug)]
pub struct TemperatureGrid {
    /// Ping-pong buffers
    buffers: [[f64; GRID_NNODE]; 2],

    /// Index of the buffer holding the current temperature
    current: usize,
}

impl TemperatureGrid {
    /// Allocates a new grid with the steady conductive profile T = 1 - z
    pub fn new() -> Self {
        let mut grid = TemperatureGrid {
            buffers: [[0.0; GRID_NNODE]; 2],
            current: 0,
        };
        grid.set_conductive();
        grid
    }

    /// Resets both buffers to the steady conductive profile T = 1 - z
    pub fn set_conductive(&mut self) {
        for j in 0..GRID_NNODE {
            let t = 1.0 - (j as f64) * GRID_DZ;
            self.buffers[0][j] = t;
            self.buffers[1][j] = t;
        }
        self.current = 0;
    }

    /// Returns the current temperature
    pub fn temperature(&self) -> &[f64; GRID_NNODE] {
        &self.buffers[self.current]
    }

    /// Advances the temperature by one explicit (forward Euler) step
    ///
    /// Solves the advection-diffusion equation
    ///
    /// ```text
    /// ∂T/∂t = ∂²T/∂z² - γ(t)·(1 - z)·∂T/∂z
    /// ```
    ///
    /// with central differences at the interior nodes, where `rate` is the strain rate γ
    /// at the beginning of the step (zero for purely conductive steps).
    pub fn step(&mut self, dt: f64, rate: f64) {
        let (old, new) = if self.current == 0 {
            let (a, b) = self.buffers.split_at_mut(1);
            (&a[0], &mut b[0])
        } else {
            let (a, b) = self.buffers.split_at_mut(1);
            (&b[0], &mut a[0])
        };
        let dz2 = GRID_DZ * GRID_DZ;
        for j in 1..GRID_NDIV {
            let z = (j as f64) * GRID_DZ;
            let del_sq = (old[j + 1] - 2.0 * old[j] + old[j - 1]) / dz2;
            let adv = rate * (1.0 - z) * (old[j + 1] - old[j - 1]) / (2.0 * GRID_DZ);
            new[j] = old[j] + dt * (del_sq - adv);
        }
        new[0] = old[0];
        new[GRID_NDIV] = old[GRID_NDIV];
        self.current = 1 - self.current;
    }

    /// Integrates the current temperature over the layer with the trapezoidal rule
    ///
    /// The steady conductive profile yields 0.5.
    pub fn trapezoid(&self) -> f64 {
        let t = self.temperature();
        (0..GRID_NDIV).map(|i| 0.5 * GRID_DZ * (t[i] + t[i + 1])).sum()
    }

    /// Returns the dimensionless surface heat flow, i.e., the temperature gradient at the surface
    pub fn heat_flow(&self) -> f64 {
        self.temperature()[GRID_NDIV - 1] / GRID_DZ
    }
}

impl Default for TemperatureGrid {
    fn default() -> Self {
        TemperatureGrid::new()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

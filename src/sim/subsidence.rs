use super::{Derived, TemperatureGrid};

/// Holds the state carried across the rows of a rifting episode and into the next episode
#[derive(Clone, Copy, Debug, Default)]
pub struct EpisodeCarry {
    /// Integrated temperature at the end of stretching
    pub trap_at_end: f64,

    /// Subsidence (m) at the end of stretching
    pub subsidence_at_end: f64,

    /// Subsidence (m) of the last row of the episode
    pub baseline: f64,
}

/// Computes the tectonic subsidence from the temperature structure
///
/// During stretching, the subsidence combines the crustal thinning and the heating of the
/// lithosphere:
///
/// ```text
/// S = CONBET·(2 - 1/βt - 1/βp) + CONTRM·(0.5 - TRAP)
/// ```
///
/// where βt is the cumulative stretching of the current episode and βp is the product of
/// the stretching factors of the previous episodes (1 for the first episode). After
/// stretching, the subsidence follows the thermal contraction only:
///
/// ```text
/// S = CONTRM·(TRAP_end - TRAP) + S_end
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SubsidenceIntegrator {
    /// Coefficient of the subsidence due to crustal thinning (m)
    pub conbet: f64,

    /// Coefficient of the thermal subsidence (m)
    pub contrm: f64,
}

impl SubsidenceIntegrator {
    /// Allocates a new instance
    pub fn new(derived: &Derived) -> Self {
        SubsidenceIntegrator {
            conbet: derived.conbet,
            contrm: derived.contrm,
        }
    }

    /// Returns the subsidence (m) during stretching
    pub fn during_stretching(&self, beta_t: f64, beta_previous: f64, trap: f64) -> f64 {
        self.conbet * (2.0 - 1.0 / beta_t - 1.0 / beta_previous) + self.contrm * (0.5 - trap)
    }

    /// Returns the subsidence (m) after stretching
    pub fn after_stretching(&self, trap: f64, carry: &EpisodeCarry) -> f64 {
        self.contrm * (carry.trap_at_end - trap) + carry.subsidence_at_end
    }

    /// Computes the subsidence (m) of the current temperature structure
    ///
    /// # Input
    ///
    /// * `stretching` -- the cumulative stretching βt if the lithosphere is being stretched, or None
    /// * `beta_previous` -- product of the stretching factors of the previous episodes
    /// * `at_end` -- the time coincides with the end of stretching; the integrated temperature
    ///   and the subsidence are then stored in the carry
    /// * `grid` -- the temperature grid
    /// * `carry` -- the state carried across rows
    pub fn subsidence(
        &self,
        stretching: Option<f64>,
        beta_previous: f64,
        at_end: bool,
        grid: &TemperatureGrid,
        carry: &mut EpisodeCarry,
    ) -> f64 {
        let trap = grid.trapezoid();
        match stretching {
            Some(beta_t) => {
                let s = self.during_stretching(beta_t, beta_previous, trap);
                if at_end {
                    carry.trap_at_end = trap;
                    carry.subsidence_at_end = s;
                }
                s
            }
            None => self.after_stretching(trap, carry),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

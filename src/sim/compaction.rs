use super::{Derived, OutputTable, Row};
use crate::base::{ParamCompaction, Properties, COMPACTION_TOLERANCE, MAX_COMPACTION_ITERATIONS};
use crate::StrError;

/// Converts air-loaded subsidence into the subsidence of a basin filled by compacting sediment
///
/// The porosity decays exponentially with depth, `φ(z) = φ₀ exp(-z/λ)`. Balancing the load
/// of the sediment column of thickness F against the air-loaded subsidence S gives
///
/// ```text
/// r(F) = F·(ρa - ρs) - S·ρa + φ₀·λ·(ρs - ρw)·(1 - exp(-F/λ)) = 0
/// ```
///
/// which is solved by Newton-Raphson iterations starting from `F₀ = S·ρa/(ρa - ρs)`.
/// All lengths are given in km.
#[derive(Clone, Copy, Debug)]
pub struct Compaction {
    /// ρa/(ρa - ρs)
    alob: f64,

    /// ρa - ρs
    dlob: f64,

    /// φ₀·λ·(ρs - ρw)
    elob: f64,

    /// φ₀·(ρs - ρw)
    flob: f64,

    /// Density of the asthenosphere ρa
    rho_a: f64,

    /// Depth constant λ (km)
    decay_length: f64,
}

impl Compaction {
    /// Allocates a new instance
    pub fn new(
        derived: &Derived,
        props: &Properties,
        sediment_density: f64,
        param: &ParamCompaction,
    ) -> Result<Self, StrError> {
        if param.decay_length <= 0.0 {
            return Err("decay length of the porosity must be > 0.0");
        }
        let rho_a = derived.rho_a;
        let dlob = rho_a - sediment_density;
        if dlob <= 0.0 {
            return Err("the sediment density must be smaller than the density of the asthenosphere");
        }
        Ok(Compaction {
            alob: rho_a / dlob,
            dlob,
            elob: param.porosity * param.decay_length * (sediment_density - props.rho_water),
            flob: param.porosity * (sediment_density - props.rho_water),
            rho_a,
            decay_length: param.decay_length,
        })
    }

    /// Returns the residual r(F) and its derivative dr/dF
    pub fn residual(&self, subsidence: f64, f: f64) -> (f64, f64) {
        let decay = f64::exp(-f / self.decay_length);
        let r = f * self.dlob - subsidence * self.rho_a + self.elob * (1.0 - decay);
        let dr = self.dlob + self.flob * decay;
        (r, dr)
    }

    /// Solves for the sediment-loaded subsidence (km) starting from the compaction-free guess
    pub fn solve(&self, subsidence: f64) -> Result<f64, StrError> {
        self.solve_from(subsidence, subsidence * self.alob)
    }

    /// Solves for the sediment-loaded subsidence (km) starting from a given guess
    pub fn solve_from(&self, subsidence: f64, guess: f64) -> Result<f64, StrError> {
        let mut f = guess;
        for _ in 0..MAX_COMPACTION_ITERATIONS {
            let (r, dr) = self.residual(subsidence, f);
            let next = f - r / dr;
            let error = f64::abs(next - f);
            f = next;
            if error <= COMPACTION_TOLERANCE {
                return Ok(f);
            }
        }
        Err("Newton-Raphson iterations of the sediment compaction did not converge")
    }

    /// Replaces the subsidence of all valid rows by the sediment-loaded subsidence
    pub fn apply(&self, table: &mut OutputTable) -> Result<(), StrError> {
        for row in table.rows.iter_mut() {
            if let Row::Valid(sample) = row {
                sample.subsidence = self.solve(sample.subsidence)?;
            }
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Compaction;
    use crate::base::{ParamCompaction, Properties, SampleParams, COMPACTION_TOLERANCE};
    use crate::sim::{Derived, OutputTable, Row, Sample};
    use russell_chk::assert_approx_eq;

    fn compaction(porosity: f64) -> Compaction {
        let props = Properties::new();
        let derived = Derived::new(&SampleParams::compacting_sediment(), &props).unwrap();
        let param = ParamCompaction {
            porosity,
            decay_length: 2.0,
        };
        Compaction::new(&derived, &props, 2.6, &param).unwrap()
    }

    #[test]
    fn solve_works() {
        // without porosity, the solution is the compaction-free amplification
        let c = compaction(0.0);
        let rho_a = Properties::new().rho_asthenosphere();
        assert_approx_eq!(c.solve(2.0).unwrap(), 2.0 * rho_a / (rho_a - 2.6), 1e-12);
        assert_eq!(c.solve(0.0).unwrap(), 0.0);

        // porous sediment is lighter, thus the basin is shallower
        let c = compaction(0.6);
        for s in [0.5, 1.0, 2.0, 4.0] {
            let f = c.solve(s).unwrap();
            assert!(f > s);
            assert!(f < s * rho_a / (rho_a - 2.6));
            let (r, _) = c.residual(s, f);
            assert_approx_eq!(r, 0.0, 1e-8);
        }
    }

    #[test]
    fn solve_is_a_fixed_point() {
        let c = compaction(0.6);
        for s in [0.1, 1.0, 3.0, 6.0] {
            let f = c.solve(s).unwrap();
            let again = c.solve_from(s, f).unwrap();
            assert!(f64::abs(again - f) < COMPACTION_TOLERANCE);
        }
    }

    #[test]
    fn apply_works() {
        let c = compaction(0.6);
        let mut table = OutputTable::new();
        table.push(Sample {
            time: 160.0,
            subsidence: 0.0,
            heat_flow: 38.5,
            strain_rate: 1.0,
        });
        table.push(Sample {
            time: 150.0,
            subsidence: 1.5,
            heat_flow: 50.0,
            strain_rate: 1.0,
        });
        table.push_separator();
        c.apply(&mut table).unwrap();
        assert_eq!(table.rows[2], Row::Separator);
        match table.rows[1] {
            Row::Valid(x) => {
                assert_approx_eq!(x.subsidence, c.solve(1.5).unwrap(), 1e-15);
                assert_eq!(x.heat_flow, 50.0);
                assert_eq!(x.time, 150.0);
            }
            Row::Separator => panic!("the second row must be valid"),
        }
    }

    #[test]
    fn new_captures_errors() {
        let props = Properties::new();
        let derived = Derived::new(&SampleParams::compacting_sediment(), &props).unwrap();
        let mut param = ParamCompaction {
            porosity: 0.6,
            decay_length: 0.0,
        };
        assert_eq!(
            Compaction::new(&derived, &props, 2.6, &param).err(),
            Some("decay length of the porosity must be > 0.0")
        );
        param.decay_length = 2.0;
        assert_eq!(
            Compaction::new(&derived, &props, 3.3, &param).err(),
            Some("the sediment density must be smaller than the density of the asthenosphere")
        );
    }
}

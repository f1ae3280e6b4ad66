use crate::base::{Parameters, Properties};
use crate::StrError;

/// Holds the dimensionless rifting schedule
///
/// All times are scaled by the diffusion timescale `TIMSC = TL² / κ` (in Myr) and measured
/// from the onset of the first rifting episode, i.e.,
///
/// ```text
/// s(t) = (TBEG1 - t) / TIMSC
/// ```
///
/// where `t` is the geological time in Ma. Thus, `s` increases towards the present.
#[derive(Clone, Debug)]
pub struct Scaling {
    /// Diffusion timescale (Myr)
    pub timescale: f64,

    /// Onset of the first rifting episode (Ma)
    pub t_origin: f64,

    /// Dimensionless onset of each rifting episode
    pub begin: Vec<f64>,

    /// Dimensionless end of each rifting episode
    pub end: Vec<f64>,

    /// Dimensionless final time
    pub stop: f64,

    /// Dimensionless interval between saved rows (1 Myr)
    pub dt_save: f64,

    /// Dimensionless decay timescale of the exponential strain rates
    pub tau: f64,
}

impl Scaling {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `parameters` -- the (validated) simulation parameters
    /// * `tl` -- the lithospheric thickness (m)
    /// * `props` -- physical properties
    pub fn new(parameters: &Parameters, tl: f64, props: &Properties) -> Result<Self, StrError> {
        if tl <= 0.0 {
            return Err("lithospheric thickness must be > 0.0");
        }
        let first = parameters.episodes.first().ok_or("at least one rifting episode is required")?;
        let timescale = tl * tl / (props.diffusivity * props.seconds_per_myr);
        let t_origin = first.t_begin;
        let scale = |t: f64| (t_origin - t) / timescale;
        Ok(Scaling {
            timescale,
            t_origin,
            begin: parameters.episodes.iter().map(|e| scale(e.t_begin)).collect(),
            end: parameters.episodes.iter().map(|e| scale(e.t_end)).collect(),
            stop: scale(parameters.t_stop),
            dt_save: 1.0 / timescale,
            tau: props.tau_strain / timescale,
        })
    }

    /// Converts a geological time (Ma) into dimensionless time
    pub fn dimensionless(&self, t_ma: f64) -> f64 {
        (self.t_origin - t_ma) / self.timescale
    }

    /// Converts a dimensionless time into geological time (Ma)
    pub fn time_ma(&self, s: f64) -> f64 {
        self.t_origin - s * self.timescale
    }

    /// Returns the dimensionless duration of a rifting episode
    pub fn duration(&self, episode: usize) -> f64 {
        self.end[episode] - self.begin[episode]
    }

    /// Returns the dimensionless time at which the thermal relaxation of an episode halts
    ///
    /// This is the onset of the next episode or the final time for the last one.
    pub fn halt(&self, episode: usize) -> f64 {
        match self.begin.get(episode + 1) {
            Some(next) => *next,
            None => self.stop,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Scaling;
    use crate::base::{Properties, SampleParams};
    use russell_chk::assert_approx_eq;

    #[test]
    fn new_works() {
        let props = Properties::new();
        let p = SampleParams::three_rifts();
        let tl = 125_000.0;
        let scaling = Scaling::new(&p, tl, &props).unwrap();
        let timsc = tl * tl / (0.804e-6 * 3.15e13);
        assert_approx_eq!(scaling.timescale, timsc, 1e-10);
        assert_eq!(scaling.begin[0], 0.0);
        assert_approx_eq!(scaling.end[0], 20.0 / timsc, 1e-15);
        assert_approx_eq!(scaling.begin[1], 60.0 / timsc, 1e-15);
        assert_approx_eq!(scaling.end[1], 70.0 / timsc, 1e-15);
        assert_approx_eq!(scaling.begin[2], 120.0 / timsc, 1e-15);
        assert_approx_eq!(scaling.end[2], 130.0 / timsc, 1e-15);
        assert_approx_eq!(scaling.stop, 160.0 / timsc, 1e-15);
        assert_approx_eq!(scaling.dt_save, 1.0 / timsc, 1e-15);
        assert_approx_eq!(scaling.tau, 43.28 / timsc, 1e-15);
        assert_approx_eq!(scaling.duration(1), 10.0 / timsc, 1e-15);
        assert_eq!(scaling.halt(0), scaling.begin[1]);
        assert_eq!(scaling.halt(1), scaling.begin[2]);
        assert_eq!(scaling.halt(2), scaling.stop);
    }

    #[test]
    fn conversions_work() {
        let props = Properties::new();
        let p = SampleParams::single_rift();
        let scaling = Scaling::new(&p, 117_500.0, &props).unwrap();
        for t in [160.0, 130.0, 100.0, 55.5, 0.0] {
            let s = scaling.dimensionless(t);
            assert_approx_eq!(scaling.time_ma(s), t, 1e-12);
        }
        assert!(scaling.dimensionless(100.0) > scaling.dimensionless(160.0));
    }

    #[test]
    fn new_captures_errors() {
        let props = Properties::new();
        let mut p = SampleParams::single_rift();
        assert_eq!(
            Scaling::new(&p, 0.0, &props).err(),
            Some("lithospheric thickness must be > 0.0")
        );
        p.episodes.clear();
        assert_eq!(
            Scaling::new(&p, 125_000.0, &props).err(),
            Some("at least one rifting episode is required")
        );
    }
}

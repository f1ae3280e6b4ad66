use super::{Loading, ParamCompaction, ParamEpisode, ParamOscillation, ParamSweep, Parameters, StrainRegime};

/// Holds samples of simulation parameters
pub struct SampleParams {}

impl SampleParams {
    /// Returns the default oscillation parameters
    pub fn param_oscillation() -> ParamOscillation {
        ParamOscillation { cycles: 1.5, frac: 0.8 }
    }

    /// Returns a single rifting episode from 160 Ma to 100 Ma with constant strain rate and β = 2
    ///
    /// The crust is 30 km thick, the basin is water-loaded, and the simulation stops at 0 Ma.
    pub fn single_rift() -> Parameters {
        Parameters {
            label: "single_rift".to_string(),
            crustal_thickness: 30_000.0, // m
            sweep: ParamSweep {
                beta_min: 2.0,
                beta_max: 2.0,
                beta_inc: 0.5,
            },
            episodes: vec![ParamEpisode {
                t_begin: 160.0, // Ma
                t_end: 100.0,   // Ma
                beta: 2.0,
                regime: StrainRegime::Constant,
            }],
            t_stop: 0.0, // Ma
            loading: Loading::Water,
            sediment_density: 2.6, // g/cm³
            compaction: None,
            oscillation: SampleParams::param_oscillation(),
        }
    }

    /// Returns two rifting episodes (160–140 Ma and 100–90 Ma) with constant strain rates
    pub fn two_rifts(beta1: f64, beta2: f64) -> Parameters {
        let mut p = SampleParams::single_rift();
        p.label = "two_rifts".to_string();
        p.sweep = ParamSweep {
            beta_min: beta1,
            beta_max: beta1,
            beta_inc: 0.1,
        };
        p.episodes = vec![
            ParamEpisode {
                t_begin: 160.0,
                t_end: 140.0,
                beta: beta1,
                regime: StrainRegime::Constant,
            },
            ParamEpisode {
                t_begin: 100.0,
                t_end: 90.0,
                beta: beta2,
                regime: StrainRegime::Constant,
            },
        ];
        p
    }

    /// Returns three rifting episodes with β₁ = 1.5, β₂ = 1.2, and β₃ = 1.1
    pub fn three_rifts() -> Parameters {
        let mut p = SampleParams::two_rifts(1.5, 1.2);
        p.label = "three_rifts".to_string();
        p.episodes.push(ParamEpisode {
            t_begin: 40.0,
            t_end: 30.0,
            beta: 1.1,
            regime: StrainRegime::Constant,
        });
        p
    }

    /// Returns a single rifting episode (160–100 Ma) with sinusoidal strain rate and β = 2
    pub fn sinusoidal_rift(cycles: f64, frac: f64) -> Parameters {
        let mut p = SampleParams::single_rift();
        p.label = "sinusoidal_rift".to_string();
        p.episodes[0].regime = StrainRegime::Sinusoidal;
        p.oscillation = ParamOscillation { cycles, frac };
        p
    }

    /// Returns a single rifting episode loaded by compacting sediment
    pub fn compacting_sediment() -> Parameters {
        let mut p = SampleParams::single_rift();
        p.label = "compacting_sediment".to_string();
        p.loading = Loading::Sediment;
        p.sediment_density = 2.6; // g/cm³ (solid grains)
        p.compaction = Some(ParamCompaction {
            porosity: 0.6,
            decay_length: 2.0, // km
        });
        p
    }
}

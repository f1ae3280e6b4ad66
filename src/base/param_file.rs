use super::{Loading, ParamCompaction, ParamEpisode, ParamOscillation, ParamSweep, Parameters, StrainRegime};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the parameters in the flat (legacy) JSON format
///
/// The keys are the upper-case names of the historical subsidence program,
/// e.g., `"TBEG1"`, `"BETMIN"`, `"ITYPE1"`, `"ILOAD"`. Times are in Ma, the
/// crustal thickness in m, and the porosity `PHI0` is a fraction.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct ParamFile {
    /// Label of the simulation
    pub plabel: String,

    /// Number of rifting episodes (1, 2, or 3)
    pub irift: i64,

    /// Initial crustal thickness (m)
    pub tc: f64,

    /// Onset of the first rifting episode (Ma)
    pub tbeg1: f64,

    /// End of the first rifting episode (Ma)
    pub tend1: f64,

    /// Minimum stretching factor of the first episode
    pub betmin: f64,

    /// Maximum stretching factor of the first episode
    pub betmax: f64,

    /// Increment of the stretching factor of the first episode
    pub betinc: f64,

    /// Strain-rate regime code of the first episode
    pub itype1: i64,

    /// Number of oscillations of the sinusoidal strain rate
    pub cycles: f64,

    /// Amplitude of the sinusoidal strain rate as a fraction of its mean
    pub frac: f64,

    /// Onset of the second rifting episode (Ma)
    pub tbeg2: f64,

    /// End of the second rifting episode (Ma)
    pub tend2: f64,

    /// Stretching factor of the second episode
    pub beta2: f64,

    /// Strain-rate regime code of the second episode
    pub itype2: i64,

    /// Onset of the third rifting episode (Ma)
    pub tbeg3: f64,

    /// End of the third rifting episode (Ma)
    pub tend3: f64,

    /// Stretching factor of the third episode
    pub beta3: f64,

    /// Strain-rate regime code of the third episode
    pub itype3: i64,

    /// Final time (Ma)
    pub tstop: f64,

    /// Loading code (0: air, 1: water, 2: sediment)
    pub iload: i64,

    /// Compaction flag (0: off, 1: on)
    pub icomp: i64,

    /// Density of the sediment grains (g/cm³)
    pub rhos: f64,

    /// Porosity at the surface (fraction)
    pub phi0: f64,

    /// Depth constant of the porosity decay (km)
    pub r#const: f64,

    /// Lithospheric thickness (m); informative only (it is always recomputed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tl: Option<f64>,
}

impl ParamFile {
    /// Converts the flat parameters into simulation parameters
    pub fn to_parameters(&self) -> Result<Parameters, StrError> {
        if self.irift < 1 || self.irift > 3 {
            return Err("IRIFT must be 1, 2, or 3");
        }
        let mut episodes = vec![ParamEpisode {
            t_begin: self.tbeg1,
            t_end: self.tend1,
            beta: self.betmin,
            regime: StrainRegime::from_code(self.itype1)?,
        }];
        if self.irift >= 2 {
            episodes.push(ParamEpisode {
                t_begin: self.tbeg2,
                t_end: self.tend2,
                beta: self.beta2,
                regime: StrainRegime::from_code(self.itype2)?,
            });
        }
        if self.irift >= 3 {
            episodes.push(ParamEpisode {
                t_begin: self.tbeg3,
                t_end: self.tend3,
                beta: self.beta3,
                regime: StrainRegime::from_code(self.itype3)?,
            });
        }
        let compaction = match self.icomp {
            0 => None,
            1 => Some(ParamCompaction {
                porosity: self.phi0,
                decay_length: self.r#const,
            }),
            _ => return Err("ICOMP must be 0 or 1"),
        };
        Ok(Parameters {
            label: self.plabel.clone(),
            crustal_thickness: self.tc,
            sweep: ParamSweep {
                beta_min: self.betmin,
                beta_max: self.betmax,
                beta_inc: self.betinc,
            },
            episodes,
            t_stop: self.tstop,
            loading: Loading::from_code(self.iload)?,
            sediment_density: self.rhos,
            compaction,
            oscillation: ParamOscillation {
                cycles: self.cycles,
                frac: self.frac,
            },
        })
    }

    /// Converts simulation parameters into the flat format
    ///
    /// Missing episodes are filled with the historical default values.
    pub fn from_parameters(parameters: &Parameters, tl: Option<f64>) -> Self {
        let defaults = [
            ParamEpisode {
                t_begin: 60.0,
                t_end: 50.0,
                beta: 1.1,
                regime: StrainRegime::Constant,
            },
            ParamEpisode {
                t_begin: 20.0,
                t_end: 10.0,
                beta: 1.1,
                regime: StrainRegime::Constant,
            },
        ];
        let first = parameters.episodes.first().copied().unwrap_or(ParamEpisode {
            t_begin: 160.0,
            t_end: 100.0,
            beta: parameters.sweep.beta_min,
            regime: StrainRegime::Constant,
        });
        let second = parameters.episodes.get(1).copied().unwrap_or(defaults[0]);
        let third = parameters.episodes.get(2).copied().unwrap_or(defaults[1]);
        let (icomp, phi0, decay_length) = match &parameters.compaction {
            Some(c) => (1, c.porosity, c.decay_length),
            None => (0, 0.6, 2.0),
        };
        ParamFile {
            plabel: parameters.label.clone(),
            irift: parameters.episodes.len() as i64,
            tc: parameters.crustal_thickness,
            tbeg1: first.t_begin,
            tend1: first.t_end,
            betmin: parameters.sweep.beta_min,
            betmax: parameters.sweep.beta_max,
            betinc: parameters.sweep.beta_inc,
            itype1: first.regime.code(),
            cycles: parameters.oscillation.cycles,
            frac: parameters.oscillation.frac,
            tbeg2: second.t_begin,
            tend2: second.t_end,
            beta2: second.beta,
            itype2: second.regime.code(),
            tbeg3: third.t_begin,
            tend3: third.t_end,
            beta3: third.beta,
            itype3: third.regime.code(),
            tstop: parameters.t_stop,
            iload: parameters.loading.code(),
            icomp,
            rhos: parameters.sediment_density,
            phi0,
            r#const: decay_length,
            tl,
        }
    }

    /// Reads a JSON file in the flat format
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let input = File::open(path).map_err(|_| "cannot open file")?;
        let buffered = BufReader::new(input);
        let param_file = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        Ok(param_file)
    }

    /// Writes a JSON file in the flat format
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::ParamFile;
    use crate::base::{Loading, SampleParams, StrainRegime, DEFAULT_TEST_DIR};

    const LEGACY: &str = r#"{
        "PLABEL" : "my_label",
        "IRIFT" : 2,
        "TC" : 30000,
        "TBEG1" : 160.0,
        "TEND1" : 100.0,
        "BETMIN" : 1.5,
        "BETMAX" : 2.0,
        "BETINC" : 0.5,
        "ITYPE1" : 1,
        "CYCLES" : 1.5,
        "FRAC" : 0.8,
        "TBEG2" : 60.0,
        "TEND2" : 50.0,
        "BETA2" : 1.1,
        "ITYPE2" : 2,
        "TBEG3" : 20.0,
        "TEND3" : 10.0,
        "BETA3" : 1.1,
        "ITYPE3" : 1,
        "TSTOP" : 0.0,
        "ILOAD" : 2,
        "ICOMP" : 1,
        "RHOS" : 2.6,
        "PHI0" : 0.6,
        "CONST" : 2.0
    }"#;

    #[test]
    fn to_parameters_works() {
        let param_file: ParamFile = serde_json::from_str(LEGACY).unwrap();
        assert_eq!(param_file.tl, None);
        let p = param_file.to_parameters().unwrap();
        assert_eq!(p.label, "my_label");
        assert_eq!(p.crustal_thickness, 30000.0);
        assert_eq!(p.n_episode(), 2);
        assert_eq!(p.episodes[0].t_begin, 160.0);
        assert_eq!(p.episodes[0].regime, StrainRegime::Constant);
        assert_eq!(p.episodes[1].beta, 1.1);
        assert_eq!(p.episodes[1].regime, StrainRegime::Decaying);
        assert_eq!(p.betas().unwrap(), &[1.5, 2.0]);
        assert_eq!(p.loading, Loading::Sediment);
        let compaction = p.compaction.unwrap();
        assert_eq!(compaction.porosity, 0.6);
        assert_eq!(compaction.decay_length, 2.0);
        assert_eq!(p.validate(), None);
    }

    #[test]
    fn to_parameters_captures_errors() {
        let mut param_file: ParamFile = serde_json::from_str(LEGACY).unwrap();
        param_file.irift = 4;
        assert_eq!(param_file.to_parameters().err(), Some("IRIFT must be 1, 2, or 3"));
        param_file.irift = 1;
        param_file.icomp = 2;
        assert_eq!(param_file.to_parameters().err(), Some("ICOMP must be 0 or 1"));
        param_file.icomp = 0;
        param_file.itype1 = 5;
        assert_eq!(
            param_file.to_parameters().err(),
            Some("strain-rate regime code must be 1, 2, 3, or 4")
        );
    }

    #[test]
    fn from_parameters_and_json_work() {
        let p = SampleParams::three_rifts();
        let param_file = ParamFile::from_parameters(&p, Some(117_500.0));
        assert_eq!(param_file.irift, 3);
        assert_eq!(param_file.icomp, 0);
        let path = format!("{}/param_file_from_parameters_and_json_work.json", DEFAULT_TEST_DIR);
        param_file.write_json(&path).unwrap();
        let read = ParamFile::read_json(&path).unwrap();
        assert_eq!(read.tl, Some(117_500.0));
        let back = read.to_parameters().unwrap();
        assert_eq!(format!("{:?}", back), format!("{:?}", p));
    }
}

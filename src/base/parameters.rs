use super::{Loading, StrainRegime, SWEEP_COUNT_SLACK};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the parameters of a rifting episode
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct ParamEpisode {
    /// Time at the onset of rifting (Ma)
    pub t_begin: f64,

    /// Time at the end of rifting (Ma); must be smaller than `t_begin`
    pub t_end: f64,

    /// Stretching factor
    ///
    /// **Note:** This value is ignored for the first episode because its beta is swept.
    pub beta: f64,

    /// Time variation of the strain rate
    pub regime: StrainRegime,
}

/// Holds the range of stretching factors of the first episode
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct ParamSweep {
    /// Minimum beta
    pub beta_min: f64,

    /// Maximum beta (inclusive)
    pub beta_max: f64,

    /// Increment in beta
    pub beta_inc: f64,
}

/// Holds the parameters of the compacting sediment infill
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct ParamCompaction {
    /// Porosity at the surface (fraction); 0 ≤ φ₀ ≤ 0.9
    pub porosity: f64,

    /// Depth constant λ of the exponential porosity decay (km)
    pub decay_length: f64,
}

/// Holds the parameters of the sinusoidal strain rate
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct ParamOscillation {
    /// Number of oscillations during the episode
    pub cycles: f64,

    /// Amplitude of the oscillation as a fraction of the mean strain rate; 0 < frac < 1
    pub frac: f64,
}

/// Holds all input parameters of a simulation
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Parameters {
    /// Label of the simulation (used to name output files)
    pub label: String,

    /// Initial continental crustal thickness (m)
    pub crustal_thickness: f64,

    /// Range of stretching factors of the first episode
    pub sweep: ParamSweep,

    /// Rifting episodes (1, 2, or 3) in chronological order
    pub episodes: Vec<ParamEpisode>,

    /// Final time (Ma)
    pub t_stop: f64,

    /// Material filling the basin
    pub loading: Loading,

    /// Density of the (solid) sediment (g/cm³)
    pub sediment_density: f64,

    /// Compaction of the sediment (requires sediment loading)
    pub compaction: Option<ParamCompaction>,

    /// Sinusoidal strain rate (used by the first episode only)
    pub oscillation: ParamOscillation,
}

impl Parameters {
    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        let mut values = vec![
            ("crustal_thickness", self.crustal_thickness),
            ("t_stop", self.t_stop),
            ("beta_min", self.sweep.beta_min),
            ("beta_max", self.sweep.beta_max),
            ("beta_inc", self.sweep.beta_inc),
            ("sediment_density", self.sediment_density),
            ("cycles", self.oscillation.cycles),
            ("frac", self.oscillation.frac),
        ];
        if let Some(compaction) = &self.compaction {
            values.push(("porosity", compaction.porosity));
            values.push(("decay_length", compaction.decay_length));
        }
        for (name, value) in values {
            if !value.is_finite() {
                return Some(format!("{} = {:?} is incorrect; it must be finite", name, value));
            }
        }
        for (i, episode) in self.episodes.iter().enumerate() {
            for (name, value) in [("t_begin", episode.t_begin), ("t_end", episode.t_end), ("beta", episode.beta)] {
                if !value.is_finite() {
                    return Some(format!(
                        "episode #{}: {} = {:?} is incorrect; it must be finite",
                        i + 1,
                        name,
                        value
                    ));
                }
            }
        }
        if self.crustal_thickness <= 0.0 {
            return Some(format!(
                "crustal_thickness = {:?} is incorrect; it must be > 0.0",
                self.crustal_thickness
            ));
        }
        let n = self.episodes.len();
        if n < 1 || n > 3 {
            return Some(format!("the number of rifting episodes = {} is incorrect; it must be 1, 2, or 3", n));
        }
        for (i, episode) in self.episodes.iter().enumerate() {
            if episode.t_begin <= episode.t_end {
                return Some(format!(
                    "episode #{}: t_begin = {:?} is incorrect; it must be > t_end = {:?}",
                    i + 1,
                    episode.t_begin,
                    episode.t_end
                ));
            }
            if i > 0 {
                let previous = &self.episodes[i - 1];
                if episode.t_begin > previous.t_end {
                    return Some(format!(
                        "episode #{}: t_begin = {:?} is incorrect; it must be ≤ t_end of the previous episode = {:?}",
                        i + 1,
                        episode.t_begin,
                        previous.t_end
                    ));
                }
                if episode.beta < 1.0 {
                    return Some(format!(
                        "episode #{}: beta = {:?} is incorrect; it must be ≥ 1.0",
                        i + 1,
                        episode.beta
                    ));
                }
                if episode.regime == StrainRegime::Sinusoidal {
                    return Some(format!(
                        "episode #{}: the sinusoidal strain rate is only available for the first episode",
                        i + 1
                    ));
                }
            }
        }
        let last = &self.episodes[n - 1];
        if self.t_stop > last.t_end {
            return Some(format!(
                "t_stop = {:?} is incorrect; it must be ≤ t_end of the last episode = {:?}",
                self.t_stop, last.t_end
            ));
        }
        if self.sweep.beta_min < 1.0 {
            return Some(format!(
                "beta_min = {:?} is incorrect; it must be ≥ 1.0",
                self.sweep.beta_min
            ));
        }
        if self.sweep.beta_inc <= 0.0 {
            return Some(format!(
                "beta_inc = {:?} is incorrect; it must be > 0.0",
                self.sweep.beta_inc
            ));
        }
        if self.sweep.beta_max < self.sweep.beta_min {
            return Some(format!(
                "beta_max = {:?} is incorrect; it must be ≥ beta_min = {:?}",
                self.sweep.beta_max, self.sweep.beta_min
            ));
        }
        if self.episodes[0].regime == StrainRegime::Sinusoidal {
            if self.sweep.beta_min <= 1.0 {
                return Some(format!(
                    "beta_min = {:?} is incorrect; the sinusoidal strain rate requires beta > 1.0",
                    self.sweep.beta_min
                ));
            }
            if self.oscillation.cycles <= 0.0 {
                return Some(format!(
                    "cycles = {:?} is incorrect; it must be > 0.0",
                    self.oscillation.cycles
                ));
            }
            if self.oscillation.frac <= 0.0 || self.oscillation.frac >= 1.0 {
                return Some(format!(
                    "frac = {:?} is incorrect; it must satisfy 0.0 < frac < 1.0",
                    self.oscillation.frac
                ));
            }
        }
        if self.loading == Loading::Sediment && self.sediment_density <= 0.0 {
            return Some(format!(
                "sediment_density = {:?} is incorrect; it must be > 0.0",
                self.sediment_density
            ));
        }
        if let Some(compaction) = &self.compaction {
            if self.loading != Loading::Sediment {
                return Some("compaction requires sediment loading".to_string());
            }
            if compaction.porosity < 0.0 || compaction.porosity > 0.9 {
                return Some(format!(
                    "porosity = {:?} is incorrect; it must satisfy 0.0 ≤ φ₀ ≤ 0.9",
                    compaction.porosity
                ));
            }
            if compaction.decay_length <= 0.0 {
                return Some(format!(
                    "decay_length = {:?} is incorrect; it must be > 0.0",
                    compaction.decay_length
                ));
            }
        }
        None // all good
    }

    /// Returns the number of rifting episodes
    pub fn n_episode(&self) -> usize {
        self.episodes.len()
    }

    /// Returns the stretching factors of the first episode swept by the simulation
    ///
    /// The number of values is computed with an integer count, thus `beta_max` is
    /// included whenever `(beta_max - beta_min) / beta_inc` is (numerically) an integer.
    pub fn betas(&self) -> Result<Vec<f64>, StrError> {
        let sweep = &self.sweep;
        let finite = sweep.beta_min.is_finite() && sweep.beta_max.is_finite() && sweep.beta_inc.is_finite();
        if !finite || sweep.beta_inc <= 0.0 || sweep.beta_max < sweep.beta_min {
            return Err("the beta sweep requires finite values with beta_inc > 0.0 and beta_max ≥ beta_min");
        }
        let n = f64::floor((sweep.beta_max - sweep.beta_min) / sweep.beta_inc + SWEEP_COUNT_SLACK) as usize;
        Ok((0..=n).map(|k| sweep.beta_min + (k as f64) * sweep.beta_inc).collect())
    }

    /// Reads a JSON file containing the parameters
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
        let parameters = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        Ok(parameters)
    }

    /// Writes a JSON file with the parameters
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

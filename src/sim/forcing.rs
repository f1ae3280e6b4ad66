use crate::base::{ParamOscillation, StrainRegime, FIXED_POINT_TOLERANCE, MAX_FIXED_POINT_ITERATIONS};
use crate::StrError;
use std::f64::consts::PI;

/// Holds the constants of the sinusoidal strain rate
///
/// The strain rate ramps up linearly until it reaches the background rate `G` at the
/// elapsed time `ramp`, oscillates about `G` until `plateau_end`, and then ramps down
/// linearly to zero at the end of the episode:
///
/// ```text
///         ⎧ A·k·w                   if w ≤ P
/// γ(w) =  ⎨ A·sin(k·(w - P)) + G    if P < w ≤ R
///         ⎩ A·k·(Δt - w)            if w > R
///
/// P = G / (A·k)    R = Δt - P
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Oscillation {
    /// Amplitude A of the oscillation
    pub amplitude: f64,

    /// Wavenumber k of the oscillation
    pub wavenumber: f64,

    /// Elapsed time P at the end of the initial ramp
    pub ramp: f64,

    /// Elapsed time R at the start of the final ramp
    pub plateau_end: f64,

    /// Number of fixed-point iterations needed to find the background strain rate
    pub iterations: usize,
}

/// Holds the dimensionless strain-rate history of a rifting episode
///
/// `G` is the dimensionless magnitude of the vertical velocity gradient across the
/// lithosphere, chosen such that the cumulative stretching over the episode equals β.
#[derive(Clone, Copy, Debug)]
pub struct Forcing {
    /// Time variation of the strain rate
    pub regime: StrainRegime,

    /// Stretching factor at the end of the episode
    pub beta: f64,

    /// Dimensionless duration of the episode
    pub duration: f64,

    /// Dimensionless decay timescale of the exponential regimes
    pub tau: f64,

    /// Dimensionless strain-rate magnitude G
    pub g: f64,

    /// Constants of the sinusoidal regime
    pub oscillation: Option<Oscillation>,
}

impl Forcing {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `beta` -- stretching factor (≥ 1; > 1 for the sinusoidal regime)
    /// * `duration` -- dimensionless duration of the episode (> 0)
    /// * `regime` -- time variation of the strain rate
    /// * `tau` -- dimensionless decay timescale of the exponential regimes (> 0)
    /// * `param` -- number of cycles and amplitude fraction of the sinusoidal regime
    pub fn new(
        beta: f64,
        duration: f64,
        regime: StrainRegime,
        tau: f64,
        param: &ParamOscillation,
    ) -> Result<Self, StrError> {
        if !beta.is_finite() || beta < 1.0 {
            return Err("stretching factor must be finite and ≥ 1.0");
        }
        if !duration.is_finite() || duration <= 0.0 {
            return Err("duration of the rifting episode must be finite and > 0.0");
        }
        if !tau.is_finite() || tau <= 0.0 {
            return Err("decay timescale must be finite and > 0.0");
        }
        let ln_beta = f64::ln(beta);
        let mut oscillation = None;
        let g = match regime {
            StrainRegime::Constant => ln_beta / duration,
            StrainRegime::Decaying => ln_beta / (1.0 - f64::exp(-duration / tau)),
            StrainRegime::Growing => ln_beta / (f64::exp(duration / tau) - 1.0),
            StrainRegime::Sinusoidal => {
                let (g, osc) = sinusoidal_closure(ln_beta, duration, param)?;
                oscillation = Some(osc);
                g
            }
        };
        Ok(Forcing {
            regime,
            beta,
            duration,
            tau,
            g,
            oscillation,
        })
    }

    /// Returns the dimensionless strain rate at an elapsed time since the onset of the episode
    pub fn strain_rate(&self, elapsed: f64) -> f64 {
        let (g, tau) = (self.g, self.tau);
        match self.oscillation {
            None => match self.regime {
                StrainRegime::Decaying => g * f64::exp(-elapsed / tau) / tau,
                StrainRegime::Growing => g * f64::exp(elapsed / tau) / tau,
                _ => g,
            },
            Some(osc) => {
                let (a, k) = (osc.amplitude, osc.wavenumber);
                if elapsed <= osc.ramp {
                    elapsed * a * k
                } else if elapsed <= osc.plateau_end {
                    a * f64::sin(k * (elapsed - osc.ramp)) + g
                } else {
                    (self.duration - elapsed) * a * k
                }
            }
        }
    }

    /// Returns the cumulative stretching factor at an elapsed time since the onset of the episode
    pub fn stretching(&self, elapsed: f64) -> f64 {
        let (g, tau) = (self.g, self.tau);
        match self.oscillation {
            None => match self.regime {
                StrainRegime::Decaying => f64::exp(g * (1.0 - f64::exp(-elapsed / tau))),
                StrainRegime::Growing => f64::exp(g * (f64::exp(elapsed / tau) - 1.0)),
                _ => f64::exp(g * elapsed),
            },
            Some(osc) => {
                let (a, k, p, r) = (osc.amplitude, osc.wavenumber, osc.ramp, osc.plateau_end);
                if elapsed <= p {
                    return f64::exp(0.5 * k * a * elapsed * elapsed);
                }
                let ramp_up = 0.5 * k * a * p * p;
                if elapsed <= r {
                    let q = elapsed - p;
                    return f64::exp(ramp_up + g * q - (a / k) * (f64::cos(k * q) - 1.0));
                }
                let plateau = g * (r - p) - (a / k) * (f64::cos(k * (r - p)) - 1.0);
                let s = elapsed - r;
                f64::exp(ramp_up + plateau + k * a * ((g * s) / (k * a) - 0.5 * s * s))
            }
        }
    }

    /// Returns the maximum strain rate during the episode
    ///
    /// This value bounds the advective (Courant) limit on the time step.
    pub fn peak_strain_rate(&self) -> f64 {
        match self.oscillation {
            None => match self.regime {
                StrainRegime::Decaying => self.g / self.tau,
                StrainRegime::Growing => self.g * f64::exp(self.duration / self.tau) / self.tau,
                _ => self.g,
            },
            Some(osc) => self.g + osc.amplitude,
        }
    }
}

/// Finds the background strain rate G of the sinusoidal regime by fixed-point iteration
///
/// The amplitude is fixed as `A = frac·ln(β)/Δt`. The wavelength follows from the number of
/// cycles and the ratio G/A, and G must make the cumulative stretching equal β:
///
/// ```text
/// λ = Δt / (cycles + G/(π A))      k = 2π/λ
/// G = ln(β)/Δt + A/(k Δt)·(cos(k Δt - 2G/A) - 1) + G²/(k A Δt)
/// ```
fn sinusoidal_closure(ln_beta: f64, duration: f64, param: &ParamOscillation) -> Result<(f64, Oscillation), StrError> {
    if ln_beta <= 0.0 {
        return Err("sinusoidal strain rate requires beta > 1.0");
    }
    if !param.cycles.is_finite() || param.cycles <= 0.0 {
        return Err("number of cycles must be finite and > 0.0");
    }
    if !(param.frac > 0.0 && param.frac < 1.0) {
        return Err("amplitude fraction must satisfy 0.0 < frac < 1.0");
    }
    let amplitude = param.frac * ln_beta / duration;
    let wavenumber_of = |g: f64| 2.0 * PI * (param.cycles + g / (PI * amplitude)) / duration;
    let mut g = ln_beta / duration;
    for iteration in 0..MAX_FIXED_POINT_ITERATIONS {
        let k = wavenumber_of(g);
        let next = ln_beta / duration
            + (amplitude / (k * duration)) * (f64::cos(k * duration - 2.0 * g / amplitude) - 1.0)
            + g * g / (k * amplitude * duration);
        let error = f64::abs(next - g);
        g = next;
        if error < FIXED_POINT_TOLERANCE {
            let wavenumber = wavenumber_of(g);
            let ramp = g / (amplitude * wavenumber);
            return Ok((
                g,
                Oscillation {
                    amplitude,
                    wavenumber,
                    ramp,
                    plateau_end: duration - ramp,
                    iterations: iteration + 1,
                },
            ));
        }
    }
    Err("fixed-point iteration of the sinusoidal strain rate did not converge")
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

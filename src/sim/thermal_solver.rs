use super::{EpisodeCarry, Forcing, OutputTable, Sample, SubsidenceIntegrator, TemperatureGrid};
use crate::base::GRID_DZ;
use crate::StrError;

/// Holds the dimensionless schedule of a rifting episode
#[derive(Clone, Copy, Debug)]
pub struct Episode {
    /// Index of the episode (0 for the first one)
    pub index: usize,

    /// Onset of stretching
    pub begin: f64,

    /// End of stretching
    pub end: f64,

    /// End of the thermal relaxation (onset of the next episode or final time)
    pub halt: f64,

    /// Strain-rate history
    pub forcing: Forcing,

    /// Product of the stretching factors of the previous episodes (1 for the first episode)
    pub beta_previous: f64,
}

/// Defines the stage of the time loop of an episode
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    /// The lithosphere is being stretched
    Advecting,

    /// The lithosphere cools by conduction only
    PostStretchConductive,

    /// The last step, clipped to land exactly on the halt time
    FinalStep,

    /// The episode is complete
    Done,
}

/// Implements the explicit finite difference solver of the temperature across the lithosphere
pub struct ThermalSolver {
    /// Dimensionless time interval between saved rows
    pub dt_save: f64,

    /// Prints a summary of each episode
    pub verbose: bool,

    /// Current stage of the time loop
    pub phase: Phase,

    /// Number of steps of the last episode
    pub n_steps: usize,

    /// Number of rows saved during the last episode
    pub n_rows: usize,
}

impl ThermalSolver {
    /// Allocates a new instance
    pub fn new(dt_save: f64) -> Self {
        ThermalSolver {
            dt_save,
            verbose: false,
            phase: Phase::Done,
            n_steps: 0,
            n_rows: 0,
        }
    }

    /// Returns the time step satisfying the conductive and advective stability limits
    ///
    /// ```text
    /// dt = min(DZ²/2, DZ/γmax, DTST)
    /// ```
    pub fn time_step(&self, peak_strain_rate: f64) -> f64 {
        let mut dt = f64::min(GRID_DZ * GRID_DZ / 2.0, self.dt_save);
        if peak_strain_rate > 0.0 {
            dt = f64::min(dt, GRID_DZ / peak_strain_rate);
        }
        dt
    }

    /// Runs the time loop of a rifting episode
    ///
    /// The first episode starts from the conductive profile and writes the initial row.
    /// Later episodes continue from the temperature left by the previous one. The stretching
    /// ends exactly at `episode.end` and the loop stops exactly at `episode.halt`; both
    /// times always produce a row. The subsidence is stored in km.
    ///
    /// # Input
    ///
    /// * `grid` -- the temperature grid
    /// * `table` -- the output table receiving the (dimensionless) rows
    /// * `carry` -- the state at the end of stretching; updated by this function
    /// * `integrator` -- computes the subsidence from the temperature
    /// * `episode` -- the dimensionless schedule of the episode
    pub fn run_episode(
        &mut self,
        grid: &mut TemperatureGrid,
        table: &mut OutputTable,
        carry: &mut EpisodeCarry,
        integrator: &SubsidenceIntegrator,
        episode: &Episode,
    ) -> Result<(), StrError> {
        if episode.end <= episode.begin {
            return Err("the end of stretching must come after its onset");
        }
        if episode.halt < episode.end {
            return Err("the halt time must not precede the end of stretching");
        }
        let forcing = &episode.forcing;
        let dt_base = self.time_step(forcing.peak_strain_rate());
        let mut t = episode.begin;
        if episode.index == 0 {
            grid.set_conductive();
            table.push(Sample {
                time: t,
                subsidence: 0.0,
                heat_flow: grid.heat_flow(),
                strain_rate: forcing.strain_rate(0.0),
            });
        }
        let mut last_row = table.last_time().unwrap_or(t);
        let mut last_subsidence = carry.baseline;
        self.phase = Phase::Advecting;
        self.n_steps = 0;
        self.n_rows = 0;

        loop {
            // select the step
            let (dt, t_new, rate) = match self.phase {
                Phase::Advecting => {
                    let rate = forcing.strain_rate(t - episode.begin);
                    if t + dt_base >= episode.end {
                        (episode.end - t, episode.end, rate)
                    } else {
                        (dt_base, t + dt_base, rate)
                    }
                }
                Phase::PostStretchConductive => {
                    if t + dt_base >= episode.halt {
                        self.phase = Phase::FinalStep;
                        (episode.halt - t, episode.halt, 0.0)
                    } else {
                        (dt_base, t + dt_base, 0.0)
                    }
                }
                Phase::FinalStep | Phase::Done => break,
            };

            // advance the temperature
            grid.step(dt, rate);
            t = t_new;
            self.n_steps += 1;

            // save the row
            let stretching = self.phase == Phase::Advecting;
            let at_end = stretching && t == episode.end;
            if t >= last_row + self.dt_save || t == episode.halt || at_end {
                let elapsed = t - episode.begin;
                let (beta_t, strain_rate) = if stretching {
                    (Some(forcing.stretching(elapsed)), forcing.strain_rate(elapsed))
                } else {
                    (None, 0.0)
                };
                let s = integrator.subsidence(beta_t, episode.beta_previous, at_end, grid, carry);
                table.push(Sample {
                    time: t,
                    subsidence: s * 1e-3,
                    heat_flow: grid.heat_flow(),
                    strain_rate,
                });
                last_row = t;
                last_subsidence = s;
                self.n_rows += 1;
            }

            // move to the next stage
            self.phase = match self.phase {
                Phase::Advecting if at_end => {
                    if episode.halt > episode.end {
                        Phase::PostStretchConductive
                    } else {
                        Phase::Done
                    }
                }
                Phase::FinalStep => Phase::Done,
                phase => phase,
            };
            if self.phase == Phase::Done {
                break;
            }
        }
        carry.baseline = last_subsidence;

        if self.verbose {
            println!(
                "episode #{}: β = {:.4}, steps = {}, rows = {}, subsidence at the end of stretching = {:.4} km",
                episode.index + 1,
                forcing.beta,
                self.n_steps,
                self.n_rows,
                carry.subsidence_at_end * 1e-3
            );
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

use super::{
    Compaction, Derived, Episode, EpisodeCarry, Forcing, OutputTable, Scaling, SubsidenceIntegrator, TemperatureGrid,
    ThermalSolver,
};
use crate::base::{Parameters, Properties};
use crate::StrError;

/// Runs the rift subsidence simulation for all stretching factors of the first episode
pub struct Simulation {
    /// Input parameters
    pub parameters: Parameters,

    /// Physical properties
    pub props: Properties,

    /// Constants derived from the parameters
    pub derived: Derived,

    /// Dimensionless schedule
    pub scaling: Scaling,

    /// Computes the subsidence from the temperature
    pub integrator: SubsidenceIntegrator,

    /// Strain-rate histories of the second and third episodes
    pub later_forcings: Vec<Forcing>,

    /// Corrects the subsidence for compacting sediment
    pub compaction: Option<Compaction>,

    /// Prints the progress of the simulation
    pub verbose: bool,
}

impl Simulation {
    /// Allocates a new instance with the standard physical properties
    pub fn new(parameters: &Parameters) -> Result<Self, StrError> {
        Simulation::new_with_properties(parameters, &Properties::new())
    }

    /// Allocates a new instance
    pub fn new_with_properties(parameters: &Parameters, props: &Properties) -> Result<Self, StrError> {
        if let Some(msg) = parameters.validate() {
            println!("ERROR: {}", msg);
            return Err("cannot allocate simulation because parameters.validate() failed");
        }
        let derived = Derived::new(parameters, props)?;
        let scaling = Scaling::new(parameters, derived.tl, props)?;
        let mut later_forcings = Vec::new();
        for (i, episode) in parameters.episodes.iter().enumerate().skip(1) {
            later_forcings.push(Forcing::new(
                episode.beta,
                scaling.duration(i),
                episode.regime,
                scaling.tau,
                &parameters.oscillation,
            )?);
        }
        let compaction = match &parameters.compaction {
            Some(param) => Some(Compaction::new(&derived, props, parameters.sediment_density, param)?),
            None => None,
        };
        Ok(Simulation {
            parameters: parameters.clone(),
            props: *props,
            derived,
            scaling,
            integrator: SubsidenceIntegrator::new(&derived),
            later_forcings,
            compaction,
            verbose: false,
        })
    }

    /// Returns the dimensionless schedule of all episodes for a stretching factor of the first episode
    pub fn episodes(&self, beta1: f64) -> Result<Vec<Episode>, StrError> {
        let first = &self.parameters.episodes[0];
        let forcing = Forcing::new(
            beta1,
            self.scaling.duration(0),
            first.regime,
            self.scaling.tau,
            &self.parameters.oscillation,
        )?;
        let mut episodes = vec![Episode {
            index: 0,
            begin: self.scaling.begin[0],
            end: self.scaling.end[0],
            halt: self.scaling.halt(0),
            forcing,
            beta_previous: 1.0,
        }];
        let mut beta_previous = beta1;
        for (k, forcing) in self.later_forcings.iter().enumerate() {
            let index = k + 1;
            episodes.push(Episode {
                index,
                begin: self.scaling.begin[index],
                end: self.scaling.end[index],
                halt: self.scaling.halt(index),
                forcing: *forcing,
                beta_previous,
            });
            beta_previous *= forcing.beta;
        }
        Ok(episodes)
    }

    /// Runs all episodes for a stretching factor of the first episode
    ///
    /// Appends the dimensionless rows to the table and returns the state at the end of
    /// each episode.
    pub fn run_beta(&self, beta1: f64, table: &mut OutputTable) -> Result<Vec<EpisodeCarry>, StrError> {
        let episodes = self.episodes(beta1)?;
        if self.verbose {
            println!("\nβ₁ = {:.4}", beta1);
            if let Some(osc) = episodes[0].forcing.oscillation {
                println!(
                    "sinusoidal strain rate: G = {:?}, amplitude = {:?}, wavenumber = {:?}, iterations = {}",
                    episodes[0].forcing.g, osc.amplitude, osc.wavenumber, osc.iterations
                );
            }
        }
        let mut solver = ThermalSolver::new(self.scaling.dt_save);
        solver.verbose = self.verbose;
        let mut grid = TemperatureGrid::new();
        let mut carry = EpisodeCarry::default();
        let mut carries = Vec::with_capacity(episodes.len());
        for episode in &episodes {
            solver.run_episode(&mut grid, table, &mut carry, &self.integrator, episode)?;
            carries.push(carry);
        }
        Ok(carries)
    }

    /// Runs the simulation for all stretching factors
    ///
    /// The groups of rows are separated by one separator row. The returned table is given
    /// in dimensional units and, if requested, corrected for sediment compaction.
    pub fn run(&self) -> Result<OutputTable, StrError> {
        let mut table = OutputTable::new();
        for (k, beta1) in self.parameters.betas()?.into_iter().enumerate() {
            if k > 0 {
                table.push_separator();
            }
            self.run_beta(beta1, &mut table)?;
            table.betas.push(beta1);
        }
        table.dimensionalise(&self.scaling, &self.props)?;
        if let Some(compaction) = &self.compaction {
            compaction.apply(&mut table)?;
        }
        Ok(table)
    }
}

/// Runs the simulation with the standard physical properties
pub fn run_simulation(parameters: &Parameters) -> Result<OutputTable, StrError> {
    Simulation::new(parameters)?.run()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

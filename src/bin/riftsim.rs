use riftsim::base::{ParamFile, Parameters, DEFAULT_OUT_DIR};
use riftsim::sim::Simulation;
use riftsim::StrError;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "riftsim",
    about = "Computes the tectonic subsidence of a stretched continental lithosphere"
)]
struct Options {
    /// JSON file with the parameters
    params: String,

    /// Reads the parameters in the flat (upper-case keys) format
    #[structopt(long)]
    legacy: bool,

    /// Directory of the output files (default: /tmp/riftsim/results)
    #[structopt(long)]
    out_dir: Option<String>,

    /// Prints the progress of the simulation
    #[structopt(short, long)]
    verbose: bool,
}

fn main() -> Result<(), StrError> {
    // parse options
    let options = Options::from_args();

    // load parameters
    let parameters = if options.legacy {
        ParamFile::read_json(&options.params)?.to_parameters()?
    } else {
        Parameters::read_json(&options.params)?
    };

    // run
    let mut sim = Simulation::new(&parameters)?;
    sim.verbose = options.verbose;
    let table = sim.run()?;

    // write files
    let out_dir = options.out_dir.as_deref().unwrap_or(DEFAULT_OUT_DIR);
    let stem = parameters.label.replace(' ', "_");
    let path_dat = format!("{}/{}.dat", out_dir, stem);
    let path_table = format!("{}/{}-table.json", out_dir, stem);
    let path_params = format!("{}/{}-parameters.json", out_dir, stem);
    table.write_dat(&path_dat)?;
    table.write_json(&path_table)?;
    if options.legacy {
        ParamFile::from_parameters(&parameters, Some(sim.derived.tl)).write_json(&path_params)?;
    } else {
        parameters.write_json(&path_params)?;
    }

    // message
    let thin_line = format!("{:─^1$}", "", path_dat.len());
    println!("\n\n{}", thin_line);
    println!("lithospheric thickness = {:.1} km", sim.derived.tl / 1000.0);
    println!("number of curves = {}", table.n_groups());
    println!("subsidence curves written to:");
    println!("{}", path_dat);
    println!("{}\n\n", thin_line);
    Ok(())
}

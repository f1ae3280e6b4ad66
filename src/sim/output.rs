use super::Scaling;
use crate::base::{Properties, MISSING_VALUE};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Holds the results at a saved time
///
/// While the simulation runs, `time`, `heat_flow`, and `strain_rate` are dimensionless and
/// `subsidence` is given in km. After [OutputTable::dimensionalise], `time` is given in Ma,
/// `heat_flow` in mW/m², and `strain_rate` in 1/Gyr.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct Sample {
    /// Time
    pub time: f64,

    /// Tectonic subsidence (km)
    pub subsidence: f64,

    /// Surface heat flow
    pub heat_flow: f64,

    /// Strain rate of the active rifting episode (zero after stretching)
    pub strain_rate: f64,
}

/// Defines a row of the output table
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub enum Row {
    /// Results at a saved time
    Valid(Sample),

    /// Marks the boundary between the curves of two stretching factors
    Separator,
}

/// Holds the subsidence curves of all swept stretching factors
///
/// The rows of each stretching factor are consecutive and the groups are delimited by
/// exactly one [Row::Separator].
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct OutputTable {
    /// All rows
    pub rows: Vec<Row>,

    /// Stretching factor of the first episode corresponding to each group
    pub betas: Vec<f64>,

    /// Indicates that the rows have been converted into dimensional units
    pub dimensional: bool,
}

impl OutputTable {
    /// Allocates a new (empty) instance
    pub fn new() -> Self {
        OutputTable {
            rows: Vec::new(),
            betas: Vec::new(),
            dimensional: false,
        }
    }

    /// Appends a row with results
    pub fn push(&mut self, sample: Sample) {
        self.rows.push(Row::Valid(sample));
    }

    /// Appends a separator row
    pub fn push_separator(&mut self) {
        self.rows.push(Row::Separator);
    }

    /// Returns the time of the last valid row of the current group
    pub fn last_time(&self) -> Option<f64> {
        match self.rows.last() {
            Some(Row::Valid(sample)) => Some(sample.time),
            _ => None,
        }
    }

    /// Returns the samples of each group
    pub fn groups(&self) -> Vec<Vec<Sample>> {
        let mut groups = Vec::new();
        let mut current = Vec::new();
        for row in &self.rows {
            match row {
                Row::Valid(sample) => current.push(*sample),
                Row::Separator => {
                    if !current.is_empty() {
                        groups.push(current);
                        current = Vec::new();
                    }
                }
            }
        }
        if !current.is_empty() {
            groups.push(current);
        }
        groups
    }

    /// Returns the number of groups
    pub fn n_groups(&self) -> usize {
        self.groups().len()
    }

    /// Returns the number of separator rows
    pub fn n_separators(&self) -> usize {
        self.rows.iter().filter(|row| **row == Row::Separator).count()
    }

    /// Converts the dimensionless rows into geological time, heat flow, and strain rate
    ///
    /// ```text
    /// time = TBEG1 - s·TIMSC              (Ma)
    /// heat_flow = CONDTY · q              (mW/m²)
    /// strain_rate = 1000 · γ / TIMSC      (1/Gyr)
    /// ```
    pub fn dimensionalise(&mut self, scaling: &Scaling, props: &Properties) -> Result<(), StrError> {
        if self.dimensional {
            return Err("the output table has already been converted into dimensional units");
        }
        for row in self.rows.iter_mut() {
            if let Row::Valid(sample) = row {
                sample.time = scaling.time_ma(sample.time);
                sample.heat_flow *= props.conductivity;
                sample.strain_rate *= 1000.0 / scaling.timescale;
            }
        }
        self.dimensional = true;
        Ok(())
    }

    /// Writes the four-column data file
    ///
    /// Each line holds time, subsidence, heat flow, and strain rate with four decimal
    /// places. Separator rows are written with all columns equal to -999999.
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_dat<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let file = File::create(&path).map_err(|_| "cannot create file")?;
        let mut buffer = BufWriter::new(file);
        for row in &self.rows {
            let (t, s, q, g) = match row {
                Row::Valid(x) => (x.time, x.subsidence, x.heat_flow, x.strain_rate),
                Row::Separator => (MISSING_VALUE, MISSING_VALUE, MISSING_VALUE, MISSING_VALUE),
            };
            writeln!(&mut buffer, "{:.4}\t{:.4}\t{:.4}\t{:.4}", t, s, q, g).map_err(|_| "cannot write file")?;
        }
        buffer.flush().map_err(|_| "cannot write file")?;
        Ok(())
    }

    /// Reads a four-column data file
    ///
    /// Rows with a missing time (-999999) become separators. Reading stops at the first
    /// empty line. The resulting table is marked as dimensional.
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_dat<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let input = File::open(path).map_err(|_| "cannot open file")?;
        let buffered = BufReader::new(input);
        let mut table = OutputTable::new();
        table.dimensional = true;
        for line in buffered.lines() {
            let line = line.map_err(|_| "cannot read file")?;
            let line = line.trim();
            if line.is_empty() {
                break;
            }
            let values = line
                .split_whitespace()
                .map(|item| item.parse::<f64>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| "cannot parse number in data file")?;
            if values.len() != 4 {
                return Err("each line of the data file must have four columns");
            }
            if values[0] <= 0.5 * MISSING_VALUE {
                table.push_separator();
            } else {
                table.push(Sample {
                    time: values[0],
                    subsidence: values[1],
                    heat_flow: values[2],
                    strain_rate: values[3],
                });
            }
        }
        Ok(table)
    }

    /// Reads a JSON file containing the output table
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
        let table = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        Ok(table)
    }

    /// Writes a JSON file with the output table
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
        serde_json::to_writer(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

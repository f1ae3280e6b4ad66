use crate::StrError;
use serde::{Deserialize, Serialize};

/// Defines the time variation of the strain rate during a rifting episode
///
/// The fixed numbering scheme corresponds to the `ITYPE` codes of legacy parameter files.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub enum StrainRegime {
    /// Constant strain rate
    Constant = 1,

    /// Strain rate decaying exponentially from the onset of rifting
    Decaying = 2,

    /// Strain rate growing exponentially towards the end of rifting
    Growing = 3,

    /// Sinusoidal strain rate about a constant background, with linear ramps at both ends
    ///
    /// Only valid for the first rifting episode.
    Sinusoidal = 4,
}

/// Defines the material filling the basin (loading type)
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub enum Loading {
    /// Air-loaded basin
    Air = 0,

    /// Water-loaded basin
    Water = 1,

    /// Sediment-loaded basin
    Sediment = 2,
}

impl StrainRegime {
    /// Returns the regime corresponding to a legacy `ITYPE` code
    pub fn from_code(code: i64) -> Result<Self, StrError> {
        match code {
            1 => Ok(StrainRegime::Constant),
            2 => Ok(StrainRegime::Decaying),
            3 => Ok(StrainRegime::Growing),
            4 => Ok(StrainRegime::Sinusoidal),
            _ => Err("strain-rate regime code must be 1, 2, 3, or 4"),
        }
    }

    /// Returns the legacy `ITYPE` code
    pub fn code(&self) -> i64 {
        *self as i64
    }
}

impl Loading {
    /// Returns the loading corresponding to a legacy `ILOAD` code
    pub fn from_code(code: i64) -> Result<Self, StrError> {
        match code {
            0 => Ok(Loading::Air),
            1 => Ok(Loading::Water),
            2 => Ok(Loading::Sediment),
            _ => Err("loading code must be 0 (air), 1 (water), or 2 (sediment)"),
        }
    }

    /// Returns the legacy `ILOAD` code
    pub fn code(&self) -> i64 {
        *self as i64
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

use super::lithosphere_thickness;
use crate::base::{Loading, Parameters, Properties};
use crate::StrError;

/// Holds constants derived from the parameters, computed once per simulation
#[derive(Clone, Copy, Debug)]
pub struct Derived {
    /// Lithospheric thickness TL (m)
    pub tl: f64,

    /// Density of the asthenosphere ρa
    pub rho_a: f64,

    /// Coefficient of the subsidence due to crustal thinning (m)
    pub conbet: f64,

    /// Coefficient of the thermal subsidence (m)
    pub contrm: f64,

    /// Ratio (ρa - ρw) / (ρa - ρs) converting water-loaded into sediment-loaded subsidence
    pub conb1: f64,

    /// Ratio (ρs - ρw) / (ρa - ρs)
    pub conb2: f64,
}

impl Derived {
    /// Computes the derived constants
    ///
    /// The subsidence coefficients are scaled by the density contrast between the
    /// asthenosphere and the basin infill. With compaction, the air-loaded coefficients are
    /// used because the compaction correction converts the subsidence afterwards.
    pub fn new(parameters: &Parameters, props: &Properties) -> Result<Self, StrError> {
        let tl = lithosphere_thickness(parameters.crustal_thickness, props)?;
        let rho_a = props.rho_asthenosphere();
        let rho_s = parameters.sediment_density;
        let rho_fill = if parameters.compaction.is_some() {
            0.0
        } else {
            match parameters.loading {
                Loading::Air => 0.0,
                Loading::Water => props.rho_water,
                Loading::Sediment => rho_s,
            }
        };
        let contrast = rho_a - rho_fill;
        if contrast <= 0.0 {
            return Err("the infill density must be smaller than the density of the asthenosphere");
        }
        let tc = parameters.crustal_thickness;
        let conbet = (props.rho_mantle - props.rho_crust) * tc / contrast;
        let contrm = props.expansion * props.rho_mantle * tl * props.t_asthenosphere / contrast;
        Ok(Derived {
            tl,
            rho_a,
            conbet,
            contrm,
            conb1: (rho_a - props.rho_water) / (rho_a - rho_s),
            conb2: (rho_s - props.rho_water) / (rho_a - rho_s),
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

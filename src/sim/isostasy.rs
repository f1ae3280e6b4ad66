use crate::base::{Properties, LITHOSPHERE_MAX_THICKNESS, LITHOSPHERE_MIN_THICKNESS};
use crate::StrError;

/// Computes the lithospheric thickness isostatically balanced against a mid-ocean ridge
///
/// The continental column (crust of thickness `tc` plus mantle lithosphere, with a linear
/// geotherm) is assumed to start at sea level. Equating its weight with the weight of the
/// ridge column (water, oceanic crust, and hot asthenosphere) yields the quadratic
///
/// ```text
/// A·TL² + B·TL + C = 0
///
/// A = ρm α Ta / 2
/// B = (ρw dw + ρc tco) - (dw + tco) ρm (1 - α Ta) - tc (ρc - ρm)
/// C = tc² Ta α (ρm - ρc) / 2
/// ```
///
/// whose roots are negative for physically meaningful configurations. The larger root is
/// taken unless it falls outside (20 km, 200 km), in which case the smaller root is taken;
/// the result is then negated.
///
/// # Input
///
/// * `tc` -- continental crustal thickness (m)
/// * `props` -- physical properties
///
/// # Output
///
/// Returns the lithospheric thickness `TL` (m), which is always greater than `tc`.
pub fn lithosphere_thickness(tc: f64, props: &Properties) -> Result<f64, StrError> {
    if !tc.is_finite() || tc <= 0.0 {
        return Err("crustal thickness must be finite and > 0.0");
    }
    let (rho_m, rho_c, rho_w) = (props.rho_mantle, props.rho_crust, props.rho_water);
    let (alpha, ta) = (props.expansion, props.t_asthenosphere);
    let (dw, tco) = (props.ridge_depth, props.ridge_crust);
    let a = rho_m * alpha * ta / 2.0;
    let b = (rho_w * dw + rho_c * tco) - (dw + tco) * rho_m * (1.0 - alpha * ta) - tc * (rho_c - rho_m);
    let c = tc * tc * ta * alpha * (rho_m - rho_c) / 2.0;
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return Err("isostatic balance has no real solution for this crustal thickness");
    }
    let mut root = (-b + f64::sqrt(disc)) / (2.0 * a);
    if root <= LITHOSPHERE_MIN_THICKNESS || root >= LITHOSPHERE_MAX_THICKNESS {
        root = (-b - f64::sqrt(disc)) / (2.0 * a);
    }
    let tl = -root;
    if tl <= tc {
        return Err("lithospheric thickness must be greater than the crustal thickness");
    }
    Ok(tl)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

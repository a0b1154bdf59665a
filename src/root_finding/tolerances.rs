//! Tolerance utilities for root-finding algorithms.
//!
//! Both methods share one stopping rule: iterate while successive 
//! estimates differ by at least `eps`.
//!
//! - `validate_eps`   : `eps` must be finite and > 0  
//! - `step_converged` : `|curr - prev| < eps`  


use crate::root_finding::errors::ToleranceError;  


pub(crate) fn validate_eps(eps: f64) -> Result<f64, ToleranceError> { 
    if !eps.is_finite() || eps <= 0.0 { 
        return Err(ToleranceError::InvalidEps { got: eps });
    }
    Ok(eps)
}


/// Returns `true` once two successive iterates are closer than `eps`. 
///
/// A NaN difference is *not* converged; callers reject non-finite iterates 
/// before they reach this check.
#[inline]
pub(crate) fn step_converged(prev: f64, curr: f64, eps: f64) -> bool { 
    (curr - prev).abs() < eps
}

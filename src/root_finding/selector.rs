//! Starting-point selection for Newton's method.
//!
//! Newton converges monotonically from a point where `f` and `f''` share 
//! a sign. Given an interval `[a, b]` the selector tries `a`, then `b`.

use super::equation::Equation; 
use thiserror::Error; 


#[derive(Debug, Error, PartialEq)]
pub enum SelectorError { 
    #[error("no valid Newton starting point on [{a}, {b}]: f(x) * f''(x) < 0 at both endpoints")]
    NoStartingPoint { a: f64, b: f64 }, 

    #[error("invalid bounds: a and b must be finite. got [{a}, {b}]")] 
    InvalidBounds { a: f64, b: f64 }, 
}


/// `f(x) * f''(x) >= 0` 
///
/// Infinite products count (e.g. `f''` singular at the endpoint while `f` 
/// has the same sign); a NaN product never does.
#[inline]
pub fn sign_condition_holds<E: Equation>(eq: &E, x: f64) -> bool { 
    eq.f(x) * eq.d2f(x) >= 0.0
}


/// Picks Newton's initial guess from the endpoints of `[a, b]`.
///
/// ┌ `a` if `f(a) f''(a) >= 0` 
/// ├ else `b` if `f(b) f''(b) >= 0` 
/// └ else [`SelectorError::NoStartingPoint`] 
///
/// The failure is not retryable: no root should be computed.
pub fn select_newton_start<E: Equation>(eq: &E, a: f64, b: f64) -> Result<f64, SelectorError> { 
    if !(a.is_finite() && b.is_finite()) { 
        return Err(SelectorError::InvalidBounds { a, b }); 
    }

    for x in [a, b] { 
        if sign_condition_holds(eq, x) { 
            log::debug!("newton start selected {{x0: {x}, f: {}, f'': {}}}", eq.f(x), eq.d2f(x));
            return Ok(x); 
        }
    }

    log::warn!("no endpoint of [{a}, {b}] satisfies f(x) * f''(x) >= 0");
    Err(SelectorError::NoStartingPoint { a, b })
}

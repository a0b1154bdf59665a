//! Chord method (fixed-anchor false position)

use super::algorithms::Algorithm; 
use super::report::{RootFindingReport, TerminationReason, Trace}; 
use super::tolerances::step_converged; 
use super::errors::{RootFindingError, ToleranceError}; 
use super::config::{CommonCfg, impl_common_cfg}; 
use super::equation::Equation; 
use thiserror::Error; 


const ALGORITHM: Algorithm = Algorithm::Chord; 


#[derive(Debug, Error, PartialEq)]
pub enum ChordError { 
    #[error(transparent)] 
    RootFinding(#[from] RootFindingError), 

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid bounds: a and b must be finite and distinct. got [{a}, {b}]")] 
    InvalidBounds { a: f64, b: f64 }, 

    #[error("degenerate chord at x={x}: f(x)={fx} equals f(anchor)={f_anchor}")]
    DegenerateChordStep { x: f64, fx: f64, f_anchor: f64 },

    #[error("step non-finite at x={x}, step={step}; next iterate undefined")] 
    StepNotFinite { x: f64, step: f64 }, 
}


/// Chord configuration 
///
/// # Fields 
/// - `common` : [`CommonCfg`] with `eps` and optional `max_iter`.
///
/// # Construction 
/// - Use [`ChordCfg::new`] then optional setters. 
///
/// # Defaults 
/// - `eps = 1e-3`
/// - If `max_iter` is `None`, [`chord`] resolves it using 
///   [`Algorithm::default_max_iter`] for [`Algorithm::Chord`]. 
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ChordCfg { 
    common: CommonCfg, 
}
impl ChordCfg { 
    #[must_use]
    pub fn new() -> Self { 
        Self { 
            common: CommonCfg::new()
        }
    }
}
impl Default for ChordCfg { 
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(ChordCfg);


/// Chord update through the fixed anchor `(x0, f0)` and the moving 
/// point `(x1, f1)`: 
///
/// `x0 - f0 / (f1 - f0) * (x1 - x0)`
///
/// # Returns 
/// - `Ok(x_next)`                  : if `f1 != f0` and the result is finite 
/// - `Err(DegenerateChordStep)`    : if `f1 == f0` 
/// - `Err(StepNotFinite)`          : if the intercept overflows 
#[inline]
fn chord_x_intercept(
    (x0, f0): (f64, f64), 
    (x1, f1): (f64, f64), 
) -> Result<f64, ChordError> {
    let denom = f1 - f0; 
    if denom == 0.0 { 
        return Err(ChordError::DegenerateChordStep { x: x1, fx: f1, f_anchor: f0 });
    }

    let x_next = x0 - f0 / denom * (x1 - x0); 
    if !x_next.is_finite() { 
        return Err(ChordError::StepNotFinite { x: x1, step: x_next - x1 });
    }

    Ok(x_next)
}


/// Finds a root of `eq` with the 
/// [chord method](https://en.wikipedia.org/wiki/Regula_falsi): the chord 
/// is always drawn from the fixed anchor `a`, only the far end moves.
///
/// # Arguments 
/// ┌ `eq`  - equation whose root is sought; only `f` is evaluated 
/// ├ `a`   - fixed anchor `x0`, never updated 
/// ├ `b`   - first moving point `x1` 
/// └ `cfg` - [`ChordCfg`] (`eps`, optional `max_iter`) 
///
/// # Behavior 
/// Starting from the sentinel `x = 0`, each iteration 
/// ├ records `(x, x1)` in the trace, 
/// ├ sets `x <- x1`, 
/// └ sets `x1 <- a - f(a) / (f(x1) - f(a)) * (x1 - a)` 
///
/// and the loop runs while `|x1 - x| >= eps`. If `b` equals the sentinel 
/// no iteration runs and `b` is returned as the root.
///
/// # Returns 
/// [`RootFindingReport`] with `root = x1`, the freshly computed estimate, 
/// and `previous = x`. 
///
/// # Errors
/// ┌ [`ChordError::InvalidBounds`]       - `a` or `b` non-finite, or `a == b` 
/// ├ [`ChordError::DegenerateChordStep`] - `f(x1) == f(a)` 
/// ├ [`ChordError::StepNotFinite`]       - next iterate overflows 
/// │
/// * Propagated via [`ChordError::RootFinding`]
/// └ [`RootFindingError::NonFiniteEvaluation`] - `f(x)` produced NaN/inf 
pub fn chord<E: Equation>(
    eq: &E, 
    a: f64, 
    b: f64, 
    cfg: ChordCfg, 
) -> Result<RootFindingReport, ChordError> { 
    if !(a.is_finite() && b.is_finite()) || a == b { 
        return Err(ChordError::InvalidBounds { a, b }); 
    }

    let eps      = cfg.eps(); 
    let num_iter = ALGORITHM.resolve_max_iter(cfg.max_iter()); 
    log::trace!("starting with arguments: {{a: {a}, b: {b}, eps: {eps}, max_iter: {num_iter}}}");

    let mut evals: usize = 0; 
    let mut eval = |x: f64| -> Result<f64, ChordError> { 
        let fx = { evals += 1; eq.f(x) }; 
        if !fx.is_finite() { 
            return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into()); 
        }
        Ok(fx)
    }; 

    let anchor = (a, eval(a)?); 

    let mut trace = Trace::new(); 
    let mut x  = 0.0; 
    let mut x1 = b; 
    let mut termination_reason = TerminationReason::ToleranceReached; 

    while !step_converged(x, x1, eps) { 
        if trace.len() == num_iter { 
            log::warn!("iteration limit reached {{max_iter: {num_iter}, x: {x}, x1: {x1}}}");
            termination_reason = TerminationReason::IterationLimit; 
            break; 
        }
        trace.record(x, x1); 

        let f1 = eval(x1)?; 
        x  = x1; 
        x1 = chord_x_intercept(anchor, (x, f1))?; 
        log::trace!("{{iteration: {}, x: {x}, x1: {x1}}}", trace.len());
    }

    let f_root = eval(x1)?; 
    log::debug!("{{iterations: {}, evaluations: {evals}, root: {x1}}}", trace.len());

    Ok(RootFindingReport { 
        root               : x1, 
        previous           : x, 
        f_root             : f_root, 
        iterations         : trace.len(), 
        evaluations        : evals, 
        termination_reason : termination_reason, 
        trace              : trace, 
        algorithm_name     : ALGORITHM.algorithm_name(), 
    })
}

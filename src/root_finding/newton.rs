//! Newton-Raphson method

use super::algorithms::Algorithm; 
use super::report::{RootFindingReport, TerminationReason, Trace}; 
use super::tolerances::step_converged; 
use super::errors::{RootFindingError, ToleranceError}; 
use super::config::{CommonCfg, impl_common_cfg}; 
use super::equation::Equation; 
use thiserror::Error;


const ALGORITHM: Algorithm = Algorithm::Newton; 


#[derive(Debug, Error, PartialEq)] 
pub enum NewtonError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError), 

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 }, 

    #[error("invalid zero substitute: must be finite and != 0. got {got}")] 
    InvalidZeroSubstitute { got: f64 },

    #[error("step non-finite at x={x}, step={step}; x + step undefined")] 
    StepNotFinite { x: f64, step: f64 }, 

    #[error("derivative vanished at x={x}, f'(x)={dfx}")]
    DerivativeVanished { x: f64, dfx: f64 },

    #[error("derivative non-finite at x={x}, f'(x)={dfx}")]
    DerivativeNotFinite { x: f64, dfx: f64 },
}


/// Newton configuration.
/// 
/// # Fields
/// - `common`          : [`CommonCfg`] with `eps` and optional `max_iter`.
/// - `zero_substitute` : start used instead of an initial guess of exactly `0.0` 
///   (default: `0.01`).
///
/// # Construction
/// - Use [`NewtonCfg::new`] then optional setters.
///
/// # Defaults
/// - If `max_iter` is `None`, [`newton`] resolves it using
///   [`Algorithm::default_max_iter`] for [`Algorithm::Newton`].
#[derive(Debug, Copy, Clone, PartialEq)] 
pub struct NewtonCfg {
    common: CommonCfg,
    zero_substitute: f64, 
}
impl NewtonCfg {
    pub const DEFAULT_ZERO_SUBSTITUTE: f64 = 0.01; 

    #[must_use]
    pub fn new() -> Self { 
        Self { 
            common: CommonCfg::new(),
            zero_substitute: Self::DEFAULT_ZERO_SUBSTITUTE, 
        }
    }

    pub fn set_zero_substitute(mut self, v: f64) -> Result<Self, NewtonError> { 
        if !v.is_finite() || v == 0.0 { 
            return Err(NewtonError::InvalidZeroSubstitute { got: v });
        }
        self.zero_substitute = v; 
        Ok(self) 
    }

    #[inline] #[must_use] pub fn zero_substitute(&self) -> f64 { self.zero_substitute }
}
impl Default for NewtonCfg { 
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(NewtonCfg);


/// Helpers 
/// - `eval_fx_checked`  : evaluates `f(x)` with finite-check
/// - `eval_dfx_checked` : evaluates `f'(x)` with finite and zero checks 
#[inline] 
fn eval_fx_checked<E: Equation>(
    eq: &E, 
    x: f64,
    evals: &mut usize
) -> Result<f64, NewtonError> { 
    let fx = { *evals += 1; eq.f(x) }; 
    if !fx.is_finite() { 
        return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into()); 
    }

    Ok(fx)
}
#[inline] 
fn eval_dfx_checked<E: Equation>(
    eq: &E, 
    x: f64, 
    evals: &mut usize
) -> Result<f64, NewtonError> { 
    let dfx = { *evals += 1; eq.df(x) };  
    if !dfx.is_finite() { 
        return Err(NewtonError::DerivativeNotFinite { x, dfx }); 
    }
    if dfx == 0.0 { 
        return Err(NewtonError::DerivativeVanished { x, dfx }); 
    }

    Ok(dfx)
}


/// Finds a root of `eq` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method)
/// with the analytic derivative `eq.df`.
///
/// # Arguments
/// - `eq`  : equation whose root is sought
/// - `x0`  : finite initial guess, usually picked by 
///           [`select_newton_start`](super::selector::select_newton_start)
/// - `cfg` : [`NewtonCfg`] (`eps`, optional `max_iter`, zero substitute)
///
/// # Behavior
/// - An initial guess of exactly `0.0` is replaced by `cfg.zero_substitute()`; 
///   `f'` is typically singular there.
/// - Starting from the sentinel `x = 0`, each iteration records `(x, x1)`, 
///   sets `x <- x1` and then `x1 <- x - f(x) / f'(x)`, while `|x1 - x| >= eps`.
///
/// # Returns
/// [`RootFindingReport`] with `root = x1`, the freshly computed estimate, 
/// `previous = x`, `algorithm_name = "newton"`.
///
/// # Errors
/// - [`NewtonError::InvalidGuess`]         : `x0` non-finite
/// - [`NewtonError::DerivativeVanished`]   : `f'(x) == 0`
/// - [`NewtonError::DerivativeNotFinite`]  : `f'(x)` NaN/inf
/// - [`NewtonError::StepNotFinite`]        : `x + step` not representable
///  
/// * Propagated via [`NewtonError::RootFinding`]:
/// - [`RootFindingError::NonFiniteEvaluation`] : `f(x)` produced NaN/inf
///
/// # Notes
/// - Convergence is *local only*. The start should satisfy `f(x0) f''(x0) >= 0`, 
///   which is what the selector checks.
pub fn newton<E: Equation>( 
    eq: &E, 
    x0: f64, 
    cfg: NewtonCfg, 
) -> Result<RootFindingReport, NewtonError> { 
    if !x0.is_finite() { 
        return Err(NewtonError::InvalidGuess { x0 }); 
    }

    let x0 = if x0 == 0.0 { 
        log::debug!("initial guess is zero, substituting {}", cfg.zero_substitute());
        cfg.zero_substitute() 
    } else { 
        x0 
    }; 

    let eps      = cfg.eps(); 
    let num_iter = ALGORITHM.resolve_max_iter(cfg.max_iter()); 
    log::trace!("starting with arguments: {{x0: {x0}, eps: {eps}, max_iter: {num_iter}}}");

    let mut evals: usize = 0; 
    let mut trace = Trace::new(); 
    let mut x  = 0.0; 
    let mut x1 = x0; 
    let mut termination_reason = TerminationReason::ToleranceReached; 

    while !step_converged(x, x1, eps) { 
        if trace.len() == num_iter { 
            log::warn!("iteration limit reached {{max_iter: {num_iter}, x: {x}, x1: {x1}}}");
            termination_reason = TerminationReason::IterationLimit; 
            break; 
        }
        trace.record(x, x1); 

        x = x1; 
        let fx  = eval_fx_checked(eq, x, &mut evals)?; 
        let dfx = eval_dfx_checked(eq, x, &mut evals)?; 

        let step = -fx / dfx; 
        x1 = x + step; 
        if !step.is_finite() || !x1.is_finite() { 
            return Err(NewtonError::StepNotFinite { x, step }); 
        }
        log::trace!("{{iteration: {}, x: {x}, f(x): {fx}, f'(x): {dfx}, x1: {x1}}}", trace.len());
    }

    let f_root = eval_fx_checked(eq, x1, &mut evals)?; 
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

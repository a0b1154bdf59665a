//! Equations evaluated by the root-finding methods.
//!
//! An [`Equation`] exposes `f`, `f'` and `f''` at a point. The methods only 
//! ever go through this trait, so the formula can be swapped without 
//! touching the iteration logic.
//!
//! - [`SqrtCos`]    : `f(x) = sqrt(x) - cos(k x)`, the reference equation (`k = 0.387`)  
//! - [`FnEquation`] : any three closures, e.g. synthetic equations in tests  


/// A scalar equation `f(x) = 0` with its first two derivatives.
pub trait Equation { 
    /// `f(x)`
    fn f(&self, x: f64) -> f64; 

    /// `f'(x)`
    fn df(&self, x: f64) -> f64; 

    /// `f''(x)`
    fn d2f(&self, x: f64) -> f64; 
}

impl<E: Equation + ?Sized> Equation for &E { 
    #[inline] fn f(&self, x: f64)   -> f64 { (**self).f(x) }
    #[inline] fn df(&self, x: f64)  -> f64 { (**self).df(x) }
    #[inline] fn d2f(&self, x: f64) -> f64 { (**self).d2f(x) }
}


/// `f(x) = sqrt(x) - cos(k x)`
///
/// ┌ `f(x)   = sqrt(x) - cos(k x)`  
/// ├ `f'(x)  = 0.5 / sqrt(x) + k sin(k x)`  
/// └ `f''(x) = -0.25 / (x sqrt(x)) + k² cos(k x)`  
///
/// # Domain 
/// Defined for `x > 0`. At `x = 0`, `f` is finite but `f'` and `f''` are 
/// infinite; below zero every evaluation is NaN.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SqrtCos { 
    k: f64, 
}
impl SqrtCos { 
    /// Coefficient of the reference equation `sqrt(x) - cos(0.387 x)`.
    pub const REFERENCE_K: f64 = 0.387; 

    #[must_use]
    pub fn new(k: f64) -> Self { 
        Self { k }
    }

    #[inline] #[must_use] pub fn k(&self) -> f64 { self.k }
}
impl Default for SqrtCos { 
    fn default() -> Self { 
        Self::new(Self::REFERENCE_K)
    }
}
impl Equation for SqrtCos { 
    #[inline]
    fn f(&self, x: f64) -> f64 { 
        x.sqrt() - (self.k * x).cos()
    }

    #[inline]
    fn df(&self, x: f64) -> f64 { 
        0.5 / x.sqrt() + self.k * (self.k * x).sin()
    }

    #[inline]
    fn d2f(&self, x: f64) -> f64 { 
        -0.25 / (x * x.sqrt()) + self.k * self.k * (self.k * x).cos()
    }
}


/// Equation assembled from three closures `f`, `f'`, `f''`.
///
/// ```
/// use chord_newton::root_finding::equation::{Equation, FnEquation};
///
/// let eq = FnEquation::new(|x: f64| x * x - 4.0, |x: f64| 2.0 * x, |_: f64| 2.0);
/// assert_eq!(eq.f(2.0), 0.0);
/// assert_eq!(eq.d2f(7.0), 2.0);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct FnEquation<F, G, H> { 
    f:   F, 
    df:  G, 
    d2f: H, 
}
impl<F, G, H> FnEquation<F, G, H> 
where 
    F: Fn(f64) -> f64, 
    G: Fn(f64) -> f64, 
    H: Fn(f64) -> f64 
{ 
    pub fn new(f: F, df: G, d2f: H) -> Self { 
        Self { f, df, d2f }
    }
}
impl<F, G, H> Equation for FnEquation<F, G, H> 
where 
    F: Fn(f64) -> f64, 
    G: Fn(f64) -> f64, 
    H: Fn(f64) -> f64 
{ 
    #[inline] fn f(&self, x: f64)   -> f64 { (self.f)(x) }
    #[inline] fn df(&self, x: f64)  -> f64 { (self.df)(x) }
    #[inline] fn d2f(&self, x: f64) -> f64 { (self.d2f)(x) }
}

//! Defines the [`RootFindingReport`] struct returned by all 
//! root-finding algorithms, and the [`Trace`] of iterates it carries. 

/// Reasons a root-finding algorithm may terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)] 
pub enum TerminationReason { 
    /// `|x1 - x| < eps` 
    ToleranceReached, 
    /// iteration cap hit before the tolerance was met
    IterationLimit,
}


/// One recorded iteration: the pair `(prev, curr)` as it stood 
/// *before* the update was applied.
///
/// On the first step `prev` is the `0.0` sentinel both methods start from.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Step { 
    pub prev: f64, 
    pub curr: f64, 
}
impl Step { 
    /// `|curr - prev|`
    #[inline]
    pub fn delta(&self) -> f64 { 
        (self.curr - self.prev).abs()
    }
}


/// Append-only sequence of [`Step`]s recorded during one run. 
///
/// `len()` always equals the number of iterations performed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace { 
    steps: Vec<Step>, 
}
impl Trace { 
    pub fn new() -> Self { 
        Self::default()
    }

    pub(crate) fn record(&mut self, prev: f64, curr: f64) { 
        self.steps.push(Step { prev, curr });
    }

    pub fn steps(&self) -> &[Step] { &self.steps }
    pub fn len(&self) -> usize { self.steps.len() }
    pub fn is_empty(&self) -> bool { self.steps.is_empty() }
    pub fn last(&self) -> Option<&Step> { self.steps.last() }
    pub fn iter(&self) -> std::slice::Iter<'_, Step> { self.steps.iter() }
}
impl From<Vec<Step>> for Trace { 
    fn from(steps: Vec<Step>) -> Self { 
        Self { steps }
    }
}
impl<'a> IntoIterator for &'a Trace { 
    type Item = &'a Step; 
    type IntoIter = std::slice::Iter<'a, Step>; 

    fn into_iter(self) -> Self::IntoIter { 
        self.steps.iter()
    }
}


/// Final report returned by all root-finding algorithms.  
/// 
/// [`RootFindingReport`]
/// - `root`               : most recently computed estimate  
/// - `previous`           : the iterate `root` was computed from  
/// - `f_root`             : function value at `root`  
/// - `iterations`         : total iterations, equal to `trace.len()`  
/// - `evaluations`        : total evaluations of `f` and `f'`  
/// - `termination_reason` : why the solver stopped ([`TerminationReason`])  
/// - `trace`              : every `(prev, curr)` pair, in order  
/// - `algorithm_name`     : algorithm name (e.g. `"chord"`)  
#[derive(Debug, Clone, PartialEq)] 
pub struct RootFindingReport {
    pub root               : f64, 
    pub previous           : f64, 
    pub f_root             : f64, 
    pub iterations         : usize, 
    pub evaluations        : usize, 
    pub termination_reason : TerminationReason, 
    pub trace              : Trace, 
    pub algorithm_name     : &'static str, 
}

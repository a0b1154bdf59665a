//! Trace-to-row formatting.  
//!
//! Maps each [`Step`] of a [`Trace`] to four text cells:
//!
//! ┌ [`RowFormat::Standard`]   : `x`, `f(x)`, `f'(x)`, `|x1 - x|`  
//! └ [`RowFormat::Reciprocal`] : `x`, `f(x)`, `1/(1+f(x))`, `|x1 - x|`  
//!
//! where `x` is the step's `curr` and `|x1 - x|` its [`Step::delta`]. 
//! All cells of a table share one fixed decimal precision.

use super::equation::Equation; 
use super::report::{Step, Trace}; 


/// Which quantity fills the third column.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RowFormat { 
    /// `f'(x)`
    #[default]
    Standard, 
    /// `1 / (1 + f(x))`
    Reciprocal, 
}
impl RowFormat { 
    pub const fn header(self) -> [&'static str; 4] { 
        match self { 
            RowFormat::Standard   => ["x", "f(x)", "f'(x)",      "|x1-x|"], 
            RowFormat::Reciprocal => ["x", "f(x)", "1/(1+f(x))", "|x1-x|"], 
        }
    }

    fn third_column<E: Equation>(self, eq: &E, x: f64, fx: f64) -> f64 { 
        match self { 
            RowFormat::Standard   => eq.df(x), 
            RowFormat::Reciprocal => 1.0 / (1.0 + fx), 
        }
    }
}


#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RowFormatter { 
    format:    RowFormat, 
    precision: usize, 
}
impl RowFormatter { 
    /// Six decimals, as fixed-notation output does by default.
    pub const DEFAULT_PRECISION: usize = 6; 

    #[must_use]
    pub fn new(format: RowFormat) -> Self { 
        Self { format, precision: Self::DEFAULT_PRECISION }
    }

    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self { 
        self.precision = precision; 
        self 
    }

    #[inline] #[must_use] pub fn format(&self)    -> RowFormat { self.format }
    #[inline] #[must_use] pub fn precision(&self) -> usize { self.precision }

    pub fn header(&self) -> Vec<String> { 
        self.format.header().iter().map(|s| s.to_string()).collect()
    }

    pub fn row<E: Equation>(&self, eq: &E, step: &Step) -> Vec<String> { 
        let x  = step.curr; 
        let fx = eq.f(x); 
        [x, fx, self.format.third_column(eq, x, fx), step.delta()]
            .iter()
            .map(|v| format!("{:.*}", self.precision, v))
            .collect()
    }

    pub fn rows<E: Equation>(&self, eq: &E, trace: &Trace) -> Vec<Vec<String>> { 
        trace.iter().map(|step| self.row(eq, step)).collect()
    }

    /// Header row followed by one row per step, ready for 
    /// [`render`](crate::table::render).
    pub fn table<E: Equation>(&self, eq: &E, trace: &Trace) -> Vec<Vec<String>> { 
        let mut table = Vec::with_capacity(trace.len() + 1); 
        table.push(self.header()); 
        table.extend(self.rows(eq, trace)); 
        table
    }
}
impl Default for RowFormatter { 
    fn default() -> Self { 
        Self::new(RowFormat::Standard)
    }
}

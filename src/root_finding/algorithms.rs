//! Root-finding algorithm definitions.  
//!
//! Provides the [`Algorithm`] enum, which enumerates the supported methods, 
//! along with the shared [`GLOBAL_MAX_ITER_FALLBACK`] hard cap.  


/// Upper bound applied when a method has no heuristic default of its own.  
///
/// Both methods stop on `|x1 - x| < eps` only, so without a cap a 
/// cycling or diverging run would never return.
pub const GLOBAL_MAX_ITER_FALLBACK: usize = 500; 


/// Root-finding algorithm variants. 
/// - [`Algorithm::Chord`]  : fixed-anchor chord method 
/// - [`Algorithm::Newton`] : tangent-line (Newton-Raphson) method 
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm { 
    Chord,
    Newton,
}

impl Algorithm { 
    /// Default iteration count if `max_iter` is unset in config. 
    ///  
    /// # Notes 
    /// - Applied only when `max_iter` is unset.  
    /// - Values are heuristic and method-specific.  
    pub const fn default_max_iter(self) -> Option<usize> { 
        match self { 
            Algorithm::Chord  => Some(200), 
            Algorithm::Newton => Some(50), 
        }
    }

    pub const fn algorithm_name(self) -> &'static str { 
        match self { 
            Algorithm::Chord  => "chord", 
            Algorithm::Newton => "newton",
        }
    }

    /// Resolves the iteration cap for a run: explicit `max_iter` first, then 
    /// [`Algorithm::default_max_iter`], then [`GLOBAL_MAX_ITER_FALLBACK`].
    pub(crate) const fn resolve_max_iter(self, max_iter: Option<usize>) -> usize { 
        match max_iter { 
            Some(v) => v, 
            None    => match self.default_max_iter() { 
                Some(v) => v, 
                None    => GLOBAL_MAX_ITER_FALLBACK, 
            }, 
        }
    }
}
impl std::fmt::Display for Algorithm { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { 
        write!(f, "{}", self.algorithm_name())
    }
}

//! Shared configuration for root-finding algorithms.  
//! 
//! Provides [`CommonCfg`] with the default convergence threshold and 
//! iteration limit, used by all method configs.
//!
//! [`CommonCfg`] universal fields  
//! ├ `eps`      : step tolerance, the loop runs while `|x1 - x| >= eps`  
//! └ `max_iter` : iteration cap (optional) 
//!
//! [`CommonCfg::new`] initializes configuration with default values. 
//!
//! Some algorithms (e.g. newton) have additional config arguments 
//! (e.g. the replacement for a zero starting point).


pub const DEFAULT_EPS: f64 = 1e-3;


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CommonCfg {
    eps:      f64,
    max_iter: Option<usize>,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self { 
            eps      : DEFAULT_EPS, 
            max_iter : None 
        }
    }

    // getters  
    pub fn eps(&self)      -> f64 { self.eps }
    pub fn max_iter(&self) -> Option<usize> { self.max_iter }

    // setters (internal) 
    pub(crate) fn with_eps      (&mut self, v: f64)   { self.eps      = v; }
    pub(crate) fn with_max_iter (&mut self, v: usize) { self.max_iter = Some(v); }
}

impl Default for CommonCfg { 
    fn default() -> Self { Self::new() }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_eps(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                $crate::root_finding::tolerances::validate_eps(v)?;
                self.common.with_eps(v);
                Ok(self)
            }
            pub fn set_max_iter(
                mut self, v: usize
            ) -> Result<Self, $crate::root_finding::errors::RootFindingError> {
                if v == 0 {
                    return Err(
                        $crate::root_finding::errors::RootFindingError::InvalidMaxIter { got: v }
                    );
                }
                self.common.with_max_iter(v);
                Ok(self)
            }

            #[inline] #[must_use] pub fn eps(&self) -> f64 { self.common.eps() }
            #[inline] #[must_use] pub fn max_iter(&self) -> Option<usize> { self.common.max_iter() }
        }
    };
}
pub(crate) use impl_common_cfg; 

// common helpers 
pub mod algorithms; 
pub mod equation; 
pub mod report; 
pub mod errors; 
pub mod format; 
pub(crate) mod config;
pub(crate) mod tolerances; 

// algorithms 
pub mod chord;
pub mod newton;
pub mod selector; 

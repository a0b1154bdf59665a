//! Chord and Newton root-finding with printable iteration traces.
//!
//! [`root_finding`] holds the numerical core, [`table`] renders the
//! resulting rows as a box-drawn grid.

pub mod root_finding;
pub mod table;

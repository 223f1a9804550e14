//! Statistical distributions.
//!
//! Currently the occupation-number distributions of statistical mechanics
//! (Fermi-Dirac, Bose-Einstein, Maxwell-Boltzmann).

pub mod occupation;

pub use occupation::{
    bose, fermi, maxwell, validate_temperatures, Occupation, OccupationSlice,
    DEFAULT_SLICE_TEMPERATURE,
};

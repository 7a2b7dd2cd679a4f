//! Pure data structures (DTOs) for the profile domain.

pub mod profile;

pub use profile::*;

//! acuity-core
//!
//! Pure domain types: score identifiers, patient parameter sets, and the
//! result envelope shared by every crate. No I/O dependency — this is the
//! shared vocabulary of the Acuity scoring system.

pub mod models;
pub mod params;
pub mod score_type;

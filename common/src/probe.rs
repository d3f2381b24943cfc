//! # Probe Model
//!
//! What goes into the probe engine ([`Address`]), what comes out of it
//! ([`ProbeOutcome`]) and how an outcome is judged for display
//! ([`Classification`]).

mod address;
mod classification;
mod outcome;
mod tally;

pub use address::Address;
pub use classification::Classification;
pub use outcome::{ProbeOutcome, ProbeResult};
pub use tally::Tally;

//! # Sweepr Core
//!
//! The three stages of a sweep, in the order the CLI drives them:
//!
//! * **[`loader`]**: turns an input file into a list of addresses.
//! * **[`prober`]**: the abstraction over "probe one address", plus the HTTP implementation.
//! * **[`engine`]**: fans the addresses out over a bounded worker pool and
//!   streams outcomes back in completion order.

pub mod engine;
pub mod loader;
pub mod prober;

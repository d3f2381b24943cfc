//! The **abstraction** over probing a single address.
//!
//! The [`engine`](crate::engine) only ever talks to a [`Prober`]. The concrete
//! [`HttpProber`] issues real requests; tests plug in scripted probers to control
//! latency and results without touching the network.

use async_trait::async_trait;
use sweepr_common::probe::{Address, ProbeResult};

mod http;

pub use http::HttpProber;

/// Probes one address and reports its status code.
///
/// Implementations must turn every transport problem into a
/// [`ProbeError::Failure`](sweepr_common::error::ProbeError::Failure) instead of
/// panicking or returning early, and must bound their own running time.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, address: &Address) -> ProbeResult;
}

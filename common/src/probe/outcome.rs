use crate::error::ProbeError;

use super::{Address, Classification};

/// Status code on success, the reason there is none otherwise.
pub type ProbeResult = Result<u16, ProbeError>;

/// The single result produced for one probed address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub address: Address,
    pub result: ProbeResult,
}

impl ProbeOutcome {
    pub fn new(address: Address, result: ProbeResult) -> Self {
        Self { address, result }
    }

    pub fn status(&self) -> Option<u16> {
        self.result.as_ref().ok().copied()
    }

    pub fn classification(&self) -> Classification {
        Classification::from_status(self.status())
    }
}

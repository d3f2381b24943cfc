//! Turns probe outcomes into console lines.
//!
//! The [`Reporter`] owns the color setup for the whole run: it pins the
//! `colored` override according to the requested [`ColorMode`] when built and
//! releases it when dropped.

use colored::*;
use sweepr_common::config::ColorMode;
use sweepr_common::error::ProbeError;
use sweepr_common::probe::{ProbeOutcome, Tally};

use crate::terminal::{colors, print};

pub struct Reporter {
    tally: Tally,
    _colors: ColorGuard,
}

impl Reporter {
    pub fn new(mode: ColorMode) -> Self {
        Self {
            tally: Tally::new(),
            _colors: ColorGuard::apply(mode),
        }
    }

    /// Prints one outcome. Never waits on anything but stdout.
    pub fn report(&mut self, outcome: &ProbeOutcome) {
        self.tally.record(outcome);
        print::print(&render(outcome));
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }
}

pub fn render(outcome: &ProbeOutcome) -> String {
    match &outcome.result {
        Ok(code) => {
            let color = colors::for_class(outcome.classification());
            format!(
                "IP: {}, Status Code: {}",
                outcome.address,
                code.to_string().color(color)
            )
        }
        Err(ProbeError::Failure(_)) => format!(
            "IP: {} is {}.",
            outcome.address,
            "unresponsive or unreachable".color(colors::UNREACHABLE)
        ),
        Err(ProbeError::Unexpected(msg)) => {
            format!("Error checking IP {}: {}", outcome.address, msg)
        }
    }
}

struct ColorGuard {
    overridden: bool,
}

impl ColorGuard {
    fn apply(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Auto => Self { overridden: false },
            ColorMode::Always => {
                colored::control::set_override(true);
                Self { overridden: true }
            }
            ColorMode::Never => {
                colored::control::set_override(false);
                Self { overridden: true }
            }
        }
    }
}

impl Drop for ColorGuard {
    fn drop(&mut self) {
        if self.overridden {
            colored::control::unset_override();
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

use std::str::FromStr;
use std::time::Duration;

/// Per-request budget, connect through the last byte of the response.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Upper bound for the default worker pool, independent of input size.
pub const MAX_DEFAULT_CONCURRENCY: usize = 32;

#[derive(Clone, Debug)]
pub struct Config {
    /// Number of probes allowed in flight at the same time.
    pub concurrency: usize,
    /// Timeout applied to every single probe.
    pub timeout: Duration,
    /// 0 prints everything, 1 hides decorations, 2 also hides the summary.
    pub quiet: u8,
    pub no_banner: bool,
    pub color: ColorMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
            timeout: DEFAULT_TIMEOUT,
            quiet: 0,
            no_banner: false,
            color: ColorMode::Auto,
        }
    }
}

/// Available parallelism plus four, capped at [`MAX_DEFAULT_CONCURRENCY`].
///
/// Probes spend nearly all their time waiting on the network, so the pool is
/// allowed to exceed the core count.
pub fn default_concurrency() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .saturating_add(4)
        .min(MAX_DEFAULT_CONCURRENCY)
}

/// When to emit ANSI color codes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when stdout is a terminal and the environment allows it.
    #[default]
    Auto,
    Always,
    Never,
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err(format!("invalid color mode: {s} (expected auto, always or never)")),
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

pub mod check;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use sweepr_common::config::{self, ColorMode, Config};

#[derive(Parser)]
#[command(name = "sweepr")]
#[command(version)]
#[command(about = "Probe a list of hosts over HTTP and report their status codes.")]
pub struct CommandLine {
    /// File with one address per line. Asked for interactively when omitted
    pub file: Option<PathBuf>,

    /// Maximum number of probes in flight at once
    #[arg(short, long, default_value_t = config::default_concurrency(), value_parser = parse_concurrency)]
    pub concurrency: usize,

    /// Per-request timeout in milliseconds
    #[arg(short, long, value_name = "MS", default_value_t = 2_000, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Reduce output; repeat for less
    #[arg(short, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Skip the banner
    #[arg(long)]
    pub no_banner: bool,

    /// When to use colors: auto, always or never
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            concurrency: self.concurrency,
            timeout: Duration::from_millis(self.timeout),
            quiet: self.quiet,
            no_banner: self.no_banner,
            color: self.color,
        }
    }
}

fn parse_concurrency(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err(String::from("concurrency must be at least 1")),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("invalid concurrency '{s}': {e}")),
    }
}

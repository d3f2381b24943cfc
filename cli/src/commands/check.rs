use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use colored::*;
use tracing::info_span;

use crate::mprint;
use crate::terminal::report::Reporter;
use crate::terminal::{colors, print, progress};
use sweepr_common::config::Config;
use sweepr_common::error::InputError;
use sweepr_common::probe::{Address, Classification, Tally};
use sweepr_common::{success, warn};
use sweepr_core::engine::ProbeEngine;
use sweepr_core::loader;
use sweepr_core::prober::HttpProber;

/// Loads `path`, probes every address in it and reports outcomes as they land.
///
/// Problems with the input file are reported and end the run without an error,
/// since nothing has been probed yet.
pub async fn check(path: &Path, cfg: &Config, reporter: &mut Reporter) -> anyhow::Result<()> {
    let addresses: Vec<Address> = match loader::load_addresses(path) {
        Ok(addresses) => addresses,
        Err(err) => {
            input_failed(&err);
            return Ok(());
        }
    };

    let len: usize = addresses.len();
    let unit: &str = if len == 1 { "address has been" } else { "addresses have been" };
    success!("{len} {unit} loaded from {}", path.display());

    let prober = HttpProber::new(cfg.timeout)?;
    let engine = ProbeEngine::new(Arc::new(prober), cfg);

    print::header("checking ips for status codes", cfg.quiet);

    let span = info_span!("probing", indicatif.pb_show = true);
    progress::track(&span, len);
    let guard = span.enter();

    let start_time: Instant = Instant::now();
    let mut outcomes = engine.run(addresses);
    while let Some(outcome) = outcomes.next().await {
        reporter.report(&outcome);
        progress::advance(&span);
    }

    drop(guard);

    if outcomes.received() != outcomes.expected() {
        warn!(
            "Only {} of {} probes reported back",
            outcomes.received(),
            outcomes.expected()
        );
    }

    print_summary(reporter.tally(), start_time.elapsed(), cfg);
    Ok(())
}

fn input_failed(err: &InputError) {
    print::failure(&input_error_line(err));
}

fn input_error_line(err: &InputError) -> String {
    match err {
        InputError::FileNotFound { path } => {
            format!("Error: The file {} does not exist.", path.display())
        }
        InputError::EmptyInput { .. } => String::from("The file is empty or contains no valid IPs."),
        InputError::Io { source, .. } => format!("An unexpected error occurred: {source}"),
    }
}

fn print_summary(tally: &Tally, total_time: Duration, cfg: &Config) {
    if cfg.quiet > 1 {
        return;
    }

    let output: String = summary_line(tally, total_time);

    match cfg.quiet {
        0 => {
            print::header("sweep summary", cfg.quiet);
            print_breakdown(tally);
            print::fat_separator();
            print::centerln(&output);
        }
        _ => {
            mprint!();
            print::done(&output);
        }
    }
}

fn summary_line(tally: &Tally, total_time: Duration) -> String {
    let responsive: ColoredString = format!("{} of {}", tally.responsive(), tally.total())
        .bold()
        .green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    format!(
        "{} {} {} {}",
        "Sweep Complete:".color(colors::TEXT_DEFAULT),
        responsive,
        "hosts responded in".color(colors::TEXT_DEFAULT),
        total_time
    )
}

fn print_breakdown(tally: &Tally) {
    let key_width: usize = Classification::ALL
        .iter()
        .map(|class| class.label().len())
        .max()
        .unwrap_or(0);

    for (class, count) in tally.non_zero() {
        let value: ColoredString = count.to_string().color(colors::for_class(class));
        print::aligned_line(class.label(), key_width, value);
    }

    if tally.unexpected() > 0 {
        let value: ColoredString = tally.unexpected().to_string().color(colors::ACCENT);
        print::aligned_line("Errors", key_width, value);
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

use indicatif::ProgressStyle;
use tracing::Span;
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

pub fn style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} {msg} {wide_bar:.green/bright_black} {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .tick_strings(TICKS)
        .progress_chars("━━─")
}

/// Turns `span` into a progress bar counting probed hosts.
pub fn track(span: &Span, total: usize) {
    span.pb_set_style(&style());
    span.pb_set_length(total as u64);
    span.pb_set_message("Probing hosts");
}

pub fn advance(span: &Span) {
    span.pb_inc(1);
}

//! Output rendering.
//!
//! Text output reproduces the example scripts line for line.
//! JSON output is the canonical report.

use clap::ValueEnum;

use scenario_kernel::report::{canonical_float, canonical_serialize, Report};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn render(report: &Report, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => render_text(report),
        OutputFormat::Json => String::from_utf8(canonical_serialize(report))
            .expect("canonical JSON is always valid UTF-8"),
    }
}

fn render_text(report: &Report) -> String {
    match report {
        Report::PrimeSum(r) => format!(
            "The sum of all prime numbers up to {} is: {}",
            r.limit, r.sum
        ),
        Report::VelocityTime(r) => canonical_float(r.elapsed_time),
    }
}

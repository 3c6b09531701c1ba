//! Terminal rendering of steps and metrics.
//!
//! Colors follow the highlight roles: comparing is red, swapping is green,
//! sorted is dimmed and everything else is blue.

use console::{Style, style};
use sortline_core::SortValue;
use sortline_engine::{Algorithm, Metrics};
use sortline_ledger::{HighlightRole, Step};

/// Widest bar drawn by [`bars`]
pub const BAR_WIDTH: usize = 40;

fn role_style(role: Option<HighlightRole>) -> Style {
    match role {
        Some(HighlightRole::Comparing) => Style::new().red().bold(),
        Some(HighlightRole::Swapping) => Style::new().green().bold(),
        Some(HighlightRole::Sorted) => Style::new().dim(),
        None => Style::new().blue(),
    }
}

/// One line: step index, colored values, explanation
pub fn step_line<V: SortValue>(index: usize, step: &Step<V>) -> String {
    let values: Vec<String> = step
        .array()
        .iter()
        .enumerate()
        .map(|(i, v)| {
            role_style(step.highlights().role_of(i))
                .apply_to(v.to_string())
                .to_string()
        })
        .collect();
    format!(
        "{:>5}  [{}]  {}",
        style(index).dim(),
        values.join(", "),
        step.explanation()
    )
}

/// Horizontal bar per element, scaled between the smallest and largest value
pub fn bars<V: SortValue>(step: &Step<V>) -> Vec<String> {
    let reals: Vec<f64> = step.array().iter().map(SortValue::to_real).collect();
    let min = reals.iter().copied().fold(f64::INFINITY, f64::min);
    let max = reals.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = if max > min { max - min } else { 1.0 };

    step.array()
        .iter()
        .zip(&reals)
        .enumerate()
        .map(|(i, (value, real))| {
            let len = 1 + (((real - min) / span) * (BAR_WIDTH - 1) as f64) as usize;
            let bar = role_style(step.highlights().role_of(i)).apply_to("█".repeat(len));
            format!("{i:>3} {value:>6} {bar}")
        })
        .collect()
}

/// Metrics block
pub fn metrics(metrics: &Metrics, estimated: bool) -> String {
    let suffix = if estimated { " (estimated)" } else { "" };
    format!(
        "Comparisons: {}\nSwaps: {}\nTime: {:.4} seconds{suffix}",
        metrics.comparisons,
        metrics.swaps,
        metrics.elapsed.as_secs_f64()
    )
}

/// Catalog table row
pub fn catalog_row(algorithm: Algorithm) -> String {
    let info = algorithm.info();
    format!(
        "{:<16} {:<27} {:<15} {:<9} {:<6} {}",
        style(algorithm.name()).bold(),
        info.category.to_string(),
        info.time,
        info.space,
        if info.stable { "Yes" } else { "No" },
        info.description
    )
}

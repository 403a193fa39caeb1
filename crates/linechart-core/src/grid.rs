// File: crates/linechart-core/src/grid.rs
// Summary: Major tick placement ("nice" 1/2/2.5/5 steps) and tick label formatting.

use crate::axis::AxisRange;

/// Preferred number of major ticks per axis.
pub const TARGET_TICKS: usize = 6;

/// Smallest step of the form {1, 2, 2.5, 5, 10} x 10^k giving at most ~`target` intervals.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span / target.max(1) as f64;
    let mag = 10f64.powi(raw.log10().floor() as i32);
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 2.5 {
        2.5
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Major tick values inside `range`, plus the step that produced them.
pub fn ticks(range: AxisRange, target: usize) -> (Vec<f64>, f64) {
    let span = range.span();
    if !span.is_finite() || span <= 0.0 {
        return (Vec::new(), 0.0);
    }
    let step = nice_step(span, target);
    let first = (range.min / step).ceil() as i64;
    let last = (range.max / step + 1e-9).floor() as i64;
    let values = (first..=last)
        .map(|k| {
            let v = k as f64 * step;
            // collapse -0.0 and rounding noise around zero
            if v.abs() < step * 1e-9 { 0.0 } else { v }
        })
        .collect();
    (values, step)
}

/// Decimal places needed to print multiples of `step` exactly.
pub fn decimals_for_step(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let mut decimals = 0usize;
    let mut scaled = step;
    while decimals < 12 && (scaled - scaled.round()).abs() > 1e-6 * scaled.abs().max(1.0) {
        decimals += 1;
        scaled *= 10.0;
    }
    decimals
}

pub fn format_tick(value: f64, decimals: usize) -> String {
    let s = format!("{:.*}", decimals, value);
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_string()
    } else {
        s
    }
}

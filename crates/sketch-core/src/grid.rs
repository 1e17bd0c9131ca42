// File: crates/sketch-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Evenly spaced tick values from 0 to `max` over `ticks` intervals (ticks + 1 values).
pub fn tick_values(max: f64, ticks: usize) -> Vec<f64> {
    linspace(0.0, max, ticks + 1)
}

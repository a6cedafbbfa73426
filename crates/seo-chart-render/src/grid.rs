// File: crates/seo-chart-render/src/grid.rs
// Summary: Horizontal guide rule placement between the plot top and the chart floor.

/// Number of horizontal rules drawn across the plot, floor included.
pub const RULES: usize = 5;

/// Evenly spaced y positions from `top` down to `floor`, both ends included.
pub fn rule_positions(top: f64, floor: f64, rules: usize) -> Vec<f64> {
    match rules {
        0 => Vec::new(),
        1 => vec![floor],
        _ => {
            let gap = (floor - top) / (rules - 1) as f64;
            (0..rules).map(|i| top + gap * i as f64).collect()
        }
    }
}

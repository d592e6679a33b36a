// File: crates/chart-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Tick step on a 1/2/2.5/5 x 10^n ladder giving at most `max_ticks` intervals over `span`.
pub fn nice_step(span: f64, max_ticks: usize) -> f64 {
    if !(span.is_finite() && span > 0.0) || max_ticks == 0 {
        return 1.0;
    }
    let raw = span / max_ticks as f64;
    let mag = 10f64.powf(raw.log10().floor());
    for m in [1.0, 2.0, 2.5, 5.0, 10.0] {
        if m * mag >= raw - 1e-12 {
            return m * mag;
        }
    }
    10.0 * mag
}

/// Tick positions inside `[min, max]` on multiples of [`nice_step`].
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> Vec<f64> {
    let step = nice_step(max - min, max_ticks);
    let first = (min / step).ceil() as i64;
    let last = (max / step + 1e-9).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_endpoints() {
        let v = linspace(0.0, 1.0, 5);
        assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn ticks_start_at_zero_and_are_even() {
        let ticks = nice_ticks(0.0, 78_750.0, 8);
        assert_eq!(ticks[0], 0.0);
        assert_eq!(nice_step(78_750.0, 8), 10_000.0);
        assert_eq!(ticks.len(), 8);
        for w in ticks.windows(2) {
            assert!((w[1] - w[0] - 10_000.0).abs() < 1e-9);
        }
        assert!(*ticks.last().unwrap() <= 78_750.0);
    }

    #[test]
    fn step_ladder() {
        assert_eq!(nice_step(10.0, 5), 2.0);
        assert_eq!(nice_step(12.0, 5), 2.5);
        assert_eq!(nice_step(40.0, 5), 10.0);
        assert_eq!(nice_step(0.0, 5), 1.0);
    }
}

// File: crates/chart-core/src/axis.rs
// Summary: Axis models: a numeric value axis with nice ticks and a categorical axis.

use crate::grid::nice_ticks;

#[derive(Clone, Debug)]
pub struct ValueAxis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    /// Upper bound on tick intervals.
    pub max_ticks: usize,
}

impl ValueAxis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, max_ticks: 8 }
    }

    /// Axis from zero to `max_value` padded by `margin` (a fraction of `max_value`).
    pub fn from_zero(label: impl Into<String>, max_value: f64, margin: f64) -> Self {
        let max = if max_value > 0.0 { max_value * (1.0 + margin) } else { 1.0 };
        Self::new(label, 0.0, max)
    }

    pub fn ticks(&self) -> Vec<f64> {
        nice_ticks(self.min, self.max, self.max_ticks)
    }
}

#[derive(Clone, Debug)]
pub struct CategoryAxis {
    pub label: String,
}

impl CategoryAxis {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }
}

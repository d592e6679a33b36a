// File: crates/chart-core/src/dataset.rs
// Summary: Synthetic category/revenue rows drawn from a seeded normal distribution.
// Notes:
// - Samples are drawn in `CATEGORIES` order, then the rows are stably sorted
//   ascending by revenue, so equal revenues keep sampling order.

use rand::{rngs::StdRng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::error::{ChartError, Result};
use crate::types::{CATEGORIES, REVENUE_FLOOR, REVENUE_MEAN, REVENUE_STD_DEV, SEED};

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryRevenueRow {
    pub category: &'static str,
    pub revenue: f64,
}

/// Rows sorted ascending by revenue, one per entry of [`CATEGORIES`].
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    rows: Vec<CategoryRevenueRow>,
}

impl Dataset {
    /// Dataset used by the generator: fixed seed and distribution parameters.
    pub fn generate() -> Result<Self> {
        Self::generate_with_seed(SEED)
    }

    /// Draw one revenue per category from N(mean, std_dev), floor it at
    /// [`REVENUE_FLOOR`] and round half-to-even to a whole number.
    pub fn generate_with_seed(seed: u64) -> Result<Self> {
        let normal = Normal::new(REVENUE_MEAN, REVENUE_STD_DEV)
            .map_err(|e| ChartError::Distribution(e.to_string()))?;
        let mut rng = StdRng::seed_from_u64(seed);

        let mut rows: Vec<CategoryRevenueRow> = CATEGORIES
            .iter()
            .map(|&category| {
                let raw: f64 = normal.sample(&mut rng);
                CategoryRevenueRow { category, revenue: raw.max(REVENUE_FLOOR).round_ties_even() }
            })
            .collect();
        rows.sort_by(|a, b| a.revenue.total_cmp(&b.revenue));

        log::debug!("generated {} rows with seed {seed}", rows.len());
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[CategoryRevenueRow] { &self.rows }

    pub fn iter(&self) -> std::slice::Iter<'_, CategoryRevenueRow> { self.rows.iter() }

    pub fn len(&self) -> usize { self.rows.len() }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Largest revenue, or 0.0 when empty.
    pub fn max_revenue(&self) -> f64 {
        self.rows.iter().map(|r| r.revenue).fold(0.0, f64::max)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a CategoryRevenueRow;
    type IntoIter = std::slice::Iter<'a, CategoryRevenueRow>;
    fn into_iter(self) -> Self::IntoIter { self.rows.iter() }
}

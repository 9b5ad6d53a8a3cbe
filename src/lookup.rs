/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Table-approximated alpha law.
//!
//! Repulsion from [`AlphaLaw`](crate::law::AlphaLaw) is sampled at `steps`
//! evenly spaced squared distances up to `bound` and answered at query time by
//! rounding to the nearest sample. Distances beyond `bound` read the last
//! entry. Attraction stays exact.
//!
//! Trades a small accuracy loss for an O(1) read in place of the
//! division-heavy closed form.
//!
//! Requires the `lookup` feature. The table lives in a fixed-capacity
//! [`heapless::Vec`], so the law is allocation-free like the rest of the crate.

use heapless::Vec as HVec;

use crate::error::{require_positive, GradientError, GradientResult};
use crate::law::ForceLaw;

/// Largest supported table.
pub const MAX_LOOKUP_STEPS: usize = 1024;

/// Alpha law with a precomputed repulsion table.
#[derive(Clone, Debug, PartialEq)]
pub struct LookupLaw {
    alpha: f64,
    /// `-2·alpha`
    twoalpha: f64,
    bound: f64,
    /// `(steps - 1) / bound`, the query-time index scale.
    boundsteps: f64,
    table: HVec<f64, MAX_LOOKUP_STEPS>,
}

impl LookupLaw {
    /// Build the table.
    ///
    /// Entry `i` (for `1 ≤ i < steps`) holds the alpha-law repulsion at
    /// `d² = i · bound / steps`; entry 0 copies entry 1 since the closed form
    /// is infinite there.
    pub fn new(alpha: f64, gamma: f64, bound: f64, steps: usize) -> GradientResult<Self> {
        let alpha = require_positive("alpha", alpha)?;
        let gamma = require_positive("gamma", gamma)?;
        let bound = require_positive("bound", bound)?;
        if !(2..=MAX_LOOKUP_STEPS).contains(&steps) {
            return Err(GradientError::LookupSteps { steps, max: MAX_LOOKUP_STEPS });
        }

        let mut table: HVec<f64, MAX_LOOKUP_STEPS> = HVec::new();
        table
            .resize(steps, 0.0)
            .map_err(|_| GradientError::LookupSteps { steps, max: MAX_LOOKUP_STEPS })?;

        let alphagamma = 2.0 * alpha * gamma;
        let step = bound / steps as f64;
        for i in 1..steps {
            let dist_squared = i as f64 * step;
            let adk = alpha * dist_squared;
            table[i] = alphagamma / (dist_squared * (adk + 1.0));
        }
        table[0] = table[1];

        log::debug!(
            "lookup law table: alpha={} gamma={} bound={} steps={}",
            alpha,
            gamma,
            bound,
            steps
        );

        Ok(Self {
            alpha,
            twoalpha: -2.0 * alpha,
            bound,
            boundsteps: (steps - 1) as f64 / bound,
            table,
        })
    }

    /// Heaviness parameter.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Largest squared distance the table resolves.
    pub fn bound(&self) -> f64 {
        self.bound
    }

    /// Number of table entries.
    pub fn steps(&self) -> usize {
        self.table.len()
    }

    /// The precomputed repulsion samples.
    pub fn table(&self) -> &[f64] {
        &self.table
    }

    #[inline]
    fn lookup(&self, dist_squared: f64) -> f64 {
        if dist_squared > self.bound {
            return self.table[self.table.len() - 1];
        }
        // round half up; d² ≥ 0 so the cast never sees a negative
        let idx = (dist_squared * self.boundsteps + 0.5) as usize;
        self.table[idx.min(self.table.len() - 1)]
    }
}

impl ForceLaw for LookupLaw {
    #[inline]
    fn attraction(&self, dist_squared: f64) -> f64 {
        self.twoalpha / (1.0 + self.alpha * dist_squared)
    }

    #[inline]
    fn repulsion(&self, dist_squared: f64) -> f64 {
        self.lookup(dist_squared)
    }

    fn skips_coincident(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "lookup"
    }
}

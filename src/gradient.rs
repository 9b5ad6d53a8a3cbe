/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Per-edge entry points: squared distance, then force law, then clamped
//! rescale, all on one caller-owned buffer.
//!
//! # The two-phase buffer contract
//!
//! `holder[..dim]` is first overwritten with the raw difference `p_i − p_j`,
//! then rescaled in place by the law's multiplier. No second buffer is used.
//! Components of `holder` past `dim` are never touched.
//!
//! # Concurrency
//!
//! [`Gradient`] is immutable after construction and `Send + Sync`. Share one
//! instance across SGD workers; give each in-flight call its own `holder`.

use crate::error::{require_positive, GradientError, GradientResult};
use crate::kernel::{dist_and_vector, mult_modify};
use crate::law::{ForceLaw, Law};

/// A force law bound to an embedding dimension and a component cap.
///
/// Defaults to the closed [`Law`] set; use a concrete law type (e.g.
/// `Gradient<AlphaOneLaw>`) to drop the variant `match` entirely.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient<L: ForceLaw = Law> {
    law: L,
    dim: usize,
    cap: f64,
}

impl<L: ForceLaw> Gradient<L> {
    /// Bind `law` to `dim` dimensions with the law's default cap.
    pub fn new(law: L, dim: usize) -> GradientResult<Self> {
        if dim == 0 {
            return Err(GradientError::ZeroDimension);
        }
        let cap = law.default_cap();
        log::debug!("{} gradient: dim={} cap={}", law.name(), dim, cap);
        Ok(Self { law, dim, cap })
    }

    /// Replace the component cap. `cap` must be finite and `> 0`.
    pub fn with_cap(mut self, cap: f64) -> GradientResult<Self> {
        self.cap = require_positive("cap", cap)?;
        Ok(self)
    }

    /// Embedding dimensionality.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Bound on every output component.
    pub fn cap(&self) -> f64 {
        self.cap
    }

    /// The underlying force law.
    pub fn law(&self) -> &L {
        &self.law
    }

    /// Attraction multiplier at `dist_squared`, before clamping.
    #[inline]
    pub fn attraction(&self, dist_squared: f64) -> f64 {
        self.law.attraction(dist_squared)
    }

    /// Repulsion multiplier at `dist_squared`, before clamping.
    #[inline]
    pub fn repulsion(&self, dist_squared: f64) -> f64 {
        self.law.repulsion(dist_squared)
    }

    /// Displacement for a positive sample (observed edge `i → j`).
    ///
    /// On return `holder[..dim]` holds `clamp(attraction(d²) · (p_i − p_j))`.
    #[inline]
    pub fn positive_gradient(
        &self,
        point_i: &[f64],
        point_j: &[f64],
        holder: &mut [f64],
    ) -> GradientResult<()> {
        let out = self.prepare(point_i, point_j, holder, "point_j")?;
        let dist_squared = dist_and_vector(&point_i[..self.dim], &point_j[..self.dim], out);
        mult_modify(out, self.law.attraction(dist_squared), self.cap);
        Ok(())
    }

    /// Displacement for a negative sample (non-edge `i → k`).
    ///
    /// On return `holder[..dim]` holds `clamp(repulsion(d²) · (p_i − p_k))`.
    /// For laws that [skip coincident pairs](ForceLaw::skips_coincident),
    /// `d² == 0` leaves the all-zero difference in place.
    #[inline]
    pub fn negative_gradient(
        &self,
        point_i: &[f64],
        point_k: &[f64],
        holder: &mut [f64],
    ) -> GradientResult<()> {
        let out = self.prepare(point_i, point_k, holder, "point_k")?;
        let dist_squared = dist_and_vector(&point_i[..self.dim], &point_k[..self.dim], out);
        if dist_squared == 0.0 && self.law.skips_coincident() {
            return Ok(());
        }
        mult_modify(out, self.law.repulsion(dist_squared), self.cap);
        Ok(())
    }

    /// Check every slice covers `dim` and return the output window.
    #[inline]
    fn prepare<'h>(
        &self,
        point_i: &[f64],
        other: &[f64],
        holder: &'h mut [f64],
        other_name: &'static str,
    ) -> GradientResult<&'h mut [f64]> {
        let expected = self.dim;
        for (buffer, got) in [("point_i", point_i.len()), (other_name, other.len()), ("holder", holder.len())] {
            if got < expected {
                return Err(GradientError::DimensionMismatch { buffer, expected, got });
            }
        }
        Ok(&mut holder[..expected])
    }
}

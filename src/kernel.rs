//! Shared per-edge primitives: squared distance with difference vector, and
//! the clamped in-place rescale that every force law funnels through.
//!
//! # Invariants
//!
//! - No allocation. Each call is O(D).
//! - [`mult_modify`] is the only route by which a force value reaches the
//!   caller, so every law honours the same `[-cap, cap]` bound.

/// Default bound on any single output component.
pub const DEFAULT_CAP: f64 = 5.0;

/// Write `x_i[d] - x_j[d]` into `out[d]` and return the squared Euclidean
/// distance.
///
/// Runs over the common prefix of the three slices; callers pass slices
/// already cut to the embedding dimension. Empty input returns `0.0` and
/// writes nothing.
#[inline]
pub fn dist_and_vector(x_i: &[f64], x_j: &[f64], out: &mut [f64]) -> f64 {
    let mut cnt = 0.0;
    for ((o, &a), &b) in out.iter_mut().zip(x_i).zip(x_j) {
        let t = a - b;
        *o = t;
        cnt += t * t;
    }
    cnt
}

/// Bound `val` to `[-cap, cap]`.
///
/// Values already inside the range come back bit-for-bit. `NaN` maps to
/// `-cap`, the same as `fmin(fmax(val, -cap), cap)` in C.
#[inline]
pub fn clamp(val: f64, cap: f64) -> f64 {
    val.max(-cap).min(cap)
}

/// Multiply every component of `col` by `adj`, clamping each product to
/// `[-cap, cap]`.
#[inline]
pub fn mult_modify(col: &mut [f64], adj: f64, cap: f64) {
    for c in col.iter_mut() {
        *c = clamp(*c * adj, cap);
    }
}

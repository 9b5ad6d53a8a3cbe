/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Force laws: the scalar multiplier applied to the raw difference vector,
//! as a closed-form function of squared distance.
//!
//! - [`AlphaLaw`]: heavy-tailed kernel family with tunable `alpha`.
//! - [`AlphaOneLaw`]: the `alpha = 1` case, reimplemented directly, with a
//!   softened repulsion singularity.
//! - [`SigmoidLaw`]: logistic edge probability with saturated attraction and
//!   a hard repulsion horizon.
//! - [`Law`]: the closed set of laws, chosen once per training run.
//!
//! # Invariants
//!
//! - Derived constants are fixed at construction and never recomputed per call.
//! - Laws are plain values: `Copy` where possible, `Send + Sync` always.

use crate::error::{require_positive, GradientResult};
use crate::kernel::DEFAULT_CAP;
use crate::math::exp;

#[cfg(feature = "lookup")]
use crate::lookup::LookupLaw;

// ─── ForceLaw ───────────────────────────────────────────────────────────────

/// A pair of attraction and repulsion multipliers over squared distance.
///
/// A negative multiplier applied to `x_i - x_j` pulls `i` toward `j`; a
/// positive one pushes it away.
pub trait ForceLaw: Send + Sync {
    /// Multiplier for a positive sample (observed edge).
    fn attraction(&self, dist_squared: f64) -> f64;

    /// Multiplier for a negative sample (sampled non-edge).
    fn repulsion(&self, dist_squared: f64) -> f64;

    /// Component bound used when the caller does not override it.
    fn default_cap(&self) -> f64 {
        DEFAULT_CAP
    }

    /// Whether a negative sample at exactly zero distance leaves the zero
    /// difference vector as-is instead of rescaling it.
    ///
    /// Set by laws whose repulsion diverges at zero, where `0 × ∞` would
    /// otherwise poison the output with `NaN`.
    fn skips_coincident(&self) -> bool {
        false
    }

    /// Short identifier for logs.
    fn name(&self) -> &'static str;
}

// ─── AlphaLaw ───────────────────────────────────────────────────────────────

/// Generalised heavy-tailed law.
///
/// ```text
/// attraction(d²) = -2α / (1 + α·d²)
/// repulsion(d²)  = 2αγ / (d² · (α·d² + 1))
/// ```
///
/// Small `alpha` keeps repulsion alive at long range. Repulsion diverges as
/// `d² → 0`; the formula is left unguarded and coincident pairs are skipped
/// instead (see [`ForceLaw::skips_coincident`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlphaLaw {
    alpha: f64,
    gamma: f64,
    /// `2·alpha·gamma`
    alphagamma: f64,
    /// `-2·alpha`
    twoalpha: f64,
}

impl AlphaLaw {
    /// Build the law. `alpha` and `gamma` must be finite and `> 0`.
    pub fn new(alpha: f64, gamma: f64) -> GradientResult<Self> {
        let alpha = require_positive("alpha", alpha)?;
        let gamma = require_positive("gamma", gamma)?;
        if alpha == 1.0 {
            log::warn!("alpha law built with alpha = 1; the alpha-one law is faster and regularised at zero distance");
        }
        Ok(Self {
            alpha,
            gamma,
            alphagamma: 2.0 * alpha * gamma,
            twoalpha: -2.0 * alpha,
        })
    }

    /// Heaviness parameter.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Repulsion weight.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }
}

impl ForceLaw for AlphaLaw {
    #[inline]
    fn attraction(&self, dist_squared: f64) -> f64 {
        self.twoalpha / (1.0 + self.alpha * dist_squared)
    }

    #[inline]
    fn repulsion(&self, dist_squared: f64) -> f64 {
        let adk = self.alpha * dist_squared;
        self.alphagamma / (dist_squared * (adk + 1.0))
    }

    fn skips_coincident(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "alpha"
    }
}

// ─── AlphaOneLaw ────────────────────────────────────────────────────────────

/// The `alpha = 1` law with the generic multiply removed.
///
/// ```text
/// attraction(d²) = -2 / (1 + d²)
/// repulsion(d²)  = 2γ / ((1 + d²) · (0.1 + d²))
/// ```
///
/// The `0.1` offset keeps repulsion finite at zero distance, so this law is
/// the safe choice when coincident points can occur.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlphaOneLaw {
    gamma: f64,
    /// `2·gamma`
    scaled_gamma: f64,
}

/// Regularisation added to `d²` in the alpha-one repulsion denominator.
pub const ALPHA_ONE_OFFSET: f64 = 0.1;

impl AlphaOneLaw {
    /// Build the law. `gamma` must be finite and `> 0`.
    pub fn new(gamma: f64) -> GradientResult<Self> {
        let gamma = require_positive("gamma", gamma)?;
        Ok(Self {
            gamma,
            scaled_gamma: 2.0 * gamma,
        })
    }

    /// Repulsion weight as supplied.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }
}

impl ForceLaw for AlphaOneLaw {
    #[inline]
    fn attraction(&self, dist_squared: f64) -> f64 {
        -2.0 / (1.0 + dist_squared)
    }

    #[inline]
    fn repulsion(&self, dist_squared: f64) -> f64 {
        self.scaled_gamma / (1.0 + dist_squared) / (ALPHA_ONE_OFFSET + dist_squared)
    }

    fn name(&self) -> &'static str {
        "alpha-one"
    }
}

// ─── SigmoidLaw ─────────────────────────────────────────────────────────────

/// Logistic edge-probability law.
///
/// ```text
/// attraction(d²) = -1                     if d² > 4
///                  -(e^d² / (e^d² + 1))   otherwise
/// repulsion(d²)  = 0                      if d² > γ²
///                  γ / (1 + e^d²)         otherwise
/// ```
///
/// Both cutoffs are strict `>`. The component cap defaults to `gamma`
/// rather than [`DEFAULT_CAP`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SigmoidLaw {
    gamma: f64,
    /// `gamma²`, the repulsion horizon in squared distance.
    gammagamma: f64,
}

/// Squared distance above which sigmoid attraction is saturated at `-1`.
pub const SIGMOID_SATURATION: f64 = 4.0;

impl SigmoidLaw {
    /// Build the law. `gamma` must be finite and `> 0`.
    pub fn new(gamma: f64) -> GradientResult<Self> {
        let gamma = require_positive("gamma", gamma)?;
        Ok(Self {
            gamma,
            gammagamma: gamma * gamma,
        })
    }

    /// Repulsion weight, also the default cap.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Squared distance beyond which repulsion is exactly zero.
    pub fn horizon(&self) -> f64 {
        self.gammagamma
    }
}

impl ForceLaw for SigmoidLaw {
    #[inline]
    fn attraction(&self, dist_squared: f64) -> f64 {
        if dist_squared > SIGMOID_SATURATION {
            return -1.0;
        }
        let expsq = exp(dist_squared);
        -(expsq / (expsq + 1.0))
    }

    #[inline]
    fn repulsion(&self, dist_squared: f64) -> f64 {
        if dist_squared > self.gammagamma {
            return 0.0;
        }
        self.gamma / (1.0 + exp(dist_squared))
    }

    fn default_cap(&self) -> f64 {
        self.gamma
    }

    fn name(&self) -> &'static str {
        "sigmoid"
    }
}

// ─── Law (closed set) ───────────────────────────────────────────────────────

/// The closed set of force laws, selected once per training run.
///
/// Dispatch is a `match`, not a vtable, so the per-edge call stays inlinable.
#[derive(Clone, Debug, PartialEq)]
#[allow(clippy::large_enum_variant)]
pub enum Law {
    /// General heavy-tailed law.
    Alpha(AlphaLaw),
    /// Specialised `alpha = 1` law.
    AlphaOne(AlphaOneLaw),
    /// Logistic law.
    Sigmoid(SigmoidLaw),
    /// Table-approximated alpha law.
    #[cfg(feature = "lookup")]
    Lookup(LookupLaw),
}

impl ForceLaw for Law {
    #[inline]
    fn attraction(&self, dist_squared: f64) -> f64 {
        match self {
            Law::Alpha(l) => l.attraction(dist_squared),
            Law::AlphaOne(l) => l.attraction(dist_squared),
            Law::Sigmoid(l) => l.attraction(dist_squared),
            #[cfg(feature = "lookup")]
            Law::Lookup(l) => l.attraction(dist_squared),
        }
    }

    #[inline]
    fn repulsion(&self, dist_squared: f64) -> f64 {
        match self {
            Law::Alpha(l) => l.repulsion(dist_squared),
            Law::AlphaOne(l) => l.repulsion(dist_squared),
            Law::Sigmoid(l) => l.repulsion(dist_squared),
            #[cfg(feature = "lookup")]
            Law::Lookup(l) => l.repulsion(dist_squared),
        }
    }

    fn default_cap(&self) -> f64 {
        match self {
            Law::Alpha(l) => l.default_cap(),
            Law::AlphaOne(l) => l.default_cap(),
            Law::Sigmoid(l) => l.default_cap(),
            #[cfg(feature = "lookup")]
            Law::Lookup(l) => l.default_cap(),
        }
    }

    #[inline]
    fn skips_coincident(&self) -> bool {
        match self {
            Law::Alpha(l) => l.skips_coincident(),
            Law::AlphaOne(l) => l.skips_coincident(),
            Law::Sigmoid(l) => l.skips_coincident(),
            #[cfg(feature = "lookup")]
            Law::Lookup(l) => l.skips_coincident(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Law::Alpha(l) => l.name(),
            Law::AlphaOne(l) => l.name(),
            Law::Sigmoid(l) => l.name(),
            #[cfg(feature = "lookup")]
            Law::Lookup(l) => l.name(),
        }
    }
}

impl From<AlphaLaw> for Law {
    fn from(l: AlphaLaw) -> Self {
        Law::Alpha(l)
    }
}

impl From<AlphaOneLaw> for Law {
    fn from(l: AlphaOneLaw) -> Self {
        Law::AlphaOne(l)
    }
}

impl From<SigmoidLaw> for Law {
    fn from(l: SigmoidLaw) -> Self {
        Law::Sigmoid(l)
    }
}

#[cfg(feature = "lookup")]
impl From<LookupLaw> for Law {
    fn from(l: LookupLaw) -> Self {
        Law::Lookup(l)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

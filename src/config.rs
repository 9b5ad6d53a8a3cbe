//! Run-level configuration: which force law, its hyperparameters, and the
//! embedding dimension.
//!
//! A [`GradientConfig`] is built once per training run from user-supplied
//! hyperparameters, validated, and turned into an immutable
//! [`Gradient`] with [`GradientConfig::build`].

use crate::error::{require_positive, GradientError, GradientResult};
use crate::gradient::Gradient;
use crate::law::{AlphaLaw, AlphaOneLaw, Law, SigmoidLaw};

#[cfg(feature = "lookup")]
use crate::lookup::{LookupLaw, MAX_LOOKUP_STEPS};

// ─── LawKind ──────────────────────────────────────────────────────────────────

/// Which force law to use, with its law-specific parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "law", rename_all = "snake_case"))]
pub enum LawKind {
    /// Heavy-tailed law with tunable `alpha > 0`.
    Alpha {
        /// Heaviness. Smaller values keep repulsion alive further out.
        alpha: f64,
    },
    /// The `alpha = 1` specialisation.
    #[default]
    AlphaOne,
    /// Logistic law; the cap defaults to `gamma`.
    Sigmoid,
    /// Table-approximated alpha law.
    #[cfg(feature = "lookup")]
    Lookup {
        /// Heaviness, as for [`LawKind::Alpha`].
        alpha: f64,
        /// Largest squared distance the table resolves.
        bound: f64,
        /// Number of table entries.
        steps: usize,
    },
}

impl LawKind {
    /// Map a single `alpha` hyperparameter to a law.
    ///
    /// `0` selects the sigmoid law, `1` the alpha-one law, and any other value
    /// the general alpha law.
    pub fn from_alpha(alpha: f64) -> Self {
        if alpha == 0.0 {
            LawKind::Sigmoid
        } else if alpha == 1.0 {
            LawKind::AlphaOne
        } else {
            LawKind::Alpha { alpha }
        }
    }
}

// ─── GradientConfig ───────────────────────────────────────────────────────────

/// Hyperparameters for one training run.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientConfig {
    /// Force law and its own parameters.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub law: LawKind,

    /// Repulsion weight. Must be `> 0`.
    /// Default: 7.0.
    pub gamma: f64,

    /// Embedding dimensionality. Must be `≥ 1`.
    /// Default: 2.
    pub dim: usize,

    /// Per-component bound on every displacement. `None` keeps the law's
    /// default (5, or `gamma` for the sigmoid law).
    #[cfg_attr(feature = "serde", serde(default))]
    pub cap: Option<f64>,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            law: LawKind::default(),
            gamma: 7.0,
            dim: 2,
            cap: None,
        }
    }
}

impl GradientConfig {
    /// Config for `law` with the given `gamma` and `dim`, no cap override.
    pub fn new(law: LawKind, gamma: f64, dim: usize) -> Self {
        Self { law, gamma, dim, cap: None }
    }

    /// Set an explicit cap.
    pub fn with_cap(mut self, cap: f64) -> Self {
        self.cap = Some(cap);
        self
    }

    /// Check every parameter without building anything.
    pub fn validate(&self) -> GradientResult<()> {
        require_positive("gamma", self.gamma)?;
        if self.dim == 0 {
            return Err(GradientError::ZeroDimension);
        }
        if let Some(cap) = self.cap {
            require_positive("cap", cap)?;
        }
        match self.law {
            LawKind::Alpha { alpha } => {
                require_positive("alpha", alpha)?;
            }
            LawKind::AlphaOne | LawKind::Sigmoid => {}
            #[cfg(feature = "lookup")]
            LawKind::Lookup { alpha, bound, steps } => {
                require_positive("alpha", alpha)?;
                require_positive("bound", bound)?;
                if !(2..=MAX_LOOKUP_STEPS).contains(&steps) {
                    return Err(GradientError::LookupSteps { steps, max: MAX_LOOKUP_STEPS });
                }
            }
        }
        Ok(())
    }

    /// Validate and build the run's [`Gradient`].
    pub fn build(&self) -> GradientResult<Gradient<Law>> {
        self.validate()?;
        let law: Law = match self.law {
            LawKind::Alpha { alpha } => AlphaLaw::new(alpha, self.gamma)?.into(),
            LawKind::AlphaOne => AlphaOneLaw::new(self.gamma)?.into(),
            LawKind::Sigmoid => SigmoidLaw::new(self.gamma)?.into(),
            #[cfg(feature = "lookup")]
            LawKind::Lookup { alpha, bound, steps } => {
                LookupLaw::new(alpha, self.gamma, bound, steps)?.into()
            }
        };
        let gradient = Gradient::new(law, self.dim)?;
        match self.cap {
            Some(cap) => gradient.with_cap(cap),
            None => Ok(gradient),
        }
    }
}

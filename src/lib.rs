//! # force-kernel
//!
//! Per-edge force laws for stochastic-gradient graph embedding and
//! force-directed layout.
//!
//! ---
//!
//! ## What this crate is
//!
//! The numerical core of an embedding optimiser. An outer SGD driver picks an
//! observed edge `(i, j)` and a handful of sampled non-edges `(i, k)` per step;
//! for each pair it asks this crate one question:
//!
//! > Given where these two points are, how far and in which direction should
//! > `i` move?
//!
//! The answer is a displacement written into a caller-owned buffer. Observed
//! edges pull the points together (**attraction**); sampled non-edges push
//! them apart (**repulsion**). Which law governs that pull and push is the one
//! pluggable choice, fixed once per training run.
//!
//! The crate owns no embedding state. Sampling, learning-rate schedules,
//! coordinate updates and parallelism all belong to the caller.
//!
//! ## The pipeline
//!
//! ```text
//! p_i, p_j ─► dist_and_vector ─► d², holder = p_i − p_j
//!                                   │
//!                  ForceLaw::attraction(d²) / repulsion(d²)
//!                                   │
//!                   mult_modify ─► holder = clamp(m · holder)
//! ```
//!
//! ## Module overview
//!
//! | Module | Key types | What it does |
//! |--------|-----------|--------------|
//! | [`kernel`] | [`dist_and_vector`], [`clamp`], [`mult_modify`] | Distance + difference vector, clamped rescale |
//! | [`law`] | [`ForceLaw`], [`Law`], [`AlphaLaw`], [`AlphaOneLaw`], [`SigmoidLaw`] | The attraction/repulsion multipliers |
//! | `lookup` | `LookupLaw` | Table-approximated alpha law (requires `lookup`) |
//! | [`gradient`] | [`Gradient`] | Public per-edge entry points |
//! | [`config`] | [`GradientConfig`], [`LawKind`] | Run-level hyperparameters, validation, construction |
//! | [`error`] | [`GradientError`] | Everything that can be rejected |
//! | [`math`] | [`math::exp`] | `exp` that also works on `no_std` |
//!
//! ## Quick start
//!
//! ```rust
//! use force_kernel::{GradientConfig, LawKind};
//!
//! let grad = GradientConfig::new(LawKind::AlphaOne, 1.0, 2).build()?;
//! let mut holder = [0.0; 2];
//! grad.positive_gradient(&[0.0, 0.0], &[1.0, 0.0], &mut holder)?;
//! // d² = 1, attraction = -2 / (1 + 1) = -1, holder = -1 · (0 − 1, 0 − 0)
//! assert_eq!(holder, [1.0, 0.0]);
//! # Ok::<(), force_kernel::GradientError>(())
//! ```
//!
//! ## `no_std`
//!
//! `#![no_std]` unless the `std` feature (on by default) is enabled. Without
//! `std`, the sigmoid law uses a polynomial `exp`. Nothing in the crate
//! allocates.
//!
//! ## Features
//!
//! - `std` (default): platform `f64::exp`.
//! - `serde`: serialise [`GradientConfig`] and [`LawKind`].
//! - `lookup`: the table-approximated alpha law.
//!
//! ## License
//!
//! Business Source License 1.1.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod error;
pub mod gradient;
pub mod kernel;
pub mod law;
pub mod math;

#[cfg(feature = "lookup")]
pub mod lookup;

pub use config::{GradientConfig, LawKind};
pub use error::{GradientError, GradientResult};
pub use gradient::Gradient;
pub use kernel::{clamp, dist_and_vector, mult_modify, DEFAULT_CAP};
pub use law::{AlphaLaw, AlphaOneLaw, ForceLaw, Law, SigmoidLaw};

#[cfg(feature = "lookup")]
pub use lookup::{LookupLaw, MAX_LOOKUP_STEPS};

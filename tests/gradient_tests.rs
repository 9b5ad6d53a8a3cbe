//! End-to-end tests for the per-edge entry points across every force law.
//!
//! Covers the worked layout scenarios, the sigmoid cutoffs, the agreement
//! between the general and alpha-one laws, statelessness across calls and
//! concurrent use from several workers.

use force_kernel::math::exp;
use force_kernel::{
    AlphaLaw, AlphaOneLaw, ForceLaw, Gradient, GradientConfig, GradientError, LawKind, SigmoidLaw,
    DEFAULT_CAP,
};

// ─── helpers ─────────────────────────────────────────────────────────────────

fn canonical_2d() -> Gradient {
    GradientConfig::new(LawKind::AlphaOne, 1.0, 2).build().unwrap()
}

fn all_laws(dim: usize) -> Vec<Gradient> {
    [
        LawKind::Alpha { alpha: 0.5 },
        LawKind::Alpha { alpha: 2.0 },
        LawKind::AlphaOne,
        LawKind::Sigmoid,
    ]
    .into_iter()
    .map(|law| GradientConfig::new(law, 3.0, dim).build().unwrap())
    .collect()
}

// ─── worked scenarios ────────────────────────────────────────────────────────

/// Unit distance along x on the alpha-one law: multiplier -1, no clamping.
#[test]
fn test_scenario_unit_distance() {
    let g = canonical_2d();
    assert_eq!(g.attraction(1.0), -1.0);

    let mut holder = [0.0; 2];
    g.positive_gradient(&[0.0, 0.0], &[1.0, 0.0], &mut holder).unwrap();
    // difference (0 − 1, 0 − 0) scaled by -1
    assert_eq!(holder, [1.0, 0.0]);
    assert!(holder[0].abs() < DEFAULT_CAP);
}

/// Distance 10 along x: multiplier -2/101, displacement of magnitude ≈ 0.198.
#[test]
fn test_scenario_far_point() {
    let g = canonical_2d();
    assert!((g.attraction(100.0) + 2.0 / 101.0).abs() < 1e-15);

    let mut holder = [0.0; 2];
    g.positive_gradient(&[0.0, 0.0], &[10.0, 0.0], &mut holder).unwrap();
    assert!((holder[0] - 20.0 / 101.0).abs() < 1e-12, "got {:?}", holder);
    assert!((holder[0] - 0.198).abs() < 1e-3);
    assert_eq!(holder[1], 0.0);
}

/// Applying the displacement to `i` moves it toward `j`.
#[test]
fn test_attraction_shrinks_distance() {
    let g = canonical_2d();
    let (mut i, j) = ([0.0, 0.0], [3.0, 4.0]);
    let mut holder = [0.0; 2];
    g.positive_gradient(&i, &j, &mut holder).unwrap();
    let before = (i[0] - j[0]).powi(2) + (i[1] - j[1]).powi(2);
    for d in 0..2 {
        i[d] += 0.1 * holder[d];
    }
    let after = (i[0] - j[0]).powi(2) + (i[1] - j[1]).powi(2);
    assert!(after < before, "before={} after={}", before, after);
}

// ─── identical points ────────────────────────────────────────────────────────

/// Coincident points yield a zero displacement on every law, for both signs.
#[test]
fn test_identical_points_zero_displacement() {
    for dim in [1usize, 2, 5, 16] {
        let p: Vec<f64> = (0..dim).map(|d| d as f64 * 0.37 - 1.0).collect();
        for g in all_laws(dim) {
            let mut holder = vec![9.0; dim];
            g.positive_gradient(&p, &p, &mut holder).unwrap();
            assert!(holder.iter().all(|&v| v == 0.0), "{} positive: {:?}", g.law().name(), holder);

            let mut holder = vec![9.0; dim];
            g.negative_gradient(&p, &p, &mut holder).unwrap();
            assert!(holder.iter().all(|&v| v == 0.0), "{} negative: {:?}", g.law().name(), holder);
        }
    }
}

// ─── general vs alpha-one ────────────────────────────────────────────────────

/// The general law at alpha = 1 and the alpha-one law share attraction exactly
/// and differ in repulsion only through the 0.1 offset.
#[test]
fn test_general_alpha_one_agreement() {
    let gamma = 7.0;
    let general = Gradient::new(AlphaLaw::new(1.0, gamma).unwrap(), 2).unwrap();
    let special = Gradient::new(AlphaOneLaw::new(gamma).unwrap(), 2).unwrap();

    assert_eq!(general.attraction(10.0), special.attraction(10.0));

    let mut prev = f64::INFINITY;
    for d2 in [1.0, 10.0, 100.0, 1000.0] {
        let g = general.repulsion(d2);
        let s = special.repulsion(d2);
        let rel = ((g - s) / g).abs();
        assert!(rel < prev, "relative difference should shrink: d2={} rel={}", d2, rel);
        prev = rel;
    }
    assert!(prev < 1e-3);
}

// ─── sigmoid cutoffs ─────────────────────────────────────────────────────────

/// Attraction saturates strictly above d² = 4.
#[test]
fn test_sigmoid_attraction_boundary() {
    let law = SigmoidLaw::new(7.0).unwrap();
    let eps = 1e-9;

    assert_eq!(law.attraction(4.0 + eps), -1.0);

    let below = 4.0 - eps;
    let e = exp(below);
    assert_eq!(law.attraction(below), -(e / (e + 1.0)));
    assert!(law.attraction(below) > -1.0);
}

/// Repulsion is exactly zero strictly beyond gamma².
#[test]
fn test_sigmoid_repulsion_boundary() {
    let gamma = 3.0;
    let law = SigmoidLaw::new(gamma).unwrap();
    let eps = 1e-9;

    assert_eq!(law.repulsion(9.0 + eps), 0.0);
    assert_eq!(law.repulsion(9.0), gamma / (1.0 + exp(9.0)));
    assert!(law.repulsion(9.0) > 0.0);
}

/// The sigmoid law caps components at gamma, not at the default 5.
#[test]
fn test_sigmoid_cap_is_gamma() {
    let g = GradientConfig::new(LawKind::Sigmoid, 0.5, 1).build().unwrap();
    assert_eq!(g.cap(), 0.5);

    let mut holder = [0.0];
    // d² = 16 → attraction = -1, raw displacement = -1 · (0 − 4) = 4, capped to 0.5
    g.positive_gradient(&[0.0], &[4.0], &mut holder).unwrap();
    assert_eq!(holder, [0.5]);
}

// ─── capping ─────────────────────────────────────────────────────────────────

/// Every component of every output lies in [-cap, cap].
#[test]
fn test_outputs_bounded_by_cap() {
    let pairs: [([f64; 3], [f64; 3]); 4] = [
        ([0.0, 0.0, 0.0], [1e-4, -1e-4, 0.0]),
        ([100.0, -50.0, 3.0], [0.0, 0.0, 0.0]),
        ([1.0, 2.0, 3.0], [1.5, 2.5, 2.0]),
        ([-1e6, 0.0, 1e6], [1e6, 0.0, -1e6]),
    ];
    for g in all_laws(3) {
        for (a, b) in pairs.iter() {
            let mut holder = [0.0; 3];
            g.positive_gradient(a, b, &mut holder).unwrap();
            assert!(holder.iter().all(|v| v.abs() <= g.cap()), "{:?}", holder);
            g.negative_gradient(a, b, &mut holder).unwrap();
            assert!(holder.iter().all(|v| v.abs() <= g.cap()), "{:?}", holder);
        }
    }
}

// ─── statelessness ───────────────────────────────────────────────────────────

/// Repeated calls with fresh buffers give identical output.
#[test]
fn test_repeated_calls_identical() {
    let i = [0.25, -1.5, 2.0];
    let j = [1.0, 0.5, -0.75];
    for g in all_laws(3) {
        let mut first = [0.0; 3];
        let mut second = [123.0; 3];
        g.positive_gradient(&i, &j, &mut first).unwrap();
        g.negative_gradient(&i, &j, &mut [0.0; 3]).unwrap();
        g.positive_gradient(&i, &j, &mut second).unwrap();
        assert_eq!(first, second, "{}", g.law().name());
    }
}

// ─── concurrency ─────────────────────────────────────────────────────────────

/// One shared `Gradient`, many workers, one buffer each.
#[test]
fn test_shared_across_threads() {
    let g = GradientConfig::new(LawKind::Alpha { alpha: 0.8 }, 5.0, 4).build().unwrap();
    let points: Vec<[f64; 4]> = (0..64)
        .map(|n| {
            let t = n as f64;
            [t.sin(), t.cos(), (t * 0.5).sin(), 0.1 * t]
        })
        .collect();

    let serial: Vec<[f64; 4]> = points
        .windows(2)
        .map(|w| {
            let mut h = [0.0; 4];
            g.negative_gradient(&w[0], &w[1], &mut h).unwrap();
            h
        })
        .collect();

    let parallel: Vec<Vec<[f64; 4]>> = std::thread::scope(|s| {
        let handles: Vec<_> = points
            .chunks(16)
            .enumerate()
            .map(|(c, _)| {
                let g = &g;
                let points = &points;
                s.spawn(move || {
                    let lo = c * 16;
                    let hi = (lo + 16).min(points.len() - 1);
                    (lo..hi)
                        .map(|n| {
                            let mut h = [0.0; 4];
                            g.negative_gradient(&points[n], &points[n + 1], &mut h).unwrap();
                            h
                        })
                        .collect::<Vec<[f64; 4]>>()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let flat: Vec<[f64; 4]> = parallel.into_iter().flatten().collect();
    assert_eq!(flat, serial);
}

// ─── preconditions ───────────────────────────────────────────────────────────

/// Short buffers are rejected before anything is written.
#[test]
fn test_short_buffers_rejected() {
    let g = canonical_2d();
    let mut holder = [7.0; 1];
    let err = g.positive_gradient(&[0.0, 0.0], &[1.0, 1.0], &mut holder).unwrap_err();
    assert_eq!(err, GradientError::DimensionMismatch { buffer: "holder", expected: 2, got: 1 });
    assert_eq!(holder, [7.0]);
}

//! # Ring layout demo
//!
//! A minimal SGD driver around the force kernel: lays out a ring graph in 2-D
//! with each of the three force laws and reports how tightly edges end up
//! packed relative to random pairs.
//!
//! Run with: `cargo run --example ring_layout`

use force_kernel::{ForceLaw, Gradient, GradientConfig, LawKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const NODES: usize = 80;
const DIM: usize = 2;
const NEGATIVES: usize = 5;
const SAMPLES_PER_NODE: usize = 2_000;
const RHO: f64 = 1.0;

// ── Graph ────────────────────────────────────────────────────────────────────

/// Ring with next-neighbour and second-neighbour edges.
fn ring_edges() -> Vec<(usize, usize)> {
    (0..NODES)
        .flat_map(|n| [(n, (n + 1) % NODES), (n, (n + 2) % NODES)])
        .collect()
}

// ── SGD driver ───────────────────────────────────────────────────────────────

fn layout(grad: &Gradient, edges: &[(usize, usize)], rng: &mut StdRng) -> Vec<[f64; DIM]> {
    let mut coords: Vec<[f64; DIM]> = (0..NODES)
        .map(|_| [rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)])
        .collect();
    let mut holder = [0.0; DIM];
    let total = NODES * SAMPLES_PER_NODE;

    for step in 0..total {
        let rho = RHO * (1.0 - step as f64 / total as f64).max(1e-4);
        let (i, j) = edges[rng.gen_range(0..edges.len())];

        if grad.positive_gradient(&coords[i], &coords[j], &mut holder).is_err() {
            continue;
        }
        for d in 0..DIM {
            coords[i][d] += rho * holder[d];
            coords[j][d] -= rho * holder[d];
        }

        for _ in 0..NEGATIVES {
            let k = rng.gen_range(0..NODES);
            if k == i || k == j {
                continue;
            }
            if grad.negative_gradient(&coords[i], &coords[k], &mut holder).is_err() {
                continue;
            }
            for d in 0..DIM {
                coords[i][d] += rho * holder[d];
                coords[k][d] -= rho * holder[d];
            }
        }
    }
    coords
}

// ── Report ───────────────────────────────────────────────────────────────────

fn dist(a: &[f64; DIM], b: &[f64; DIM]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum::<f64>().sqrt()
}

fn mean_edge_length(coords: &[[f64; DIM]], edges: &[(usize, usize)]) -> f64 {
    edges.iter().map(|&(i, j)| dist(&coords[i], &coords[j])).sum::<f64>() / edges.len() as f64
}

fn mean_pair_length(coords: &[[f64; DIM]]) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for i in 0..NODES {
        for j in (i + 1)..NODES {
            sum += dist(&coords[i], &coords[j]);
            count += 1;
        }
    }
    sum / count as f64
}

fn main() {
    let edges = ring_edges();
    println!("Ring layout: {} nodes, {} edges, {} negatives per edge\n", NODES, edges.len(), NEGATIVES);
    println!("{:<10} {:>12} {:>12} {:>8}", "law", "edge len", "pair len", "ratio");
    println!("{}", "─".repeat(46));

    for law in [LawKind::from_alpha(1.0), LawKind::from_alpha(0.5), LawKind::from_alpha(0.0)] {
        let grad = match GradientConfig::new(law, 7.0, DIM).build() {
            Ok(g) => g,
            Err(e) => {
                eprintln!("skipping {:?}: {}", law, e);
                continue;
            }
        };
        let mut rng = StdRng::seed_from_u64(7);
        let coords = layout(&grad, &edges, &mut rng);
        let edge = mean_edge_length(&coords, &edges);
        let pair = mean_pair_length(&coords);
        println!(
            "{:<10} {:>12.4} {:>12.4} {:>8.3}",
            grad.law().name(),
            edge,
            pair,
            edge / pair
        );
    }
}

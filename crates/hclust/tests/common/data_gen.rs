//! Data generation utilities for testing.

use rand::prelude::*;

/// The six-point example: two tight groups of four and two points.
pub fn six() -> Vec<Vec<f64>> {
    vec![
        vec![1.0, 2.0, 1.0],
        vec![80.0, 100.0, 98.0],
        vec![1.0, 1.9, 1.0],
        vec![80.0, 101.0, 99.0],
        vec![1.0, 3.0, 2.0],
        vec![2.0, 2.0, 1.0],
    ]
}

/// Evenly spaced points on a line, where every interior point is equally
/// similar to both of its neighbors.
pub fn line(car: usize) -> Vec<Vec<f64>> {
    (0..car).map(|i| vec![i as f64]).collect()
}

/// Uniformly random points in `[0, max)^dim`.
pub fn gen_random_data(car: usize, dim: usize, max: f64, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..car)
        .map(|_| (0..dim).map(|_| rng.gen_range(0.0..max)).collect())
        .collect()
}

/// Random points drawn around `num_blobs` well-separated centers.
pub fn gen_blobs(num_blobs: usize, per_blob: usize, dim: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..num_blobs)
        .flat_map(|b| {
            let center = 1_000.0 * b as f64;
            (0..per_blob)
                .map(|_| (0..dim).map(|_| center + rng.gen_range(-1.0..1.0)).collect())
                .collect::<Vec<_>>()
        })
        .collect()
}

use rand::Rng;

use crate::vector::{Dimension, Vector};
use crate::Result;

pub fn cosine_similarity(v1: &Vector, v2: &Vector) -> Result<f64> {
    v1.angle(v2).map(f64::cos)
}

/// Distance between the points `v1` and `v2`, promoting a 2D operand to 3D.
pub fn euclidean_distance(v1: &Vector, v2: &Vector) -> f64 {
    (*v1 - *v2).norm()
}

pub fn manhattan_distance(v1: &Vector, v2: &Vector) -> f64 {
    (*v1 - *v2).components().iter().map(|c| c.abs()).sum()
}

/// Random vectors with components drawn uniformly from `[-1, 1)`.
pub fn generate_random_vectors(dimension: Dimension, num: usize) -> Vec<Vector> {
    let mut rng = rand::thread_rng();

    (0..num)
        .map(|_| {
            Vector::with_dimension(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                dimension,
            )
        })
        .collect()
}

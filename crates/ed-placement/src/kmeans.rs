//! Weighted k-means over planar points.
//!
//! Assignment is to the nearest centroid with ties going to the lowest index.
//! A centroid whose cluster is empty, or carries zero total weight, stays
//! where it was.  Iteration stops when an update would move every centroid
//! less than the tolerance (that last update is discarded), or after
//! `max_iterations` rounds.

use serde::Serialize;
use tracing::debug;

use ed_core::{Bounds, PlacementConfig, Point, SimRng};

use crate::{PlacementError, PlacementResult};

/// A location with a non-negative weight.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WeightedPoint {
    pub point:  Point,
    pub weight: f64,
}

impl WeightedPoint {
    pub fn new(point: Point, weight: f64) -> Self {
        Self { point, weight }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct KMeansResult {
    pub centroids:  Vec<Point>,
    /// Assignment rounds actually run.
    pub iterations: u32,
    pub converged:  bool,
}

impl KMeansResult {
    fn empty() -> Self {
        Self { centroids: Vec::new(), iterations: 0, converged: true }
    }
}

/// Cluster `points` into `k` groups.
///
/// Initial centroids are drawn uniformly inside the bounding box of the
/// points.  Empty input or `k == 0` yields no centroids.
pub fn weighted_kmeans(
    points: &[WeightedPoint],
    k:      usize,
    config: &PlacementConfig,
    rng:    &mut SimRng,
) -> PlacementResult<KMeansResult> {
    validate(points, config)?;
    let Some(bounds) = Bounds::enclosing(points.iter().map(|p| p.point)) else {
        return Ok(KMeansResult::empty());
    };
    if k == 0 {
        return Ok(KMeansResult::empty());
    }

    let initial: Vec<Point> = (0..k)
        .map(|_| {
            let x = rng.uniform(bounds.min.x, bounds.max.x);
            let y = rng.uniform(bounds.min.y, bounds.max.y);
            Point::new(x, y)
        })
        .collect();
    lloyd(points, initial, config)
}

/// Lloyd iteration from caller-supplied `initial` centroids.
pub fn lloyd(
    points:  &[WeightedPoint],
    initial: Vec<Point>,
    config:  &PlacementConfig,
) -> PlacementResult<KMeansResult> {
    validate(points, config)?;
    if points.is_empty() || initial.is_empty() {
        return Ok(KMeansResult::empty());
    }

    let k = initial.len();
    let mut centroids = initial;
    let mut sums = vec![(0.0_f64, 0.0_f64, 0.0_f64); k];

    for round in 1..=config.max_iterations {
        sums.iter_mut().for_each(|s| *s = (0.0, 0.0, 0.0));
        for wp in points {
            let c = nearest(&centroids, wp.point);
            let s = &mut sums[c];
            s.0 += wp.point.x * wp.weight;
            s.1 += wp.point.y * wp.weight;
            s.2 += wp.weight;
        }

        let next: Vec<Point> = centroids
            .iter()
            .zip(&sums)
            .map(|(&c, &(sx, sy, w))| if w > 0.0 { Point::new(sx / w, sy / w) } else { c })
            .collect();

        if centroids.iter().zip(&next).all(|(a, b)| a.distance(*b) < config.tolerance) {
            debug!(k, iterations = round, "k-means converged");
            return Ok(KMeansResult { centroids, iterations: round, converged: true });
        }
        centroids = next;
    }

    debug!(k, iterations = config.max_iterations, "k-means hit the iteration cap");
    Ok(KMeansResult { centroids, iterations: config.max_iterations, converged: false })
}

/// Index of the centroid closest to `p`; the first wins on a tie.
fn nearest(centroids: &[Point], p: Point) -> usize {
    let mut best = 0;
    let mut best_d = f64::INFINITY;
    for (i, c) in centroids.iter().enumerate() {
        let d = c.distance(p);
        if d < best_d {
            best = i;
            best_d = d;
        }
    }
    best
}

fn validate(points: &[WeightedPoint], config: &PlacementConfig) -> PlacementResult<()> {
    if !(config.tolerance > 0.0) {
        return Err(PlacementError::Tolerance(config.tolerance));
    }
    for (index, wp) in points.iter().enumerate() {
        if !wp.point.is_finite() {
            return Err(PlacementError::NonFinitePoint { index, point: wp.point });
        }
        if !wp.weight.is_finite() || wp.weight < 0.0 {
            return Err(PlacementError::InvalidWeight { index, weight: wp.weight });
        }
    }
    Ok(())
}

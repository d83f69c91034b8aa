//! Unit tests for ed-placement.

use ed_core::{
    Bounds, CapabilityTable, Category, EmergencyId, PlacementConfig, Point, SimRng, SimTime,
    UnitKind,
};
use ed_feed::EmergencyRecord;

use crate::*;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn wp(x: f64, y: f64) -> WeightedPoint {
    WeightedPoint::new(Point::new(x, y), 1.0)
}

/// Five points around (2, 50) and five around (102, 50).
fn two_blobs() -> Vec<WeightedPoint> {
    let mut pts = Vec::new();
    for dx in [0.0, 1.0, 2.0, 3.0, 4.0] {
        pts.push(wp(dx, 50.0 + dx * 0.1));
        pts.push(wp(100.0 + dx, 50.0 - dx * 0.1));
    }
    pts
}

fn assert_near(p: Point, x: f64, y: f64) {
    assert!((p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9, "{p} is not ({x}, {y})");
}

fn sorted_by_x(mut c: Vec<Point>) -> Vec<Point> {
    c.sort_by(|a, b| a.x.total_cmp(&b.x));
    c
}

fn rec(id: u32, x: f64, y: f64, category: Category, window: f64) -> EmergencyRecord {
    EmergencyRecord {
        id:          EmergencyId(id),
        spawn_time:  SimTime::ZERO,
        location:    Point::new(x, y),
        category,
        window_secs: window,
    }
}

// ── lloyd ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod lloyd_tests {
    use super::*;

    #[test]
    fn separates_blobs() {
        let init = vec![Point::new(10.0, 50.0), Point::new(90.0, 50.0)];
        let r = lloyd(&two_blobs(), init, &PlacementConfig::default()).unwrap();
        assert!(r.converged);
        assert_near(r.centroids[0], 2.0, 50.2);
        assert_near(r.centroids[1], 102.0, 49.8);
    }

    #[test]
    fn weights_pull_the_centroid() {
        let pts = vec![
            WeightedPoint::new(Point::new(0.0, 0.0), 3.0),
            WeightedPoint::new(Point::new(4.0, 0.0), 1.0),
        ];
        let r = lloyd(&pts, vec![Point::new(2.0, 0.0)], &PlacementConfig::default()).unwrap();
        assert_near(r.centroids[0], 1.0, 0.0);
    }

    #[test]
    fn empty_cluster_keeps_centroid() {
        let pts = vec![wp(1.0, 1.0), wp(2.0, 2.0)];
        let far = Point::new(500.0, 500.0);
        let r = lloyd(&pts, vec![Point::new(0.0, 0.0), far], &PlacementConfig::default()).unwrap();
        assert_eq!(r.centroids[1], far);
        assert_near(r.centroids[0], 1.5, 1.5);
    }

    #[test]
    fn zero_weight_cluster_keeps_centroid() {
        let pts = vec![
            wp(0.0, 0.0),
            WeightedPoint::new(Point::new(100.0, 100.0), 0.0),
        ];
        let init = vec![Point::new(1.0, 1.0), Point::new(99.0, 99.0)];
        let r = lloyd(&pts, init, &PlacementConfig::default()).unwrap();
        assert_eq!(r.centroids, vec![Point::new(0.0, 0.0), Point::new(99.0, 99.0)]);
    }

    #[test]
    fn tie_goes_to_lowest_index() {
        let init = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        let r = lloyd(&[wp(5.0, 0.0)], init, &PlacementConfig::default()).unwrap();
        assert_eq!(r.centroids, vec![Point::new(5.0, 0.0), Point::new(10.0, 0.0)]);
    }

    #[test]
    fn settling_step_is_not_applied() {
        // The first update moves the centroid by 1.0, below a tolerance of 10,
        // so the run stops on the starting centroid.
        let config = PlacementConfig { tolerance: 10.0, ..PlacementConfig::default() };
        let r = lloyd(&[wp(0.0, 0.0), wp(4.0, 0.0)], vec![Point::new(3.0, 0.0)], &config).unwrap();
        assert!(r.converged);
        assert_eq!(r.iterations, 1);
        assert_eq!(r.centroids, vec![Point::new(3.0, 0.0)]);
    }

    #[test]
    fn iteration_cap() {
        let config = PlacementConfig { max_iterations: 1, ..PlacementConfig::default() };
        let init = vec![Point::new(50.0, 50.0), Point::new(60.0, 50.0)];
        let r = lloyd(&two_blobs(), init, &config).unwrap();
        assert_eq!(r.iterations, 1);
        assert!(!r.converged);
    }

    #[test]
    fn rejects_bad_input() {
        let config = PlacementConfig::default();
        let nan = vec![wp(f64::NAN, 0.0)];
        assert!(matches!(
            lloyd(&nan, vec![Point::new(0.0, 0.0)], &config),
            Err(PlacementError::NonFinitePoint { index: 0, .. })
        ));
        let neg = vec![wp(0.0, 0.0), WeightedPoint::new(Point::new(1.0, 1.0), -1.0)];
        assert!(matches!(
            lloyd(&neg, vec![Point::new(0.0, 0.0)], &config),
            Err(PlacementError::InvalidWeight { index: 1, .. })
        ));
        let zero_tol = PlacementConfig { tolerance: 0.0, ..PlacementConfig::default() };
        assert!(matches!(
            lloyd(&two_blobs(), vec![Point::new(0.0, 0.0)], &zero_tol),
            Err(PlacementError::Tolerance(_))
        ));
    }
}

// ── weighted_kmeans ───────────────────────────────────────────────────────────

#[cfg(test)]
mod kmeans_tests {
    use super::*;

    #[test]
    fn finds_both_blobs() {
        let r = weighted_kmeans(&two_blobs(), 2, &PlacementConfig::default(), &mut SimRng::new(7))
            .unwrap();
        assert!(r.converged);
        let c = sorted_by_x(r.centroids);
        assert!((c[0].x - 2.0).abs() < 1.0, "left centroid at {}", c[0]);
        assert!((c[1].x - 102.0).abs() < 1.0, "right centroid at {}", c[1]);
    }

    #[test]
    fn same_seed_same_result() {
        let config = PlacementConfig::default();
        let a = weighted_kmeans(&two_blobs(), 3, &config, &mut SimRng::new(11)).unwrap();
        let b = weighted_kmeans(&two_blobs(), 3, &config, &mut SimRng::new(11)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn centroids_stay_in_bounding_box() {
        let pts = two_blobs();
        let bounds = Bounds::enclosing(pts.iter().map(|p| p.point)).unwrap();
        let r = weighted_kmeans(&pts, 4, &PlacementConfig::default(), &mut SimRng::new(3)).unwrap();
        assert_eq!(r.centroids.len(), 4);
        assert!(r.centroids.iter().all(|c| bounds.contains(*c)));
    }

    #[test]
    fn degenerate_inputs() {
        let config = PlacementConfig::default();
        let mut rng = SimRng::new(1);
        assert!(weighted_kmeans(&[], 3, &config, &mut rng).unwrap().centroids.is_empty());
        assert!(weighted_kmeans(&two_blobs(), 0, &config, &mut rng).unwrap().centroids.is_empty());
    }
}

// ── propose_stations ──────────────────────────────────────────────────────────

#[cfg(test)]
mod propose_tests {
    use super::*;

    #[test]
    fn names_and_counts() {
        let feed = vec![
            rec(1, 10.0, 10.0, Category::Fire, 60.0),
            rec(2, 12.0, 10.0, Category::Fire, 60.0),
            rec(3, 150.0, 150.0, Category::Police, 30.0),
        ];
        let plan = [(UnitKind::Fire, 2), (UnitKind::Police, 1), (UnitKind::Fire, 1)];
        let config = PlacementConfig::default();
        let out = propose_stations(&feed, &plan, &CapabilityTable::default(), &config, &mut SimRng::new(5))
            .unwrap();

        let names: Vec<&str> = out.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["F1", "F2", "P1", "F3"]);
        assert!(out.iter().all(|s| s.unit_count == config.units_per_station));
        // A single police call pins the police site.
        assert_near(out[2].location, 150.0, 150.0);
    }

    #[test]
    fn only_servable_emergencies_attract() {
        // Police units cover police calls only; the fire calls must not move them.
        let feed = vec![
            rec(1, 0.0, 0.0, Category::Fire, 60.0),
            rec(2, 190.0, 190.0, Category::Police, 60.0),
            rec(3, 180.0, 190.0, Category::Police, 60.0),
        ];
        let out = propose_stations(
            &feed,
            &[(UnitKind::Police, 1)],
            &CapabilityTable::default(),
            &PlacementConfig::default(),
            &mut SimRng::new(9),
        )
        .unwrap();
        assert_near(out[0].location, 185.0, 190.0);
    }

    #[test]
    fn urgent_calls_weigh_more() {
        let feed = vec![
            rec(1, 0.0, 0.0, Category::Medical, 30.0),
            rec(2, 90.0, 0.0, Category::Medical, 60.0),
        ];
        let out = propose_stations(
            &feed,
            &[(UnitKind::Medical, 1)],
            &CapabilityTable::default(),
            &PlacementConfig::default(),
            &mut SimRng::new(2),
        )
        .unwrap();
        // Weights 1/30 and 1/60 put the site a third of the way along.
        assert_near(out[0].location, 30.0, 0.0);
    }

    #[test]
    fn random_fallback_inside_area() {
        let area = Bounds::new(Point::new(10.0, 10.0), Point::new(20.0, 20.0));
        let config = PlacementConfig { area, ..PlacementConfig::default() };
        let feed = vec![rec(1, 5.0, 5.0, Category::Fire, 60.0)];
        let out = propose_stations(
            &feed,
            &[(UnitKind::Police, 3)],
            &CapabilityTable::default(),
            &config,
            &mut SimRng::new(4),
        )
        .unwrap();
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|s| area.contains(s.location) && s.kind == UnitKind::Police));
    }
}

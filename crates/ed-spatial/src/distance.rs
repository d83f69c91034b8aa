//! Memoized node-to-node distance.
//!
//! # Cache
//!
//! Distances are keyed on the unordered pair `(min(a, b), max(a, b))`, so a
//! query and its mirror share one entry and symmetry holds by construction.
//! Entries are filled on first query; the node set grows as emergencies
//! spawn, so there is nothing to precompute at setup.
//!
//! Geometry is planar Euclidean: `d(a, a) == 0`, and the triangle inequality
//! holds up to floating-point rounding.

use rustc_hash::FxHashMap;

use ed_core::{NodeId, Point};

use crate::{NodeTable, SpatialResult};

pub struct DistanceService {
    nodes: NodeTable,
    cache: FxHashMap<(NodeId, NodeId), f64>,
    hits:  u64,
}

impl DistanceService {
    pub fn new(nodes: NodeTable) -> Self {
        Self { nodes, cache: FxHashMap::default(), hits: 0 }
    }

    /// Register a new location (see [`NodeTable::insert`]).
    pub fn add_node(&mut self, point: Point) -> SpatialResult<NodeId> {
        self.nodes.insert(point)
    }

    pub fn point(&self, node: NodeId) -> SpatialResult<Point> {
        self.nodes.point(node)
    }

    /// Distance between two nodes.
    ///
    /// Returns `SpatialError::UnknownNode` if either id was never registered.
    pub fn distance(&mut self, a: NodeId, b: NodeId) -> SpatialResult<f64> {
        if a == b {
            // Still validate the id.
            self.nodes.point(a)?;
            return Ok(0.0);
        }
        let key = if a < b { (a, b) } else { (b, a) };
        if let Some(&d) = self.cache.get(&key) {
            self.hits += 1;
            return Ok(d);
        }
        let d = self.nodes.point(key.0)?.distance(self.nodes.point(key.1)?);
        self.cache.insert(key, d);
        Ok(d)
    }

    /// Number of cached pairs.
    pub fn cached_pairs(&self) -> usize {
        self.cache.len()
    }

    /// Number of queries answered from the cache.
    pub fn cache_hits(&self) -> u64 {
        self.hits
    }
}

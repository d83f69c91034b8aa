//! Node table.
//!
//! Node ids are dense and handed out in insertion order, so the table is a
//! plain `Vec<Point>` indexed by `NodeId`.  Nodes are never removed: an
//! emergency's node stays valid after it is archived so that arrival
//! resolution can still look it up.

use ed_core::{NodeId, Point};

use crate::{SpatialError, SpatialResult};

#[derive(Clone, Debug, Default)]
pub struct NodeTable {
    points: Vec<Point>,
}

impl NodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a location and return its id.
    pub fn insert(&mut self, point: Point) -> SpatialResult<NodeId> {
        if !point.is_finite() {
            return Err(SpatialError::NonFinite(point));
        }
        let id = NodeId::try_from(self.points.len())
            .map_err(|_| SpatialError::Capacity(self.points.len()))?;
        self.points.push(point);
        Ok(id)
    }

    /// Location of `node`.
    pub fn point(&self, node: NodeId) -> SpatialResult<Point> {
        self.points
            .get(node.index())
            .copied()
            .ok_or(SpatialError::UnknownNode(node))
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.points.len()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `(NodeId, Point)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Point)> + '_ {
        self.points.iter().enumerate().map(|(i, &p)| (NodeId(i as u32), p))
    }
}

//! Body arena with stable id lookup.
//!
//! Bodies live in a dense `Vec` for cache-friendly pairwise passes, with a
//! side map from id to index so removals and lookups stay O(1). The
//! integrator takes exclusive mutable access to the arena for the duration
//! of one tick; consumers only ever see snapshots built afterwards.

use std::collections::HashMap;

use nalgebra::{Point3, Vector3};

use crate::body::{Body, BodyId};

/// The set of active celestial bodies.
#[derive(Debug, Clone, Default)]
pub struct BodyArena {
    bodies: Vec<Body>,
    index: HashMap<BodyId, usize>,
}

impl BodyArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a body to the arena.
    ///
    /// Ids must be unique; inserting a duplicate id is a contract violation
    /// (asserted in debug builds, last-write-wins in release).
    pub fn insert(&mut self, body: Body) {
        debug_assert!(
            !self.index.contains_key(&body.id),
            "duplicate body id {:?}",
            body.id
        );

        if let Some(&existing) = self.index.get(&body.id) {
            self.bodies[existing] = body;
            return;
        }

        self.index.insert(body.id, self.bodies.len());
        self.bodies.push(body);
    }

    /// Removes a body, returning it if present.
    ///
    /// Uses swap-remove; the displaced tail body keeps its id but moves to
    /// a new index, which the side map absorbs.
    pub fn remove(&mut self, id: BodyId) -> Option<Body> {
        let idx = self.index.remove(&id)?;
        let removed = self.bodies.swap_remove(idx);

        if let Some(moved) = self.bodies.get(idx) {
            self.index.insert(moved.id, idx);
        }

        Some(removed)
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.index.get(&id).map(|&idx| &self.bodies[idx])
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        let idx = *self.index.get(&id)?;
        Some(&mut self.bodies[idx])
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    /// Position of a body by id, used to resolve predator positions when
    /// building snapshots.
    pub fn position_of(&self, id: BodyId) -> Option<Point3<f64>> {
        self.get(id).map(|b| b.position)
    }

    /// Total mass of all bodies; conserved by mergers and mass transfer.
    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.mass).sum()
    }

    /// Total momentum of all bodies; conserved by gravity and mergers.
    pub fn total_momentum(&self) -> Vector3<f64> {
        self.bodies
            .iter()
            .map(|b| b.momentum())
            .fold(Vector3::zeros(), |acc, p| acc + p)
    }
}

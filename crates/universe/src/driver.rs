//! The universe driver: tick orchestration, lifecycle, and control surface.
//!
//! Each call to [`Universe::advance`] runs one frame in a strict order:
//!
//! 1. Apply completed narrative results (even while paused)
//! 2. Physics tick over the arena (aging, gravity, interactions, positions)
//! 3. Planet angle advance
//! 4. Lifecycle: collapse timers and the cloud spawner, on wall-clock time
//! 5. Publish an immutable snapshot
//!
//! The frame delta is clamped before scaling, so a dropped frame slows the
//! simulation down instead of teleporting bodies.

use std::collections::HashMap;

use log::{debug, info};
use nalgebra::{Point3, Vector3};
use nbody::{Body, BodyArena, BodyId, SimEvent};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use stellar::{generate_retinue, Archetype, StarProfile};

use crate::cloud::Cloud;
use crate::event_log::EventLog;
use crate::narrative::{NarrativeQueue, NarrativeRequest};
use crate::snapshot::{BodySnapshot, CloudSnapshot, UniverseSnapshot};
use crate::timescale::TimeScale;
use crate::visuals::StarVisuals;

/// Upper bound on the raw frame delta, in seconds. A stalled frame
/// advances the simulation by at most this much.
pub const MAX_FRAME_DELTA: f64 = 0.1;

/// The spawner stops once this many clouds are dormant or collapsing.
pub const MAX_CLOUDS: usize = 30;

/// Per-frame probability of spawning a new cloud while under the cap.
const SPAWN_PROBABILITY: f64 = 0.01;

/// Half-extent of the cube new clouds spawn within.
const UNIVERSE_EXTENT: f64 = 120.0;

/// New stars get a random velocity kick with components in this range.
const BIRTH_JITTER: f64 = 0.3;

/// The owning simulation context.
///
/// Holds the physics arena, visuals and descriptions keyed by body id, the
/// cloud population, the event log, the narrative queue, and a seeded RNG.
/// There are no globals; everything reachable from the simulation hangs
/// off this struct.
#[derive(Debug)]
pub struct Universe {
    arena: BodyArena,
    visuals: HashMap<BodyId, StarVisuals>,
    descriptions: HashMap<BodyId, String>,
    clouds: Vec<Cloud>,
    event_log: EventLog,
    narrative: NarrativeQueue,
    time: f64,
    time_scale: TimeScale,
    next_id: u32,
    rng: ChaChaRng,
}

impl Universe {
    /// An empty universe with a seeded RNG. Call [`Universe::reset`] to
    /// populate it.
    pub fn new(seed: u64) -> Self {
        Self {
            arena: BodyArena::new(),
            visuals: HashMap::new(),
            descriptions: HashMap::new(),
            clouds: Vec::new(),
            event_log: EventLog::new(),
            narrative: NarrativeQueue::new(),
            time: 0.0,
            time_scale: TimeScale::default(),
            next_id: 0,
            rng: ChaChaRng::seed_from_u64(seed),
        }
    }

    /// Reinitialize to `n_clouds` dormant clouds and `n_rogues` rogue
    /// planets, discarding everything else. Time returns to zero; the RNG
    /// stream continues where it was.
    pub fn reset(&mut self, n_clouds: usize, n_rogues: usize) {
        self.arena = BodyArena::new();
        self.visuals.clear();
        self.descriptions.clear();
        self.clouds.clear();
        self.event_log.clear();
        self.time = 0.0;
        self.next_id = 0;

        for _ in 0..n_clouds {
            self.spawn_cloud();
        }
        for _ in 0..n_rogues {
            self.spawn_rogue();
        }

        info!("universe reset: {n_clouds} clouds, {n_rogues} rogue planets");
    }

    /// Start the collapse of a dormant cloud. Returns `false` if no cloud
    /// has that id.
    pub fn trigger_collapse(&mut self, id: BodyId) -> bool {
        match self.clouds.iter_mut().find(|c| c.id == id) {
            Some(cloud) => {
                cloud.trigger_collapse();
                debug!("cloud {} collapsing", id.0);
                true
            }
            None => false,
        }
    }

    pub fn set_time_scale(&mut self, scale: TimeScale) {
        self.time_scale = scale;
    }

    pub fn time_scale(&self) -> TimeScale {
        self.time_scale
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn body_count(&self) -> usize {
        self.arena.len()
    }

    pub fn cloud_count(&self) -> usize {
        self.clouds.len()
    }

    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    /// Access the narrative queue, for draining requests and attaching a
    /// completion sender.
    pub fn narrative(&mut self) -> &mut NarrativeQueue {
        &mut self.narrative
    }

    /// Run one frame and return the resulting snapshot.
    ///
    /// `frame_delta` is raw wall-clock seconds since the previous frame; it
    /// is clamped to [`MAX_FRAME_DELTA`] and then scaled by the current
    /// time scale for physics. Collapse timers and the spawner run on the
    /// clamped wall-clock delta, so clouds keep collapsing while the
    /// simulation is paused or rewinding.
    pub fn advance(&mut self, frame_delta: f64) -> UniverseSnapshot {
        // Completed narratives land regardless of the time scale
        for (id, text) in self.narrative.drain() {
            if self.arena.contains(id) {
                self.descriptions.insert(id, text);
            }
        }

        let wall_delta = frame_delta.clamp(0.0, MAX_FRAME_DELTA);
        let dt = wall_delta * self.time_scale.factor();

        let events = nbody::step(&mut self.arena, dt);
        for event in &events {
            self.event_log.record(self.time, *event);
            match *event {
                SimEvent::Merger { winner, loser } => {
                    self.visuals.remove(&loser);
                    self.descriptions.remove(&loser);
                    info!("body {} merged into {}", loser.0, winner.0);
                }
                SimEvent::MassTransfer { source, target, amount } => {
                    debug!("body {} fed {amount:.4} mass to {}", source.0, target.0);
                }
                SimEvent::Birth { .. } => {}
            }
        }

        if dt != 0.0 {
            for visuals in self.visuals.values_mut() {
                for planet in &mut visuals.planets {
                    planet.angle += planet.angular_speed * dt;
                }
            }
        }

        self.advance_lifecycle(wall_delta);

        self.time += dt;
        self.snapshot()
    }

    /// Collapse timers and the stochastic cloud spawner.
    fn advance_lifecycle(&mut self, wall_delta: f64) {
        let mut born = Vec::new();
        for cloud in &mut self.clouds {
            if cloud.advance_collapse(wall_delta) {
                born.push(cloud.id);
            }
        }
        for id in born {
            self.materialize(id);
        }

        if self.clouds.len() < MAX_CLOUDS && self.rng.random_bool(SPAWN_PROBABILITY) {
            self.spawn_cloud();
        }
    }

    /// Replace a fully collapsed cloud with a star of the same id.
    fn materialize(&mut self, id: BodyId) {
        let Some(index) = self.clouds.iter().position(|c| c.id == id) else {
            return;
        };
        let cloud = self.clouds.swap_remove(index);

        let profile = StarProfile::generate(cloud.mass, &mut self.rng);
        let planets = generate_retinue(&mut self.rng);
        let jitter = Vector3::new(
            self.rng.random_range(-BIRTH_JITTER..BIRTH_JITTER),
            self.rng.random_range(-BIRTH_JITTER..BIRTH_JITTER),
            self.rng.random_range(-BIRTH_JITTER..BIRTH_JITTER),
        );

        let body = Body::new(
            cloud.id,
            profile.archetype,
            cloud.mass,
            profile.radius,
            cloud.position,
            jitter,
        );

        info!(
            "cloud {} collapsed into a {} (mass {:.1})",
            cloud.id.0, profile.archetype, cloud.mass
        );

        self.arena.insert(body);
        self.visuals
            .insert(cloud.id, StarVisuals::from_profile(&profile, planets));
        self.event_log.record(
            self.time,
            SimEvent::Birth {
                id: cloud.id,
                archetype: profile.archetype,
            },
        );
        self.narrative.request(NarrativeRequest {
            id: cloud.id,
            archetype: profile.archetype,
            mass: cloud.mass,
        });
    }

    fn spawn_cloud(&mut self) {
        let id = self.allocate_id();
        let position = self.random_position();
        let mass = self.rng.random_range(5.0..100.0);
        let cloud = Cloud::new(id, position, mass, &mut self.rng);

        debug!("cloud {} spawned (mass {:.1})", id.0, mass);
        self.clouds.push(cloud);
    }

    fn spawn_rogue(&mut self) {
        let id = self.allocate_id();
        let position = self.random_position();
        let profile = StarProfile::rogue_planet(&mut self.rng);
        let mass = self.rng.random_range(0.5..3.0);
        let jitter = Vector3::new(
            self.rng.random_range(-BIRTH_JITTER..BIRTH_JITTER),
            self.rng.random_range(-BIRTH_JITTER..BIRTH_JITTER),
            self.rng.random_range(-BIRTH_JITTER..BIRTH_JITTER),
        );

        let body = Body::new(
            id,
            Archetype::RoguePlanet,
            mass,
            profile.radius,
            position,
            jitter,
        );

        self.arena.insert(body);
        self.visuals
            .insert(id, StarVisuals::from_profile(&profile, Vec::new()));
    }

    fn allocate_id(&mut self) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        id
    }

    fn random_position(&mut self) -> Point3<f64> {
        Point3::new(
            self.rng.random_range(-UNIVERSE_EXTENT..UNIVERSE_EXTENT),
            self.rng.random_range(-UNIVERSE_EXTENT..UNIVERSE_EXTENT),
            self.rng.random_range(-UNIVERSE_EXTENT..UNIVERSE_EXTENT),
        )
    }

    /// Build the read-only view of the current state.
    pub fn snapshot(&self) -> UniverseSnapshot {
        let bodies = self
            .arena
            .bodies()
            .iter()
            .filter_map(|body| {
                let visuals = self.visuals.get(&body.id)?;
                let predator_position = body
                    .consumed_by
                    .and_then(|id| self.arena.position_of(id))
                    .map(|p| [p.x, p.y, p.z]);

                Some(BodySnapshot {
                    id: body.id.0,
                    archetype: body.archetype,
                    mass: body.mass,
                    radius: body.radius,
                    position: [body.position.x, body.position.y, body.position.z],
                    age: body.age,
                    color: visuals.color,
                    secondary_color: visuals.secondary_color,
                    luminosity: visuals.luminosity,
                    rotation_rate: visuals.rotation_rate,
                    has_disk: visuals.has_disk,
                    shredding: body.shredding,
                    predator_position,
                    description: self.descriptions.get(&body.id).cloned(),
                    planets: visuals.planets.clone(),
                })
            })
            .collect();

        let clouds = self
            .clouds
            .iter()
            .map(|cloud| CloudSnapshot {
                id: cloud.id.0,
                position: [cloud.position.x, cloud.position.y, cloud.position.z],
                mass: cloud.mass,
                size: cloud.size,
                collapsing: cloud.collapsing,
                progress: cloud.progress,
                rotation_rate: cloud.rotation_rate,
            })
            .collect();

        UniverseSnapshot {
            time: self.time,
            time_scale: self.time_scale.factor(),
            bodies,
            clouds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narrative::FALLBACK_DESCRIPTION;
    use crate::narrative::NarrativeError;

    fn collapse_all(universe: &mut Universe) {
        let ids: Vec<u32> = universe.snapshot().clouds.iter().map(|c| c.id).collect();
        for id in ids {
            universe.trigger_collapse(BodyId(id));
        }
        // 2.5 wall-clock seconds in clamped frames
        for _ in 0..26 {
            universe.advance(0.1);
        }
    }

    #[test]
    fn reset_populates_clouds_and_rogues() {
        let mut universe = Universe::new(1);
        universe.reset(5, 2);

        assert_eq!(universe.cloud_count(), 5);
        assert_eq!(universe.body_count(), 2);

        let snapshot = universe.snapshot();
        assert!(snapshot
            .bodies
            .iter()
            .all(|b| b.archetype == Archetype::RoguePlanet));

        // Ids are unique across clouds and bodies
        let mut ids: Vec<u32> = snapshot
            .clouds
            .iter()
            .map(|c| c.id)
            .chain(snapshot.bodies.iter().map(|b| b.id))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 7);
    }

    #[test]
    fn collapse_births_a_star_with_the_cloud_id() {
        let mut universe = Universe::new(2);
        universe.reset(1, 0);
        let cloud_id = universe.snapshot().clouds[0].id;

        collapse_all(&mut universe);

        let snapshot = universe.snapshot();
        // The cloud is gone (the spawner may have added unrelated ones)
        assert!(!snapshot.clouds.iter().any(|c| c.id == cloud_id));
        assert!(snapshot.bodies.iter().any(|b| b.id == cloud_id));

        let births = universe
            .event_log()
            .entries()
            .filter(|e| matches!(e.event, SimEvent::Birth { .. }))
            .count();
        assert_eq!(births, 1);

        // Birth enqueues a narrative request for the same body
        let requests = universe.narrative().take_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].id, BodyId(cloud_id));
    }

    #[test]
    fn collapse_progresses_while_paused() {
        let mut universe = Universe::new(3);
        universe.reset(1, 0);
        universe.set_time_scale(TimeScale::Paused);
        let cloud_id = universe.snapshot().clouds[0].id;

        universe.trigger_collapse(BodyId(cloud_id));
        for _ in 0..26 {
            universe.advance(0.1);
        }

        assert_eq!(universe.body_count(), 1);
        // Paused physics: the newborn star has not aged
        assert_eq!(universe.snapshot().bodies[0].age, 0.0);
    }

    #[test]
    fn paused_universe_does_not_move() {
        let mut universe = Universe::new(4);
        universe.reset(0, 3);
        universe.set_time_scale(TimeScale::Paused);

        let before = universe.snapshot();
        for _ in 0..10 {
            universe.advance(0.016);
        }
        let after = universe.snapshot();

        assert_eq!(before.bodies, after.bodies);
        assert_eq!(after.time, 0.0);
    }

    #[test]
    fn frame_delta_is_clamped() {
        let mut a = Universe::new(5);
        let mut b = Universe::new(5);
        a.reset(0, 3);
        b.reset(0, 3);

        // Identical seeds: a stalled frame must behave exactly like a
        // frame at the clamp limit
        let long = a.advance(100.0);
        let clamped = b.advance(MAX_FRAME_DELTA);

        assert_eq!(long.bodies, clamped.bodies);
        assert_eq!(long.time, clamped.time);
    }

    #[test]
    fn spawner_respects_the_population_cap() {
        let mut universe = Universe::new(6);
        universe.reset(MAX_CLOUDS, 0);

        for _ in 0..2000 {
            universe.advance(0.016);
        }

        assert!(universe.cloud_count() <= MAX_CLOUDS);
    }

    #[test]
    fn trigger_collapse_rejects_unknown_ids() {
        let mut universe = Universe::new(7);
        universe.reset(1, 0);

        assert!(!universe.trigger_collapse(BodyId(999)));
    }

    #[test]
    fn narrative_completions_apply_to_living_bodies() {
        let mut universe = Universe::new(8);
        universe.reset(1, 0);
        collapse_all(&mut universe);
        let id = universe.snapshot().bodies[0].id;

        let sender = universe.narrative().completion_sender();
        sender
            .send((BodyId(id), Ok("A furious blue furnace.".to_string())))
            .unwrap();
        universe.advance(0.016);

        let snapshot = universe.snapshot();
        assert_eq!(
            snapshot.bodies[0].description.as_deref(),
            Some("A furious blue furnace.")
        );
    }

    #[test]
    fn failed_narratives_fall_back() {
        let mut universe = Universe::new(9);
        universe.reset(1, 0);
        collapse_all(&mut universe);
        let id = universe.snapshot().bodies[0].id;

        let sender = universe.narrative().completion_sender();
        sender.send((BodyId(id), Err(NarrativeError::Unavailable))).unwrap();
        universe.advance(0.016);

        assert_eq!(
            universe.snapshot().bodies[0].description.as_deref(),
            Some(FALLBACK_DESCRIPTION)
        );
    }

    #[test]
    fn snapshot_serializes_camel_case() {
        let mut universe = Universe::new(10);
        universe.reset(2, 1);
        let snapshot = universe.advance(0.016);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert!(json["timeScale"].is_number());
        assert!(json["clouds"][0]["rotationRate"].is_number());
        assert!(json["bodies"][0]["hasDisk"].is_boolean());
    }
}

//! Room-chain builder
//!
//! Places one room at a time. Each candidate is sampled at the current
//! anchor and rejected if any of its interior tiles lands on a tile that
//! is already placed. A rejected anchor is retried with fresh samples
//! until the retry budget runs out, at which point the chain is finalized
//! as it stands.

use hashbrown::HashSet;

use super::chain::Dungeon;
use super::finalize::finalize_chain;
use super::geometry::{Direction, Point};
use super::room::{Room, RoomPlan};
use crate::config::GenerationConfig;
use crate::error::DungeonError;
use crate::rng::RoomRng;

/// Builds a chain of rooms from a [`GenerationConfig`]
#[derive(Debug, Clone)]
pub struct ChainBuilder {
    config: GenerationConfig,
    rooms: Vec<Room>,
    /// Every tile coordinate (border included) of the rooms placed so far
    occupied: HashSet<Point>,
}

impl ChainBuilder {
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            config,
            rooms: Vec::new(),
            occupied: HashSet::new(),
        }
    }

    /// Start from rooms that are already in place.
    ///
    /// Seeded rooms count towards the target and block placement like any
    /// other room.
    pub fn with_rooms(mut self, rooms: impl IntoIterator<Item = Room>) -> Self {
        for room in rooms {
            self.push(room);
        }
        self
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// True if the plan's interior overlaps any placed tile
    pub fn collides(&self, plan: &RoomPlan) -> bool {
        plan.interior_points().any(|p| self.occupied.contains(&p))
    }

    fn push(&mut self, room: Room) {
        self.occupied.extend(room.points());
        self.rooms.push(room);
    }

    /// Grow the chain and finalize it.
    ///
    /// Stops when the chain reaches the target or when an anchor exhausts
    /// its retry budget. The result may be shorter than requested.
    pub fn build<R: RoomRng>(mut self, rng: &mut R) -> Result<Dungeon, DungeonError> {
        self.config.validate()?;

        let target = self.config.target_rooms;
        let max_steps = self.config.max_steps();
        let mut anchor = self.config.origin;
        let mut incoming: Option<Direction> = None;
        let mut retries_left = self.config.retry_budget;
        let mut steps = 0usize;

        while self.rooms.len() < target {
            if steps == max_steps {
                tracing::warn!(steps, "room chain hit its step limit");
                break;
            }
            steps += 1;

            let plan = RoomPlan::sample(rng, &self.config, anchor, incoming);
            if self.collides(&plan) {
                tracing::trace!(
                    x = anchor.x,
                    y = anchor.y,
                    width = plan.width,
                    height = plan.height,
                    retries_left,
                    "rejected overlapping room"
                );
                if retries_left == 0 {
                    tracing::debug!(
                        "retry budget exhausted at ({}, {}) after {} rooms",
                        anchor.x,
                        anchor.y,
                        self.rooms.len()
                    );
                    break;
                }
                retries_left -= 1;
                continue;
            }

            tracing::debug!(
                index = self.rooms.len(),
                x = anchor.x,
                y = anchor.y,
                width = plan.width,
                height = plan.height,
                outgoing = %plan.outgoing,
                "placed room"
            );
            self.push(plan.carve());
            anchor = plan.next_anchor();
            incoming = Some(plan.next_incoming());
            retries_left = self.config.retry_budget;
        }

        tracing::info!(
            rooms = self.rooms.len(),
            target,
            steps,
            "room chain complete"
        );
        finalize_chain(self.rooms)
    }
}

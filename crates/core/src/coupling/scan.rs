//! The scan skeleton shared by toggling and power aggregation.
//!
//! Two rays leave the origin along the axis perpendicular to its facing and
//! advance in lockstep. Each step visits the main-ray position, then its
//! paired slot one block further along the origin's facing. The positive ray
//! is visited before the negative one.

use crate::world::direction::{AxisDirection, Direction};
use crate::world::position::BlockPos;

/// What a visitor wants the scan to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep scanning this ray.
    Continue,
    /// End this ray. Ignored for paired slots.
    Stop,
    /// End the whole scan.
    Found,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Main,
    Paired,
}

/// A position offered to the visitor, with the facing it must have to count
/// as aligned with the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub pos: BlockPos,
    pub facing: Direction,
    pub role: Role,
}

#[derive(Debug, Clone, Copy)]
pub struct Scan {
    origin: BlockPos,
    facing: Direction,
    distance: u32,
}

impl Scan {
    pub fn new(origin: BlockPos, facing: Direction, distance: u32) -> Self {
        Self {
            origin,
            facing,
            distance,
        }
    }

    /// Walk the rays, returning the slot position where the visitor answered
    /// [`Flow::Found`], if any.
    ///
    /// Step 0 only offers the origin's paired slot; the origin itself is never
    /// visited.
    pub fn run<F>(&self, mut visit: F) -> Option<BlockPos>
    where
        F: FnMut(Slot) -> Flow,
    {
        let axis = self.facing.axis().perpendicular();
        let rays = [
            Direction::from_axis(axis, AxisDirection::Positive),
            Direction::from_axis(axis, AxisDirection::Negative),
        ];
        let mut live = [true, true];

        let mut step = 0;
        while step <= self.distance && live.contains(&true) {
            for (ray, direction) in rays.iter().enumerate() {
                if !live[ray] || (step == 0 && ray != 0) {
                    continue;
                }

                let main = self.origin.relative(*direction, i64::from(step));
                if step != 0 {
                    match visit(Slot {
                        pos: main,
                        facing: self.facing,
                        role: Role::Main,
                    }) {
                        Flow::Continue => {}
                        Flow::Stop => {
                            live[ray] = false;
                            continue;
                        }
                        Flow::Found => return Some(main),
                    }
                }

                let paired = main.relative(self.facing, 1);
                let slot = Slot {
                    pos: paired,
                    facing: self.facing.opposite(),
                    role: Role::Paired,
                };
                if visit(slot) == Flow::Found {
                    return Some(paired);
                }
            }
            step += 1;
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visited(scan: Scan, mut answer: impl FnMut(&Slot) -> Flow) -> Vec<Slot> {
        let mut out = Vec::new();
        scan.run(|slot| {
            out.push(slot);
            answer(&slot)
        });
        out
    }

    #[test]
    fn zero_distance_offers_only_origin_pair() {
        let slots = visited(Scan::new(BlockPos::ORIGIN, Direction::East, 0), |_| Flow::Continue);
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].pos, BlockPos::new(1, 0, 0));
        assert_eq!(slots[0].facing, Direction::West);
        assert_eq!(slots[0].role, Role::Paired);
    }

    #[test]
    fn lockstep_order_positive_first() {
        let slots = visited(Scan::new(BlockPos::ORIGIN, Direction::East, 1), |_| Flow::Continue);
        let positions: Vec<_> = slots.iter().map(|s| s.pos).collect();
        assert_eq!(
            positions,
            vec![
                BlockPos::new(1, 0, 0),
                BlockPos::new(0, 0, 1),
                BlockPos::new(1, 0, 1),
                BlockPos::new(0, 0, -1),
                BlockPos::new(1, 0, -1),
            ]
        );
    }

    #[test]
    fn north_facing_walks_x_and_pairs_toward_north() {
        let slots = visited(Scan::new(BlockPos::ORIGIN, Direction::North, 1), |_| Flow::Continue);
        assert_eq!(slots[0].pos, BlockPos::new(0, 0, -1));
        assert_eq!(slots[1].pos, BlockPos::new(1, 0, 0));
        assert_eq!(slots[1].facing, Direction::North);
        assert_eq!(slots[2].pos, BlockPos::new(1, 0, -1));
        assert_eq!(slots[2].facing, Direction::South);
        assert_eq!(slots[3].pos, BlockPos::new(-1, 0, 0));
    }

    #[test]
    fn stop_on_main_ends_only_that_ray() {
        let slots = visited(Scan::new(BlockPos::ORIGIN, Direction::East, 3), |slot| {
            if slot.role == Role::Main && slot.pos.z > 0 {
                Flow::Stop
            } else {
                Flow::Continue
            }
        });
        assert!(slots.iter().all(|s| s.pos.z <= 1));
        assert!(slots.iter().any(|s| s.pos == BlockPos::new(0, 0, -3)));
        // The stopped main slot gets no paired visit.
        assert!(!slots.iter().any(|s| s.pos == BlockPos::new(1, 0, 1)));
    }

    #[test]
    fn stop_on_paired_is_ignored() {
        let slots = visited(Scan::new(BlockPos::ORIGIN, Direction::East, 2), |slot| {
            if slot.role == Role::Paired {
                Flow::Stop
            } else {
                Flow::Continue
            }
        });
        assert!(slots.iter().any(|s| s.pos == BlockPos::new(0, 0, 2)));
        assert!(slots.iter().any(|s| s.pos == BlockPos::new(0, 0, -2)));
    }

    #[test]
    fn found_short_circuits() {
        let target = BlockPos::new(0, 0, -1);
        let scan = Scan::new(BlockPos::ORIGIN, Direction::East, 5);
        let mut count = 0;
        let found = scan.run(|slot| {
            count += 1;
            if slot.pos == target { Flow::Found } else { Flow::Continue }
        });
        assert_eq!(found, Some(target));
        assert_eq!(count, 4);
    }
}

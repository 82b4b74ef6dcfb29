use super::direction::Direction;

/// Absolute block position in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockPos {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl BlockPos {
    pub const ORIGIN: BlockPos = BlockPos::new(0, 0, 0);

    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    pub const fn offset(&self, dx: i64, dy: i64, dz: i64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// The position `distance` blocks away in a horizontal direction.
    pub const fn relative(&self, direction: Direction, distance: i64) -> Self {
        let (dx, dz) = direction.unit();
        self.offset(dx * distance, 0, dz * distance)
    }

    pub const fn above(&self) -> Self {
        self.offset(0, 1, 0)
    }

    pub const fn below(&self) -> Self {
        self.offset(0, -1, 0)
    }

    /// The six cardinal neighbors.
    pub const fn neighbors(&self) -> [BlockPos; 6] {
        [
            self.offset(1, 0, 0),
            self.offset(-1, 0, 0),
            self.offset(0, 1, 0),
            self.offset(0, -1, 0),
            self.offset(0, 0, 1),
            self.offset(0, 0, -1),
        ]
    }

    /// Chebyshev distance on the horizontal plane.
    pub const fn horizontal_distance(&self, other: &BlockPos) -> i64 {
        let dx = (self.x - other.x).abs();
        let dz = (self.z - other.z).abs();
        if dx > dz { dx } else { dz }
    }
}

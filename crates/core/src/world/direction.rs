//! Horizontal directions and axes.

/// One of the two horizontal axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Z,
}

/// Whether a direction points toward increasing or decreasing coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisDirection {
    Positive,
    Negative,
}

/// Horizontal facing of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// -Z
    North,
    /// +Z
    South,
    /// -X
    West,
    /// +X
    East,
}

impl Axis {
    /// The other horizontal axis.
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::X => Self::Z,
            Self::Z => Self::X,
        }
    }
}

impl AxisDirection {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// The direction along `axis` pointing toward `sign`.
    #[must_use]
    pub const fn from_axis(axis: Axis, sign: AxisDirection) -> Self {
        match (axis, sign) {
            (Axis::X, AxisDirection::Positive) => Self::East,
            (Axis::X, AxisDirection::Negative) => Self::West,
            (Axis::Z, AxisDirection::Positive) => Self::South,
            (Axis::Z, AxisDirection::Negative) => Self::North,
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::East => Self::West,
        }
    }

    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::North | Self::South => Axis::Z,
            Self::West | Self::East => Axis::X,
        }
    }

    #[must_use]
    pub const fn axis_direction(self) -> AxisDirection {
        match self {
            Self::South | Self::East => AxisDirection::Positive,
            Self::North | Self::West => AxisDirection::Negative,
        }
    }

    /// Unit offset `(dx, dz)` one block toward this direction.
    #[must_use]
    pub const fn unit(self) -> (i64, i64) {
        match self {
            Self::North => (0, -1),
            Self::South => (0, 1),
            Self::West => (-1, 0),
            Self::East => (1, 0),
        }
    }
}

use super::direction::Direction;

/// Vertical half of a two-part block (trapdoor slab position, door leaf).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Half {
    Top,
    Bottom,
}

impl Half {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }
}

/// Side a door swings on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hinge {
    Left,
    Right,
}

/// Typed property access on an opaque host block state.
///
/// Getters for properties a block does not carry return `None` (or `false`
/// for the booleans). Setters return a new state value; the host state is
/// never mutated in place.
pub trait StateOps: Clone {
    /// Block identity, compared against the origin's kind.
    type Kind: PartialEq;

    fn kind(&self) -> Self::Kind;
    fn facing(&self) -> Option<Direction>;
    fn half(&self) -> Option<Half>;
    fn hinge(&self) -> Option<Hinge>;
    fn is_open(&self) -> bool;
    fn is_powered(&self) -> bool;
    fn is_waterlogged(&self) -> bool;

    #[must_use]
    fn with_open(&self, open: bool) -> Self;
    #[must_use]
    fn with_powered(&self, powered: bool) -> Self;
}

//! Minecraft block states as seen by the coupling core.
//!
//! A [`McState`] is a vanilla protocol state id (from azalea-block). Property
//! reads go through a table built once from azalea's property maps, and the
//! setters resolve the edited property set back to a state id.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use azalea_block::{BlockState, BlockTrait};
use couplings_core::coupling::Openable;
use couplings_core::world::block::{Half, Hinge, StateOps};
use couplings_core::world::direction::Direction;

/// Block name and its sorted `(property, value)` pairs.
#[derive(Debug, Default)]
struct StateInfo {
    name: String,
    properties: Vec<(String, String)>,
}

/// `id -> (name, properties)` for every state azalea knows.
static STATES: LazyLock<Vec<StateInfo>> = LazyLock::new(|| {
    (0..=BlockState::MAX_STATE)
        .map(|id| {
            let Ok(state) = BlockState::try_from(id as u32) else {
                return StateInfo::default();
            };
            let block: Box<dyn BlockTrait> = Box::<dyn BlockTrait>::from(state);
            let mut properties: Vec<(String, String)> = block
                .property_map()
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            properties.sort();
            StateInfo {
                name: block.id().to_string(),
                properties,
            }
        })
        .collect()
});

/// Key for the reverse lookup: `("oak_trapdoor", [("facing", "east"), ...])`.
type StateKey = (String, Vec<(String, String)>);

/// Reverse of [`STATES`]: `(name, sorted properties) -> id`.
static LOOKUP: LazyLock<HashMap<StateKey, u16>> = LazyLock::new(|| {
    STATES
        .iter()
        .enumerate()
        .filter(|(_, info)| !info.name.is_empty())
        .map(|(id, info)| ((info.name.clone(), info.properties.clone()), id as u16))
        .collect()
});

/// A vanilla block state id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct McState(pub u16);

impl McState {
    pub const AIR: McState = McState(0);

    /// Resolve a block name (without the `minecraft:` prefix) and a complete
    /// property set to its state id.
    pub fn from_properties(name: &str, properties: &[(&str, &str)]) -> Option<Self> {
        let name = name.strip_prefix("minecraft:").unwrap_or(name);
        let mut props: Vec<(String, String)> = properties
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        props.sort();
        resolve(name, &props)
    }

    /// A closed, unpowered, dry trapdoor.
    pub fn trapdoor(name: &str, facing: Direction, half: Half) -> Option<Self> {
        let half = match half {
            Half::Top => "top",
            Half::Bottom => "bottom",
        };
        Self::from_properties(
            name,
            &[
                ("facing", direction_name(facing)),
                ("half", half),
                ("open", "false"),
                ("powered", "false"),
                ("waterlogged", "false"),
            ],
        )
    }

    /// A closed, unpowered fence gate standing free of walls.
    pub fn fence_gate(name: &str, facing: Direction) -> Option<Self> {
        Self::from_properties(
            name,
            &[
                ("facing", direction_name(facing)),
                ("in_wall", "false"),
                ("open", "false"),
                ("powered", "false"),
            ],
        )
    }

    /// One closed, unpowered door half.
    pub fn door(name: &str, facing: Direction, half: Half, hinge: Hinge) -> Option<Self> {
        let half = match half {
            Half::Top => "upper",
            Half::Bottom => "lower",
        };
        let hinge = match hinge {
            Hinge::Left => "left",
            Hinge::Right => "right",
        };
        Self::from_properties(
            name,
            &[
                ("facing", direction_name(facing)),
                ("half", half),
                ("hinge", hinge),
                ("open", "false"),
                ("powered", "false"),
            ],
        )
    }

    pub fn is_air(&self) -> bool {
        *self == Self::AIR
    }

    /// Block name without namespace, e.g. `oak_trapdoor`. Empty for ids
    /// azalea does not know.
    pub fn name(&self) -> &'static str {
        self.info().map_or("", |info| info.name.as_str())
    }

    pub fn property(&self, key: &str) -> Option<&'static str> {
        self.info()?
            .properties
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Which coupling family this block belongs to, if any.
    pub fn variant(&self) -> Option<Openable> {
        let name = self.name();
        if name.ends_with("_trapdoor") {
            Some(Openable::Trapdoor)
        } else if name.ends_with("_fence_gate") {
            Some(Openable::FenceGate)
        } else if name.ends_with("_door") {
            Some(Openable::Door)
        } else {
            None
        }
    }

    /// Iron doors and trapdoors only answer to redstone.
    pub fn opens_by_hand(&self) -> bool {
        self.variant().is_some() && !self.name().starts_with("iron_")
    }

    /// This state with `key` set to `value`. Unchanged if the block has no
    /// such property or the combination does not exist.
    #[must_use]
    pub fn with_property(&self, key: &str, value: &str) -> Self {
        let Some(info) = self.info() else {
            return *self;
        };
        if !info.properties.iter().any(|(k, _)| k == key) {
            return *self;
        }
        let props: Vec<(String, String)> = info
            .properties
            .iter()
            .map(|(k, v)| {
                let v = if k == key { value } else { v.as_str() };
                (k.clone(), v.to_string())
            })
            .collect();
        resolve(&info.name, &props).unwrap_or_else(|| {
            tracing::warn!("No state for {}[{}={}], keeping {}", info.name, key, value, self);
            *self
        })
    }

    fn info(&self) -> Option<&'static StateInfo> {
        STATES.get(self.0 as usize).filter(|info| !info.name.is_empty())
    }

    fn flag(&self, key: &str) -> bool {
        self.property(key) == Some("true")
    }
}

fn resolve(name: &str, props: &[(String, String)]) -> Option<McState> {
    LOOKUP
        .get(&(name.to_string(), props.to_vec()))
        .copied()
        .map(McState)
}

pub fn direction_name(direction: Direction) -> &'static str {
    match direction {
        Direction::North => "north",
        Direction::South => "south",
        Direction::West => "west",
        Direction::East => "east",
    }
}

pub fn parse_direction(name: &str) -> Option<Direction> {
    match name {
        "north" => Some(Direction::North),
        "south" => Some(Direction::South),
        "west" => Some(Direction::West),
        "east" => Some(Direction::East),
        _ => None,
    }
}

impl StateOps for McState {
    type Kind = &'static str;

    fn kind(&self) -> &'static str {
        self.name()
    }

    fn facing(&self) -> Option<Direction> {
        self.property("facing").and_then(parse_direction)
    }

    fn half(&self) -> Option<Half> {
        match self.property("half")? {
            "top" | "upper" => Some(Half::Top),
            "bottom" | "lower" => Some(Half::Bottom),
            _ => None,
        }
    }

    fn hinge(&self) -> Option<Hinge> {
        match self.property("hinge")? {
            "left" => Some(Hinge::Left),
            "right" => Some(Hinge::Right),
            _ => None,
        }
    }

    fn is_open(&self) -> bool {
        self.flag("open")
    }

    fn is_powered(&self) -> bool {
        self.flag("powered")
    }

    fn is_waterlogged(&self) -> bool {
        self.flag("waterlogged")
    }

    fn with_open(&self, open: bool) -> Self {
        self.with_property("open", bool_name(open))
    }

    fn with_powered(&self, powered: bool) -> Self {
        self.with_property("powered", bool_name(powered))
    }
}

fn bool_name(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

impl fmt::Display for McState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(info) = self.info() else {
            return write!(f, "#{}", self.0);
        };
        f.write_str(&info.name)?;
        if !info.properties.is_empty() {
            let props: Vec<String> = info.properties.iter().map(|(k, v)| format!("{k}={v}")).collect();
            write!(f, "[{}]", props.join(","))?;
        }
        Ok(())
    }
}

use couplings_core::world::Actor;

/// The parts of a connected player the coupling hooks care about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub sneaking: bool,
    /// Operators bypass spawn protection.
    pub operator: bool,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sneaking: false,
            operator: false,
        }
    }

    pub fn sneaking(mut self, sneaking: bool) -> Self {
        self.sneaking = sneaking;
        self
    }

    pub fn operator(mut self, operator: bool) -> Self {
        self.operator = operator;
        self
    }
}

impl Actor for Player {
    fn is_sneaking(&self) -> bool {
        self.sneaking
    }
}

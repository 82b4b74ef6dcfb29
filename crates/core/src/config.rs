/// Largest accepted coupling distance.
pub const MAX_DISTANCE: u32 = 64;

/// Strongest redstone signal level.
pub const MAX_SIGNAL: u8 = 15;

/// Process-wide coupling settings. Only [`CouplingConfig::new`] builds one
/// from raw values, so every instance is in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CouplingConfig {
    distance: u32,
    signal: u8,
    ignore_sneaking: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("coupling distance {0} exceeds the maximum of 64")]
    DistanceOutOfRange(u32),
    #[error("coupling signal {0} is outside 1..=15")]
    SignalOutOfRange(u8),
}

impl CouplingConfig {
    pub fn new(distance: u32, signal: u8, ignore_sneaking: bool) -> Result<Self, ConfigError> {
        if distance > MAX_DISTANCE {
            return Err(ConfigError::DistanceOutOfRange(distance));
        }
        if !(1..=MAX_SIGNAL).contains(&signal) {
            return Err(ConfigError::SignalOutOfRange(signal));
        }
        Ok(Self {
            distance,
            signal,
            ignore_sneaking,
        })
    }

    /// Number of additional blocks scanned in each direction from the origin.
    pub fn distance(&self) -> u32 {
        self.distance
    }

    /// Minimum redstone level that counts as powered for hold-open.
    pub fn signal(&self) -> u8 {
        self.signal
    }

    /// When set, sneaking no longer suppresses coupled activation.
    pub fn ignore_sneaking(&self) -> bool {
        self.ignore_sneaking
    }
}

impl Default for CouplingConfig {
    /// Couples immediate neighbors only and requires a full-strength signal.
    fn default() -> Self {
        Self {
            distance: 1,
            signal: MAX_SIGNAL,
            ignore_sneaking: false,
        }
    }
}

//! Random id generation.

use uuid::Uuid;

use crate::infrastructure::ports::RandomPort;

/// System random - uses real randomness.
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPort for SystemRandom {
    fn gen_uuid(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Fixed random for testing.
#[cfg(test)]
pub struct FixedRandom(pub Uuid);

#[cfg(test)]
impl RandomPort for FixedRandom {
    fn gen_uuid(&self) -> Uuid {
        self.0
    }
}

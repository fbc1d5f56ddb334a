// Centralized RNG for deterministic frame simulation

const MULTIPLIER: u32 = 0x41C6_4E6D;
const INCREMENT: u32 = 0x6073;

/// The 32-bit linear congruential generator used by the Gen III games.
///
/// Each draw advances the state once and yields the high 16 bits of the
/// *new* state. The seed fully determines the output sequence; no other
/// randomness source exists anywhere in the system.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lcrng {
    state: u32,
}

impl Lcrng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advances the state by one step and returns bits 16..32 of the new state.
    pub fn next_u16(&mut self) -> u16 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        (self.state >> 16) as u16
    }

    /// Applies `next_u16` exactly `steps` times, discarding the outputs.
    /// `advance(0)` leaves the state untouched.
    pub fn advance(&mut self, steps: u32) {
        for _ in 0..steps {
            self.next_u16();
        }
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

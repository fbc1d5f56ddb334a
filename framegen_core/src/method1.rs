// Method 1 generation: PID high, PID low, IV word 1, IV word 2
use crate::rng::Lcrng;
use crate::trainer::Trainer;
use serde::{Deserialize, Serialize};

/// A shiny value below this threshold marks the entity as shiny.
pub const SHINY_THRESHOLD: u32 = 8;

/// Nature names indexed by `pid % 25`.
pub const NATURE_NAMES: [&str; 25] = [
    "Hardy", "Lonely", "Brave", "Adamant", "Naughty", "Bold", "Docile", "Relaxed", "Impish", "Lax",
    "Timid", "Hasty", "Serious", "Jolly", "Naive", "Modest", "Mild", "Quiet", "Bashful", "Rash",
    "Calm", "Gentle", "Sassy", "Careful", "Quirky",
];

/// Six individual values, each in 0..=31.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IvSpread {
    pub hp: u8,
    pub attack: u8,
    pub defense: u8,
    pub speed: u8,
    pub sp_attack: u8,
    pub sp_defense: u8,
}

impl IvSpread {
    /// Unpacks two 16-bit IV words. Word 1 carries HP/Attack/Defense in bit
    /// fields [0:5)/[5:10)/[10:15); word 2 carries Speed/Sp. Attack/Sp.
    /// Defense in the same fields. Bit 15 of each word is unused.
    pub fn from_words(word1: u16, word2: u16) -> Self {
        Self {
            hp: (word1 & 0x1F) as u8,
            attack: ((word1 >> 5) & 0x1F) as u8,
            defense: ((word1 >> 10) & 0x1F) as u8,
            speed: (word2 & 0x1F) as u8,
            sp_attack: ((word2 >> 5) & 0x1F) as u8,
            sp_defense: ((word2 >> 10) & 0x1F) as u8,
        }
    }
}

/// One generated entity, derived from exactly four RNG draws.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generated {
    pub pid: u32,
    pub ivs: IvSpread,
    pub nature: u8,
    pub ability: u8,
    pub shiny_value: u32,
    pub shiny: bool,
}

impl Generated {
    pub fn nature_name(&self) -> &'static str {
        NATURE_NAMES[self.nature as usize]
    }
}

/// Recomputes the shiny value for a stored PID:
/// `tid ^ sid ^ pid_high ^ pid_low`. With canonical 16-bit trainer IDs the
/// result always fits in 16 bits.
pub fn shiny_value(trainer: &Trainer, pid: u32) -> u32 {
    let pid_high = pid >> 16;
    let pid_low = pid & 0xFFFF;
    trainer.tid ^ trainer.sid ^ pid_high ^ pid_low
}

/// Runs one Method 1 generation against an already-positioned engine.
///
/// Consumes exactly four draws in fixed order: PID high, PID low, IV word 1,
/// IV word 2. Each draw depends on the state left by the previous one, so
/// the order must not change.
pub fn generate_method1(rng: &mut Lcrng, trainer: &Trainer) -> Generated {
    let pid_high = rng.next_u16();
    let pid_low = rng.next_u16();
    let pid = ((pid_high as u32) << 16) | pid_low as u32;

    let iv_word1 = rng.next_u16();
    let iv_word2 = rng.next_u16();

    let value = shiny_value(trainer, pid);

    Generated {
        pid,
        ivs: IvSpread::from_words(iv_word1, iv_word2),
        nature: (pid % 25) as u8,
        ability: (pid & 1) as u8,
        shiny_value: value,
        shiny: value < SHINY_THRESHOLD,
    }
}

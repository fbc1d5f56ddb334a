use serde::{Deserialize, Serialize};

/// Immutable trainer identity supplied once per run.
///
/// `tid` and `sid` are canonically 16-bit values. Wider values are not
/// rejected; the shiny xor operates on the raw bit pattern.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trainer {
    pub name: String,
    pub tid: u32,
    pub sid: u32,
}

impl Trainer {
    pub fn new(name: impl Into<String>, tid: u32, sid: u32) -> Self {
        Self {
            name: name.into(),
            tid,
            sid,
        }
    }
}

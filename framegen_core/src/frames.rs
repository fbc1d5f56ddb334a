// Frame enumeration driver
use crate::method1::{generate_method1, Generated};
use crate::rng::Lcrng;
use crate::trainer::Trainer;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FRAME_COUNT: u32 = 5;

/// One frame's generation result, tagged with its offset into the RNG stream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameResult {
    pub frame: u32,
    pub generated: Generated,
}

/// Simulates frames `0..count`.
///
/// Each frame owns a fresh engine constructed from the original seed and
/// advanced by the frame index; a frame is never a continuation of the
/// previous frame's consumed draws.
pub fn generate_frames(seed: u32, trainer: &Trainer, count: u32) -> Vec<FrameResult> {
    (0..count)
        .map(|frame| {
            let mut rng = Lcrng::new(seed);
            rng.advance(frame);
            FrameResult {
                frame,
                generated: generate_method1(&mut rng, trainer),
            }
        })
        .collect()
}

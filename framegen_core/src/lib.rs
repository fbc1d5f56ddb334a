pub mod frames;
pub mod method1;
pub mod rng;
pub mod trainer;

pub use frames::{generate_frames, FrameResult, DEFAULT_FRAME_COUNT};
pub use method1::{
    generate_method1, shiny_value, Generated, IvSpread, NATURE_NAMES, SHINY_THRESHOLD,
};
pub use rng::Lcrng;
pub use trainer::Trainer;

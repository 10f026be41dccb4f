pub mod constants;
pub mod conveyor;
pub mod lanes;
pub mod party;
pub mod starfield;
pub mod timers;

pub use constants::*;
pub use conveyor::*;
pub use lanes::*;
pub use party::*;
pub use starfield::*;
pub use timers::*;

// Shaders bundled as string constants
pub static STARS_WGSL: &str = include_str!("../../shaders/stars.wgsl");

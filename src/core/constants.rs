// Motion and timing tunables shared by the conveyor, party mode and starfield.

// Conveyor layout
pub const MIN_SPACING_PX: f64 = 440.0; // keeps blobs apart on narrow viewports
pub const BASE_CENTER_PERCENT: f64 = 50.0; // resting `top` of every blob
pub const PARALLAX_GAIN_PERCENT: f64 = 10.0; // full pointer sweep moves blobs by this much
pub const CONVEYOR_SPEED: f64 = 1.2; // px per frame at rest

// Party mode
pub const PARTY_SPEED: f64 = 3.6;
pub const PARTY_BOOST: f32 = 2.5; // starfield rotation multiplier while partying
pub const PARTY_DURATION_SEC: f64 = 15.0;
pub const MESSAGE_DURATION_SEC: f64 = 5.0;
// "Life Wubz On" runs 34:15
pub const TRACK_LENGTH_SEC: f64 = 2055.0;

// Starfield
pub const STAR_COUNT: usize = 5000;
pub const STAR_RADIUS_MIN: f32 = 500.0;
pub const STAR_RADIUS_SPAN: f32 = 1000.0;
pub const STAR_SPIN_X: f32 = 0.0003; // radians per frame
pub const STAR_SPIN_Y: f32 = 0.0006;
pub const STAR_FOV_Y_DEG: f32 = 75.0;
pub const STAR_NEAR: f32 = 0.1;
pub const STAR_FAR: f32 = 2000.0;
pub const STAR_CAMERA_Z: f32 = 5.0;

// Ambient decorations
pub const FLOATIE_LANES: [&str; 6] = ["10vw", "40vw", "70vw", "20vw", "55vw", "85vw"];
pub const KANDI_LANES: [&str; 3] = ["15vw", "50vw", "80vw"];
pub const LANE_SHUFFLE_INTERVAL_MS: i32 = 12_000;
pub const SPARKLE_LIFETIME_MS: i32 = 600;

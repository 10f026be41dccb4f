/// DOM contract with the landing page markup.
///
/// Ids, selectors and class names live here so the page and the wasm module
/// only have to agree in one place.
// Element ids
pub const STARFIELD_CANVAS_ID: &str = "space";
pub const SHUFFLE_BUTTON_ID: &str = "shuffleBtn";
pub const PARTY_BUTTON_ID: &str = "danceBtn";
pub const STOP_BUTTON_ID: &str = "stopDanceBtn";
pub const PARTY_AUDIO_ID: &str = "danceAudio";
pub const PARTY_MESSAGE_ID: &str = "danceMessage";

// Selectors
pub const BLOB_SELECTOR: &str = ".blob";
pub const FLOATIE_SELECTOR: &str = ".floatie";
pub const KANDI_SELECTOR: &str = ".kandi";

// Classes toggled from Rust
pub const MESSAGE_SHOW_CLASS: &str = "show";
pub const STOP_VISIBLE_CLASS: &str = "visible";
pub const GLITCH_CLASS: &str = "dance-glitch";
pub const SPARKLE_CLASS: &str = "sparkle";

// Media
pub const CHIME_SRC: &str = "sounds/chime.mp3";

// Logging
pub const CONSOLE_LOG_LEVEL: log::Level = log::Level::Info;
/// Hover chimes are refused until the first user gesture; keep that quiet.
pub const CHIME_REJECTED_LEVEL: log::Level = log::Level::Debug;
pub const PARTY_REJECTED_LEVEL: log::Level = log::Level::Warn;

// Star color (linear RGBA)
pub const STAR_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const SPACE_CLEAR: [f64; 3] = [0.0, 0.0, 0.0];

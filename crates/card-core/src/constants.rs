// Shared timing, simulation and audio tuning constants used by the web frontend.

// View sequencing (seconds)
pub const WELCOME_EXIT_SEC: f32 = 0.5; // fade + zoom of the welcome overlay after "enter"
pub const LOADING_FILL_SEC: f32 = 2.5; // progress bar fill
pub const LOADING_TEXT_FADE_SEC: f32 = 0.5; // overlaps the tail of the fill
pub const LOADING_EXIT_SEC: f32 = 1.0; // overlay slides up out of view

// Welcome overlay exit pose
pub const WELCOME_EXIT_SCALE: f32 = 1.1;
// Loading text rises while fading (px)
pub const LOADING_TEXT_RISE_PX: f32 = 20.0;

// Frame driver
pub const MAX_FRAME_DT_SEC: f64 = 0.25; // clamp after tab switches / long stalls

// Snow field
pub const MAX_PARTICLES: usize = 150;
pub const PX_PER_PARTICLE: f32 = 10.0; // one flake per 10 px of viewport width
pub const SWING_AMPLITUDE: f32 = 0.5; // horizontal sway per frame at full swing
pub const RESPAWN_Y: f32 = -10.0; // flakes re-enter just above the top edge

pub const RADIUS_RANGE: (f32, f32) = (1.0, 4.0);
pub const FALL_SPEED_RANGE: (f32, f32) = (0.5, 1.5);
pub const OPACITY_RANGE: (f32, f32) = (0.2, 0.8);
pub const DRIFT_RANGE: (f32, f32) = (-0.25, 0.25);
pub const SWING_RATE_RANGE: (f32, f32) = (0.01, 0.03);

// Audio
pub const AUDIO_DEFAULT_VOLUME: f64 = 0.5;
pub const AUDIO_SRC: &str = "/christmas-music.mp3";
pub const AUDIO_TRACK_TITLE: &str = "Hark the Herald Angels Sing";

// Photo
pub const PHOTO_SRC: &str = "/family-photo.jpeg";
pub const PHOTO_SIZES: &str = "(max-width: 768px) 100vw, (max-width: 1200px) 80vw, 1000px";

// Smooth scrolling
pub const SMOOTH_SCROLL_DURATION_SEC: f32 = 1.2;
pub const SCRUB_LAG_SEC: f32 = 1.0; // scroll-linked progress catches up within about a second

// Scroll-linked effects
pub const HERO_PARALLAX_PERCENT: f32 = 30.0;
pub const NEW_YEAR_PARALLAX_PERCENT: f32 = -20.0;
pub const MESSAGE_CHAR_MIN_OPACITY: f32 = 0.1;
pub const MESSAGE_CHAR_STAGGER_SEC: f32 = 0.02;
pub const MESSAGE_CHAR_DURATION_SEC: f32 = 0.5;

// Page palette
pub const THEME_COLOR: &str = "#051014";

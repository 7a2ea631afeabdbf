// Element ids shared by the page markup and the code that animates it.
// Every animated element is looked up once, by id, when the page is built.

pub const ROOT_ID: &str = "card-root";
pub const CONTENT_ID: &str = "card-content";
pub const SNOW_CANVAS_ID: &str = "snow-canvas";

// Welcome overlay
pub const WELCOME_ID: &str = "welcome-overlay";
pub const WELCOME_STAR_ID: &str = "welcome-star";
pub const WELCOME_TITLE_ID: &str = "welcome-title";
pub const WELCOME_SUBTITLE_ID: &str = "welcome-subtitle";
pub const WELCOME_BUTTON_ID: &str = "welcome-button";

// Loading overlay
pub const LOADING_ID: &str = "loading-overlay";
pub const LOADING_TEXT_ID: &str = "loading-text";
pub const LOADING_PROGRESS_ID: &str = "loading-progress";

// Music controls
pub const MUSIC_PILL_ID: &str = "music-pill";
pub const MUSIC_TOGGLE_ID: &str = "music-toggle";
pub const MUSIC_MUTE_ID: &str = "music-mute";
pub const MUSIC_NOTES_ID: &str = "music-notes";
pub const MUSIC_TITLE_ID: &str = "music-title";

// Sections
pub const HERO_ID: &str = "hero";
pub const HERO_BG_ID: &str = "hero-bg";
pub const HERO_STAR_PREFIX: &str = "hero-star-";
pub const HERO_CHAR_PREFIX: &str = "hero-char-";
pub const HERO_SUBTITLE_ID: &str = "hero-subtitle";
pub const HERO_FAMILY_ID: &str = "hero-family";
pub const HERO_SCROLL_ID: &str = "hero-scroll";
pub const HERO_STAR_COUNT: usize = 3;

pub const MESSAGE_ID: &str = "message";
pub const MESSAGE_DECOR_PREFIX: &str = "message-decor-";
pub const MESSAGE_DECOR_COUNT: usize = 2;
pub const MESSAGE_CHAR_PREFIX: &str = "message-char-";
pub const MESSAGE_SIGNATURE_ID: &str = "message-signature";

pub const PHOTO_ID: &str = "photo";
pub const PHOTO_TITLE_ID: &str = "photo-title";
pub const PHOTO_FRAME_ID: &str = "photo-frame";
pub const PHOTO_CAPTION_ID: &str = "photo-caption";

pub const WISHES_ID: &str = "wishes";
pub const WISHES_TITLE_ID: &str = "wishes-title";
pub const WISH_PREFIX: &str = "wish-";

pub const NEW_YEAR_ID: &str = "newyear";
pub const NEW_YEAR_BG_ID: &str = "newyear-bg";
pub const NEW_YEAR_HEADER_ID: &str = "newyear-header";
pub const NEW_YEAR_TITLE_ID: &str = "newyear-title";
pub const NEW_YEAR_YEAR_ID: &str = "newyear-year";
pub const NEW_YEAR_DESC_ID: &str = "newyear-desc";
pub const NEW_YEAR_BUTTON_ID: &str = "newyear-btn";

// Message text color ramp (scroll-revealed)
pub const MESSAGE_CHAR_DIM_RGB: [f32; 3] = [26.0, 26.0, 26.0];
pub const MESSAGE_CHAR_LIT_RGB: [f32; 3] = [255.0, 255.0, 255.0];

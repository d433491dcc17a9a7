// Shared tuning constants for the site front-end.

// Particle backdrop
pub const PARTICLE_COUNT: usize = 35;
pub const PARTICLE_SPEED_MIN: f64 = 0.1; // px per frame, upward
pub const PARTICLE_SPEED_SPAN: f64 = 0.5;
pub const PARTICLE_SIZE_MIN: f64 = 15.0; // px
pub const PARTICLE_SIZE_SPAN: f64 = 20.0;
pub const PARTICLE_OPACITY_MIN: f64 = 0.05;
pub const PARTICLE_OPACITY_SPAN: f64 = 0.15;
pub const PARTICLE_DRIFT_STEP: f64 = 0.1; // px per frame, sideways
pub const PARTICLE_RECYCLE_MARGIN: f64 = 50.0; // px beyond the top/bottom edge

// Font Awesome glyphs: briefcase, building, chart-line, handshake,
// file-contract, balance-scale, globe, star
pub const PARTICLE_GLYPHS: [char; 8] = [
    '\u{f0b1}', '\u{f1ad}', '\u{f201}', '\u{f2b5}', '\u{f56c}', '\u{f24e}', '\u{f0ac}', '\u{f005}',
];
pub const PARTICLE_FONT_FAMILY: &str = "Font Awesome 6 Free";
pub const PARTICLE_FONT_WEIGHT: u16 = 900;

// Particle palette (rgb, alpha comes from the particle)
pub const DARK_GLYPH_RGB: [u8; 3] = [212, 175, 55]; // gold
pub const LIGHT_GLYPH_RGB: [[u8; 3]; 2] = [
    [200, 16, 46],   // muted red
    [100, 100, 100], // neutral gray
];

// Header
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 50.0;

// Preloader
pub const PRELOADER_HIDE_AFTER_MS: i32 = 2500;
pub const PRELOADER_REMOVE_AFTER_MS: i32 = 600;

// Portfolio filter
pub const FILTER_FADE_IN_DELAY_MS: i32 = 50;
pub const FILTER_FADE_OUT_MS: i32 = 300;

// Counters
pub const COUNTER_DURATION_MS: f64 = 2000.0;
pub const COUNTER_VISIBILITY_THRESHOLD: f64 = 0.5;

// Scroll reveal
pub const REVEAL_DEFAULT_ANIMATION: &str = "fadeInUp";
pub const REVEAL_DELAY_UNIT_MS: f64 = 100.0;
pub const REVEAL_VISIBILITY_THRESHOLD: f64 = 0.1;

// Contact form
pub const SUBMIT_RESET_AFTER_MS: i32 = 2000;

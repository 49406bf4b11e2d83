// Shared visual tuning constants used by the geometry generators and the web frontend.

// Scene
pub const CLEAR_COLOR: [f64; 3] = [0.01, 0.01, 0.015];
pub const CAMERA_EYE: [f32; 3] = [0.0, 2.5, 7.0];
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const DPR_MIN: f64 = 1.0;
pub const DPR_MAX: f64 = 2.0;

// Galaxy starfield
pub const STAR_COUNT: usize = 5000;
pub const STAR_RADIUS_MAX: f32 = 50.0;
pub const STAR_RADIUS_EXPONENT: f32 = 0.6; // < 1 pulls density toward the centre
pub const STAR_BAND_HEIGHT: f32 = 40.0; // vertical spread, centred on 0
pub const STAR_COLOR_JITTER: f32 = 0.15;
pub const STAR_SIZE_MIN: f32 = 0.5;
pub const STAR_SIZE_MAX: f32 = 2.5;
pub const STAR_POINT_SCALE: f32 = 300.0; // px at unit view depth

pub const GALAXY_OFFSET: [f32; 3] = [0.0, 0.0, -10.0];
pub const GALAXY_SPIN_Z_PER_FRAME: f32 = 0.000_05;
pub const GALAXY_SPIN_Y_PER_FRAME: f32 = 0.000_03;
pub const GALAXY_PULSE_BASE: f32 = 0.7;
pub const GALAXY_PULSE_DEPTH: f32 = 0.5;
pub const GALAXY_PULSE_RATE: f32 = 0.3;

pub const STAR_PALETTE: [[f32; 3]; 8] = [
    [0.6, 0.15, 0.3], // pink
    [0.5, 0.2, 0.7],  // purple
    [0.3, 0.7, 1.0],  // cyan
    [0.7, 0.2, 0.4],  // magenta
    [0.4, 0.1, 0.6],  // deep purple
    [0.5, 0.3, 0.8],  // light purple
    [0.8, 0.3, 0.6],  // pink
    [0.4, 0.6, 1.0],  // light cyan
];

// Particle wave grid
pub const WAVE_WIDTH: f32 = 14.0;
pub const WAVE_DEPTH: f32 = 2.8;
pub const WAVE_COLS: usize = 1400;
pub const WAVE_MAX_ROWS: usize = 18;
pub const WAVE_MIN_ROWS: usize = 4;
pub const WAVE_Y_OFFSET: f32 = -0.2;

pub const WAVE_LOW_COLS: usize = 600;
pub const WAVE_LOW_ROWS: usize = 10;

// Wave shader uniforms
pub const WAVE_AMPLITUDE: f32 = 1.5;
pub const WAVE_FREQUENCY: f32 = 1.6;
pub const WAVE_SPEED: f32 = 0.8;
pub const WAVE_BASE_POINT_PX: f32 = 3.8;

// Pointer
pub const POINTER_SMOOTHING: f32 = 0.1; // lerp factor per frame
pub const POINTER_CENTER: [f32; 2] = [0.5, 0.5];

// Nav scramble
pub const SCRAMBLE_STEPS: u32 = 24;
pub const SCRAMBLE_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
pub const DEFAULT_NAV_LABELS: [&str; 6] = [
    "Solutions",
    "Technology",
    "About",
    "Careers",
    "Resources",
    "Contact",
];

// Chrome
pub const DEFAULT_LOGO_URL: &str = "assets/logo.svg";
pub const LOGO_ALT: &str = "AI Med";
pub const CUT_CSS_VAR: &str = "--cut";

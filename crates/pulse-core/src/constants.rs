// Shared layout/audio/overlay tuning constants used by the web frontend and tests.

// Particle field layout
pub const PARTICLE_COUNT: usize = 18_000;
pub const PARTICLES_PER_RING: usize = 180;
pub const FIELD_RADIUS: f32 = 24.0; // size falls to zero at this distance
pub const RING_SPACING: f32 = 0.005; // fraction of FIELD_RADIUS between rings
pub const FIELD_BASE_Y: f32 = -4.0; // rest height of the whole field
pub const BASE_POINT_SIZE: f32 = 2.0; // size at the centre

// Spectrum mapping
pub const SPECTRUM_DIVISOR: f32 = 360.0; // byte magnitude -> world units of lift

// Audio analysis
pub const DEFAULT_FFT_SIZE: u32 = 512;
pub const MIN_FFT_SIZE: u32 = 32;
pub const MAX_FFT_SIZE: u32 = 32_768;

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_Z: f32 = 11.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Point rendering
pub const POINT_COLOR: [f32; 4] = [0.8, 0.8, 0.8, 1.0]; // light grey
pub const POINT_WORLD_SCALE: f32 = 0.01; // world half-extent per unit of particle size

// Overlay
pub const ALERT_HIDE_DELAY_MS: i32 = 1000;
pub const AUDIO_NOT_FOUND: &str = "Audio not found";
pub const DEFAULT_TRACKS_URL: &str = "./data.json";
pub const UPLOAD_ACCEPT: &str = ".mp3";

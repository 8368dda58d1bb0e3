// Scene and motion tuning constants shared by the core and the web frontend.

// Scene layout
pub const OBJECTS_DISTANCE: f32 = 3.0; // vertical spacing between tracked objects (one per section)
pub const OBJECT_X_OFFSETS: [f32; 3] = [2.0, -2.0, 2.0]; // alternate sides so text can sit opposite

// Camera
pub const CAMERA_Z: f32 = 6.0;
pub const CAMERA_FOV_DEG: f32 = 35.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Parallax
pub const PARALLAX_DAMPING: f32 = 0.1; // fraction of remaining distance closed per frame
pub const PARALLAX_RATE_PER_SEC: f32 = 5.0; // time-based alternative

// Continuous drift (radians per second)
pub const DRIFT_RATE_X: f32 = 0.1;
pub const DRIFT_RATE_Y: f32 = 0.12;

// Section-change kick
pub const KICK_DELTA: [f32; 3] = [6.0, 3.0, 1.5]; // relative radians on x, y, z
pub const KICK_DURATION_SEC: f32 = 1.5;

// Particles
pub const PARTICLE_COUNT: usize = 200;
pub const PARTICLE_SPREAD: f32 = 10.0; // x/z extent, centered on 0
pub const PARTICLE_SIZE: f32 = 0.03;
pub const PARTICLE_SEED: u64 = 42;

// Lighting and material
pub const LIGHT_DIRECTION: [f32; 3] = [1.0, 1.0, 0.0];
pub const LIGHT_INTENSITY: f32 = 3.0;
pub const TOON_BANDS: u32 = 3;
pub const DEFAULT_MATERIAL_COLOR: [f32; 3] = [1.0, 0.0, 0.0]; // "red"

// Renderer
pub const MAX_PIXEL_RATIO: f64 = 2.0;

use glam::Vec3;

// Shared scene layout and tuning constants used by the web frontend.

// Canvas
pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 600;

// Colors (sRGB hex, converted to linear at draw time)
pub const BACKGROUND_HEX: u32 = 0xf0f0f0;
pub const AMBIENT_LIGHT_HEX: u32 = 0x404040;
pub const DIRECTIONAL_LIGHT_HEX: u32 = 0xffffff;
pub const DIRECTIONAL_LIGHT_INTENSITY: f32 = 0.5;
pub const DIRECTIONAL_LIGHT_DIR: [f32; 3] = [1.0, 1.0, 1.0];

// Floor
pub const FLOOR_SIZE: f32 = 20.0;
pub const FLOOR_SEGMENTS: u32 = 20;
pub const FLOOR_Y: f32 = -2.0;
pub const FLOOR_HEX: u32 = 0xfefefe;

// Towers
pub const TOWER_POSITIONS: [[f32; 2]; 3] = [[-3.0, 0.0], [0.0, 0.0], [3.0, 0.0]]; // (x, z)
pub const TOWER_SIZE: [f32; 3] = [2.0, 4.0, 1.0];
pub const TOWER_HEX: u32 = 0x888888;
pub const TOWER_OPACITY: f32 = 0.2;

// Racks
pub const RACKS_PER_TOWER: usize = 4;
pub const RACK_SIZE: [f32; 3] = [1.8, 0.8, 0.9];
pub const RACK_BASE_Y: f32 = -1.5; // local y of the lowest rack
pub const RACK_SPACING_Y: f32 = 1.0;
pub const RACK_BODY_OPACITY: f32 = 0.0;
pub const BORDER_COLORS_HEX: [u32; 4] = [0xff0000, 0x00ff00, 0x0000ff, 0xffff00];

// Decorative blocks inside each rack
pub const COMPONENTS_PER_RACK: usize = 3;
pub const COMPONENT_SIZE: [f32; 3] = [0.3, 0.3, 0.7];
pub const COMPONENT_HEX: u32 = 0x222222;
pub const COMPONENT_X0: f32 = -0.5;
pub const COMPONENT_STEP_X: f32 = 0.5;

// Temperatures (degrees C)
pub const TEMP_MIN: i32 = 20;
pub const TEMP_MAX: i32 = 40;
pub const TEMP_TICK_MS: u32 = 2000;

// Camera
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 5.0, 10.0);
pub const CAMERA_TARGET: Vec3 = Vec3::ZERO;

// Orbit controls
pub const ORBIT_DAMPING: f32 = 0.25;
pub const ORBIT_ZOOM_SCALE: f32 = 0.95; // per wheel notch
pub const ORBIT_MIN_DISTANCE: f32 = 1.0;
pub const ORBIT_MAX_DISTANCE: f32 = 100.0;
pub const ORBIT_POLAR_EPS: f32 = 1e-6;

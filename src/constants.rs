/// Web front-end tuning: renderer, asset locations and DOM ids.
///
/// The flight/interaction model keeps its own constants in
/// `core::constants`; these only matter to the browser wiring.
use glam::Vec3;

// Renderer
pub const RENDER_SCALE: f64 = 0.8; // backing store relative to CSS size, pixel ratio 1
pub const FOV_Y_DEG: f32 = 55.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 5000.0;
pub const SUN_POSITION: Vec3 = Vec3::new(200.0, 300.0, 200.0);
pub const FOG_NEAR: f32 = 200.0;
pub const FOG_FAR: f32 = 900.0;
pub const TONE_MAPPING_EXPOSURE: f32 = 2.0;
pub const DEFAULT_MESH_COLOR: [f32; 3] = [0.8, 0.8, 0.8];

// Assets
pub const MAP_URL: &str = "/models/map.glb";
pub const PRODUCT_URL: &str = "/models/camisetaraimon.glb";
pub const DRONE_URL: &str = "/models/drone.glb";
pub const STARTUP_CUE_URL: &str = "/sounds/ENCENDIDO.wav";
pub const MOTOR_LOOP_URL: &str = "/sounds/RUIDO.wav";

// DOM
pub const CANVAS_ID: &str = "app-canvas";
pub const START_SCREEN_ID: &str = "startScreen";
pub const START_BUTTON_ID: &str = "startButton";
pub const PROMPT_ID: &str = "interactionText";
pub const PRODUCT_OVERLAY_ID: &str = "productOverlay";
pub const PRODUCT_IMAGE_ID: &str = "productImage";
pub const FLIP_BUTTON_ID: &str = "flipButton";
pub const HIDDEN_CLASS: &str = "hidden";
pub const START_SCREEN_FADE_MS: i32 = 800;

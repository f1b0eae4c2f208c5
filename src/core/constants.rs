use glam::Vec3;

// Shared flight/interaction tuning constants used by the frame model.

// Flight
pub const ACCELERATION: f32 = 0.08; // added along forward per tick while w/s held
pub const FRICTION: f32 = 0.92; // velocity multiplier per tick
pub const MAX_SPEED: f32 = 1.6; // units per tick
pub const TURN_RATE: f32 = 0.05; // radians per tick while a/d held
pub const CLIMB_STEP: f32 = 0.6; // altitude change per tick while space/shift held
pub const MIN_ALTITUDE: f32 = 2.0;
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 2.0, 20.0);

// Map fitting
pub const MAP_TARGET_EXTENT: f32 = 200.0; // largest map dimension after scaling

// Product interaction
pub const PRODUCT_ANCHOR: Vec3 = Vec3::new(0.0, 4.0, 0.0); // centre of the map
pub const PRODUCT_SCALE: f32 = 4.0;
pub const NEAR_THRESHOLD: f32 = 8.0; // prompt / open distance
pub const HYSTERESIS_MARGIN: f32 = 10.0; // extra distance before auto-close

// Idle motion
pub const PRODUCT_BOB_RATE: f32 = 0.02; // phase per tick
pub const PRODUCT_BOB_AMPLITUDE: f32 = 0.18;
pub const DRONE_BOB_RATE: f32 = 0.03;
pub const DRONE_BOB_AMPLITUDE: f32 = 0.01;
pub const DRONE_ROLL_AMPLITUDE: f32 = 0.002;
pub const DRONE_OFFSET: Vec3 = Vec3::new(0.4, -0.8, 0.4); // camera-local
pub const DRONE_SCALE: f32 = 6.0;

// Effects
pub const FLASH_START: f32 = 1.5;
pub const FLASH_STEP: f32 = 0.1;
pub const FADE_STEP: f32 = 0.12;
pub const SHADER_TIME_STEP: f32 = 0.02; // shader time units per tick

// Startup audio
pub const MOTOR_DELAY_MS: u64 = 1500;
pub const MOTOR_VOLUME_STEP: f32 = 0.003;
pub const MOTOR_VOLUME_CEILING: f32 = 0.05;
pub const STARTUP_CUE_VOLUME: f32 = 0.05;

// Frame clock
pub const TICK_HZ: u32 = 60;
pub const MAX_TICKS_PER_FRAME: u32 = 4; // drop time after a long stall

// Lighting presets (sRGB hex)
pub const DAY_AMBIENT: f32 = 1.6;
pub const DAY_SUN: f32 = 20.0;
pub const DAY_SKY_HEX: u32 = 0xbfc4c7;
pub const NIGHT_AMBIENT: f32 = 0.6;
pub const NIGHT_SUN: f32 = 3.0;
pub const NIGHT_SKY_HEX: u32 = 0x0a0f0a;

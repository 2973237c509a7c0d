//! Configuration constants for the emoji guessing game.

// Round rules
pub const ROUND_SECONDS: u32 = 30; // Length of one round
pub const WARNING_SECONDS: u32 = 5; // Countdown turns red at or below this
pub const TARGET_PUZZLE_COUNT: usize = 20; // Puzzles built per session

// Puzzle building
pub const HINTS_PER_PUZZLE: usize = 4;
pub const PLACEHOLDER_GLYPH: &str = "❓"; // Marks a keyword that resolved to nothing
pub const MIN_TOKEN_LEN: usize = 4; // Shorter name tokens never become words
pub const MAX_LABEL_CHARS: usize = 16;
pub const MAX_LABEL_WORDS: usize = 2;
pub const DEFAULT_LABEL: &str = "Emoji";
pub const STOP_WORDS: [&str; 10] = [
    "with", "and", "the", "of", "face", "skin", "tone", "light", "medium", "dark",
];

// Hint accents, indexed by hint position
pub const COLOR_PALETTE: [u32; 8] = [
    0x7c3aed, 0x2563eb, 0xf59e0b, 0xdb2777, 0x22c55e, 0xf97316, 0x38bdf8, 0xa855f7,
];
pub const CARD_GRADIENT_END: u32 = 0x0f172a;
pub const BACKGROUND_COLOR: u32 = 0x0b0a1e;
pub const FLOOR_COLOR: u32 = 0x141024;
pub const ERROR_TEXT_COLOR: u32 = 0xfca5a5;

// Input
pub const MAX_GUESS_CHARS: usize = 24;

// Rendering configuration
pub const WINDOW_WIDTH: i32 = 1100;
pub const WINDOW_HEIGHT: i32 = 760;
pub const HUD_PANEL_HEIGHT: f32 = 190.0; // Bottom strip with the guess field and buttons
pub const CARD_TEXTURE_SIZE: u32 = 512;
pub const CARD_SIZE: f32 = 2.2;
pub const CARD_SPACING_X: f32 = 1.35;
pub const CARD_SPACING_Y: f32 = 1.25;
pub const CAMERA_POSITION: [f32; 3] = [0.0, 0.6, 6.5];
pub const CAMERA_FOV_DEG: f32 = 50.0;
pub const FLOOR_RADIUS: f32 = 6.5;
pub const FLOOR_Y: f32 = -2.3;
pub const FLOOR_SEGMENTS: usize = 64;

// Idle animation
pub const SWAY_Y_FREQ: f32 = 0.2;
pub const SWAY_Y_AMPLITUDE: f32 = 0.12;
pub const SWAY_X_FREQ: f32 = 0.16;
pub const SWAY_X_AMPLITUDE: f32 = 0.06;
pub const BOB_FREQ: f32 = 1.5;
pub const BOB_AMPLITUDE: f32 = 0.05;

// Scene lighting, applied per vertex
pub const FOG_NEAR: f32 = 8.0;
pub const FOG_FAR: f32 = 22.0;
pub const AMBIENT_LIGHT: f32 = 0.55;
pub const KEY_LIGHT_POSITION: [f32; 3] = [3.0, 5.0, 4.0]; // Directional, points at the origin
pub const KEY_LIGHT: f32 = 0.45;
pub const FILL_LIGHT_POSITION: [f32; 3] = [-4.0, -2.0, 6.0];
pub const FILL_LIGHT_COLOR: u32 = 0x8b5cf6;
pub const FILL_LIGHT: f32 = 0.6;
pub const FILL_LIGHT_RANGE: f32 = 20.0;

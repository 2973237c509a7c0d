//! Emoji Guess: name the word hidden behind four emoji hint cards before the
//! countdown runs out.
//!
//! The puzzle, round and session modules are plain logic. Only `input`,
//! `render` and `game` touch the macroquad window.

pub mod assets;
pub mod catalog;
pub mod config;
pub mod error;
pub mod game;
pub mod hud;
pub mod input;
pub mod logging;
pub mod puzzle;
pub mod render;
pub mod round;
pub mod scene;
pub mod session;
pub mod themes;
pub mod utils;

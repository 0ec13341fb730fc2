//! Siliconopoly engine library.
//!
//! Exposes the board ring, card decks, player state, turn engine, and
//! console modules for use by integration tests and the binary entry
//! point.

pub mod board;
pub mod cards;
pub mod config;
pub mod game;
pub mod input;
pub mod player;
pub mod render;
pub mod sim;

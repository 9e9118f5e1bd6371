pub mod ai;
pub mod config;
pub mod debug;
pub mod game;
pub mod geometry;
pub mod terminal_input;
pub mod ui;

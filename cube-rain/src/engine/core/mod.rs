//! Core application setup.
//!
//! Assembles the rain app from its plugins and holds the window and
//! camera configuration shared with the static demo binaries.

/// App assembly for the rain demo plus camera spawning helpers.
pub mod app_setup;

/// Window configuration shared by all demo binaries.
pub mod window_config;

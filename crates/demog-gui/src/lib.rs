//! Demographics Dashboard - GUI Library
//!
//! This module exposes state and layout for testing.

pub mod layout;
pub mod settings;
pub mod state;
pub mod theme;
pub mod views;

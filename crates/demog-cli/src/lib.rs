//! CLI library components for the demographics dashboard.

pub mod export;
pub mod logging;
pub mod render;
pub mod watch;

//! CLI library components for the motion table tools.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;

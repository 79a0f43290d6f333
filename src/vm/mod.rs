pub mod bridge;
pub mod commands;

//! CLI command implementations

pub mod admin;
pub mod auth;
pub mod config_management;
mod helpers;
pub mod navigation;
pub mod shorten;
pub mod theme;

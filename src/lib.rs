//! Linkfront - terminal front end for a URL shortener
//!
//! This library talks to the shortener backend's `/api/v1` endpoints and
//! exposes the front-end flows (shorten, QR codes, redirects, admin record
//! management, login and password change) to a CLI and a TUI.
//!
//! # Features
//! - **cli**: Command-line interface (default)
//! - **tui**: Terminal user interface (default)
//! - **clipboard**: Copy results to the system clipboard
//! - **full**: All features enabled
//!
//! # Architecture
//! - `client`: HTTP transport, cookie session and the typed API client
//! - `services`: Front-end flows returning notices and navigation
//! - `storage`: Persistent local settings (theme preference)
//! - `interfaces`: User interfaces (CLI, TUI)
//! - `config`: Configuration management
//! - `runtime`: Execution modes and startup checks
//! - `system`: Logging and panic handling

pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;

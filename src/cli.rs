//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for linkfront using clap's derive macros.

use clap::{Parser, Subcommand};

/// linkfront - Terminal front end for a URL shortener
#[derive(Parser, Debug)]
#[command(name = "linkfront")]
#[command(version)]
#[command(about = "Shorten links, render QR codes and manage records from the terminal", long_about = None)]
pub struct Cli {
    /// Configuration file (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    /// Override site.url (origin serving /conf.yaml)
    #[arg(long, global = true)]
    pub site: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start TUI mode
    #[cfg(feature = "tui")]
    Tui,

    /// Resolve a front-end path (`/`, `/admin`, `/<short_key>`) to its target
    Resolve {
        /// Path as typed after the hostname, e.g. /abc123
        path: String,
    },

    /// Print the hostname read from /conf.yaml
    Hostname,

    /// Query backend health
    Status,

    /// Create a short link and print its QR code
    Shorten {
        /// URL to shorten
        url: String,

        /// Copy the short link to the clipboard
        #[arg(long)]
        copy: bool,

        /// Also write the QR code as SVG
        #[arg(long, value_name = "FILE")]
        svg: Option<String>,

        /// Do not print the QR code
        #[arg(long)]
        no_qr: bool,
    },

    /// Print a QR code for the URL itself (no short link)
    Qr {
        /// URL to encode
        url: String,

        /// Copy the URL to the clipboard
        #[arg(long)]
        copy: bool,

        /// Also write the QR code as SVG
        #[arg(long, value_name = "FILE")]
        svg: Option<String>,
    },

    /// Log in as admin (prompts for missing values)
    Login {
        /// Username
        #[arg(long, short = 'u')]
        username: Option<String>,

        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// End the admin session
    Logout,

    /// Change the admin password
    ChangePass {
        /// New password (prompted twice when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Record management (requires login or api.bearer_token)
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },

    /// Light/dark theme used for QR colours
    Theme {
        #[command(subcommand)]
        action: ThemeCommands,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum AdminCommands {
    /// List all records
    List,

    /// Delete a record by short key or short URL
    Delete {
        /// Short key, or a full short URL on this host
        target: String,
    },

    /// Delete every record (no confirmation)
    Purge,
}

#[derive(Subcommand, Debug)]
pub enum ThemeCommands {
    /// Print the stored theme
    Show,
    /// Switch between light and dark
    Toggle,
    /// Use the dark theme
    Dark,
    /// Use the light theme
    Light,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output file path (default: config.example.toml)
        output_path: Option<String>,

        /// Overwrite without asking
        #[arg(long)]
        force: bool,
    },
}

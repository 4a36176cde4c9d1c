//! # Watch-face Themes CLI
//!
//! Command-line front end for the [`store`] crate. It resolves the themes root
//! from configuration, installs the logger and maps theme errors to the
//! messages shown to users.
//!
//! ## Modules
//!
//! - [`commands`] - clap definitions and command dispatch
//! - [`config`] - Layered configuration (embedded defaults, files, environment)
//! - [`error`] - [`AppError`](error::AppError) and its user-facing messages
//! - [`logger`] - fern logger setup

pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
